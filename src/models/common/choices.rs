//! 单字符代码枚举
//!
//! 数据库中只保存代码（"1"、"2"…），显示名称放在独立的对照表里。

/// 在对照表中查找代码对应的显示名称，找不到时原样返回代码
pub fn lookup_label(choices: &[(&'static str, &'static str)], code: &'static str) -> &'static str {
    choices
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// 定义代码枚举的宏
///
/// 自动生成：
/// - enum 定义与代码对照表常量
/// - code() / label() / all()
/// - Default、Display（输出代码）、FromStr（解析代码）
/// - 以代码为值的 serde 序列化
macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $choices:ident, $kind:literal, default = $default:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        /// 代码 → 显示名称
        pub const $choices: &[(&str, &str)] = &[$(($code, $label),)+];

        impl $name {
            /// 存储用代码
            pub const fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// 显示名称
            pub fn label(&self) -> &'static str {
                $crate::models::common::lookup_label($choices, self.code())
            }

            pub fn all() -> &'static [$name] {
                &[$($name::$variant,)+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: '{}'", $kind, s)),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<$name>().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_choice_enum;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[(&str, &str)] = &[("1", "One"), ("2", "Two")];

    #[test]
    fn test_lookup_label_found() {
        assert_eq!(lookup_label(SAMPLE, "2"), "Two");
    }

    #[test]
    fn test_lookup_label_falls_back_to_code() {
        assert_eq!(lookup_label(SAMPLE, "9"), "9");
    }
}
