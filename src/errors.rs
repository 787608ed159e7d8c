//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, RuntimeErr, SqlErr, sqlx};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_courses_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum CoursesError {
            $($variant(String),)*
        }

        impl CoursesError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CoursesError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CoursesError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CoursesError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CoursesError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CoursesError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_courses_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    ConstraintViolation("E006", "Constraint Violation"),
}

impl CoursesError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误分类：约束冲突单独归类，其余视为数据库操作错误
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                CoursesError::constraint_violation(format!("{context}: 唯一约束冲突: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                CoursesError::constraint_violation(format!("{context}: 外键约束冲突: {detail}"))
            }
            _ => match database_error_code(&err).as_deref() {
                // SQLite: 787 外键, 1811 RESTRICT 触发的外键, 275 CHECK; PostgreSQL: 23503 / 23514
                Some("787" | "1811" | "23503") => {
                    CoursesError::constraint_violation(format!("{context}: 外键约束冲突: {err}"))
                }
                Some("275" | "23514") => {
                    CoursesError::constraint_violation(format!("{context}: 检查约束冲突: {err}"))
                }
                _ => CoursesError::database_operation(format!("{context}: {err}")),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoursesError::NotFound(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, CoursesError::ConstraintViolation(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CoursesError::Validation(_))
    }
}

// 取出驱动返回的原始错误码
fn database_error_code(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
            match e.as_ref() {
                sqlx::Error::Database(db) => db.code().map(|code| code.into_owned()),
                _ => None,
            }
        }
        _ => None,
    }
}

impl fmt::Display for CoursesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CoursesError {}

// 数据库错误统一经过分类
impl From<DbErr> for CoursesError {
    fn from(err: DbErr) -> Self {
        CoursesError::from_db("数据库操作失败", err)
    }
}

pub type Result<T> = std::result::Result<T, CoursesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CoursesError::database_config("test").code(), "E001");
        assert_eq!(CoursesError::validation("test").code(), "E004");
        assert_eq!(CoursesError::not_found("test").code(), "E005");
        assert_eq!(CoursesError::constraint_violation("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CoursesError::constraint_violation("test").error_type(),
            "Constraint Violation"
        );
        assert_eq!(
            CoursesError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CoursesError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = CoursesError::not_found("User 42 does not exist");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("User 42 does not exist"));
    }

    #[test]
    fn test_generic_db_error_is_database_operation() {
        let err = CoursesError::from(DbErr::Custom("boom".into()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
        assert!(!err.is_constraint_violation());
    }
}
