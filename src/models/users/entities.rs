use serde::{Deserialize, Serialize};

/// 未指定角色时的默认值
pub const DEFAULT_ROLE: &str = "student";

// 学生扩展资料（身份字段之外的业务字段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    // 角色，自由文本（如 "student"、"teacher"）
    pub role: String,
    // 电话
    pub tel: String,
    // 所属小组，最多一个
    pub group_id: Option<i64>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            tel: String::new(),
            group_id: None,
        }
    }
}

// 用户实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub profile: StudentProfile,
    pub date_joined: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
