use super::entities::DEFAULT_ROLE;
use crate::errors::{CoursesError, Result};
use crate::utils::{validate_email, validate_max_length, validate_username};
use serde::Deserialize;

pub const NAME_MAX_LENGTH: usize = 150;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const ROLE_MAX_LENGTH: usize = 15;
pub const TEL_MAX_LENGTH: usize = 15;

// 用户创建请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // 为空时使用默认角色
    pub role: Option<String>,
    pub tel: String,
    pub group_id: Option<i64>,
}

impl CreateUserRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn role_or_default(&self) -> String {
        self.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string())
    }

    pub fn validate(&self) -> Result<()> {
        validate_username(&self.username).map_err(CoursesError::validation)?;
        validate_email(&self.email).map_err(CoursesError::validation)?;
        validate_max_length("first_name", &self.first_name, NAME_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("last_name", &self.last_name, NAME_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("email", &self.email, EMAIL_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("role", &self.role_or_default(), ROLE_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("tel", &self.tel, TEL_MAX_LENGTH).map_err(CoursesError::validation)?;
        Ok(())
    }
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<String>,
    pub tel: Option<String>,
    // Some(None) 表示移出小组
    pub group_id: Option<Option<i64>>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref username) = self.username {
            validate_username(username).map_err(CoursesError::validation)?;
        }
        if let Some(ref email) = self.email {
            validate_email(email).map_err(CoursesError::validation)?;
            validate_max_length("email", email, EMAIL_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        if let Some(ref first_name) = self.first_name {
            validate_max_length("first_name", first_name, NAME_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        if let Some(ref last_name) = self.last_name {
            validate_max_length("last_name", last_name, NAME_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        if let Some(ref role) = self.role {
            validate_max_length("role", role, ROLE_MAX_LENGTH).map_err(CoursesError::validation)?;
        }
        if let Some(ref tel) = self.tel {
            validate_max_length("tel", tel, TEL_MAX_LENGTH).map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<String>,
    pub group_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
