use crate::errors::{CoursesError, Result};
use crate::utils::validate_max_length;
use serde::Deserialize;

pub const STREAM_TITLE_MAX_LENGTH: usize = 60;
pub const GROUP_TITLE_MAX_LENGTH: usize = 255;
pub const GROUP_NUMBER_MAX_LENGTH: usize = 15;

// 学生流创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStreamRequest {
    pub title: String,
}

impl CreateStreamRequest {
    pub fn validate(&self) -> Result<()> {
        validate_max_length("title", &self.title, STREAM_TITLE_MAX_LENGTH)
            .map_err(CoursesError::validation)
    }
}

// 学生流更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStreamRequest {
    pub title: Option<String>,
}

impl UpdateStreamRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref title) = self.title {
            validate_max_length("title", title, STREAM_TITLE_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

// 学生流列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StreamListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

// 小组创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub title: String,
    pub number: String,
    pub year_of_receipt: i32,
}

impl CreateGroupRequest {
    pub fn validate(&self) -> Result<()> {
        validate_max_length("title", &self.title, GROUP_TITLE_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("number", &self.number, GROUP_NUMBER_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        Ok(())
    }
}

// 小组更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateGroupRequest {
    pub title: Option<String>,
    pub number: Option<String>,
    pub year_of_receipt: Option<i32>,
}

impl UpdateGroupRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref title) = self.title {
            validate_max_length("title", title, GROUP_TITLE_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        if let Some(ref number) = self.number {
            validate_max_length("number", number, GROUP_NUMBER_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

// 小组列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub number: Option<String>,
    pub year_of_receipt: Option<i32>,
    pub search: Option<String>,
}

// 小组加入流请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupInStreamRequest {
    pub group_id: i64,
    pub stream_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateGroupInStreamRequest {
    pub group_id: Option<i64>,
    pub stream_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupInStreamListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub group_id: Option<i64>,
    pub stream_id: Option<i64>,
}
