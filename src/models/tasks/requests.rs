use crate::errors::{CoursesError, Result};
use crate::utils::validate_max_length;
use serde::Deserialize;

pub const TITLE_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 1024;

// 打勾任务创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub section_id: i64,
    pub title: String,
    pub description: String,
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<()> {
        validate_max_length("title", &self.title, TITLE_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("description", &self.description, DESCRIPTION_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub section_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref title) = self.title {
            validate_max_length("title", title, TITLE_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        if let Some(ref description) = self.description {
            validate_max_length("description", description, DESCRIPTION_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub section_id: Option<i64>,
    pub search: Option<String>,
}

// 选项创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskOptionRequest {
    pub task_with_tick_id: i64,
    pub description: String,
}

impl CreateTaskOptionRequest {
    pub fn validate(&self) -> Result<()> {
        validate_max_length("description", &self.description, DESCRIPTION_MAX_LENGTH)
            .map_err(CoursesError::validation)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskOptionRequest {
    pub task_with_tick_id: Option<i64>,
    pub description: Option<String>,
}

impl UpdateTaskOptionRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref description) = self.description {
            validate_max_length("description", description, DESCRIPTION_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskOptionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub task_with_tick_id: Option<i64>,
}

// 学生完成状态创建请求，perform 默认 false
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskResultRequest {
    pub user_id: i64,
    pub task_with_tick_option_id: i64,
    #[serde(default)]
    pub perform: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskResultRequest {
    pub user_id: Option<i64>,
    pub task_with_tick_option_id: Option<i64>,
    pub perform: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskResultListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: Option<i64>,
    pub task_with_tick_option_id: Option<i64>,
    pub perform: Option<bool>,
}
