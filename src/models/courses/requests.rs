use crate::errors::{CoursesError, Result};
use crate::utils::validate_max_length;
use serde::Deserialize;

pub const TITLE_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 1024;

// 课程创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: String,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        validate_max_length("name", &self.name, TITLE_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("description", &self.description, DESCRIPTION_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        Ok(())
    }
}

// 课程更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            validate_max_length("name", name, TITLE_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        if let Some(ref description) = self.description {
            validate_max_length("description", description, DESCRIPTION_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

// 课程列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

// 章节创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSectionRequest {
    pub course_id: i64,
    pub title: String,
    pub description: String,
}

impl CreateSectionRequest {
    pub fn validate(&self) -> Result<()> {
        validate_max_length("title", &self.title, TITLE_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        validate_max_length("description", &self.description, DESCRIPTION_MAX_LENGTH)
            .map_err(CoursesError::validation)?;
        Ok(())
    }
}

// 章节更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSectionRequest {
    pub course_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateSectionRequest {
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

// 章节列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_description_limit() {
        let req = CreateCourseRequest {
            name: "Physics".to_string(),
            description: "d".repeat(1025),
        };
        assert!(req.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_update_without_fields_is_valid() {
        assert!(UpdateSectionRequest::default().validate().is_ok());
    }
}
