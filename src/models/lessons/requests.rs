use super::entities::{LessonType, Mark, VisitStatus};
use crate::errors::{CoursesError, Result};
use crate::utils::validate_max_length;
use serde::Deserialize;

pub const COMMENT_MAX_LENGTH: usize = 255;

// 课时创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLessonRequest {
    pub course_id: i64,
    #[serde(default)]
    pub group_in_stream_id: Option<i64>,
    #[serde(default)]
    pub student_group_id: Option<i64>,
    // 默认 Lecture
    #[serde(default)]
    pub lesson_type: Option<LessonType>,
    // 默认创建当天
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
}

impl CreateLessonRequest {
    pub fn new(course_id: i64) -> Self {
        Self {
            course_id,
            group_in_stream_id: None,
            student_group_id: None,
            lesson_type: None,
            date: None,
        }
    }
}

// 课时更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateLessonRequest {
    pub course_id: Option<i64>,
    // Some(None) 表示清空
    pub group_in_stream_id: Option<Option<i64>>,
    pub student_group_id: Option<Option<i64>>,
    pub lesson_type: Option<LessonType>,
    pub date: Option<chrono::NaiveDate>,
}

// 课时列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LessonListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub group_in_stream_id: Option<i64>,
    pub student_group_id: Option<i64>,
    pub lesson_type: Option<LessonType>,
    pub date_from: Option<chrono::NaiveDate>,
    pub date_to: Option<chrono::NaiveDate>,
}

// 课时成绩创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLessonResultRequest {
    pub student_id: i64,
    pub lesson_id: i64,
    #[serde(default)]
    pub mark: Option<Mark>,
    #[serde(default)]
    pub visit: Option<VisitStatus>,
    #[serde(default)]
    pub comment: String,
}

impl CreateLessonResultRequest {
    pub fn new(student_id: i64, lesson_id: i64) -> Self {
        Self {
            student_id,
            lesson_id,
            mark: None,
            visit: None,
            comment: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_max_length("comment", &self.comment, COMMENT_MAX_LENGTH)
            .map_err(CoursesError::validation)
    }
}

// 课时成绩更新请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateLessonResultRequest {
    pub student_id: Option<i64>,
    pub lesson_id: Option<i64>,
    pub mark: Option<Mark>,
    pub visit: Option<VisitStatus>,
    pub comment: Option<String>,
}

impl UpdateLessonResultRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref comment) = self.comment {
            validate_max_length("comment", comment, COMMENT_MAX_LENGTH)
                .map_err(CoursesError::validation)?;
        }
        Ok(())
    }
}

// 课时成绩列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LessonResultListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub lesson_id: Option<i64>,
    pub mark: Option<Mark>,
    pub visit: Option<VisitStatus>,
}
