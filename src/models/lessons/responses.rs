use super::entities::{Lesson, StudentLessonResult};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 课时列表响应
#[derive(Debug, Serialize)]
pub struct LessonListResponse {
    pub items: Vec<Lesson>,
    pub pagination: PaginationInfo,
}

// 课时成绩列表响应
#[derive(Debug, Serialize)]
pub struct LessonResultListResponse {
    pub items: Vec<StudentLessonResult>,
    pub pagination: PaginationInfo,
}
