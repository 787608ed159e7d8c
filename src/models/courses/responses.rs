use super::entities::{Course, Section};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

// 章节列表响应
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    pub items: Vec<Section>,
    pub pagination: PaginationInfo,
}
