use super::entities::{TaskWithTick, TaskWithTickOption, TaskWithTickStudentResult};
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub items: Vec<TaskWithTick>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize)]
pub struct TaskOptionListResponse {
    pub items: Vec<TaskWithTickOption>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize)]
pub struct TaskResultListResponse {
    pub items: Vec<TaskWithTickStudentResult>,
    pub pagination: PaginationInfo,
}
