use super::entities::{GroupInStream, StudentGroup, StudentStream};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 学生流列表响应
#[derive(Debug, Serialize)]
pub struct StreamListResponse {
    pub items: Vec<StudentStream>,
    pub pagination: PaginationInfo,
}

// 小组列表响应
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub items: Vec<StudentGroup>,
    pub pagination: PaginationInfo,
}

// 小组-流关联列表响应
#[derive(Debug, Serialize)]
pub struct GroupInStreamListResponse {
    pub items: Vec<GroupInStream>,
    pub pagination: PaginationInfo,
}
