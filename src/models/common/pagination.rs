use serde::{Deserialize, Serialize};

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: u64, size: u64, total: u64, total_pages: u64) -> Self {
        Self {
            page: page as i64,
            page_size: size as i64,
            total: total as i64,
            total_pages: total_pages as i64,
        }
    }
}

/// 规范化分页参数：页码从 1 开始，每页 1..=100 条，默认 10 条
pub fn page_params(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    let size = size.unwrap_or(10).clamp(1, 100);
    // 偏移量 (page - 1) * size 不能超出 i64
    let page = page.unwrap_or(1).clamp(1, i64::MAX / size);
    (page as u64, size as u64)
}

// 各表行数统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCounts {
    pub users: u64,
    pub student_streams: u64,
    pub student_groups: u64,
    pub group_in_streams: u64,
    pub courses: u64,
    pub lessons: u64,
    pub student_lesson_results: u64,
    pub sections: u64,
    pub tasks_with_tick: u64,
    pub task_with_tick_options: u64,
    pub task_with_tick_student_results: u64,
}
