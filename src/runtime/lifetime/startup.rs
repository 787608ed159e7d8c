use crate::errors::Result;
use crate::models::TableCounts;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub counts: TableCounts,
}

/// 输出各表行数
fn log_table_counts(counts: &TableCounts) {
    info!("users: {}", counts.users);
    info!("student_streams: {}", counts.student_streams);
    info!("student_groups: {}", counts.student_groups);
    info!("group_in_streams: {}", counts.group_in_streams);
    info!("courses: {}", counts.courses);
    info!("sections: {}", counts.sections);
    info!("lessons: {}", counts.lessons);
    info!("student_lesson_results: {}", counts.student_lesson_results);
    info!("tasks_with_tick: {}", counts.tasks_with_tick);
    info!("task_with_tick_options: {}", counts.task_with_tick_options);
    info!(
        "task_with_tick_student_results: {}",
        counts.task_with_tick_student_results
    );
}

/// 准备数据库：连接、迁移并统计各表数据量
pub async fn prepare_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let counts = storage.count_rows().await?;
    if counts == TableCounts::default() {
        debug!("Database is empty");
    }
    log_table_counts(&counts);

    Ok(StartupContext { storage, counts })
}
