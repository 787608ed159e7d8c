use super::SeaOrmStorage;
use crate::entity::prelude::{
    Courses, GroupInStreams, Lessons, Sections, StudentGroups, StudentLessonResults,
    StudentStreams, TaskWithTickOptions, TaskWithTickStudentResults, TasksWithTick, Users,
};
use crate::errors::{CoursesError, Result};
use crate::models::TableCounts;
use sea_orm::{EntityTrait, PaginatorTrait};

impl SeaOrmStorage {
    async fn count_table<E>(&self, table: &str) -> Result<u64>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        E::find()
            .count(&self.db)
            .await
            .map_err(|e| CoursesError::from_db(&format!("统计 {table} 行数失败"), e))
    }

    /// 统计各表行数
    pub async fn count_rows_impl(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            users: self.count_table::<Users>("users").await?,
            student_streams: self.count_table::<StudentStreams>("student_streams").await?,
            student_groups: self.count_table::<StudentGroups>("student_groups").await?,
            group_in_streams: self.count_table::<GroupInStreams>("group_in_streams").await?,
            courses: self.count_table::<Courses>("courses").await?,
            lessons: self.count_table::<Lessons>("lessons").await?,
            student_lesson_results: self
                .count_table::<StudentLessonResults>("student_lesson_results")
                .await?,
            sections: self.count_table::<Sections>("sections").await?,
            tasks_with_tick: self.count_table::<TasksWithTick>("tasks_with_tick").await?,
            task_with_tick_options: self
                .count_table::<TaskWithTickOptions>("task_with_tick_options")
                .await?,
            task_with_tick_student_results: self
                .count_table::<TaskWithTickStudentResults>("task_with_tick_student_results")
                .await?,
        })
    }
}
