//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod courses;
pub mod group_in_streams;
pub mod lessons;
pub mod sections;
pub mod student_groups;
pub mod student_lesson_results;
pub mod student_streams;
pub mod task_with_tick_options;
pub mod task_with_tick_student_results;
pub mod tasks_with_tick;
pub mod users;
