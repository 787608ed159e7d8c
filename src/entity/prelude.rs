//! 预导入模块，方便使用

pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::group_in_streams::{
    ActiveModel as GroupInStreamActiveModel, Entity as GroupInStreams,
    Model as GroupInStreamModel,
};
pub use super::lessons::{ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel};
pub use super::sections::{
    ActiveModel as SectionActiveModel, Entity as Sections, Model as SectionModel,
};
pub use super::student_groups::{
    ActiveModel as StudentGroupActiveModel, Entity as StudentGroups, Model as StudentGroupModel,
};
pub use super::student_lesson_results::{
    ActiveModel as StudentLessonResultActiveModel, Entity as StudentLessonResults,
    Model as StudentLessonResultModel,
};
pub use super::student_streams::{
    ActiveModel as StudentStreamActiveModel, Entity as StudentStreams,
    Model as StudentStreamModel,
};
pub use super::task_with_tick_options::{
    ActiveModel as TaskWithTickOptionActiveModel, Entity as TaskWithTickOptions,
    Model as TaskWithTickOptionModel,
};
pub use super::task_with_tick_student_results::{
    ActiveModel as TaskWithTickStudentResultActiveModel, Entity as TaskWithTickStudentResults,
    Model as TaskWithTickStudentResultModel,
};
pub use super::tasks_with_tick::{
    ActiveModel as TaskWithTickActiveModel, Entity as TasksWithTick, Model as TaskWithTickModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
