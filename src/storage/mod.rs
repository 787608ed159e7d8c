use std::sync::Arc;

use crate::models::{
    TableCounts,
    courses::{
        entities::{Course, Section},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateSectionRequest, SectionListQuery,
            UpdateCourseRequest, UpdateSectionRequest,
        },
        responses::{CourseListResponse, SectionListResponse},
    },
    groups::{
        entities::{GroupInStream, StudentGroup, StudentStream},
        requests::{
            CreateGroupInStreamRequest, CreateGroupRequest, CreateStreamRequest,
            GroupInStreamListQuery, GroupListQuery, StreamListQuery, UpdateGroupInStreamRequest,
            UpdateGroupRequest, UpdateStreamRequest,
        },
        responses::{GroupInStreamListResponse, GroupListResponse, StreamListResponse},
    },
    lessons::{
        entities::{Lesson, StudentLessonResult},
        requests::{
            CreateLessonRequest, CreateLessonResultRequest, LessonListQuery,
            LessonResultListQuery, UpdateLessonRequest, UpdateLessonResultRequest,
        },
        responses::{LessonListResponse, LessonResultListResponse},
    },
    tasks::{
        entities::{TaskWithTick, TaskWithTickOption, TaskWithTickStudentResult},
        requests::{
            CreateTaskOptionRequest, CreateTaskRequest, CreateTaskResultRequest,
            TaskListQuery, TaskOptionListQuery, TaskResultListQuery, UpdateTaskOptionRequest,
            UpdateTaskRequest, UpdateTaskResultRequest,
        },
        responses::{TaskListResponse, TaskOptionListResponse, TaskResultListResponse},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化接口
///
/// 约定：
/// - `get_*` 找不到时返回 `Ok(None)`
/// - `update_*` 找不到时返回 `Ok(None)`
/// - `delete_*` 找不到时返回 `Ok(false)`
/// - 唯一约束或外键约束冲突返回 `ConstraintViolation`
/// - 字段超长或格式错误返回 `Validation`
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户（级联删除其成绩与任务结果）
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 学生流管理方法
    async fn create_stream(&self, stream: CreateStreamRequest) -> Result<StudentStream>;
    async fn get_stream_by_id(&self, id: i64) -> Result<Option<StudentStream>>;
    async fn list_streams_with_pagination(
        &self,
        query: StreamListQuery,
    ) -> Result<StreamListResponse>;
    async fn update_stream(
        &self,
        id: i64,
        update: UpdateStreamRequest,
    ) -> Result<Option<StudentStream>>;
    async fn delete_stream(&self, id: i64) -> Result<bool>;
    // 列出流下的所有小组
    async fn list_stream_groups(&self, stream_id: i64) -> Result<Vec<StudentGroup>>;

    /// 小组管理方法
    async fn create_group(&self, group: CreateGroupRequest) -> Result<StudentGroup>;
    async fn get_group_by_id(&self, id: i64) -> Result<Option<StudentGroup>>;
    // 通过 (编号, 入学年份) 获取小组
    async fn get_group_by_number_and_year(
        &self,
        number: &str,
        year_of_receipt: i32,
    ) -> Result<Option<StudentGroup>>;
    async fn list_groups_with_pagination(&self, query: GroupListQuery)
    -> Result<GroupListResponse>;
    async fn update_group(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<StudentGroup>>;
    // 删除小组，仍有成员时返回 ConstraintViolation
    async fn delete_group(&self, id: i64) -> Result<bool>;
    // 将用户加入小组，用户或小组不存在时返回 NotFound
    async fn add_member(&self, group_id: i64, user_id: i64) -> Result<User>;
    // 列出小组成员
    async fn list_group_members(&self, group_id: i64) -> Result<Vec<User>>;
    // 列出小组所属的流
    async fn list_group_streams(&self, group_id: i64) -> Result<Vec<StudentStream>>;

    /// 小组-流关联管理方法
    async fn create_group_in_stream(
        &self,
        req: CreateGroupInStreamRequest,
    ) -> Result<GroupInStream>;
    async fn get_group_in_stream_by_id(&self, id: i64) -> Result<Option<GroupInStream>>;
    async fn list_group_in_streams_with_pagination(
        &self,
        query: GroupInStreamListQuery,
    ) -> Result<GroupInStreamListResponse>;
    async fn update_group_in_stream(
        &self,
        id: i64,
        update: UpdateGroupInStreamRequest,
    ) -> Result<Option<GroupInStream>>;
    async fn delete_group_in_stream(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    // 删除课程（级联删除章节、任务及课时）
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 章节管理方法
    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section>;
    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>>;
    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse>;
    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>>;
    async fn delete_section(&self, id: i64) -> Result<bool>;

    /// 课时管理方法
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson>;
    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>>;
    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse>;
    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest)
    -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, id: i64) -> Result<bool>;

    /// 课时成绩管理方法
    async fn create_lesson_result(
        &self,
        result: CreateLessonResultRequest,
    ) -> Result<StudentLessonResult>;
    async fn get_lesson_result_by_id(&self, id: i64) -> Result<Option<StudentLessonResult>>;
    async fn list_lesson_results_with_pagination(
        &self,
        query: LessonResultListQuery,
    ) -> Result<LessonResultListResponse>;
    async fn update_lesson_result(
        &self,
        id: i64,
        update: UpdateLessonResultRequest,
    ) -> Result<Option<StudentLessonResult>>;
    async fn delete_lesson_result(&self, id: i64) -> Result<bool>;

    /// 打勾任务管理方法
    async fn create_task(&self, task: CreateTaskRequest) -> Result<TaskWithTick>;
    async fn get_task_by_id(&self, id: i64) -> Result<Option<TaskWithTick>>;
    async fn list_tasks_with_pagination(&self, query: TaskListQuery) -> Result<TaskListResponse>;
    async fn update_task(&self, id: i64, update: UpdateTaskRequest)
    -> Result<Option<TaskWithTick>>;
    async fn delete_task(&self, id: i64) -> Result<bool>;

    /// 打勾任务选项管理方法
    async fn create_task_option(
        &self,
        option: CreateTaskOptionRequest,
    ) -> Result<TaskWithTickOption>;
    async fn get_task_option_by_id(&self, id: i64) -> Result<Option<TaskWithTickOption>>;
    async fn list_task_options_with_pagination(
        &self,
        query: TaskOptionListQuery,
    ) -> Result<TaskOptionListResponse>;
    async fn update_task_option(
        &self,
        id: i64,
        update: UpdateTaskOptionRequest,
    ) -> Result<Option<TaskWithTickOption>>;
    async fn delete_task_option(&self, id: i64) -> Result<bool>;

    /// 打勾任务学生结果管理方法
    async fn create_task_result(
        &self,
        result: CreateTaskResultRequest,
    ) -> Result<TaskWithTickStudentResult>;
    async fn get_task_result_by_id(&self, id: i64) -> Result<Option<TaskWithTickStudentResult>>;
    async fn list_task_results_with_pagination(
        &self,
        query: TaskResultListQuery,
    ) -> Result<TaskResultListResponse>;
    async fn update_task_result(
        &self,
        id: i64,
        update: UpdateTaskResultRequest,
    ) -> Result<Option<TaskWithTickStudentResult>>;
    async fn delete_task_result(&self, id: i64) -> Result<bool>;

    /// 显示名称（按关联记录的当前状态拼接）
    async fn group_in_stream_label(&self, id: i64) -> Result<Option<String>>;
    async fn lesson_label(&self, id: i64) -> Result<Option<String>>;
    async fn lesson_result_label(&self, id: i64) -> Result<Option<String>>;
    async fn section_label(&self, id: i64) -> Result<Option<String>>;
    async fn task_label(&self, id: i64) -> Result<Option<String>>;
    async fn task_option_label(&self, id: i64) -> Result<Option<String>>;
    async fn task_result_label(&self, id: i64) -> Result<Option<String>>;

    /// 统计各表行数
    async fn count_rows(&self) -> Result<TableCounts>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
