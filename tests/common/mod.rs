#![allow(dead_code)]

use courses_admin::config::DatabaseConfig;
use courses_admin::models::courses::entities::{Course, Section};
use courses_admin::models::courses::requests::{CreateCourseRequest, CreateSectionRequest};
use courses_admin::models::groups::entities::{GroupInStream, StudentGroup, StudentStream};
use courses_admin::models::groups::requests::{
    CreateGroupInStreamRequest, CreateGroupRequest, CreateStreamRequest,
};
use courses_admin::models::tasks::entities::{TaskWithTick, TaskWithTickOption};
use courses_admin::models::tasks::requests::{CreateTaskOptionRequest, CreateTaskRequest};
use courses_admin::models::users::entities::User;
use courses_admin::models::users::requests::CreateUserRequest;
use courses_admin::storage::Storage;
use courses_admin::storage::sea_orm_storage::SeaOrmStorage;

/// 每个测试使用独立的内存数据库
pub async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 30,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should initialise")
}

pub async fn create_user(storage: &SeaOrmStorage, username: &str) -> User {
    storage
        .create_user(CreateUserRequest::new(username))
        .await
        .expect("create user")
}

pub async fn create_group(
    storage: &SeaOrmStorage,
    title: &str,
    number: &str,
    year_of_receipt: i32,
) -> StudentGroup {
    storage
        .create_group(CreateGroupRequest {
            title: title.to_string(),
            number: number.to_string(),
            year_of_receipt,
        })
        .await
        .expect("create group")
}

pub async fn create_stream(storage: &SeaOrmStorage, title: &str) -> StudentStream {
    storage
        .create_stream(CreateStreamRequest {
            title: title.to_string(),
        })
        .await
        .expect("create stream")
}

pub async fn link_group(
    storage: &SeaOrmStorage,
    group: &StudentGroup,
    stream: &StudentStream,
) -> GroupInStream {
    storage
        .create_group_in_stream(CreateGroupInStreamRequest {
            group_id: group.id,
            stream_id: stream.id,
        })
        .await
        .expect("link group to stream")
}

pub async fn create_course(storage: &SeaOrmStorage, name: &str) -> Course {
    storage
        .create_course(CreateCourseRequest {
            name: name.to_string(),
            description: String::new(),
        })
        .await
        .expect("create course")
}

pub async fn create_section(storage: &SeaOrmStorage, course: &Course, title: &str) -> Section {
    storage
        .create_section(CreateSectionRequest {
            course_id: course.id,
            title: title.to_string(),
            description: String::new(),
        })
        .await
        .expect("create section")
}

pub async fn create_task(storage: &SeaOrmStorage, section: &Section, title: &str) -> TaskWithTick {
    storage
        .create_task(CreateTaskRequest {
            section_id: section.id,
            title: title.to_string(),
            description: String::new(),
        })
        .await
        .expect("create task")
}

pub async fn create_option(
    storage: &SeaOrmStorage,
    task: &TaskWithTick,
    description: &str,
) -> TaskWithTickOption {
    storage
        .create_task_option(CreateTaskOptionRequest {
            task_with_tick_id: task.id,
            description: description.to_string(),
        })
        .await
        .expect("create task option")
}
