mod common;

use common::*;
use courses_admin::models::courses::requests::{
    CreateCourseRequest, UpdateCourseRequest, UpdateSectionRequest,
};
use courses_admin::models::groups::requests::{UpdateGroupRequest, UpdateStreamRequest};
use courses_admin::models::lessons::entities::{LessonType, Mark, VisitStatus};
use courses_admin::models::lessons::requests::{
    CreateLessonRequest, CreateLessonResultRequest, UpdateLessonRequest,
    UpdateLessonResultRequest,
};
use courses_admin::models::tasks::requests::{CreateTaskResultRequest, UpdateTaskResultRequest};
use courses_admin::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use courses_admin::errors::CoursesError;
use courses_admin::storage::Storage;
use sea_orm::ConnectionTrait;

#[tokio::test]
async fn test_delete_course_cascades_everything() {
    let storage = memory_storage().await;

    let student = create_user(&storage, "student1").await;
    let course = create_course(&storage, "Physics").await;
    let other_course = create_course(&storage, "History").await;

    let section = create_section(&storage, &course, "Optics").await;
    let task = create_task(&storage, &section, "Lab 1").await;
    let option = create_option(&storage, &task, "Measure focal length").await;
    let task_result = storage
        .create_task_result(CreateTaskResultRequest {
            user_id: student.id,
            task_with_tick_option_id: option.id,
            perform: true,
        })
        .await
        .unwrap();

    let lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();
    let lesson_result = storage
        .create_lesson_result(CreateLessonResultRequest::new(student.id, lesson.id))
        .await
        .unwrap();

    let kept_section = create_section(&storage, &other_course, "Antiquity").await;

    assert!(storage.delete_course(course.id).await.unwrap());

    assert!(storage.get_section_by_id(section.id).await.unwrap().is_none());
    assert!(storage.get_task_by_id(task.id).await.unwrap().is_none());
    assert!(storage.get_task_option_by_id(option.id).await.unwrap().is_none());
    assert!(
        storage
            .get_task_result_by_id(task_result.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.get_lesson_by_id(lesson.id).await.unwrap().is_none());
    assert!(
        storage
            .get_lesson_result_by_id(lesson_result.id)
            .await
            .unwrap()
            .is_none()
    );

    // 其他课程与用户不受影响
    assert!(storage.get_section_by_id(kept_section.id).await.unwrap().is_some());
    assert!(storage.get_user_by_id(student.id).await.unwrap().is_some());

    let counts = storage.count_rows().await.unwrap();
    assert_eq!(counts.courses, 1);
    assert_eq!(counts.sections, 1);
    assert_eq!(counts.tasks_with_tick, 0);
    assert_eq!(counts.task_with_tick_options, 0);
    assert_eq!(counts.task_with_tick_student_results, 0);
    assert_eq!(counts.lessons, 0);
    assert_eq!(counts.student_lesson_results, 0);
    assert_eq!(counts.users, 1);
}

#[tokio::test]
async fn test_delete_user_cascades_results() {
    let storage = memory_storage().await;

    let student = create_user(&storage, "student2").await;
    let course = create_course(&storage, "Biology").await;
    let section = create_section(&storage, &course, "Cells").await;
    let task = create_task(&storage, &section, "Microscope").await;
    let option = create_option(&storage, &task, "Prepare slide").await;

    let task_result = storage
        .create_task_result(CreateTaskResultRequest {
            user_id: student.id,
            task_with_tick_option_id: option.id,
            perform: false,
        })
        .await
        .unwrap();
    let lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();
    let lesson_result = storage
        .create_lesson_result(CreateLessonResultRequest::new(student.id, lesson.id))
        .await
        .unwrap();

    assert!(storage.delete_user(student.id).await.unwrap());
    assert!(!storage.delete_user(student.id).await.unwrap());

    assert!(
        storage
            .get_task_result_by_id(task_result.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .get_lesson_result_by_id(lesson_result.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.get_task_option_by_id(option.id).await.unwrap().is_some());
    assert!(storage.get_lesson_by_id(lesson.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_lesson_defaults() {
    let storage = memory_storage().await;

    let course = create_course(&storage, "Algebra").await;
    let before = chrono::Local::now().date_naive();
    let lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();
    let after = chrono::Local::now().date_naive();

    assert_eq!(lesson.lesson_type, LessonType::Lecture);
    assert!(lesson.date == before || lesson.date == after);
    assert_eq!(lesson.group_in_stream_id, None);
    assert_eq!(lesson.student_group_id, None);

    let stored = storage.get_lesson_by_id(lesson.id).await.unwrap().unwrap();
    assert_eq!(stored, lesson);
}

#[tokio::test]
async fn test_lesson_explicit_values_and_update() {
    let storage = memory_storage().await;

    let course = create_course(&storage, "Geometry").await;
    let date = chrono::NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let lesson = storage
        .create_lesson(CreateLessonRequest {
            lesson_type: Some(LessonType::LaboratoryWork),
            date: Some(date),
            ..CreateLessonRequest::new(course.id)
        })
        .await
        .unwrap();
    assert_eq!(lesson.lesson_type, LessonType::LaboratoryWork);
    assert_eq!(lesson.date, date);

    let updated = storage
        .update_lesson(
            lesson.id,
            UpdateLessonRequest {
                lesson_type: Some(LessonType::PracticalWork),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.lesson_type, LessonType::PracticalWork);
    assert_eq!(updated.date, date);

    assert!(
        storage
            .update_lesson(999, UpdateLessonRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_lesson_result_defaults_and_update() {
    let storage = memory_storage().await;

    let student = create_user(&storage, "student3").await;
    let course = create_course(&storage, "Literature").await;
    let lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();

    let result = storage
        .create_lesson_result(CreateLessonResultRequest::new(student.id, lesson.id))
        .await
        .unwrap();
    assert_eq!(result.mark, Mark::One);
    assert_eq!(result.mark.code(), "1");
    assert_eq!(result.visit, VisitStatus::Visited);
    assert_eq!(result.visit.code(), "1");
    assert_eq!(result.comment, "");

    let updated = storage
        .update_lesson_result(
            result.id,
            UpdateLessonResultRequest {
                mark: Some(Mark::Five),
                visit: Some(VisitStatus::Missed),
                comment: Some("late".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.mark, Mark::Five);
    assert_eq!(updated.visit, VisitStatus::Missed);
    assert_eq!(updated.comment, "late");
}

#[tokio::test]
async fn test_out_of_range_codes_are_rejected_by_schema() {
    let storage = memory_storage().await;

    let student = create_user(&storage, "student4").await;
    let course = create_course(&storage, "Geography").await;
    let lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();
    let result = storage
        .create_lesson_result(CreateLessonResultRequest::new(student.id, lesson.id))
        .await
        .unwrap();

    let db = storage.connection();
    for sql in [
        format!("UPDATE student_lesson_results SET mark = '9' WHERE id = {}", result.id),
        format!("UPDATE student_lesson_results SET visit = '3' WHERE id = {}", result.id),
        format!("UPDATE lessons SET lesson_type = '7' WHERE id = {}", lesson.id),
    ] {
        let err = db.execute_unprepared(&sql).await.unwrap_err();
        assert!(CoursesError::from_db("写入失败", err).is_constraint_violation());
    }

    // 原值未被改写
    let reloaded = storage.get_lesson_result_by_id(result.id).await.unwrap().unwrap();
    assert_eq!(reloaded.mark, Mark::One);
    assert_eq!(reloaded.visit, VisitStatus::Visited);
    let reloaded = storage.get_lesson_by_id(lesson.id).await.unwrap().unwrap();
    assert_eq!(reloaded.lesson_type, LessonType::Lecture);
}

#[tokio::test]
async fn test_task_result_perform_defaults_false() {
    let storage = memory_storage().await;

    let student = create_user(&storage, "student4").await;
    let course = create_course(&storage, "Art").await;
    let section = create_section(&storage, &course, "Drawing").await;
    let task = create_task(&storage, &section, "Sketch").await;
    let option = create_option(&storage, &task, "Pencil").await;

    let req: CreateTaskResultRequest = serde_json::from_value(serde_json::json!({
        "user_id": student.id,
        "task_with_tick_option_id": option.id,
    }))
    .unwrap();
    let result = storage.create_task_result(req).await.unwrap();
    assert!(!result.perform);

    let ticked = storage
        .update_task_result(
            result.id,
            UpdateTaskResultRequest {
                perform: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(ticked.perform);
}

#[tokio::test]
async fn test_validation_errors_leave_state_unchanged() {
    let storage = memory_storage().await;

    let err = storage
        .create_course(CreateCourseRequest {
            name: "x".repeat(256),
            description: String::new(),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = storage
        .create_user(CreateUserRequest::new("bad name!"))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = storage
        .create_stream(courses_admin::models::groups::requests::CreateStreamRequest {
            title: "s".repeat(61),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let student = create_user(&storage, "student5").await;
    let course = create_course(&storage, "Music").await;
    let lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();
    let err = storage
        .create_lesson_result(CreateLessonResultRequest {
            comment: "c".repeat(256),
            ..CreateLessonResultRequest::new(student.id, lesson.id)
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = storage
        .update_user(
            student.id,
            UpdateUserRequest {
                tel: Some("1".repeat(16)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let counts = storage.count_rows().await.unwrap();
    assert_eq!(counts.courses, 1);
    assert_eq!(counts.users, 1);
    assert_eq!(counts.student_streams, 0);
    assert_eq!(counts.student_lesson_results, 0);
}

#[tokio::test]
async fn test_username_is_unique() {
    let storage = memory_storage().await;

    create_user(&storage, "twin").await;
    let err = storage
        .create_user(CreateUserRequest::new("twin"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation());

    let found = storage.get_user_by_username("twin").await.unwrap().unwrap();
    assert_eq!(found.profile.role, "student");
    assert!(found.is_active);
}

#[tokio::test]
async fn test_child_requires_existing_parent() {
    let storage = memory_storage().await;

    let err = storage
        .create_lesson(CreateLessonRequest::new(404))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation());
    assert_eq!(storage.count_rows().await.unwrap().lessons, 0);
}

#[tokio::test]
async fn test_labels_follow_related_rows() {
    let storage = memory_storage().await;

    let student = create_user(&storage, "ivanov").await;
    let group = create_group(&storage, "Group 101", "101", 2023).await;
    let stream = create_stream(&storage, "Physics").await;
    let link = link_group(&storage, &group, &stream).await;
    let course = create_course(&storage, "Mechanics").await;
    let section = create_section(&storage, &course, "Kinematics").await;
    let task = create_task(&storage, &section, "Lab 1").await;
    let option = create_option(&storage, &task, "Measure speed").await;
    let task_result = storage
        .create_task_result(CreateTaskResultRequest {
            user_id: student.id,
            task_with_tick_option_id: option.id,
            perform: true,
        })
        .await
        .unwrap();
    let lesson = storage
        .create_lesson(CreateLessonRequest {
            group_in_stream_id: Some(link.id),
            lesson_type: Some(LessonType::PracticalWork),
            ..CreateLessonRequest::new(course.id)
        })
        .await
        .unwrap();
    let bare_lesson = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();
    let lesson_result = storage
        .create_lesson_result(CreateLessonResultRequest {
            mark: Some(Mark::Four),
            visit: Some(VisitStatus::Missed),
            ..CreateLessonResultRequest::new(student.id, lesson.id)
        })
        .await
        .unwrap();

    assert_eq!(
        storage.group_in_stream_label(link.id).await.unwrap().unwrap(),
        "Physics 101"
    );
    assert_eq!(
        storage.lesson_label(lesson.id).await.unwrap().unwrap(),
        "Course: Mechanics Group: Physics 101, Practical work"
    );
    assert_eq!(
        storage.lesson_label(bare_lesson.id).await.unwrap().unwrap(),
        "Course: Mechanics Group: None, Lecture"
    );
    assert_eq!(
        storage
            .lesson_result_label(lesson_result.id)
            .await
            .unwrap()
            .unwrap(),
        "Student ivanov. Mark: 4. Missed"
    );
    assert_eq!(
        storage.section_label(section.id).await.unwrap().unwrap(),
        "Course Mechanics, Section: Kinematics"
    );
    assert_eq!(
        storage.task_label(task.id).await.unwrap().unwrap(),
        "Course Mechanics, Section: Kinematics, Task: Lab 1"
    );
    assert_eq!(
        storage.task_option_label(option.id).await.unwrap().unwrap(),
        "Course Mechanics, Section: Kinematics, Task: Lab 1, Description: Measure speed"
    );
    assert_eq!(
        storage
            .task_result_label(task_result.id)
            .await
            .unwrap()
            .unwrap(),
        "Course Mechanics, Section: Kinematics, Task: Lab 1, Description: Measure speed, Is performed? True"
    );

    // 关联记录改名后名称随之变化
    storage
        .update_course(
            course.id,
            UpdateCourseRequest {
                name: Some("Dynamics".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    storage
        .update_stream(
            stream.id,
            UpdateStreamRequest {
                title: Some("Applied Physics".to_string()),
            },
        )
        .await
        .unwrap();
    storage
        .update_group(
            group.id,
            UpdateGroupRequest {
                number: Some("102".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    storage
        .update_user(
            student.id,
            UpdateUserRequest {
                username: Some("ivanov_a".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    storage
        .update_section(
            section.id,
            UpdateSectionRequest {
                title: Some("Motion".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        storage.lesson_label(lesson.id).await.unwrap().unwrap(),
        "Course: Dynamics Group: Applied Physics 102, Practical work"
    );
    assert_eq!(
        storage
            .lesson_result_label(lesson_result.id)
            .await
            .unwrap()
            .unwrap(),
        "Student ivanov_a. Mark: 4. Missed"
    );
    assert_eq!(
        storage.task_label(task.id).await.unwrap().unwrap(),
        "Course Dynamics, Section: Motion, Task: Lab 1"
    );

    assert!(storage.lesson_label(999).await.unwrap().is_none());
}
