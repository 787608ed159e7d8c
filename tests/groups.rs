mod common;

use common::*;
use courses_admin::models::groups::requests::{GroupListQuery, UpdateGroupRequest};
use courses_admin::models::lessons::requests::CreateLessonRequest;
use courses_admin::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use courses_admin::storage::Storage;

#[tokio::test]
async fn test_membership_scenario() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "Group 101", "101", 2023).await;

    let duplicate = storage
        .create_group(courses_admin::models::groups::requests::CreateGroupRequest {
            title: "Another".to_string(),
            number: "101".to_string(),
            year_of_receipt: 2023,
        })
        .await
        .unwrap_err();
    assert!(duplicate.is_constraint_violation());

    let user = create_user(&storage, "ivanov").await;
    let member = storage.add_member(group.id, user.id).await.unwrap();
    assert_eq!(member.profile.group_id, Some(group.id));

    let err = storage.delete_group(group.id).await.unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert_eq!(err.code(), "E006");

    // 小组与成员均未改变
    assert_eq!(storage.get_group_by_id(group.id).await.unwrap(), Some(group.clone()));
    let reloaded = storage.get_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.profile.group_id, Some(group.id));
}

#[tokio::test]
async fn test_same_number_different_year_is_allowed() {
    let storage = memory_storage().await;

    create_group(&storage, "Group 101", "101", 2023).await;
    let next_year = create_group(&storage, "Group 101", "101", 2024).await;

    let found = storage
        .get_group_by_number_and_year("101", 2024)
        .await
        .unwrap();
    assert_eq!(found, Some(next_year));
    assert!(
        storage
            .get_group_by_number_and_year("101", 2022)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_update_group_into_existing_pair_fails() {
    let storage = memory_storage().await;

    create_group(&storage, "A", "101", 2023).await;
    let other = create_group(&storage, "B", "102", 2023).await;

    let err = storage
        .update_group(
            other.id,
            UpdateGroupRequest {
                number: Some("101".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation());

    let unchanged = storage.get_group_by_id(other.id).await.unwrap().unwrap();
    assert_eq!(unchanged.number, "102");
}

#[tokio::test]
async fn test_add_member_keeps_other_fields() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "Group 7", "7", 2022).await;
    let user = storage
        .create_user(CreateUserRequest {
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            email: "anna@example.com".to_string(),
            role: Some("assistant".to_string()),
            tel: "+7900".to_string(),
            ..CreateUserRequest::new("petrova")
        })
        .await
        .unwrap();

    let member = storage.add_member(group.id, user.id).await.unwrap();

    assert_eq!(member.username, user.username);
    assert_eq!(member.first_name, user.first_name);
    assert_eq!(member.last_name, user.last_name);
    assert_eq!(member.email, user.email);
    assert_eq!(member.is_active, user.is_active);
    assert_eq!(member.date_joined, user.date_joined);
    assert_eq!(member.profile.role, "assistant");
    assert_eq!(member.profile.tel, "+7900");
    assert_eq!(member.profile.group_id, Some(group.id));
}

#[tokio::test]
async fn test_add_member_moves_user_between_groups() {
    let storage = memory_storage().await;

    let first = create_group(&storage, "First", "1", 2023).await;
    let second = create_group(&storage, "Second", "2", 2023).await;
    let user = create_user(&storage, "sidorov").await;

    storage.add_member(first.id, user.id).await.unwrap();
    storage.add_member(second.id, user.id).await.unwrap();

    assert!(storage.list_group_members(first.id).await.unwrap().is_empty());
    let members = storage.list_group_members(second.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, user.id);

    // 原小组已无成员，可以删除
    assert!(storage.delete_group(first.id).await.unwrap());
}

#[tokio::test]
async fn test_add_member_missing_user() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "Group 101", "101", 2023).await;
    let err = storage.add_member(group.id, 999).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(storage.list_group_members(group.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_member_missing_group() {
    let storage = memory_storage().await;

    let user = create_user(&storage, "orlov").await;
    let err = storage.add_member(999, user.id).await.unwrap_err();
    assert!(err.is_not_found());

    let reloaded = storage.get_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.profile.group_id, None);
}

#[tokio::test]
async fn test_group_can_be_deleted_after_members_leave() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "Group 5", "5", 2021).await;
    let user = create_user(&storage, "leaver").await;
    storage.add_member(group.id, user.id).await.unwrap();

    storage
        .update_user(
            user.id,
            UpdateUserRequest {
                group_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(storage.delete_group(group.id).await.unwrap());
    assert!(storage.get_group_by_id(group.id).await.unwrap().is_none());
    // 删除小组不影响用户
    assert!(storage.get_user_by_id(user.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_group_cascades_links_and_lessons() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "Group 9", "9", 2023).await;
    let stream = create_stream(&storage, "Physics").await;
    let link = link_group(&storage, &group, &stream).await;
    let course = create_course(&storage, "Mechanics").await;

    let by_link = storage
        .create_lesson(CreateLessonRequest {
            group_in_stream_id: Some(link.id),
            ..CreateLessonRequest::new(course.id)
        })
        .await
        .unwrap();
    let by_group = storage
        .create_lesson(CreateLessonRequest {
            student_group_id: Some(group.id),
            ..CreateLessonRequest::new(course.id)
        })
        .await
        .unwrap();
    let unrelated = storage
        .create_lesson(CreateLessonRequest::new(course.id))
        .await
        .unwrap();

    assert!(storage.delete_group(group.id).await.unwrap());

    assert!(storage.get_group_in_stream_by_id(link.id).await.unwrap().is_none());
    assert!(storage.get_lesson_by_id(by_link.id).await.unwrap().is_none());
    assert!(storage.get_lesson_by_id(by_group.id).await.unwrap().is_none());
    assert!(storage.get_lesson_by_id(unrelated.id).await.unwrap().is_some());
    assert!(storage.get_stream_by_id(stream.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_stream_cascades_links_and_lessons() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "Group 3", "3", 2023).await;
    let stream = create_stream(&storage, "Chemistry").await;
    let link = link_group(&storage, &group, &stream).await;
    let course = create_course(&storage, "Organic").await;
    let lesson = storage
        .create_lesson(CreateLessonRequest {
            group_in_stream_id: Some(link.id),
            ..CreateLessonRequest::new(course.id)
        })
        .await
        .unwrap();

    assert!(storage.delete_stream(stream.id).await.unwrap());

    assert!(storage.get_group_in_stream_by_id(link.id).await.unwrap().is_none());
    assert!(storage.get_lesson_by_id(lesson.id).await.unwrap().is_none());
    assert!(storage.get_group_by_id(group.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_groups_and_streams_many_to_many() {
    let storage = memory_storage().await;

    let g1 = create_group(&storage, "G1", "11", 2023).await;
    let g2 = create_group(&storage, "G2", "12", 2023).await;
    let math = create_stream(&storage, "Math").await;
    let cs = create_stream(&storage, "CS").await;

    link_group(&storage, &g1, &math).await;
    link_group(&storage, &g2, &math).await;
    link_group(&storage, &g1, &cs).await;

    let math_groups = storage.list_stream_groups(math.id).await.unwrap();
    assert_eq!(math_groups, vec![g1.clone(), g2.clone()]);

    let g1_streams = storage.list_group_streams(g1.id).await.unwrap();
    assert_eq!(g1_streams, vec![math.clone(), cs.clone()]);

    assert!(storage.list_stream_groups(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_group_in_stream_requires_existing_parents() {
    let storage = memory_storage().await;

    let group = create_group(&storage, "G", "1", 2023).await;
    let err = storage
        .create_group_in_stream(
            courses_admin::models::groups::requests::CreateGroupInStreamRequest {
                group_id: group.id,
                stream_id: 42,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation());
}

#[tokio::test]
async fn test_list_groups_filters() {
    let storage = memory_storage().await;

    create_group(&storage, "Applied Math", "101", 2023).await;
    create_group(&storage, "Applied Math", "102", 2023).await;
    create_group(&storage, "Physics", "201", 2022).await;

    let by_year = storage
        .list_groups_with_pagination(GroupListQuery {
            year_of_receipt: Some(2023),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_year.pagination.total, 2);

    let by_search = storage
        .list_groups_with_pagination(GroupListQuery {
            search: Some("phys".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_search.items.len(), 1);
    assert_eq!(by_search.items[0].number, "201");

    let by_number = storage
        .list_groups_with_pagination(GroupListQuery {
            number: Some("102".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_number.items.len(), 1);
}
