//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub role: String,
    pub tel: String,
    pub group_id: Option<i64>,
    pub date_joined: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_groups::Entity",
        from = "Column::GroupId",
        to = "super::student_groups::Column::Id",
        on_delete = "Restrict"
    )]
    Group,
    #[sea_orm(has_many = "super::student_lesson_results::Entity")]
    LessonResults,
    #[sea_orm(has_many = "super::task_with_tick_student_results::Entity")]
    TaskResults,
}

impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::student_lesson_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonResults.def()
    }
}

impl Related<super::task_with_tick_student_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{StudentProfile, User};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            is_active: self.is_active,
            profile: StudentProfile {
                role: self.role,
                tel: self.tel,
                group_id: self.group_id,
            },
            date_joined: DateTime::<Utc>::from_timestamp(self.date_joined, 0).unwrap_or_default(),
        }
    }
}
