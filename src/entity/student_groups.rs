//! 学生小组实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub number: String,
    pub year_of_receipt: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Members,
    #[sea_orm(has_many = "super::group_in_streams::Entity")]
    GroupInStreams,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl Related<super::group_in_streams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupInStreams.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

// 多对多：经由 group_in_streams 关联到学生流
impl Related<super::student_streams::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_in_streams::Relation::Stream.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_in_streams::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_group(self) -> crate::models::groups::entities::StudentGroup {
        crate::models::groups::entities::StudentGroup {
            id: self.id,
            title: self.title,
            number: self.number,
            year_of_receipt: self.year_of_receipt,
        }
    }
}
