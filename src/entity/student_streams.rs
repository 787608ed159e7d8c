//! 学生流实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_streams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_in_streams::Entity")]
    GroupInStreams,
}

impl Related<super::group_in_streams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupInStreams.def()
    }
}

// 多对多：经由 group_in_streams 关联到小组
impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_in_streams::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_in_streams::Relation::Stream.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stream(self) -> crate::models::groups::entities::StudentStream {
        crate::models::groups::entities::StudentStream {
            id: self.id,
            title: self.title,
        }
    }
}
