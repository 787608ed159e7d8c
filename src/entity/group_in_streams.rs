//! 小组-流关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "group_in_streams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub group_id: i64,
    pub stream_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_groups::Entity",
        from = "Column::GroupId",
        to = "super::student_groups::Column::Id",
        on_delete = "Cascade"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::student_streams::Entity",
        from = "Column::StreamId",
        to = "super::student_streams::Column::Id",
        on_delete = "Cascade"
    )]
    Stream,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
}

impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::student_streams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stream.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_group_in_stream(self) -> crate::models::groups::entities::GroupInStream {
        crate::models::groups::entities::GroupInStream {
            id: self.id,
            group_id: self.group_id,
            stream_id: self.stream_id,
        }
    }
}
