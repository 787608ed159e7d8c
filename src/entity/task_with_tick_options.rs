//! 打勾任务选项实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "task_with_tick_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_with_tick_id: i64,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tasks_with_tick::Entity",
        from = "Column::TaskWithTickId",
        to = "super::tasks_with_tick::Column::Id",
        on_delete = "Cascade"
    )]
    Task,
    #[sea_orm(has_many = "super::task_with_tick_student_results::Entity")]
    StudentResults,
}

impl Related<super::tasks_with_tick::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::task_with_tick_student_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_task_option(self) -> crate::models::tasks::entities::TaskWithTickOption {
        crate::models::tasks::entities::TaskWithTickOption {
            id: self.id,
            task_with_tick_id: self.task_with_tick_id,
            description: self.description,
        }
    }
}
