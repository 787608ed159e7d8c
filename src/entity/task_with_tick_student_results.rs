//! 打勾任务学生结果实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "task_with_tick_student_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub task_with_tick_option_id: i64,
    pub perform: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::task_with_tick_options::Entity",
        from = "Column::TaskWithTickOptionId",
        to = "super::task_with_tick_options::Column::Id",
        on_delete = "Cascade"
    )]
    TaskOption,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::task_with_tick_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_task_result(self) -> crate::models::tasks::entities::TaskWithTickStudentResult {
        crate::models::tasks::entities::TaskWithTickStudentResult {
            id: self.id,
            user_id: self.user_id,
            task_with_tick_option_id: self.task_with_tick_option_id,
            perform: self.perform,
        }
    }
}
