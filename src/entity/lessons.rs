//! 课时实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub group_in_stream_id: Option<i64>,
    pub student_group_id: Option<i64>,
    pub course_id: i64,
    // 单字符代码，见 LessonType
    pub lesson_type: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group_in_streams::Entity",
        from = "Column::GroupInStreamId",
        to = "super::group_in_streams::Column::Id",
        on_delete = "Cascade"
    )]
    GroupInStream,
    #[sea_orm(
        belongs_to = "super::student_groups::Entity",
        from = "Column::StudentGroupId",
        to = "super::student_groups::Column::Id",
        on_delete = "Cascade"
    )]
    StudentGroup,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(has_many = "super::student_lesson_results::Entity")]
    Results,
}

impl Related<super::group_in_streams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupInStream.def()
    }
}

impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroup.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::student_lesson_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    // 库中的代码不在取值表内时返回错误
    pub fn into_lesson(
        self,
    ) -> crate::errors::Result<crate::models::lessons::entities::Lesson> {
        use crate::errors::CoursesError;
        use crate::models::lessons::entities::{Lesson, LessonType};

        let lesson_type = self.lesson_type.parse::<LessonType>().map_err(|e| {
            CoursesError::database_operation(format!("课时 {} 数据异常: {e}", self.id))
        })?;

        Ok(Lesson {
            id: self.id,
            group_in_stream_id: self.group_in_stream_id,
            student_group_id: self.student_group_id,
            course_id: self.course_id,
            lesson_type,
            date: self.date,
        })
    }
}
