//! 学生课时成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_lesson_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub lesson_id: i64,
    pub mark: String,
    pub visit: String,
    pub comment: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::lessons::Entity",
        from = "Column::LessonId",
        to = "super::lessons::Column::Id",
        on_delete = "Cascade"
    )]
    Lesson,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lesson_result(
        self,
    ) -> crate::errors::Result<crate::models::lessons::entities::StudentLessonResult> {
        use crate::errors::CoursesError;
        use crate::models::lessons::entities::{Mark, StudentLessonResult, VisitStatus};

        let id = self.id;
        let corrupted = move |e: String| {
            CoursesError::database_operation(format!("课时成绩 {id} 数据异常: {e}"))
        };
        let mark = self.mark.parse::<Mark>().map_err(corrupted)?;
        let visit = self.visit.parse::<VisitStatus>().map_err(corrupted)?;

        Ok(StudentLessonResult {
            id: self.id,
            student_id: self.student_id,
            lesson_id: self.lesson_id,
            mark,
            visit,
            comment: self.comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lessons::entities::{Mark, VisitStatus};

    fn row(mark: &str, visit: &str) -> Model {
        Model {
            id: 7,
            student_id: 1,
            lesson_id: 2,
            mark: mark.to_string(),
            visit: visit.to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_into_lesson_result() {
        let result = row("4", "2").into_lesson_result().unwrap();
        assert_eq!(result.mark, Mark::Four);
        assert_eq!(result.visit, VisitStatus::Missed);
    }

    #[test]
    fn test_unknown_code_is_not_defaulted() {
        let err = row("9", "1").into_lesson_result().unwrap_err();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("9"));

        assert!(row("1", "x").into_lesson_result().is_err());
    }
}
