use super::SeaOrmStorage;
use crate::entity::student_lesson_results::{ActiveModel, Column, Entity as StudentLessonResults};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    lessons::{
        entities::StudentLessonResult,
        requests::{CreateLessonResultRequest, LessonResultListQuery, UpdateLessonResultRequest},
        responses::LessonResultListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    /// 创建课时成绩，成绩与出勤默认取 "1"
    pub async fn create_lesson_result_impl(
        &self,
        req: CreateLessonResultRequest,
    ) -> Result<StudentLessonResult> {
        req.validate()?;

        let model = ActiveModel {
            student_id: Set(req.student_id),
            lesson_id: Set(req.lesson_id),
            mark: Set(req.mark.unwrap_or_default().code().to_string()),
            visit: Set(req.visit.unwrap_or_default().code().to_string()),
            comment: Set(req.comment),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建课时成绩失败", e))?;

        result.into_lesson_result()
    }

    pub async fn get_lesson_result_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<StudentLessonResult>> {
        let result = StudentLessonResults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询课时成绩失败", e))?;

        result.map(|m| m.into_lesson_result()).transpose()
    }

    pub async fn list_lesson_results_with_pagination_impl(
        &self,
        query: LessonResultListQuery,
    ) -> Result<LessonResultListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = StudentLessonResults::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(lesson_id) = query.lesson_id {
            select = select.filter(Column::LessonId.eq(lesson_id));
        }

        if let Some(mark) = query.mark {
            select = select.filter(Column::Mark.eq(mark.code()));
        }

        if let Some(visit) = query.visit {
            select = select.filter(Column::Visit.eq(visit.code()));
        }

        select = select.order_by_asc(Column::Id);

        let (results, pagination) = self.fetch_page(select, page, size, "课时成绩").await?;

        Ok(LessonResultListResponse {
            items: results
                .into_iter()
                .map(|m| m.into_lesson_result())
                .collect::<Result<_>>()?,
            pagination,
        })
    }

    pub async fn update_lesson_result_impl(
        &self,
        id: i64,
        update: UpdateLessonResultRequest,
    ) -> Result<Option<StudentLessonResult>> {
        update.validate()?;

        if self.get_lesson_result_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }

        if let Some(lesson_id) = update.lesson_id {
            model.lesson_id = Set(lesson_id);
        }

        if let Some(mark) = update.mark {
            model.mark = Set(mark.code().to_string());
        }

        if let Some(visit) = update.visit {
            model.visit = Set(visit.code().to_string());
        }

        if let Some(comment) = update.comment {
            model.comment = Set(comment);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新课时成绩失败", e))?;
        }

        self.get_lesson_result_by_id_impl(id).await
    }

    pub async fn delete_lesson_result_impl(&self, id: i64) -> Result<bool> {
        let result = StudentLessonResults::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除课时成绩失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
