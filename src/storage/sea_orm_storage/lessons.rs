use super::SeaOrmStorage;
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    /// 创建课时，未指定日期时取当前本地日期
    pub async fn create_lesson_impl(&self, req: CreateLessonRequest) -> Result<Lesson> {
        let date = req
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let model = ActiveModel {
            course_id: Set(req.course_id),
            group_in_stream_id: Set(req.group_in_stream_id),
            student_group_id: Set(req.student_group_id),
            lesson_type: Set(req.lesson_type.unwrap_or_default().code().to_string()),
            date: Set(date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建课时失败", e))?;

        result.into_lesson()
    }

    pub async fn get_lesson_by_id_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询课时失败", e))?;

        result.map(|m| m.into_lesson()).transpose()
    }

    /// 分页列出课时，按日期倒序
    pub async fn list_lessons_with_pagination_impl(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = Lessons::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(group_in_stream_id) = query.group_in_stream_id {
            select = select.filter(Column::GroupInStreamId.eq(group_in_stream_id));
        }

        if let Some(student_group_id) = query.student_group_id {
            select = select.filter(Column::StudentGroupId.eq(student_group_id));
        }

        if let Some(lesson_type) = query.lesson_type {
            select = select.filter(Column::LessonType.eq(lesson_type.code()));
        }

        // 日期范围（闭区间）
        if let Some(from) = query.date_from {
            select = select.filter(Column::Date.gte(from));
        }

        if let Some(to) = query.date_to {
            select = select.filter(Column::Date.lte(to));
        }

        select = select.order_by_desc(Column::Date).order_by_asc(Column::Id);

        let (lessons, pagination) = self.fetch_page(select, page, size, "课时").await?;

        Ok(LessonListResponse {
            items: lessons
                .into_iter()
                .map(|m| m.into_lesson())
                .collect::<Result<_>>()?,
            pagination,
        })
    }

    pub async fn update_lesson_impl(
        &self,
        id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        if self.get_lesson_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }

        if let Some(group_in_stream_id) = update.group_in_stream_id {
            model.group_in_stream_id = Set(group_in_stream_id);
        }

        if let Some(student_group_id) = update.student_group_id {
            model.student_group_id = Set(student_group_id);
        }

        if let Some(lesson_type) = update.lesson_type {
            model.lesson_type = Set(lesson_type.code().to_string());
        }

        if let Some(date) = update.date {
            model.date = Set(date);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新课时失败", e))?;
        }

        self.get_lesson_by_id_impl(id).await
    }

    pub async fn delete_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除课时失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
