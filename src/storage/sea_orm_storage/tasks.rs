use super::SeaOrmStorage;
use crate::entity::tasks_with_tick::{ActiveModel, Column, Entity as TasksWithTick};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    tasks::{
        entities::TaskWithTick,
        requests::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest},
        responses::TaskListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    /// 创建打勾任务
    pub async fn create_task_impl(&self, req: CreateTaskRequest) -> Result<TaskWithTick> {
        req.validate()?;

        let model = ActiveModel {
            section_id: Set(req.section_id),
            title: Set(req.title),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建任务失败", e))?;

        Ok(result.into_task())
    }

    pub async fn get_task_by_id_impl(&self, id: i64) -> Result<Option<TaskWithTick>> {
        let result = TasksWithTick::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询任务失败", e))?;

        Ok(result.map(|m| m.into_task()))
    }

    pub async fn list_tasks_with_pagination_impl(
        &self,
        query: TaskListQuery,
    ) -> Result<TaskListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = TasksWithTick::find();

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(like_contains(Column::Title, search.trim()));
        }

        select = select.order_by_asc(Column::Id);

        let (tasks, pagination) = self.fetch_page(select, page, size, "任务").await?;

        Ok(TaskListResponse {
            items: tasks.into_iter().map(|m| m.into_task()).collect(),
            pagination,
        })
    }

    pub async fn update_task_impl(
        &self,
        id: i64,
        update: UpdateTaskRequest,
    ) -> Result<Option<TaskWithTick>> {
        update.validate()?;

        if self.get_task_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(section_id) = update.section_id {
            model.section_id = Set(section_id);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新任务失败", e))?;
        }

        self.get_task_by_id_impl(id).await
    }

    pub async fn delete_task_impl(&self, id: i64) -> Result<bool> {
        let result = TasksWithTick::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除任务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
