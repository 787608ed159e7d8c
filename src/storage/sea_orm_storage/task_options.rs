use super::SeaOrmStorage;
use crate::entity::task_with_tick_options::{ActiveModel, Column, Entity as TaskWithTickOptions};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    tasks::{
        entities::TaskWithTickOption,
        requests::{CreateTaskOptionRequest, TaskOptionListQuery, UpdateTaskOptionRequest},
        responses::TaskOptionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    pub async fn create_task_option_impl(
        &self,
        req: CreateTaskOptionRequest,
    ) -> Result<TaskWithTickOption> {
        req.validate()?;

        let model = ActiveModel {
            task_with_tick_id: Set(req.task_with_tick_id),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建任务选项失败", e))?;

        Ok(result.into_task_option())
    }

    pub async fn get_task_option_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<TaskWithTickOption>> {
        let result = TaskWithTickOptions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询任务选项失败", e))?;

        Ok(result.map(|m| m.into_task_option()))
    }

    pub async fn list_task_options_with_pagination_impl(
        &self,
        query: TaskOptionListQuery,
    ) -> Result<TaskOptionListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = TaskWithTickOptions::find();

        if let Some(task_id) = query.task_with_tick_id {
            select = select.filter(Column::TaskWithTickId.eq(task_id));
        }

        select = select.order_by_asc(Column::Id);

        let (options, pagination) = self.fetch_page(select, page, size, "任务选项").await?;

        Ok(TaskOptionListResponse {
            items: options.into_iter().map(|m| m.into_task_option()).collect(),
            pagination,
        })
    }

    pub async fn update_task_option_impl(
        &self,
        id: i64,
        update: UpdateTaskOptionRequest,
    ) -> Result<Option<TaskWithTickOption>> {
        update.validate()?;

        if self.get_task_option_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(task_id) = update.task_with_tick_id {
            model.task_with_tick_id = Set(task_id);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新任务选项失败", e))?;
        }

        self.get_task_option_by_id_impl(id).await
    }

    pub async fn delete_task_option_impl(&self, id: i64) -> Result<bool> {
        let result = TaskWithTickOptions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除任务选项失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
