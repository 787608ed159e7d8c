use super::SeaOrmStorage;
use crate::entity::task_with_tick_student_results::{
    ActiveModel, Column, Entity as TaskWithTickStudentResults,
};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    tasks::{
        entities::TaskWithTickStudentResult,
        requests::{CreateTaskResultRequest, TaskResultListQuery, UpdateTaskResultRequest},
        responses::TaskResultListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    pub async fn create_task_result_impl(
        &self,
        req: CreateTaskResultRequest,
    ) -> Result<TaskWithTickStudentResult> {
        let model = ActiveModel {
            user_id: Set(req.user_id),
            task_with_tick_option_id: Set(req.task_with_tick_option_id),
            perform: Set(req.perform),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建任务结果失败", e))?;

        Ok(result.into_task_result())
    }

    pub async fn get_task_result_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<TaskWithTickStudentResult>> {
        let result = TaskWithTickStudentResults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询任务结果失败", e))?;

        Ok(result.map(|m| m.into_task_result()))
    }

    pub async fn list_task_results_with_pagination_impl(
        &self,
        query: TaskResultListQuery,
    ) -> Result<TaskResultListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = TaskWithTickStudentResults::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        if let Some(option_id) = query.task_with_tick_option_id {
            select = select.filter(Column::TaskWithTickOptionId.eq(option_id));
        }

        if let Some(perform) = query.perform {
            select = select.filter(Column::Perform.eq(perform));
        }

        select = select.order_by_asc(Column::Id);

        let (results, pagination) = self.fetch_page(select, page, size, "任务结果").await?;

        Ok(TaskResultListResponse {
            items: results.into_iter().map(|m| m.into_task_result()).collect(),
            pagination,
        })
    }

    pub async fn update_task_result_impl(
        &self,
        id: i64,
        update: UpdateTaskResultRequest,
    ) -> Result<Option<TaskWithTickStudentResult>> {
        if self.get_task_result_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(user_id) = update.user_id {
            model.user_id = Set(user_id);
        }

        if let Some(option_id) = update.task_with_tick_option_id {
            model.task_with_tick_option_id = Set(option_id);
        }

        if let Some(perform) = update.perform {
            model.perform = Set(perform);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新任务结果失败", e))?;
        }

        self.get_task_result_by_id_impl(id).await
    }

    pub async fn delete_task_result_impl(&self, id: i64) -> Result<bool> {
        let result = TaskWithTickStudentResults::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除任务结果失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
