use super::SeaOrmStorage;
use crate::entity::student_groups::Entity as StudentGroups;
use crate::entity::student_streams::{ActiveModel, Column, Entity as StudentStreams};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    groups::{
        entities::{StudentGroup, StudentStream},
        requests::{CreateStreamRequest, StreamListQuery, UpdateStreamRequest},
        responses::StreamListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::{
    ActiveModelTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, Unchanged,
};
use tracing::info;

impl SeaOrmStorage {
    /// 创建学生流
    pub async fn create_stream_impl(&self, req: CreateStreamRequest) -> Result<StudentStream> {
        req.validate()?;

        let model = ActiveModel {
            title: Set(req.title),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建学生流失败", e))?;

        Ok(result.into_stream())
    }

    pub async fn get_stream_by_id_impl(&self, id: i64) -> Result<Option<StudentStream>> {
        let result = StudentStreams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询学生流失败", e))?;

        Ok(result.map(|m| m.into_stream()))
    }

    pub async fn list_streams_with_pagination_impl(
        &self,
        query: StreamListQuery,
    ) -> Result<StreamListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = StudentStreams::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(like_contains(Column::Title, search.trim()));
        }

        select = select.order_by_asc(Column::Id);

        let (streams, pagination) = self.fetch_page(select, page, size, "学生流").await?;

        Ok(StreamListResponse {
            items: streams.into_iter().map(|m| m.into_stream()).collect(),
            pagination,
        })
    }

    pub async fn update_stream_impl(
        &self,
        id: i64,
        update: UpdateStreamRequest,
    ) -> Result<Option<StudentStream>> {
        update.validate()?;

        if self.get_stream_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新学生流失败", e))?;
        }

        self.get_stream_by_id_impl(id).await
    }

    /// 删除学生流（级联删除其小组关联及相关课时）
    pub async fn delete_stream_impl(&self, id: i64) -> Result<bool> {
        let result = StudentStreams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除学生流失败", e))?;

        if result.rows_affected > 0 {
            info!("学生流 {} 已删除", id);
        }

        Ok(result.rows_affected > 0)
    }

    /// 列出流下的小组（经由 group_in_streams）
    pub async fn list_stream_groups_impl(&self, stream_id: i64) -> Result<Vec<StudentGroup>> {
        let Some(stream) = StudentStreams::find_by_id(stream_id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询学生流失败", e))?
        else {
            return Ok(Vec::new());
        };

        let groups = stream
            .find_related(StudentGroups)
            .order_by_asc(crate::entity::student_groups::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询流内小组失败", e))?;

        Ok(groups.into_iter().map(|m| m.into_group()).collect())
    }
}
