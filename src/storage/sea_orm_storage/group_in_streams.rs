use super::SeaOrmStorage;
use crate::entity::group_in_streams::{ActiveModel, Column, Entity as GroupInStreams};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    groups::{
        entities::GroupInStream,
        requests::{
            CreateGroupInStreamRequest, GroupInStreamListQuery, UpdateGroupInStreamRequest,
        },
        responses::GroupInStreamListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    pub async fn create_group_in_stream_impl(
        &self,
        req: CreateGroupInStreamRequest,
    ) -> Result<GroupInStream> {
        let model = ActiveModel {
            group_id: Set(req.group_id),
            stream_id: Set(req.stream_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建小组-流关联失败", e))?;

        Ok(result.into_group_in_stream())
    }

    pub async fn get_group_in_stream_by_id_impl(&self, id: i64) -> Result<Option<GroupInStream>> {
        let result = GroupInStreams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组-流关联失败", e))?;

        Ok(result.map(|m| m.into_group_in_stream()))
    }

    pub async fn list_group_in_streams_with_pagination_impl(
        &self,
        query: GroupInStreamListQuery,
    ) -> Result<GroupInStreamListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = GroupInStreams::find();

        if let Some(group_id) = query.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        if let Some(stream_id) = query.stream_id {
            select = select.filter(Column::StreamId.eq(stream_id));
        }

        select = select.order_by_asc(Column::Id);

        let (rows, pagination) = self.fetch_page(select, page, size, "小组-流关联").await?;

        Ok(GroupInStreamListResponse {
            items: rows.into_iter().map(|m| m.into_group_in_stream()).collect(),
            pagination,
        })
    }

    pub async fn update_group_in_stream_impl(
        &self,
        id: i64,
        update: UpdateGroupInStreamRequest,
    ) -> Result<Option<GroupInStream>> {
        if self.get_group_in_stream_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(group_id) = update.group_id {
            model.group_id = Set(group_id);
        }

        if let Some(stream_id) = update.stream_id {
            model.stream_id = Set(stream_id);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新小组-流关联失败", e))?;
        }

        self.get_group_in_stream_by_id_impl(id).await
    }

    pub async fn delete_group_in_stream_impl(&self, id: i64) -> Result<bool> {
        let result = GroupInStreams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("删除小组-流关联失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
