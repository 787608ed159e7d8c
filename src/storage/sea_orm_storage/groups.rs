use super::SeaOrmStorage;
use crate::entity::student_groups::{ActiveModel, Column, Entity as StudentGroups};
use crate::entity::student_streams::{Column as StreamColumn, Entity as StudentStreams};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as Users,
};
use crate::errors::{CoursesError, Result};
use crate::models::{
    common::page_params,
    groups::{
        entities::{StudentGroup, StudentStream},
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
        responses::GroupListResponse,
    },
    users::entities::User,
};
use crate::utils::like_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait, Unchanged,
};
use tracing::{info, warn};

impl SeaOrmStorage {
    /// 创建小组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<StudentGroup> {
        req.validate()?;

        let model = ActiveModel {
            title: Set(req.title),
            number: Set(req.number),
            year_of_receipt: Set(req.year_of_receipt),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("创建小组失败", e))?;

        Ok(result.into_group())
    }

    /// 通过 ID 获取小组
    pub async fn get_group_by_id_impl(&self, id: i64) -> Result<Option<StudentGroup>> {
        let result = StudentGroups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组失败", e))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 通过编号和入学年份获取小组
    pub async fn get_group_by_number_and_year_impl(
        &self,
        number: &str,
        year_of_receipt: i32,
    ) -> Result<Option<StudentGroup>> {
        let result = StudentGroups::find()
            .filter(Column::Number.eq(number))
            .filter(Column::YearOfReceipt.eq(year_of_receipt))
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组失败", e))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 分页列出小组
    pub async fn list_groups_with_pagination_impl(
        &self,
        query: GroupListQuery,
    ) -> Result<GroupListResponse> {
        let (page, size) = page_params(query.page, query.size);

        let mut select = StudentGroups::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Title, search))
                    .add(like_contains(Column::Number, search)),
            );
        }

        if let Some(ref number) = query.number {
            select = select.filter(Column::Number.eq(number.as_str()));
        }

        if let Some(year) = query.year_of_receipt {
            select = select.filter(Column::YearOfReceipt.eq(year));
        }

        select = select
            .order_by_desc(Column::YearOfReceipt)
            .order_by_asc(Column::Number);

        let (groups, pagination) = self.fetch_page(select, page, size, "小组").await?;

        Ok(GroupListResponse {
            items: groups.into_iter().map(|m| m.into_group()).collect(),
            pagination,
        })
    }

    /// 更新小组
    pub async fn update_group_impl(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<StudentGroup>> {
        update.validate()?;

        if self.get_group_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(number) = update.number {
            model.number = Set(number);
        }

        if let Some(year) = update.year_of_receipt {
            model.year_of_receipt = Set(year);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| CoursesError::from_db("更新小组失败", e))?;
        }

        self.get_group_by_id_impl(id).await
    }

    /// 删除小组
    ///
    /// 仍有成员时数据库拒绝删除（ON DELETE RESTRICT），返回约束冲突错误。
    pub async fn delete_group_impl(&self, id: i64) -> Result<bool> {
        let result = StudentGroups::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                let err = CoursesError::from_db("删除小组失败", e);
                if err.is_constraint_violation() {
                    warn!("小组 {} 仍有成员，拒绝删除", id);
                }
                err
            })?;

        if result.rows_affected > 0 {
            info!("小组 {} 已删除", id);
        }

        Ok(result.rows_affected > 0)
    }

    /// 将用户加入小组
    ///
    /// 在同一事务内完成查找与更新，只修改用户的 group_id。
    pub async fn add_member_impl(&self, group_id: i64, user_id: i64) -> Result<User> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoursesError::from_db("开启事务失败", e))?;

        let user = Users::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| CoursesError::from_db("查询用户失败", e))?
            .ok_or_else(|| CoursesError::not_found(format!("用户 {user_id} 不存在")))?;

        let group = StudentGroups::find_by_id(group_id)
            .one(&txn)
            .await
            .map_err(|e| CoursesError::from_db("查询小组失败", e))?
            .ok_or_else(|| CoursesError::not_found(format!("小组 {group_id} 不存在")))?;

        let model = UserActiveModel {
            id: Unchanged(user.id),
            group_id: Set(Some(group.id)),
            ..Default::default()
        };

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| CoursesError::from_db("更新用户小组失败", e))?;

        txn.commit()
            .await
            .map_err(|e| CoursesError::from_db("提交事务失败", e))?;

        info!("用户 {} 加入小组 {}", updated.username, group.title);
        Ok(updated.into_user())
    }

    /// 列出小组成员
    pub async fn list_group_members_impl(&self, group_id: i64) -> Result<Vec<User>> {
        let members = Users::find()
            .filter(UserColumn::GroupId.eq(group_id))
            .order_by_asc(UserColumn::Username)
            .all(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组成员失败", e))?;

        Ok(members.into_iter().map(|m| m.into_user()).collect())
    }

    /// 列出小组所属的流（经由 group_in_streams）
    pub async fn list_group_streams_impl(&self, group_id: i64) -> Result<Vec<StudentStream>> {
        let Some(group) = StudentGroups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组失败", e))?
        else {
            return Ok(Vec::new());
        };

        let streams = group
            .find_related(StudentStreams)
            .order_by_asc(StreamColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组所属流失败", e))?;

        Ok(streams.into_iter().map(|m| m.into_stream()).collect())
    }
}
