// src/repository/screen_permission_repository.rs

use crate::domain::level_screen_grant_model::{
    self, ActiveModel as GrantActiveModel, Entity as GrantEntity,
};
use crate::domain::screen_permission_model::{
    self, ActiveModel as ScreenActiveModel, Entity as ScreenEntity,
};
use sea_orm::entity::*;
use sea_orm::{ConnectionTrait, DbConn, DbErr, DeleteResult, Order, QueryFilter, QueryOrder};

#[derive(Debug, Clone)]
pub struct ScreenPermissionRepository {
    db: DbConn,
}

impl ScreenPermissionRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    // --- 画面 ---

    pub async fn find_all(&self) -> Result<Vec<screen_permission_model::Model>, DbErr> {
        ScreenEntity::find()
            .order_by(screen_permission_model::Column::ScreenCode, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<screen_permission_model::Model>, DbErr> {
        ScreenEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_codes_with<C: ConnectionTrait>(
        conn: &C,
        codes: Vec<String>,
    ) -> Result<Vec<screen_permission_model::Model>, DbErr> {
        ScreenEntity::find()
            .filter(screen_permission_model::Column::ScreenCode.is_in(codes))
            .all(conn)
            .await
    }

    pub async fn create(
        &self,
        screen: ScreenActiveModel,
    ) -> Result<screen_permission_model::Model, DbErr> {
        screen.insert(&self.db).await
    }

    pub async fn update(
        &self,
        screen: ScreenActiveModel,
    ) -> Result<screen_permission_model::Model, DbErr> {
        screen.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        ScreenEntity::delete_by_id(id).exec(&self.db).await
    }

    // --- 職位ごとの付与 ---

    /// 職位に付与された画面権限を画面と組で取得
    pub async fn find_grants_for_level(
        &self,
        level_id: i32,
    ) -> Result<
        Vec<(
            level_screen_grant_model::Model,
            Option<screen_permission_model::Model>,
        )>,
        DbErr,
    > {
        GrantEntity::find()
            .filter(level_screen_grant_model::Column::LevelId.eq(level_id))
            .find_also_related(ScreenEntity)
            .all(&self.db)
            .await
    }

    pub async fn delete_grants_for_level_with<C: ConnectionTrait>(
        conn: &C,
        level_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        GrantEntity::delete_many()
            .filter(level_screen_grant_model::Column::LevelId.eq(level_id))
            .exec(conn)
            .await
    }

    pub async fn insert_grant_with<C: ConnectionTrait>(
        conn: &C,
        grant: GrantActiveModel,
    ) -> Result<level_screen_grant_model::Model, DbErr> {
        grant.insert(conn).await
    }
}
