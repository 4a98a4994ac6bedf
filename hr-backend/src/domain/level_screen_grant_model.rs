// src/domain/level_screen_grant_model.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 職位ごとの画面権限。(level, screen) で一意
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "level_screen_grants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub level_id: i32,

    pub screen_permission_id: i32,

    pub can_read: bool,

    pub can_create: bool,

    pub can_update: bool,

    pub can_delete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::level_model::Entity",
        from = "Column::LevelId",
        to = "super::level_model::Column::Id",
        on_delete = "Cascade"
    )]
    Level,

    #[sea_orm(
        belongs_to = "super::screen_permission_model::Entity",
        from = "Column::ScreenPermissionId",
        to = "super::screen_permission_model::Column::Id",
        on_delete = "Cascade"
    )]
    ScreenPermission,
}

impl Related<super::level_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::screen_permission_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScreenPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
