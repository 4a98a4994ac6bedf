// src/domain/screen_permission_model.rs

use crate::domain::timestamp::stamp;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

/// 画面単位の権限定義（ekran yetkisi）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "screen_permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub screen_code: String,

    pub display_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::level_screen_grant_model::Entity")]
    LevelGrants,
}

impl Related<super::level_screen_grant_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LevelGrants.def()
    }
}

// level <-> screen の多対多
impl Related<super::level_model::Entity> for Entity {
    fn to() -> RelationDef {
        super::level_screen_grant_model::Relation::Level.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::level_screen_grant_model::Relation::ScreenPermission.def().rev())
    }
}

crate::impl_timestamped!(ActiveModel);

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(stamp(self, insert))
    }
}
