// src/domain/offer_model.rs

use crate::domain::timestamp::stamp;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

/// 内定オファー。応募 1 件につき 1 つ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub application_id: i32,

    /// 月額（最小通貨単位）
    pub salary: i64,

    pub start_date: NaiveDate,

    pub expires_at: Option<NaiveDate>,

    /// None = 未回答
    pub is_accepted: Option<bool>,

    pub decided_by_id: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_model::Entity",
        from = "Column::ApplicationId",
        to = "super::application_model::Column::Id",
        on_delete = "Cascade"
    )]
    Application,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::DecidedById",
        to = "super::employee_model::Column::Id",
        on_delete = "Restrict"
    )]
    DecidedBy,
}

impl Related<super::application_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
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
