// src/domain/zimmet_assignment_model.rs

use super::status::CustodyStatus;
use crate::domain::timestamp::{normalize_set, normalize_set_optional, stamp, Timestamped};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 社員への備品貸与（zimmet）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "zimmet_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub stock_id: i32,

    pub employee_id: i32,

    #[sea_orm(nullable)]
    pub assigned_by_id: Option<i32>,

    pub quantity: i32,

    pub assigned_at: DateTimeWithTimeZone,

    pub returned_at: Option<DateTimeWithTimeZone>,

    pub status: CustodyStatus,

    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,

    pub created_date: DateTimeWithTimeZone,

    pub last_modified: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::zimmet_stock_model::Entity",
        from = "Column::StockId",
        to = "super::zimmet_stock_model::Column::Id",
        on_delete = "Restrict"
    )]
    Stock,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id",
        on_delete = "Restrict"
    )]
    Holder,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::AssignedById",
        to = "super::employee_model::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedBy,
}

impl Related<super::zimmet_stock_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stock.def()
    }
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Holder.def()
    }
}

impl Timestamped for ActiveModel {
    fn stamp_created(&mut self, now: chrono::DateTime<Utc>) {
        self.created_date = Set(now.fixed_offset());
    }

    fn stamp_updated(&mut self, now: chrono::DateTime<Utc>) {
        self.last_modified = Set(now.fixed_offset());
    }

    fn keep_created(&mut self) {
        self.created_date = ActiveValue::NotSet;
    }

    fn normalize_dates(&mut self) {
        normalize_set(&mut self.assigned_at);
        normalize_set_optional(&mut self.returned_at);
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(stamp(self, insert))
    }
}
