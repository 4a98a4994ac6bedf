// src/domain/zimmet_stock_model.rs

use super::status::StockApprovalStatus;
use crate::domain::timestamp::{normalize_set_optional, stamp, Timestamped};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 貸与可能な備品の在庫。承認されるまで貸与できない
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "zimmet_stocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub item_name: String,

    pub category: String,

    #[sea_orm(nullable)]
    pub brand: Option<String>,

    #[sea_orm(nullable)]
    pub model: Option<String>,

    #[sea_orm(nullable)]
    pub serial_number: Option<String>,

    pub quantity: i32,

    /// 0 <= remaining_quantity <= quantity
    pub remaining_quantity: i32,

    pub approval_status: StockApprovalStatus,

    pub created_by_id: i32,

    #[sea_orm(nullable)]
    pub approved_by_id: Option<i32>,

    pub approved_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,

    pub created_date: DateTimeWithTimeZone,

    pub last_modified: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::CreatedById",
        to = "super::employee_model::Column::Id",
        on_delete = "Restrict"
    )]
    Creator,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::ApprovedById",
        to = "super::employee_model::Column::Id",
        on_delete = "SetNull"
    )]
    Approver,

    #[sea_orm(has_many = "super::zimmet_assignment_model::Entity")]
    Assignments,
}

impl Related<super::zimmet_assignment_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
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
        normalize_set_optional(&mut self.approved_at);
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
