// src/domain/leave_request_model.rs

use super::status::LeaveStatus;
use crate::domain::timestamp::stamp;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leave_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub employee_id: i32,

    #[sea_orm(nullable)]
    pub approver_id: Option<i32>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// 開始日と終了日を含む日数
    pub day_count: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub reason: Option<String>,

    pub status: LeaveStatus,

    pub decided_at: Option<DateTime<Utc>>,

    #[sea_orm(column_type = "Text", nullable)]
    pub decision_note: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id",
        on_delete = "Cascade"
    )]
    Requester,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::ApproverId",
        to = "super::employee_model::Column::Id",
        on_delete = "SetNull"
    )]
    Approver,
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requester.def()
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
