// src/domain/employee_model.rs

use crate::domain::timestamp::stamp;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// T.C. kimlik numarası
    #[sea_orm(unique)]
    pub national_id: String,

    #[sea_orm(unique)]
    pub email: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    pub hire_date: NaiveDate,

    pub position_id: i32,

    /// 上司が削除されると NULL になる
    #[sea_orm(nullable)]
    pub manager_id: Option<i32>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::position_model::Entity",
        from = "Column::PositionId",
        to = "super::position_model::Column::Id",
        on_delete = "Restrict"
    )]
    Position,

    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ManagerId",
        to = "Column::Id",
        on_delete = "SetNull"
    )]
    Manager,

    #[sea_orm(
        has_one = "super::account_model::Entity",
        from = "Column::Id",
        to = "super::account_model::Column::EmployeeId"
    )]
    Account,

    #[sea_orm(
        has_many = "super::leave_request_model::Entity",
        from = "Column::Id",
        to = "super::leave_request_model::Column::EmployeeId"
    )]
    LeaveRequests,

    #[sea_orm(
        has_many = "super::clock_event_model::Entity",
        from = "Column::Id",
        to = "super::clock_event_model::Column::EmployeeId"
    )]
    ClockEvents,

    #[sea_orm(
        has_many = "super::training_assignment_model::Entity",
        from = "Column::Id",
        to = "super::training_assignment_model::Column::EmployeeId"
    )]
    TrainingAssignments,

    #[sea_orm(
        has_many = "super::zimmet_assignment_model::Entity",
        from = "Column::Id",
        to = "super::zimmet_assignment_model::Column::EmployeeId"
    )]
    ZimmetAssignments,
}

impl Related<super::position_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl Related<super::account_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::leave_request_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveRequests.def()
    }
}

impl Related<super::clock_event_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClockEvents.def()
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
