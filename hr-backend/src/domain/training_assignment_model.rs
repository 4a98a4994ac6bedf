// src/domain/training_assignment_model.rs

use super::status::TrainingAssignmentStatus;
use crate::domain::timestamp::stamp;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub training_id: i32,

    pub employee_id: i32,

    #[sea_orm(nullable)]
    pub assigned_by_id: Option<i32>,

    pub due_date: Option<NaiveDate>,

    pub status: TrainingAssignmentStatus,

    /// 0..=100
    pub watched_percent: i32,

    pub completed_at: Option<DateTime<Utc>>,

    /// 完了時に発行される修了証コード
    #[sea_orm(unique, nullable)]
    pub certificate_code: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training_model::Entity",
        from = "Column::TrainingId",
        to = "super::training_model::Column::Id",
        on_delete = "Cascade"
    )]
    Training,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::AssignedById",
        to = "super::employee_model::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedBy,
}

impl Related<super::training_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
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
