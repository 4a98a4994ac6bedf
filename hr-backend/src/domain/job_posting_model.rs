// src/domain/job_posting_model.rs

use super::status::JobPostingStatus;
use crate::domain::timestamp::stamp;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_postings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub department_id: i32,

    #[sea_orm(nullable)]
    pub position_id: Option<i32>,

    pub status: JobPostingStatus,

    pub published_at: Option<NaiveDate>,

    pub closing_date: Option<NaiveDate>,

    #[sea_orm(nullable)]
    pub created_by_id: Option<i32>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department_model::Entity",
        from = "Column::DepartmentId",
        to = "super::department_model::Column::Id",
        on_delete = "Restrict"
    )]
    Department,

    #[sea_orm(
        belongs_to = "super::position_model::Entity",
        from = "Column::PositionId",
        to = "super::position_model::Column::Id",
        on_delete = "SetNull"
    )]
    Position,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::CreatedById",
        to = "super::employee_model::Column::Id",
        on_delete = "SetNull"
    )]
    CreatedBy,

    #[sea_orm(has_many = "super::application_model::Entity")]
    Applications,
}

impl Related<super::department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::application_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
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
