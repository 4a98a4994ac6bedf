// src/domain/interview_model.rs

use super::status::InterviewType;
use crate::domain::timestamp::stamp;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub application_id: i32,

    pub interviewer_id: i32,

    pub interview_type: InterviewType,

    pub scheduled_at: DateTime<Utc>,

    pub duration_minutes: i32,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    /// 1..=10、未評価なら None
    pub score: Option<i32>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

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
        from = "Column::InterviewerId",
        to = "super::employee_model::Column::Id",
        on_delete = "Restrict"
    )]
    Interviewer,
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
