// src/domain/application_model.rs

use super::status::ApplicationStatus;
use crate::domain::timestamp::stamp;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

/// 求人への応募（başvuru）。(posting, candidate) で一意
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub job_posting_id: i32,

    pub candidate_id: i32,

    pub status: ApplicationStatus,

    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,

    #[sea_orm(nullable)]
    pub decided_by_id: Option<i32>,

    pub decided_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_posting_model::Entity",
        from = "Column::JobPostingId",
        to = "super::job_posting_model::Column::Id",
        on_delete = "Cascade"
    )]
    JobPosting,

    #[sea_orm(
        belongs_to = "super::candidate_model::Entity",
        from = "Column::CandidateId",
        to = "super::candidate_model::Column::Id",
        on_delete = "Cascade"
    )]
    Candidate,

    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::DecidedById",
        to = "super::employee_model::Column::Id",
        on_delete = "Restrict"
    )]
    DecidedBy,

    #[sea_orm(has_many = "super::interview_model::Entity")]
    Interviews,

    #[sea_orm(has_one = "super::offer_model::Entity")]
    Offer,
}

impl Related<super::job_posting_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPosting.def()
    }
}

impl Related<super::candidate_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidate.def()
    }
}

impl Related<super::interview_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interviews.def()
    }
}

impl Related<super::offer_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offer.def()
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
