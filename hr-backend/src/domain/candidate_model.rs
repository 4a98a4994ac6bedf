// src/domain/candidate_model.rs

use super::status::{CandidateStatus, CvSource};
use crate::domain::timestamp::stamp;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

/// 採用候補者（aday）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    #[sea_orm(unique)]
    pub email: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(nullable)]
    pub national_id: Option<String>,

    #[sea_orm(nullable)]
    pub city_id: Option<i32>,

    pub status: CandidateStatus,

    pub cv_source: CvSource,

    #[sea_orm(nullable)]
    pub cv_path: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city_model::Entity",
        from = "Column::CityId",
        to = "super::city_model::Column::Id",
        on_delete = "SetNull"
    )]
    City,

    #[sea_orm(has_many = "super::application_model::Entity")]
    Applications,

    #[sea_orm(has_many = "super::candidate_language_model::Entity")]
    Languages,
}

impl Related<super::city_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::application_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::candidate_language_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Languages.def()
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
