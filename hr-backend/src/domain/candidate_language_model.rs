// src/domain/candidate_language_model.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 候補者の語学力。各スキルは 1..=5
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidate_languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub candidate_id: i32,

    pub language: String,

    pub reading: i32,

    pub writing: i32,

    pub speaking: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::candidate_model::Entity",
        from = "Column::CandidateId",
        to = "super::candidate_model::Column::Id",
        on_delete = "Cascade"
    )]
    Candidate,
}

impl Related<super::candidate_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
