// src/repository/recruitment_repository.rs

use crate::domain::application_model::{
    self, ActiveModel as ApplicationActiveModel, Entity as ApplicationEntity,
};
use crate::domain::candidate_language_model::{
    self, ActiveModel as LanguageActiveModel, Entity as LanguageEntity,
};
use crate::domain::candidate_model::{
    self, ActiveModel as CandidateActiveModel, Entity as CandidateEntity,
};
use crate::domain::interview_model::{
    self, ActiveModel as InterviewActiveModel, Entity as InterviewEntity,
};
use crate::domain::job_posting_model::{
    self, ActiveModel as JobPostingActiveModel, Entity as JobPostingEntity,
};
use crate::domain::offer_model::{self, ActiveModel as OfferActiveModel, Entity as OfferEntity};
use crate::domain::status::{ApplicationStatus, CandidateStatus, JobPostingStatus};
use sea_orm::entity::*;
use sea_orm::{
    ConnectionTrait, DbConn, DbErr, DeleteResult, Order, PaginatorTrait, QueryFilter, QueryOrder,
};

// --- 求人 ---

#[derive(Debug, Clone)]
pub struct JobPostingRepository {
    db: DbConn,
}

impl JobPostingRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        status: Option<JobPostingStatus>,
        department_id: Option<i32>,
    ) -> Result<Vec<job_posting_model::Model>, DbErr> {
        let mut query = JobPostingEntity::find();
        if let Some(status) = status {
            query = query.filter(job_posting_model::Column::Status.eq(status));
        }
        if let Some(department_id) = department_id {
            query = query.filter(job_posting_model::Column::DepartmentId.eq(department_id));
        }
        query
            .order_by(job_posting_model::Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<job_posting_model::Model>, DbErr> {
        JobPostingEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(
        &self,
        posting: JobPostingActiveModel,
    ) -> Result<job_posting_model::Model, DbErr> {
        posting.insert(&self.db).await
    }

    pub async fn update(
        &self,
        posting: JobPostingActiveModel,
    ) -> Result<job_posting_model::Model, DbErr> {
        posting.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        JobPostingEntity::delete_by_id(id).exec(&self.db).await
    }
}

// --- 候補者 ---

#[derive(Debug, Clone)]
pub struct CandidateRepository {
    db: DbConn,
}

impl CandidateRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_paginated(
        &self,
        status: Option<CandidateStatus>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<candidate_model::Model>, u64), DbErr> {
        let mut query = CandidateEntity::find();
        if let Some(status) = status {
            query = query.filter(candidate_model::Column::Status.eq(status));
        }
        let paginator = query
            .order_by(candidate_model::Column::CreatedAt, Order::Desc)
            .paginate(&self.db, page_size);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;
        Ok((items, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<candidate_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<candidate_model::Model>, DbErr> {
        CandidateEntity::find_by_id(id).one(conn).await
    }

    pub async fn create_with<C: ConnectionTrait>(
        conn: &C,
        candidate: CandidateActiveModel,
    ) -> Result<candidate_model::Model, DbErr> {
        candidate.insert(conn).await
    }

    pub async fn update_with<C: ConnectionTrait>(
        conn: &C,
        candidate: CandidateActiveModel,
    ) -> Result<candidate_model::Model, DbErr> {
        candidate.update(conn).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        CandidateEntity::delete_by_id(id).exec(&self.db).await
    }

    pub async fn find_languages(
        &self,
        candidate_id: i32,
    ) -> Result<Vec<candidate_language_model::Model>, DbErr> {
        LanguageEntity::find()
            .filter(candidate_language_model::Column::CandidateId.eq(candidate_id))
            .order_by(candidate_language_model::Column::Language, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn delete_languages_with<C: ConnectionTrait>(
        conn: &C,
        candidate_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        LanguageEntity::delete_many()
            .filter(candidate_language_model::Column::CandidateId.eq(candidate_id))
            .exec(conn)
            .await
    }

    pub async fn insert_language_with<C: ConnectionTrait>(
        conn: &C,
        language: LanguageActiveModel,
    ) -> Result<candidate_language_model::Model, DbErr> {
        language.insert(conn).await
    }
}

// --- 応募 ---

#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    db: DbConn,
}

impl ApplicationRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<application_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<application_model::Model>, DbErr> {
        ApplicationEntity::find_by_id(id).one(conn).await
    }

    pub async fn find_by_posting(
        &self,
        job_posting_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<application_model::Model>, DbErr> {
        let mut query = ApplicationEntity::find()
            .filter(application_model::Column::JobPostingId.eq(job_posting_id));
        if let Some(status) = status {
            query = query.filter(application_model::Column::Status.eq(status));
        }
        query
            .order_by(application_model::Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_candidate(
        &self,
        candidate_id: i32,
    ) -> Result<Vec<application_model::Model>, DbErr> {
        ApplicationEntity::find()
            .filter(application_model::Column::CandidateId.eq(candidate_id))
            .order_by(application_model::Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        application: ApplicationActiveModel,
    ) -> Result<application_model::Model, DbErr> {
        application.insert(&self.db).await
    }

    pub async fn update(
        &self,
        application: ApplicationActiveModel,
    ) -> Result<application_model::Model, DbErr> {
        Self::update_with(&self.db, application).await
    }

    pub async fn update_with<C: ConnectionTrait>(
        conn: &C,
        application: ApplicationActiveModel,
    ) -> Result<application_model::Model, DbErr> {
        application.update(conn).await
    }
}

// --- 面接 ---

#[derive(Debug, Clone)]
pub struct InterviewRepository {
    db: DbConn,
}

impl InterviewRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<interview_model::Model>, DbErr> {
        InterviewEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_application(
        &self,
        application_id: i32,
    ) -> Result<Vec<interview_model::Model>, DbErr> {
        InterviewEntity::find()
            .filter(interview_model::Column::ApplicationId.eq(application_id))
            .order_by(interview_model::Column::ScheduledAt, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_interviewer(
        &self,
        interviewer_id: i32,
    ) -> Result<Vec<interview_model::Model>, DbErr> {
        InterviewEntity::find()
            .filter(interview_model::Column::InterviewerId.eq(interviewer_id))
            .order_by(interview_model::Column::ScheduledAt, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn create_with<C: ConnectionTrait>(
        conn: &C,
        interview: InterviewActiveModel,
    ) -> Result<interview_model::Model, DbErr> {
        interview.insert(conn).await
    }

    pub async fn update(
        &self,
        interview: InterviewActiveModel,
    ) -> Result<interview_model::Model, DbErr> {
        interview.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        InterviewEntity::delete_by_id(id).exec(&self.db).await
    }
}

// --- オファー ---

#[derive(Debug, Clone)]
pub struct OfferRepository {
    db: DbConn,
}

impl OfferRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<offer_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<offer_model::Model>, DbErr> {
        OfferEntity::find_by_id(id).one(conn).await
    }

    pub async fn find_by_application(
        &self,
        application_id: i32,
    ) -> Result<Option<offer_model::Model>, DbErr> {
        Self::find_by_application_with(&self.db, application_id).await
    }

    pub async fn find_by_application_with<C: ConnectionTrait>(
        conn: &C,
        application_id: i32,
    ) -> Result<Option<offer_model::Model>, DbErr> {
        OfferEntity::find()
            .filter(offer_model::Column::ApplicationId.eq(application_id))
            .one(conn)
            .await
    }

    pub async fn create_with<C: ConnectionTrait>(
        conn: &C,
        offer: OfferActiveModel,
    ) -> Result<offer_model::Model, DbErr> {
        offer.insert(conn).await
    }

    pub async fn update_with<C: ConnectionTrait>(
        conn: &C,
        offer: OfferActiveModel,
    ) -> Result<offer_model::Model, DbErr> {
        offer.update(conn).await
    }
}
