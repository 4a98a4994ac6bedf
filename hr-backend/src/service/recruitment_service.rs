// src/service/recruitment_service.rs

use crate::api::dto::recruitment_dto::*;
use crate::domain::status::{ApplicationStatus, CandidateStatus, JobPostingStatus};
use crate::domain::{
    application_model, candidate_language_model, candidate_model, interview_model,
    job_posting_model, offer_model,
};
use crate::error::{AppError, AppResult};
use crate::repository::recruitment_repository::{
    ApplicationRepository, CandidateRepository, InterviewRepository, JobPostingRepository,
    OfferRepository,
};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DbConn, Set};
use tracing::info;

/// 求人 → 候補者 → 応募 → 面接 → オファー
pub struct RecruitmentService {
    db: DbConn,
    posting_repo: JobPostingRepository,
    candidate_repo: CandidateRepository,
    application_repo: ApplicationRepository,
    interview_repo: InterviewRepository,
    offer_repo: OfferRepository,
}

impl RecruitmentService {
    pub fn new(db: DbConn) -> Self {
        Self {
            posting_repo: JobPostingRepository::new(db.clone()),
            candidate_repo: CandidateRepository::new(db.clone()),
            application_repo: ApplicationRepository::new(db.clone()),
            interview_repo: InterviewRepository::new(db.clone()),
            offer_repo: OfferRepository::new(db.clone()),
            db,
        }
    }

    // --- 求人 ---

    pub async fn list_postings(
        &self,
        query: &JobPostingQuery,
    ) -> AppResult<Vec<job_posting_model::Model>> {
        Ok(self
            .posting_repo
            .find_all(query.status, query.department_id)
            .await?)
    }

    pub async fn get_posting(&self, id: i32) -> AppResult<job_posting_model::Model> {
        self.posting_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job posting with id {} not found", id)))
    }

    /// 下書き状態で作成する
    pub async fn create_posting(
        &self,
        created_by_id: i32,
        request: CreateJobPostingRequest,
    ) -> AppResult<job_posting_model::Model> {
        let posting = self
            .posting_repo
            .create(job_posting_model::ActiveModel {
                title: Set(request.title),
                description: Set(request.description),
                department_id: Set(request.department_id),
                position_id: Set(request.position_id),
                status: Set(JobPostingStatus::Draft),
                closing_date: Set(request.closing_date),
                created_by_id: Set(Some(created_by_id)),
                ..Default::default()
            })
            .await?;
        info!(job_posting_id = posting.id, "Job posting created");
        Ok(posting)
    }

    /// 初めて Published になった日を published_at に残す
    pub async fn update_posting(
        &self,
        id: i32,
        request: UpdateJobPostingRequest,
    ) -> AppResult<job_posting_model::Model> {
        let posting = self.get_posting(id).await?;
        let first_publish =
            request.status == Some(JobPostingStatus::Published) && posting.published_at.is_none();

        let mut active: job_posting_model::ActiveModel = posting.into();
        if let Some(title) = request.title {
            active.title = Set(title);
        }
        if let Some(description) = request.description {
            active.description = Set(description);
        }
        if request.position_id.is_some() {
            active.position_id = Set(request.position_id);
        }
        if request.closing_date.is_some() {
            active.closing_date = Set(request.closing_date);
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        if first_publish {
            active.published_at = Set(Some(Utc::now().date_naive()));
        }

        let updated = self.posting_repo.update(active).await?;
        info!(job_posting_id = id, status = ?updated.status, "Job posting updated");
        Ok(updated)
    }

    pub async fn delete_posting(&self, id: i32) -> AppResult<()> {
        let result = self.posting_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Job posting with id {} not found", id)));
        }
        Ok(())
    }

    // --- 候補者 ---

    pub async fn list_candidates(
        &self,
        query: &CandidateListQuery,
    ) -> AppResult<(Vec<candidate_model::Model>, u64)> {
        let (page, per_page) = query.pagination.page_index_and_size();
        Ok(self
            .candidate_repo
            .find_paginated(query.status, page, per_page)
            .await?)
    }

    pub async fn get_candidate(&self, id: i32) -> AppResult<candidate_model::Model> {
        self.candidate_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Candidate with id {} not found", id)))
    }

    pub async fn get_candidate_with_languages(
        &self,
        id: i32,
    ) -> AppResult<(candidate_model::Model, Vec<candidate_language_model::Model>)> {
        let candidate = self.get_candidate(id).await?;
        let languages = self.candidate_repo.find_languages(id).await?;
        Ok((candidate, languages))
    }

    pub async fn create_candidate(
        &self,
        request: CreateCandidateRequest,
    ) -> AppResult<(candidate_model::Model, Vec<candidate_language_model::Model>)> {
        let result = crate::with_transaction!(self.db, |txn| async move {
            let candidate = CandidateRepository::create_with(
                txn,
                candidate_model::ActiveModel {
                    first_name: Set(request.first_name),
                    last_name: Set(request.last_name),
                    email: Set(request.email.to_lowercase()),
                    phone: Set(request.phone),
                    national_id: Set(request.national_id),
                    city_id: Set(request.city_id),
                    status: Set(CandidateStatus::New),
                    cv_source: Set(request.cv_source),
                    cv_path: Set(request.cv_path),
                    ..Default::default()
                },
            )
            .await?;
            let languages = insert_languages(txn, candidate.id, request.languages).await?;
            Ok((candidate, languages))
        })?;

        info!(candidate_id = result.0.id, "Candidate created");
        Ok(result)
    }

    pub async fn update_candidate(
        &self,
        id: i32,
        request: UpdateCandidateRequest,
    ) -> AppResult<(candidate_model::Model, Vec<candidate_language_model::Model>)> {
        let (candidate, languages) = crate::with_transaction!(self.db, |txn| async move {
            let candidate = CandidateRepository::find_by_id_with(txn, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Candidate with id {} not found", id)))?;

            let mut active: candidate_model::ActiveModel = candidate.into();
            if let Some(first_name) = request.first_name {
                active.first_name = Set(first_name);
            }
            if let Some(last_name) = request.last_name {
                active.last_name = Set(last_name);
            }
            if let Some(email) = request.email {
                active.email = Set(email.to_lowercase());
            }
            if request.phone.is_some() {
                active.phone = Set(request.phone);
            }
            if request.city_id.is_some() {
                active.city_id = Set(request.city_id);
            }
            if let Some(status) = request.status {
                active.status = Set(status);
            }
            if let Some(cv_source) = request.cv_source {
                active.cv_source = Set(cv_source);
            }
            if request.cv_path.is_some() {
                active.cv_path = Set(request.cv_path);
            }
            let candidate = CandidateRepository::update_with(txn, active).await?;

            let languages = match request.languages {
                Some(languages) => {
                    CandidateRepository::delete_languages_with(txn, id).await?;
                    Some(insert_languages(txn, id, languages).await?)
                }
                None => None,
            };
            Ok((candidate, languages))
        })?;

        let languages = match languages {
            Some(languages) => languages,
            None => self.candidate_repo.find_languages(id).await?,
        };
        Ok((candidate, languages))
    }

    /// 応募と語学情報も連鎖削除される
    pub async fn delete_candidate(&self, id: i32) -> AppResult<()> {
        let result = self.candidate_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Candidate with id {} not found", id)));
        }
        Ok(())
    }

    // --- 応募 ---

    /// 公開中の求人にのみ応募できる
    pub async fn apply(
        &self,
        job_posting_id: i32,
        request: ApplyRequest,
    ) -> AppResult<application_model::Model> {
        let posting = self.get_posting(job_posting_id).await?;
        if posting.status != JobPostingStatus::Published {
            return Err(AppError::Conflict(format!(
                "Job posting {} is not accepting applications",
                job_posting_id
            )));
        }
        self.get_candidate(request.candidate_id).await?;

        let application = self
            .application_repo
            .create(application_model::ActiveModel {
                job_posting_id: Set(job_posting_id),
                candidate_id: Set(request.candidate_id),
                status: Set(ApplicationStatus::Submitted),
                cover_letter: Set(request.cover_letter),
                ..Default::default()
            })
            .await?;

        info!(
            application_id = application.id,
            job_posting_id,
            candidate_id = application.candidate_id,
            "Application submitted"
        );
        Ok(application)
    }

    pub async fn get_application(&self, id: i32) -> AppResult<application_model::Model> {
        self.application_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Application with id {} not found", id)))
    }

    pub async fn list_applications_for_posting(
        &self,
        job_posting_id: i32,
        status: Option<ApplicationStatus>,
    ) -> AppResult<Vec<application_model::Model>> {
        self.get_posting(job_posting_id).await?;
        Ok(self
            .application_repo
            .find_by_posting(job_posting_id, status)
            .await?)
    }

    pub async fn list_applications_for_candidate(
        &self,
        candidate_id: i32,
    ) -> AppResult<Vec<application_model::Model>> {
        self.get_candidate(candidate_id).await?;
        Ok(self.application_repo.find_by_candidate(candidate_id).await?)
    }

    /// 終端状態（Accepted / Rejected / Withdrawn）では決定者と日時を記録する
    pub async fn change_application_status(
        &self,
        id: i32,
        decided_by_id: i32,
        status: ApplicationStatus,
    ) -> AppResult<application_model::Model> {
        let application = self.get_application(id).await?;
        if application.status.is_terminal() {
            return Err(AppError::Conflict(format!(
                "Application {} is already {:?}",
                id, application.status
            )));
        }

        let mut active: application_model::ActiveModel = application.into();
        active.status = Set(status);
        if status.is_terminal() {
            active.decided_by_id = Set(Some(decided_by_id));
            active.decided_at = Set(Some(Utc::now()));
        }
        let updated = self.application_repo.update(active).await?;

        info!(application_id = id, status = ?status, "Application status changed");
        Ok(updated)
    }

    // --- 面接 ---

    pub async fn list_interviews(
        &self,
        application_id: i32,
    ) -> AppResult<Vec<interview_model::Model>> {
        self.get_application(application_id).await?;
        Ok(self.interview_repo.find_by_application(application_id).await?)
    }

    pub async fn list_interviews_for_interviewer(
        &self,
        interviewer_id: i32,
    ) -> AppResult<Vec<interview_model::Model>> {
        Ok(self.interview_repo.find_by_interviewer(interviewer_id).await?)
    }

    /// 面接を登録し、選考初期段階の応募を InterviewScheduled に進める
    pub async fn schedule_interview(
        &self,
        application_id: i32,
        request: ScheduleInterviewRequest,
    ) -> AppResult<interview_model::Model> {
        let interview = crate::with_transaction!(self.db, |txn| async move {
            let application = ApplicationRepository::find_by_id_with(txn, application_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Application with id {} not found", application_id))
                })?;
            if application.status.is_terminal() {
                return Err(AppError::Conflict(format!(
                    "Application {} is already {:?}",
                    application_id, application.status
                )));
            }

            let interview = InterviewRepository::create_with(
                txn,
                interview_model::ActiveModel {
                    application_id: Set(application_id),
                    interviewer_id: Set(request.interviewer_id),
                    interview_type: Set(request.interview_type),
                    scheduled_at: Set(request.scheduled_at),
                    duration_minutes: Set(request.duration_minutes),
                    location: Set(request.location),
                    ..Default::default()
                },
            )
            .await?;

            if matches!(
                application.status,
                ApplicationStatus::Submitted
                    | ApplicationStatus::UnderReview
                    | ApplicationStatus::Shortlisted
            ) {
                let mut active: application_model::ActiveModel = application.into();
                active.status = Set(ApplicationStatus::InterviewScheduled);
                ApplicationRepository::update_with(txn, active).await?;
            }
            Ok(interview)
        })?;

        info!(
            interview_id = interview.id,
            application_id,
            interviewer_id = interview.interviewer_id,
            "Interview scheduled"
        );
        Ok(interview)
    }

    pub async fn record_interview_feedback(
        &self,
        interview_id: i32,
        request: InterviewFeedbackRequest,
    ) -> AppResult<interview_model::Model> {
        let interview = self
            .interview_repo
            .find_by_id(interview_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Interview with id {} not found", interview_id))
            })?;

        let mut active: interview_model::ActiveModel = interview.into();
        active.score = Set(Some(request.score));
        if request.notes.is_some() {
            active.notes = Set(request.notes);
        }
        Ok(self.interview_repo.update(active).await?)
    }

    pub async fn delete_interview(&self, interview_id: i32) -> AppResult<()> {
        let result = self.interview_repo.delete(interview_id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "Interview with id {} not found",
                interview_id
            )));
        }
        Ok(())
    }

    // --- オファー ---

    pub async fn get_offer_for_application(
        &self,
        application_id: i32,
    ) -> AppResult<offer_model::Model> {
        self.offer_repo
            .find_by_application(application_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Offer for application {} not found", application_id))
            })
    }

    /// 応募ごとに 1 件。応募を OfferExtended、候補者を OfferSent にする
    pub async fn create_offer(
        &self,
        application_id: i32,
        decided_by_id: i32,
        request: CreateOfferRequest,
    ) -> AppResult<offer_model::Model> {
        let offer = crate::with_transaction!(self.db, |txn| async move {
            let application = ApplicationRepository::find_by_id_with(txn, application_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Application with id {} not found", application_id))
                })?;
            if application.status.is_terminal() {
                return Err(AppError::Conflict(format!(
                    "Application {} is already {:?}",
                    application_id, application.status
                )));
            }
            if OfferRepository::find_by_application_with(txn, application_id)
                .await?
                .is_some()
            {
                return Err(AppError::Conflict(format!(
                    "Application {} already has an offer",
                    application_id
                )));
            }

            let offer = OfferRepository::create_with(
                txn,
                offer_model::ActiveModel {
                    application_id: Set(application_id),
                    salary: Set(request.salary),
                    start_date: Set(request.start_date),
                    expires_at: Set(request.expires_at),
                    is_accepted: Set(None),
                    decided_by_id: Set(decided_by_id),
                    ..Default::default()
                },
            )
            .await?;

            let candidate_id = application.candidate_id;
            let mut active: application_model::ActiveModel = application.into();
            active.status = Set(ApplicationStatus::OfferExtended);
            ApplicationRepository::update_with(txn, active).await?;
            set_candidate_status(txn, candidate_id, CandidateStatus::OfferSent).await?;

            Ok(offer)
        })?;

        info!(offer_id = offer.id, application_id, "Offer created");
        Ok(offer)
    }

    /// 承諾なら応募 Accepted・候補者 Hired、辞退なら双方 Withdrawn
    pub async fn decide_offer(
        &self,
        offer_id: i32,
        decided_by_id: i32,
        accept: bool,
    ) -> AppResult<offer_model::Model> {
        let offer = crate::with_transaction!(self.db, |txn| async move {
            let offer = OfferRepository::find_by_id_with(txn, offer_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Offer with id {} not found", offer_id)))?;
            if offer.is_accepted.is_some() {
                return Err(AppError::Conflict(format!(
                    "Offer {} has already been answered",
                    offer_id
                )));
            }

            let application = ApplicationRepository::find_by_id_with(txn, offer.application_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Application with id {} not found",
                        offer.application_id
                    ))
                })?;
            if application.status.is_terminal() {
                return Err(AppError::Conflict(format!(
                    "Application {} is already {:?}",
                    offer.application_id, application.status
                )));
            }

            let (application_status, candidate_status) = if accept {
                (ApplicationStatus::Accepted, CandidateStatus::Hired)
            } else {
                (ApplicationStatus::Withdrawn, CandidateStatus::Withdrawn)
            };

            let candidate_id = application.candidate_id;
            let mut active: application_model::ActiveModel = application.into();
            active.status = Set(application_status);
            active.decided_by_id = Set(Some(decided_by_id));
            active.decided_at = Set(Some(Utc::now()));
            ApplicationRepository::update_with(txn, active).await?;
            set_candidate_status(txn, candidate_id, candidate_status).await?;

            let mut active: offer_model::ActiveModel = offer.into();
            active.is_accepted = Set(Some(accept));
            Ok(OfferRepository::update_with(txn, active).await?)
        })?;

        info!(
            offer_id,
            application_id = offer.application_id,
            accepted = accept,
            "Offer decided"
        );
        Ok(offer)
    }
}

async fn insert_languages<C: ConnectionTrait>(
    conn: &C,
    candidate_id: i32,
    languages: Vec<CandidateLanguageRequest>,
) -> AppResult<Vec<candidate_language_model::Model>> {
    let mut inserted = Vec::with_capacity(languages.len());
    for language in languages {
        let model = CandidateRepository::insert_language_with(
            conn,
            candidate_language_model::ActiveModel {
                candidate_id: Set(candidate_id),
                language: Set(language.language),
                reading: Set(language.reading),
                writing: Set(language.writing),
                speaking: Set(language.speaking),
                ..Default::default()
            },
        )
        .await?;
        inserted.push(model);
    }
    Ok(inserted)
}

async fn set_candidate_status<C: ConnectionTrait>(
    conn: &C,
    candidate_id: i32,
    status: CandidateStatus,
) -> AppResult<()> {
    let candidate = CandidateRepository::find_by_id_with(conn, candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate with id {} not found", candidate_id)))?;
    let mut active: candidate_model::ActiveModel = candidate.into();
    active.status = Set(status);
    CandidateRepository::update_with(conn, active).await?;
    Ok(())
}
