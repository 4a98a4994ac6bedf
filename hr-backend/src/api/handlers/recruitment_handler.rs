// src/api/handlers/recruitment_handler.rs
use crate::api::dto::recruitment_dto::*;
use crate::api::dto::{ApiResponse, PaginatedResponse};
use crate::api::handlers::IdPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::PaginationMeta;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tracing::info;
use validator::Validate;

// --- 求人 ---

pub async fn list_postings_handler(
    State(app_state): State<AppState>,
    Query(query): Query<JobPostingQuery>,
) -> AppResult<Json<ApiResponse<Vec<JobPostingResponse>>>> {
    let postings = app_state.recruitment_service.list_postings(&query).await?;
    Ok(Json(ApiResponse::success(
        "Job postings retrieved",
        postings.into_iter().map(JobPostingResponse::from).collect(),
    )))
}

pub async fn get_posting_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<JobPostingResponse>>> {
    let posting = app_state.recruitment_service.get_posting(id).await?;
    Ok(Json(ApiResponse::success(
        "Job posting retrieved",
        JobPostingResponse::from(posting),
    )))
}

pub async fn create_posting_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateJobPostingRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let posting = app_state
        .recruitment_service
        .create_posting(user.employee_id(), payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Job posting created",
            JobPostingResponse::from(posting),
        )),
    ))
}

pub async fn update_posting_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateJobPostingRequest>,
) -> AppResult<Json<ApiResponse<JobPostingResponse>>> {
    payload.validate()?;
    let posting = app_state
        .recruitment_service
        .update_posting(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Job posting updated",
        JobPostingResponse::from(posting),
    )))
}

pub async fn delete_posting_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.recruitment_service.delete_posting(id).await?;
    Ok(Json(ApiResponse::success_message("Job posting deleted")))
}

// --- 候補者 ---

pub async fn list_candidates_handler(
    State(app_state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<CandidateResponse>>>> {
    let (candidates, total_count) = app_state.recruitment_service.list_candidates(&query).await?;
    let items = candidates.into_iter().map(CandidateResponse::from).collect();
    Ok(Json(ApiResponse::success(
        "Candidates retrieved",
        PaginatedResponse::new(items, PaginationMeta::new(&query.pagination, total_count)),
    )))
}

/// 語学スキル込みで返す
pub async fn get_candidate_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<CandidateResponse>>> {
    let (candidate, languages) = app_state
        .recruitment_service
        .get_candidate_with_languages(id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Candidate retrieved",
        CandidateResponse::with_languages(candidate, languages),
    )))
}

pub async fn create_candidate_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCandidateRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let (candidate, languages) = app_state
        .recruitment_service
        .create_candidate(payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Candidate created",
            CandidateResponse::with_languages(candidate, languages),
        )),
    ))
}

pub async fn update_candidate_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateCandidateRequest>,
) -> AppResult<Json<ApiResponse<CandidateResponse>>> {
    payload.validate()?;
    let (candidate, languages) = app_state
        .recruitment_service
        .update_candidate(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Candidate updated",
        CandidateResponse::with_languages(candidate, languages),
    )))
}

pub async fn delete_candidate_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.recruitment_service.delete_candidate(id).await?;
    Ok(Json(ApiResponse::success_message("Candidate deleted")))
}

pub async fn list_candidate_applications_handler(
    State(app_state): State<AppState>,
    IdPath(candidate_id): IdPath,
) -> AppResult<Json<ApiResponse<Vec<ApplicationResponse>>>> {
    let applications = app_state
        .recruitment_service
        .list_applications_for_candidate(candidate_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Applications retrieved",
        applications.into_iter().map(ApplicationResponse::from).collect(),
    )))
}

// --- 応募 ---

/// 公開中の求人にのみ応募できる
pub async fn apply_handler(
    State(app_state): State<AppState>,
    IdPath(job_posting_id): IdPath,
    Json(payload): Json<ApplyRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let application = app_state
        .recruitment_service
        .apply(job_posting_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Application submitted",
            ApplicationResponse::from(application),
        )),
    ))
}

pub async fn list_posting_applications_handler(
    State(app_state): State<AppState>,
    IdPath(job_posting_id): IdPath,
    Query(query): Query<ApplicationQuery>,
) -> AppResult<Json<ApiResponse<Vec<ApplicationResponse>>>> {
    let applications = app_state
        .recruitment_service
        .list_applications_for_posting(job_posting_id, query.status)
        .await?;
    Ok(Json(ApiResponse::success(
        "Applications retrieved",
        applications.into_iter().map(ApplicationResponse::from).collect(),
    )))
}

pub async fn get_application_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<ApplicationResponse>>> {
    let application = app_state.recruitment_service.get_application(id).await?;
    Ok(Json(ApiResponse::success(
        "Application retrieved",
        ApplicationResponse::from(application),
    )))
}

pub async fn change_application_status_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<ChangeApplicationStatusRequest>,
) -> AppResult<Json<ApiResponse<ApplicationResponse>>> {
    let application = app_state
        .recruitment_service
        .change_application_status(id, user.employee_id(), payload.status)
        .await?;
    info!(
        application_id = id,
        changed_by = user.employee_id(),
        status = ?application.status,
        "Application status changed"
    );
    Ok(Json(ApiResponse::success(
        "Application status updated",
        ApplicationResponse::from(application),
    )))
}

// --- 面接 ---

pub async fn list_interviews_handler(
    State(app_state): State<AppState>,
    IdPath(application_id): IdPath,
) -> AppResult<Json<ApiResponse<Vec<InterviewResponse>>>> {
    let interviews = app_state
        .recruitment_service
        .list_interviews(application_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Interviews retrieved",
        interviews.into_iter().map(InterviewResponse::from).collect(),
    )))
}

pub async fn schedule_interview_handler(
    State(app_state): State<AppState>,
    IdPath(application_id): IdPath,
    Json(payload): Json<ScheduleInterviewRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let interview = app_state
        .recruitment_service
        .schedule_interview(application_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Interview scheduled",
            InterviewResponse::from(interview),
        )),
    ))
}

/// ログイン中の社員が面接官の面接
pub async fn list_my_interviews_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<InterviewResponse>>>> {
    let interviews = app_state
        .recruitment_service
        .list_interviews_for_interviewer(user.employee_id())
        .await?;
    Ok(Json(ApiResponse::success(
        "Interviews retrieved",
        interviews.into_iter().map(InterviewResponse::from).collect(),
    )))
}

pub async fn interview_feedback_handler(
    State(app_state): State<AppState>,
    IdPath(interview_id): IdPath,
    Json(payload): Json<InterviewFeedbackRequest>,
) -> AppResult<Json<ApiResponse<InterviewResponse>>> {
    payload.validate()?;
    let interview = app_state
        .recruitment_service
        .record_interview_feedback(interview_id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Interview feedback recorded",
        InterviewResponse::from(interview),
    )))
}

pub async fn delete_interview_handler(
    State(app_state): State<AppState>,
    IdPath(interview_id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state
        .recruitment_service
        .delete_interview(interview_id)
        .await?;
    Ok(Json(ApiResponse::success_message("Interview deleted")))
}

// --- オファー ---

pub async fn get_offer_handler(
    State(app_state): State<AppState>,
    IdPath(application_id): IdPath,
) -> AppResult<Json<ApiResponse<OfferResponse>>> {
    let offer = app_state
        .recruitment_service
        .get_offer_for_application(application_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Offer retrieved",
        OfferResponse::from(offer),
    )))
}

/// 応募ごとに 1 件のみ
pub async fn create_offer_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(application_id): IdPath,
    Json(payload): Json<CreateOfferRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let offer = app_state
        .recruitment_service
        .create_offer(application_id, user.employee_id(), payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Offer created",
            OfferResponse::from(offer),
        )),
    ))
}

pub async fn decide_offer_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(offer_id): IdPath,
    Json(payload): Json<OfferDecisionRequest>,
) -> AppResult<Json<ApiResponse<OfferResponse>>> {
    let offer = app_state
        .recruitment_service
        .decide_offer(offer_id, user.employee_id(), payload.accept)
        .await?;
    let message = if payload.accept {
        "Offer accepted"
    } else {
        "Offer declined"
    };
    Ok(Json(ApiResponse::success(message, OfferResponse::from(offer))))
}

pub fn recruitment_router(app_state: AppState) -> Router {
    Router::new()
        // 求人
        .route(
            "/api/job-postings",
            get(list_postings_handler).post(create_posting_handler),
        )
        .route(
            "/api/job-postings/{id}",
            get(get_posting_handler)
                .patch(update_posting_handler)
                .delete(delete_posting_handler),
        )
        .route(
            "/api/job-postings/{id}/applications",
            get(list_posting_applications_handler).post(apply_handler),
        )
        // 候補者
        .route(
            "/api/candidates",
            get(list_candidates_handler).post(create_candidate_handler),
        )
        .route(
            "/api/candidates/{id}",
            get(get_candidate_handler)
                .patch(update_candidate_handler)
                .delete(delete_candidate_handler),
        )
        .route(
            "/api/candidates/{id}/applications",
            get(list_candidate_applications_handler),
        )
        // 応募・面接・オファー
        .route("/api/applications/{id}", get(get_application_handler))
        .route(
            "/api/applications/{id}/status",
            patch(change_application_status_handler),
        )
        .route(
            "/api/applications/{id}/interviews",
            get(list_interviews_handler).post(schedule_interview_handler),
        )
        .route(
            "/api/applications/{id}/offer",
            get(get_offer_handler).post(create_offer_handler),
        )
        .route("/api/interviews/mine", get(list_my_interviews_handler))
        .route(
            "/api/interviews/{id}",
            patch(interview_feedback_handler).delete(delete_interview_handler),
        )
        .route("/api/offers/{id}/decision", post(decide_offer_handler))
        .with_state(app_state)
}
