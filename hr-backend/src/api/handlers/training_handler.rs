// src/api/handlers/training_handler.rs
use crate::api::dto::training_dto::*;
use crate::api::dto::ApiResponse;
use crate::api::handlers::IdPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

pub async fn list_trainings_handler(
    State(app_state): State<AppState>,
    Query(query): Query<TrainingListQuery>,
) -> AppResult<Json<ApiResponse<Vec<TrainingResponse>>>> {
    let trainings = app_state
        .training_service
        .list_trainings(query.only_active)
        .await?;
    Ok(Json(ApiResponse::success(
        "Trainings retrieved",
        trainings.into_iter().map(TrainingResponse::from).collect(),
    )))
}

pub async fn get_training_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<TrainingResponse>>> {
    let training = app_state.training_service.get_training(id).await?;
    Ok(Json(ApiResponse::success(
        "Training retrieved",
        TrainingResponse::from(training),
    )))
}

pub async fn create_training_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTrainingRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let training = app_state.training_service.create_training(payload).await?;
    info!(
        created_by = user.employee_id(),
        training_id = training.id,
        "Training created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Training created",
            TrainingResponse::from(training),
        )),
    ))
}

pub async fn update_training_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateTrainingRequest>,
) -> AppResult<Json<ApiResponse<TrainingResponse>>> {
    payload.validate()?;
    let training = app_state
        .training_service
        .update_training(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Training updated",
        TrainingResponse::from(training),
    )))
}

pub async fn delete_training_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.training_service.delete_training(id).await?;
    Ok(Json(ApiResponse::success_message("Training deleted")))
}

/// 複数社員への割り当て。割り当て済みの社員は既存のものを返す
pub async fn assign_training_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(training_id): IdPath,
    Json(payload): Json<AssignTrainingRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let assignments = app_state
        .training_service
        .assign(training_id, user.employee_id(), payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Training assigned",
            assignments
                .into_iter()
                .map(TrainingAssignmentResponse::from)
                .collect::<Vec<_>>(),
        )),
    ))
}

pub async fn list_training_assignments_handler(
    State(app_state): State<AppState>,
    IdPath(training_id): IdPath,
) -> AppResult<Json<ApiResponse<Vec<TrainingAssignmentResponse>>>> {
    let assignments = app_state
        .training_service
        .list_for_training(training_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Training assignments retrieved",
        assignments
            .into_iter()
            .map(TrainingAssignmentResponse::from)
            .collect(),
    )))
}

pub async fn list_my_trainings_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<TrainingAssignmentResponse>>>> {
    let assignments = app_state
        .training_service
        .list_for_employee(user.employee_id())
        .await?;
    Ok(Json(ApiResponse::success(
        "Training assignments retrieved",
        assignments
            .into_iter()
            .map(TrainingAssignmentResponse::from)
            .collect(),
    )))
}

/// 視聴進捗の報告。100% で修了し修了証コードが発行される
pub async fn report_progress_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(assignment_id): IdPath,
    Json(payload): Json<TrainingProgressRequest>,
) -> AppResult<Json<ApiResponse<TrainingAssignmentResponse>>> {
    payload.validate()?;
    let assignment = app_state
        .training_service
        .report_progress(assignment_id, user.employee_id(), payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Progress recorded",
        TrainingAssignmentResponse::from(assignment),
    )))
}

pub fn training_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/trainings",
            get(list_trainings_handler).post(create_training_handler),
        )
        .route("/api/trainings/mine", get(list_my_trainings_handler))
        .route(
            "/api/trainings/{id}",
            get(get_training_handler)
                .patch(update_training_handler)
                .delete(delete_training_handler),
        )
        .route(
            "/api/trainings/{id}/assignments",
            get(list_training_assignments_handler).post(assign_training_handler),
        )
        .route(
            "/api/trainings/assignments/{id}/progress",
            post(report_progress_handler),
        )
        .with_state(app_state)
}
