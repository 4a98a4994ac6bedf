// src/api/handlers/leave_handler.rs
use crate::api::dto::leave_dto::*;
use crate::api::dto::ApiResponse;
use crate::api::handlers::IdPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

/// ログイン中の社員として休暇申請を出す
pub async fn submit_leave_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateLeaveRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let request = app_state
        .leave_service
        .submit(user.employee_id(), payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Leave request submitted",
            LeaveRequestResponse::from(request),
        )),
    ))
}

pub async fn list_my_leaves_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<LeaveRequestResponse>>>> {
    let requests = app_state
        .leave_service
        .list_for_employee(user.employee_id())
        .await?;
    Ok(Json(ApiResponse::success(
        "Leave requests retrieved",
        requests.into_iter().map(LeaveRequestResponse::from).collect(),
    )))
}

pub async fn list_employee_leaves_handler(
    State(app_state): State<AppState>,
    IdPath(employee_id): IdPath,
) -> AppResult<Json<ApiResponse<Vec<LeaveRequestResponse>>>> {
    let requests = app_state
        .leave_service
        .list_for_employee(employee_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Leave requests retrieved",
        requests.into_iter().map(LeaveRequestResponse::from).collect(),
    )))
}

/// 承認待ちキュー
pub async fn list_pending_leaves_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<LeaveRequestResponse>>>> {
    let requests = app_state.leave_service.list_pending().await?;
    Ok(Json(ApiResponse::success(
        "Pending leave requests retrieved",
        requests.into_iter().map(LeaveRequestResponse::from).collect(),
    )))
}

pub async fn get_leave_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<LeaveRequestResponse>>> {
    let request = app_state.leave_service.get_request(id).await?;
    Ok(Json(ApiResponse::success(
        "Leave request retrieved",
        LeaveRequestResponse::from(request),
    )))
}

pub async fn approve_leave_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<LeaveDecisionRequest>,
) -> AppResult<Json<ApiResponse<LeaveRequestResponse>>> {
    payload.validate()?;
    let request = app_state
        .leave_service
        .approve(id, user.employee_id(), payload)
        .await?;
    info!(leave_request_id = id, approver_id = user.employee_id(), "Leave approved");
    Ok(Json(ApiResponse::success(
        "Leave request approved",
        LeaveRequestResponse::from(request),
    )))
}

pub async fn reject_leave_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<LeaveDecisionRequest>,
) -> AppResult<Json<ApiResponse<LeaveRequestResponse>>> {
    payload.validate()?;
    let request = app_state
        .leave_service
        .reject(id, user.employee_id(), payload)
        .await?;
    info!(leave_request_id = id, approver_id = user.employee_id(), "Leave rejected");
    Ok(Json(ApiResponse::success(
        "Leave request rejected",
        LeaveRequestResponse::from(request),
    )))
}

pub async fn delete_leave_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.leave_service.delete(id).await?;
    Ok(Json(ApiResponse::success_message("Leave request deleted")))
}

pub fn leave_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/leaves", post(submit_leave_handler))
        .route("/api/leaves/mine", get(list_my_leaves_handler))
        .route("/api/leaves/pending", get(list_pending_leaves_handler))
        .route(
            "/api/leaves/{id}",
            get(get_leave_handler).delete(delete_leave_handler),
        )
        .route("/api/leaves/{id}/approve", post(approve_leave_handler))
        .route("/api/leaves/{id}/reject", post(reject_leave_handler))
        .route(
            "/api/employees/{id}/leaves",
            get(list_employee_leaves_handler),
        )
        .with_state(app_state)
}

