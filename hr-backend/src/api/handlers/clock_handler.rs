// src/api/handlers/clock_handler.rs
use crate::api::dto::clock_dto::*;
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

/// 打刻の記録（管理者が任意の社員分を登録する）
pub async fn record_clock_event_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateClockEventRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let event = app_state.clock_service.record(payload).await?;
    info!(
        recorded_by = user.employee_id(),
        clock_event_id = event.id,
        employee_id = event.employee_id,
        "Clock event recorded"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Clock event recorded",
            ClockEventResponse::from(event),
        )),
    ))
}

pub async fn get_clock_event_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<ClockEventResponse>>> {
    let event = app_state.clock_service.get_event(id).await?;
    Ok(Json(ApiResponse::success(
        "Clock event retrieved",
        ClockEventResponse::from(event),
    )))
}

pub async fn clock_out_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<ClockOutRequest>,
) -> AppResult<Json<ApiResponse<ClockEventResponse>>> {
    let event = app_state.clock_service.clock_out(id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Clock-out recorded",
        ClockEventResponse::from(event),
    )))
}

pub async fn delete_clock_event_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.clock_service.delete(id).await?;
    Ok(Json(ApiResponse::success_message("Clock event deleted")))
}

/// 社員の打刻一覧。from/to は日付（両端を含む）
pub async fn list_employee_clock_events_handler(
    State(app_state): State<AppState>,
    IdPath(employee_id): IdPath,
    Query(query): Query<ClockEventQuery>,
) -> AppResult<Json<ApiResponse<Vec<ClockEventResponse>>>> {
    let events = app_state
        .clock_service
        .list_for_employee(employee_id, &query)
        .await?;
    Ok(Json(ApiResponse::success(
        "Clock events retrieved",
        events.into_iter().map(ClockEventResponse::from).collect(),
    )))
}

pub fn clock_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/clock-events", post(record_clock_event_handler))
        .route(
            "/api/clock-events/{id}",
            get(get_clock_event_handler).delete(delete_clock_event_handler),
        )
        .route("/api/clock-events/{id}/clock-out", post(clock_out_handler))
        .route(
            "/api/employees/{id}/clock-events",
            get(list_employee_clock_events_handler),
        )
        .with_state(app_state)
}
