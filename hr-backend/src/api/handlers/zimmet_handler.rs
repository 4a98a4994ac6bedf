// src/api/handlers/zimmet_handler.rs
use crate::api::dto::zimmet_dto::*;
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
use tracing::{info, warn};
use validator::Validate;

// --- 在庫 ---

pub async fn list_stocks_handler(
    State(app_state): State<AppState>,
    Query(query): Query<StockListQuery>,
) -> AppResult<Json<ApiResponse<Vec<StockResponse>>>> {
    let stocks = app_state.zimmet_service.list_stocks(query.status).await?;
    Ok(Json(ApiResponse::success(
        "Stocks retrieved",
        stocks.into_iter().map(StockResponse::from).collect(),
    )))
}

pub async fn get_stock_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<StockResponse>>> {
    let stock = app_state.zimmet_service.get_stock(id).await?;
    Ok(Json(ApiResponse::success(
        "Stock retrieved",
        StockResponse::from(stock),
    )))
}

/// 在庫登録。承認待ちで作成される
pub async fn create_stock_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateStockRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let stock = app_state
        .zimmet_service
        .create_stock(user.employee_id(), payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Stock created",
            StockResponse::from(stock),
        )),
    ))
}

pub async fn approve_stock_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<StockResponse>>> {
    let stock = app_state
        .zimmet_service
        .approve_stock(id, user.employee_id())
        .await?;
    Ok(Json(ApiResponse::success(
        "Stock approved",
        StockResponse::from(stock),
    )))
}

pub async fn reject_stock_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<StockResponse>>> {
    let stock = app_state
        .zimmet_service
        .reject_stock(id, user.employee_id())
        .await?;
    Ok(Json(ApiResponse::success(
        "Stock rejected",
        StockResponse::from(stock),
    )))
}

/// 一括承認。失敗があっても 200 を返し、結果の内訳で知らせる
pub async fn batch_approve_stocks_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<BatchApproveRequest>,
) -> AppResult<Json<ApiResponse<BatchApprovalResponse>>> {
    payload.validate()?;

    let requested = payload.ids.len();
    let result = app_state
        .zimmet_service
        .batch_approve(payload.ids, user.employee_id())
        .await?;

    let message = if result.failed.is_empty() {
        "All stocks approved"
    } else {
        warn!(
            approver_id = user.employee_id(),
            requested,
            approved = result.approved.len(),
            skipped = result.skipped.len(),
            "Batch approval stopped at first failure"
        );
        "Batch approval stopped at first failure"
    };

    Ok(Json(ApiResponse::success(message, result)))
}

pub async fn delete_stock_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.zimmet_service.delete_stock(id).await?;
    Ok(Json(ApiResponse::success_message("Stock deleted")))
}

pub async fn list_stock_assignments_handler(
    State(app_state): State<AppState>,
    IdPath(stock_id): IdPath,
) -> AppResult<Json<ApiResponse<Vec<AssignmentResponse>>>> {
    let assignments = app_state.zimmet_service.list_by_stock(stock_id).await?;
    Ok(Json(ApiResponse::success(
        "Assignments retrieved",
        assignments.into_iter().map(AssignmentResponse::from).collect(),
    )))
}

// --- 割り当て ---

pub async fn assign_zimmet_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<AssignZimmetRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let assignment = app_state
        .zimmet_service
        .assign(user.employee_id(), payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Zimmet assigned",
            AssignmentResponse::from(assignment),
        )),
    ))
}

pub async fn get_assignment_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<AssignmentResponse>>> {
    let assignment = app_state.zimmet_service.get_assignment(id).await?;
    Ok(Json(ApiResponse::success(
        "Assignment retrieved",
        AssignmentResponse::from(assignment),
    )))
}

pub async fn return_zimmet_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<ReturnZimmetRequest>,
) -> AppResult<Json<ApiResponse<AssignmentResponse>>> {
    let assignment = app_state
        .zimmet_service
        .return_assignment(id, payload)
        .await?;
    info!(
        assignment_id = id,
        received_by = user.employee_id(),
        "Zimmet return recorded"
    );
    Ok(Json(ApiResponse::success(
        "Zimmet returned",
        AssignmentResponse::from(assignment),
    )))
}

pub async fn list_employee_zimmet_handler(
    State(app_state): State<AppState>,
    IdPath(employee_id): IdPath,
    Query(query): Query<AssignmentListQuery>,
) -> AppResult<Json<ApiResponse<Vec<AssignmentResponse>>>> {
    let assignments = app_state
        .zimmet_service
        .list_by_employee(employee_id, query.status)
        .await?;
    Ok(Json(ApiResponse::success(
        "Assignments retrieved",
        assignments.into_iter().map(AssignmentResponse::from).collect(),
    )))
}

pub fn zimmet_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/zimmet/stocks",
            get(list_stocks_handler).post(create_stock_handler),
        )
        .route(
            "/api/zimmet/stocks/approve-batch",
            post(batch_approve_stocks_handler),
        )
        .route(
            "/api/zimmet/stocks/{id}",
            get(get_stock_handler).delete(delete_stock_handler),
        )
        .route(
            "/api/zimmet/stocks/{id}/approve",
            post(approve_stock_handler),
        )
        .route("/api/zimmet/stocks/{id}/reject", post(reject_stock_handler))
        .route(
            "/api/zimmet/stocks/{id}/assignments",
            get(list_stock_assignments_handler),
        )
        .route("/api/zimmet/assignments", post(assign_zimmet_handler))
        .route("/api/zimmet/assignments/{id}", get(get_assignment_handler))
        .route(
            "/api/zimmet/assignments/{id}/return",
            post(return_zimmet_handler),
        )
        .route(
            "/api/employees/{id}/zimmet",
            get(list_employee_zimmet_handler),
        )
        .with_state(app_state)
}
