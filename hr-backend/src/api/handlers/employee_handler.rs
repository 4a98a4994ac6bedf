// src/api/handlers/employee_handler.rs
use crate::api::dto::employee_dto::*;
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
    routing::{get, put},
    Router,
};
use tracing::info;
use validator::Validate;

/// 社員一覧（ページネーション・フィルタ付き）
pub async fn list_employees_handler(
    State(app_state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<EmployeeResponse>>>> {
    let (employees, total_count) = app_state.employee_service.list_employees(&query).await?;

    let items: Vec<EmployeeResponse> = employees.into_iter().map(EmployeeResponse::from).collect();
    let pagination = PaginationMeta::new(&query.pagination, total_count);

    Ok(Json(ApiResponse::success(
        "Employees retrieved",
        PaginatedResponse::new(items, pagination),
    )))
}

pub async fn get_employee_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    let employee = app_state.employee_service.get_employee(id).await?;
    Ok(Json(ApiResponse::success(
        "Employee retrieved",
        EmployeeResponse::from(employee),
    )))
}

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let employee = app_state.employee_service.create_employee(payload).await?;

    info!(
        created_by = user.employee_id(),
        employee_id = employee.id,
        position_id = employee.position_id,
        "Employee created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Employee created",
            EmployeeResponse::from(employee),
        )),
    ))
}

pub async fn update_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    payload.validate()?;

    let employee = app_state
        .employee_service
        .update_employee(id, payload)
        .await?;

    info!(updated_by = user.employee_id(), employee_id = id, "Employee updated");

    Ok(Json(ApiResponse::success(
        "Employee updated",
        EmployeeResponse::from(employee),
    )))
}

/// 社員の削除。部下の上司参照は NULL になり、アカウント等は連鎖削除される
pub async fn delete_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.employee_service.delete_employee(id).await?;
    info!(deleted_by = user.employee_id(), employee_id = id, "Employee deleted");
    Ok(Json(ApiResponse::success_message("Employee deleted")))
}

/// 上司の設定・解除
pub async fn set_manager_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<SetManagerRequest>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    let employee = app_state
        .employee_service
        .set_manager(id, payload.manager_id)
        .await?;

    info!(
        changed_by = user.employee_id(),
        employee_id = id,
        manager_id = ?payload.manager_id,
        "Manager updated"
    );

    Ok(Json(ApiResponse::success(
        "Manager updated",
        EmployeeResponse::from(employee),
    )))
}

pub async fn list_direct_reports_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<Vec<EmployeeResponse>>>> {
    let reports = app_state.employee_service.list_direct_reports(id).await?;
    Ok(Json(ApiResponse::success(
        "Direct reports retrieved",
        reports.into_iter().map(EmployeeResponse::from).collect(),
    )))
}

pub fn employee_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee_handler)
                .patch(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/api/employees/{id}/manager", put(set_manager_handler))
        .route(
            "/api/employees/{id}/reports",
            get(list_direct_reports_handler),
        )
        .with_state(app_state)
}
