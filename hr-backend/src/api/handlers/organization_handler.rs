// src/api/handlers/organization_handler.rs
use crate::api::dto::organization_dto::*;
use crate::api::dto::ApiResponse;
use crate::api::handlers::IdPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;
use validator::Validate;

// --- レベル（kademe） ---

pub async fn list_levels_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<LevelResponse>>>> {
    let levels = app_state.organization_service.list_levels().await?;
    Ok(Json(ApiResponse::success(
        "Levels retrieved",
        levels.into_iter().map(LevelResponse::from).collect(),
    )))
}

pub async fn get_level_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<LevelResponse>>> {
    let level = app_state.organization_service.get_level(id).await?;
    Ok(Json(ApiResponse::success(
        "Level retrieved",
        LevelResponse::from(level),
    )))
}

pub async fn create_level_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateLevelRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let level = app_state.organization_service.create_level(payload).await?;
    info!(created_by = user.employee_id(), level_id = level.id, "Level created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Level created",
            LevelResponse::from(level),
        )),
    ))
}

pub async fn update_level_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateLevelRequest>,
) -> AppResult<Json<ApiResponse<LevelResponse>>> {
    payload.validate()?;
    let level = app_state
        .organization_service
        .update_level(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Level updated",
        LevelResponse::from(level),
    )))
}

pub async fn delete_level_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.organization_service.delete_level(id).await?;
    info!(deleted_by = user.employee_id(), level_id = id, "Level deleted");
    Ok(Json(ApiResponse::success_message("Level deleted")))
}

// --- 部署 ---

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<DepartmentResponse>>>> {
    let departments = app_state.organization_service.list_departments().await?;
    Ok(Json(ApiResponse::success(
        "Departments retrieved",
        departments.into_iter().map(DepartmentResponse::from).collect(),
    )))
}

pub async fn get_department_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<DepartmentResponse>>> {
    let department = app_state.organization_service.get_department(id).await?;
    Ok(Json(ApiResponse::success(
        "Department retrieved",
        DepartmentResponse::from(department),
    )))
}

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let department = app_state
        .organization_service
        .create_department(payload)
        .await?;
    info!(
        created_by = user.employee_id(),
        department_id = department.id,
        code = %department.code,
        "Department created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Department created",
            DepartmentResponse::from(department),
        )),
    ))
}

pub async fn update_department_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> AppResult<Json<ApiResponse<DepartmentResponse>>> {
    payload.validate()?;
    let department = app_state
        .organization_service
        .update_department(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Department updated",
        DepartmentResponse::from(department),
    )))
}

pub async fn delete_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.organization_service.delete_department(id).await?;
    info!(deleted_by = user.employee_id(), department_id = id, "Department deleted");
    Ok(Json(ApiResponse::success_message("Department deleted")))
}

// --- ポジション ---

pub async fn list_positions_handler(
    State(app_state): State<AppState>,
    Query(query): Query<PositionQuery>,
) -> AppResult<Json<ApiResponse<Vec<PositionResponse>>>> {
    let positions = app_state
        .organization_service
        .list_positions(query.department_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Positions retrieved",
        positions.into_iter().map(PositionResponse::from).collect(),
    )))
}

pub async fn get_position_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<PositionResponse>>> {
    let position = app_state.organization_service.get_position(id).await?;
    Ok(Json(ApiResponse::success(
        "Position retrieved",
        PositionResponse::from(position),
    )))
}

pub async fn create_position_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreatePositionRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let position = app_state
        .organization_service
        .create_position(payload)
        .await?;
    info!(
        created_by = user.employee_id(),
        position_id = position.id,
        "Position created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Position created",
            PositionResponse::from(position),
        )),
    ))
}

pub async fn update_position_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdatePositionRequest>,
) -> AppResult<Json<ApiResponse<PositionResponse>>> {
    payload.validate()?;
    let position = app_state
        .organization_service
        .update_position(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Position updated",
        PositionResponse::from(position),
    )))
}

pub async fn delete_position_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.organization_service.delete_position(id).await?;
    Ok(Json(ApiResponse::success_message("Position deleted")))
}

// --- 都市 ---

pub async fn list_cities_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CityResponse>>>> {
    let cities = app_state.organization_service.list_cities().await?;
    Ok(Json(ApiResponse::success(
        "Cities retrieved",
        cities.into_iter().map(CityResponse::from).collect(),
    )))
}

pub async fn get_city_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<CityResponse>>> {
    let city = app_state.organization_service.get_city(id).await?;
    Ok(Json(ApiResponse::success("City retrieved", CityResponse::from(city))))
}

pub async fn create_city_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCityRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let city = app_state.organization_service.create_city(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("City created", CityResponse::from(city))),
    ))
}

pub async fn update_city_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateCityRequest>,
) -> AppResult<Json<ApiResponse<CityResponse>>> {
    payload.validate()?;
    let city = app_state
        .organization_service
        .update_city(id, payload)
        .await?;
    Ok(Json(ApiResponse::success("City updated", CityResponse::from(city))))
}

pub async fn delete_city_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.organization_service.delete_city(id).await?;
    Ok(Json(ApiResponse::success_message("City deleted")))
}

pub fn organization_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/levels",
            get(list_levels_handler).post(create_level_handler),
        )
        .route(
            "/api/levels/{id}",
            get(get_level_handler)
                .patch(update_level_handler)
                .delete(delete_level_handler),
        )
        .route(
            "/api/departments",
            get(list_departments_handler).post(create_department_handler),
        )
        .route(
            "/api/departments/{id}",
            get(get_department_handler)
                .patch(update_department_handler)
                .delete(delete_department_handler),
        )
        .route(
            "/api/positions",
            get(list_positions_handler).post(create_position_handler),
        )
        .route(
            "/api/positions/{id}",
            get(get_position_handler)
                .patch(update_position_handler)
                .delete(delete_position_handler),
        )
        .route(
            "/api/cities",
            get(list_cities_handler).post(create_city_handler),
        )
        .route(
            "/api/cities/{id}",
            get(get_city_handler)
                .patch(update_city_handler)
                .delete(delete_city_handler),
        )
        .with_state(app_state)
}
