// src/api/handlers/permission_handler.rs
use crate::api::dto::permission_dto::*;
use crate::api::dto::ApiResponse;
use crate::api::handlers::IdPath;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::navigation::{
    default_menu, filter_actions, filter_menu, row_actions_for, PermissionLoader,
    RepositoryGrantSource, RowAction, ScreenGrant,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

// --- 画面マスタ ---

pub async fn list_screens_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ScreenPermissionResponse>>>> {
    let screens = app_state.permission_service.list_screens().await?;
    Ok(Json(ApiResponse::success(
        "Screens retrieved",
        screens
            .into_iter()
            .map(ScreenPermissionResponse::from)
            .collect(),
    )))
}

pub async fn get_screen_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<ScreenPermissionResponse>>> {
    let screen = app_state.permission_service.get_screen(id).await?;
    Ok(Json(ApiResponse::success(
        "Screen retrieved",
        ScreenPermissionResponse::from(screen),
    )))
}

pub async fn create_screen_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateScreenPermissionRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let screen = app_state.permission_service.create_screen(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Screen created",
            ScreenPermissionResponse::from(screen),
        )),
    ))
}

pub async fn update_screen_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateScreenPermissionRequest>,
) -> AppResult<Json<ApiResponse<ScreenPermissionResponse>>> {
    payload.validate()?;
    let screen = app_state
        .permission_service
        .update_screen(id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Screen updated",
        ScreenPermissionResponse::from(screen),
    )))
}

pub async fn delete_screen_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<()>>> {
    app_state.permission_service.delete_screen(id).await?;
    Ok(Json(ApiResponse::success_message("Screen deleted")))
}

// --- 職位ごとの付与 ---

pub async fn list_level_grants_handler(
    State(app_state): State<AppState>,
    IdPath(level_id): IdPath,
) -> AppResult<Json<ApiResponse<LevelGrantsResponse>>> {
    let grants = app_state
        .permission_service
        .list_level_grants(level_id)
        .await?;
    Ok(Json(ApiResponse::success(
        "Level grants retrieved",
        LevelGrantsResponse { level_id, grants },
    )))
}

/// 職位の付与を丸ごと置き換える
pub async fn set_level_grants_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(level_id): IdPath,
    Json(payload): Json<SetLevelGrantsRequest>,
) -> AppResult<Json<ApiResponse<LevelGrantsResponse>>> {
    payload.validate()?;
    let grants = app_state
        .permission_service
        .set_level_grants(level_id, payload)
        .await?;
    info!(
        changed_by = user.employee_id(),
        level_id,
        grant_count = grants.len(),
        "Level grants updated"
    );
    Ok(Json(ApiResponse::success(
        "Level grants updated",
        LevelGrantsResponse { level_id, grants },
    )))
}

// --- ログイン中の社員向け ---

/// 呼び出し元の画面権限（HttpGrantSource の取得先）
pub async fn my_permissions_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<ScreenGrant>>>> {
    let grants = app_state
        .permission_service
        .grants_for_employee(user.employee_id())
        .await?;
    Ok(Json(ApiResponse::success("Permissions retrieved", grants)))
}

/// 権限で絞り込んだナビゲーションメニュー
pub async fn navigation_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<NavigationResponse>>> {
    let loader = load_permissions(&app_state, &user).await?;
    let allow_all = loader.grants().is_some_and(|grants| grants.is_allow_all());
    let menu = filter_menu(&default_menu(), &loader);

    Ok(Json(ApiResponse::success(
        "Navigation retrieved",
        NavigationResponse { menu, allow_all },
    )))
}

/// 画面の行アクションのうち許可されたもの
pub async fn row_actions_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(screen_code): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<RowAction>>>> {
    let loader = load_permissions(&app_state, &user).await?;
    let actions = filter_actions(&row_actions_for(&screen_code), &loader);
    Ok(Json(ApiResponse::success("Row actions retrieved", actions)))
}

async fn load_permissions(
    app_state: &AppState,
    user: &AuthenticatedUser,
) -> AppResult<PermissionLoader> {
    let source = RepositoryGrantSource::new(
        Arc::clone(&app_state.permission_service),
        user.employee_id(),
    );
    let loader = PermissionLoader::new(
        Arc::new(source),
        app_state.config.on_permission_fetch_error,
    );

    if let Err(e) = loader.load().await {
        warn!(employee_id = user.employee_id(), error = %e, "Could not load screen permissions");
        return Err(AppError::InternalServerError(
            "Could not load screen permissions".to_string(),
        ));
    }
    Ok(loader)
}

pub fn permission_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/screens",
            get(list_screens_handler).post(create_screen_handler),
        )
        .route(
            "/api/screens/{id}",
            get(get_screen_handler)
                .patch(update_screen_handler)
                .delete(delete_screen_handler),
        )
        .route(
            "/api/levels/{id}/grants",
            get(list_level_grants_handler).put(set_level_grants_handler),
        )
        .route("/api/permissions/me", get(my_permissions_handler))
        .route("/api/navigation", get(navigation_handler))
        .route(
            "/api/navigation/actions/{screen_code}",
            get(row_actions_handler),
        )
        .with_state(app_state)
}
