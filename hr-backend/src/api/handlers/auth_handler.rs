// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::*;
use crate::api::dto::ApiResponse;
use crate::api::handlers::IdPath;
use crate::api::AppState;
use crate::domain::account_model::AccountClaims;
use crate::error::AppResult;
use crate::middleware::auth::{AuthenticatedUser, ACCESS_TOKEN_COOKIE};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;
use validator::Validate;

/// ログイン。トークンはレスポンス本文と Cookie の両方で返す
pub async fn login_handler(
    State(app_state): State<AppState>,
    cookie_jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(username = %payload.username, "Login attempt");

    let login = app_state.auth_service.login(payload).await?;

    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, login.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(app_state.config.is_production());

    info!(employee_id = login.account.employee_id, "Login succeeded");

    Ok((
        cookie_jar.add(cookie),
        Json(ApiResponse::success("Login successful", login)),
    ))
}

/// ログアウト。トークンはステートレスなので Cookie を消すだけ
pub async fn logout_handler(
    user: AuthenticatedUser,
    cookie_jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    info!(employee_id = user.employee_id(), "Logout");
    let removal = Cookie::build((ACCESS_TOKEN_COOKIE, "")).path("/");
    Ok((
        cookie_jar.remove(removal),
        Json(ApiResponse::success_message("Logged out")),
    ))
}

/// トークンに含まれるサインイン情報
pub async fn me_handler(user: AuthenticatedUser) -> AppResult<Json<ApiResponse<AccountClaims>>> {
    Ok(Json(ApiResponse::success("Current account", user.claims)))
}

/// 社員にログインアカウントを発行する
pub async fn create_account_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(employee_id): IdPath,
    Json(payload): Json<CreateAccountRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let account = app_state
        .auth_service
        .create_account(employee_id, payload)
        .await?;

    info!(
        created_by = user.employee_id(),
        employee_id,
        account_id = account.id,
        "Account created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Account created",
            AccountResponse::from(account),
        )),
    ))
}

pub async fn get_account_handler(
    State(app_state): State<AppState>,
    IdPath(account_id): IdPath,
) -> AppResult<Json<ApiResponse<AccountResponse>>> {
    let account = app_state.auth_service.get_account(account_id).await?;
    Ok(Json(ApiResponse::success(
        "Account retrieved",
        AccountResponse::from(account),
    )))
}

pub async fn set_account_active_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(account_id): IdPath,
    Json(payload): Json<SetAccountActiveRequest>,
) -> AppResult<Json<ApiResponse<AccountResponse>>> {
    let account = app_state
        .auth_service
        .set_account_active(account_id, payload.is_active)
        .await?;

    info!(
        changed_by = user.employee_id(),
        account_id,
        is_active = account.is_active,
        "Account activation updated"
    );

    Ok(Json(ApiResponse::success(
        "Account updated",
        AccountResponse::from(account),
    )))
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/me", get(me_handler))
        .route("/api/auth/accounts/{id}", get(get_account_handler))
        .route(
            "/api/auth/accounts/{id}/active",
            patch(set_account_active_handler),
        )
        .route("/api/employees/{id}/account", post(create_account_handler))
        .with_state(app_state)
}
