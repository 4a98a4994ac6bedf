// src/api/mod.rs
use crate::config::AppConfig;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{
    cors_layer, jwt_auth_middleware, security_headers_middleware, AuthMiddlewareConfig,
};
use crate::service::{
    auth_service::AuthService, clock_service::ClockService, employee_service::EmployeeService,
    leave_service::LeaveService, organization_service::OrganizationService,
    permission_service::PermissionService, recruitment_service::RecruitmentService,
    training_service::TrainingService, zimmet_service::ZimmetService,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub organization_service: Arc<OrganizationService>,
    pub employee_service: Arc<EmployeeService>,
    pub leave_service: Arc<LeaveService>,
    pub zimmet_service: Arc<ZimmetService>,
    pub clock_service: Arc<ClockService>,
    pub training_service: Arc<TrainingService>,
    pub recruitment_service: Arc<RecruitmentService>,
    pub permission_service: Arc<PermissionService>,
    pub jwt_manager: Arc<JwtManager>,
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// 接続と共有マネージャーから全サービスを組み立てる
    pub fn with_config(
        db: DatabaseConnection,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
        app_config: &AppConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                db.clone(),
                password_manager,
                jwt_manager.clone(),
            )),
            organization_service: Arc::new(OrganizationService::new(db.clone())),
            employee_service: Arc::new(EmployeeService::new(db.clone())),
            leave_service: Arc::new(LeaveService::new(db.clone())),
            zimmet_service: Arc::new(ZimmetService::new(db.clone())),
            clock_service: Arc::new(ClockService::new(db.clone())),
            training_service: Arc::new(TrainingService::new(db.clone())),
            recruitment_service: Arc::new(RecruitmentService::new(db.clone())),
            permission_service: Arc::new(PermissionService::new(db.clone())),
            jwt_manager,
            db: Arc::new(db),
            config: Arc::new(app_config.clone()),
        }
    }
}

/// 全ルーターを統合し、共通ミドルウェアを重ねる
///
/// 外側から: セキュリティヘッダー → リクエストコンテキスト → ログ → CORS → トレース → ボディ制限 → 認証
pub fn build_router(app_state: AppState) -> Router {
    let auth_config = AuthMiddlewareConfig::new(app_state.jwt_manager.clone());
    let body_limit = app_state.config.server.body_limit;
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(handlers::system_handler::system_router())
        .merge(handlers::auth_handler::auth_router(app_state.clone()))
        .merge(handlers::organization_handler::organization_router(
            app_state.clone(),
        ))
        .merge(handlers::employee_handler::employee_router(app_state.clone()))
        .merge(handlers::leave_handler::leave_router(app_state.clone()))
        .merge(handlers::zimmet_handler::zimmet_router(app_state.clone()))
        .merge(handlers::clock_handler::clock_router(app_state.clone()))
        .merge(handlers::training_handler::training_router(app_state.clone()))
        .merge(handlers::recruitment_handler::recruitment_router(
            app_state.clone(),
        ))
        .merge(handlers::permission_handler::permission_router(app_state))
        .layer(axum_middleware::from_fn_with_state(
            auth_config,
            jwt_auth_middleware,
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(axum_middleware::from_fn(security_headers_middleware))
}
