// src/main.rs
use hr_backend::api::{build_router, AppState};
use hr_backend::config::AppConfig;
use hr_backend::db::{create_db_pool, run_migrations};
use hr_backend::logging::init_tracing;
use hr_backend::utils::jwt::JwtManager;
use hr_backend::utils::password::{Argon2Config, PasswordManager, PasswordPolicy};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env は任意
    dotenvy::dotenv().ok();

    init_tracing();
    tracing::info!("Starting HR backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        on_migration_error = ?app_config.on_migration_error,
        on_permission_fetch_error = ?app_config.on_permission_fetch_error,
        "Configuration loaded"
    );

    // データベース接続とマイグレーション
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");
    run_migrations(&db_pool, app_config.on_migration_error).await?;

    // 共有マネージャー
    let password_manager = Arc::new(PasswordManager::new(
        Argon2Config::from_env(),
        PasswordPolicy::default(),
    )?);
    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);

    let app_state = AppState::with_config(db_pool, password_manager, jwt_manager, &app_config);
    let app_router = build_router(app_state);

    let addr = app_config.server_addr();
    tracing::info!("Router configured. Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
