// tests/common/app_helper.rs

use axum::Router;
use hr_backend::api::{build_router, AppState};
use hr_backend::config::AppConfig;
use hr_backend::utils::jwt::JwtManager;
use hr_backend::utils::password::{Argon2Config, PasswordManager, PasswordPolicy};
use std::sync::Arc;

use crate::common;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: common::db::TestDatabase,
}

/// 全ルーターを組み込んだアプリのセットアップ
pub async fn setup_app() -> TestApp {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    build_app(db, AppConfig::for_testing())
}

pub fn build_app(db: common::db::TestDatabase, app_config: AppConfig) -> TestApp {
    let password_manager = Arc::new(
        PasswordManager::new(Argon2Config::for_testing(), PasswordPolicy::default()).unwrap(),
    );
    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone()).unwrap());

    let state = AppState::with_config(
        db.connection.clone(),
        password_manager,
        jwt_manager,
        &app_config,
    );
    let router = build_router(state.clone());

    TestApp { router, state, db }
}
