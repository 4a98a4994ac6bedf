// src/api/handlers/system_handler.rs
use crate::api::dto::ApiResponse;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// ヘルスチェック（認証不要）
pub async fn health_handler() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(
        "OK",
        HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}

pub fn system_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
