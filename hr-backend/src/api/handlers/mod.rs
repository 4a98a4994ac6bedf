// src/api/handlers/mod.rs
pub mod auth_handler;
pub mod clock_handler;
pub mod employee_handler;
pub mod leave_handler;
pub mod organization_handler;
pub mod permission_handler;
pub mod recruitment_handler;
pub mod system_handler;
pub mod training_handler;
pub mod zimmet_handler;

use crate::error::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// 数値 ID パス抽出器。不正な値は AppError::BadRequest で返す
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid path parameter".to_string()))?;

        let id = raw
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid id: '{}'", raw)))?;

        Ok(IdPath(id))
    }
}
