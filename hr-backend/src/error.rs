// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

/// ストア側で拒否された制約の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Unique => write!(f, "unique"),
            ConstraintKind::ForeignKey => write!(f, "foreign_key"),
            ConstraintKind::Check => write!(f, "check"),
        }
    }
}

impl ConstraintKind {
    /// DbErr を制約違反として分類する。制約違反でなければ None
    pub fn classify(err: &DbErr) -> Option<Self> {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintKind::Unique),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return Some(ConstraintKind::ForeignKey)
            }
            _ => {}
        }

        // CHECK 制約は sql_err で判別できないためメッセージで判定する
        // Postgres: "violates check constraint", SQLite: "CHECK constraint failed"
        let message = err.to_string();
        if message.contains("violates check constraint") || message.contains("CHECK constraint failed")
        {
            return Some(ConstraintKind::Check);
        }

        // ON DELETE RESTRICT は sql_err に載らない
        // SQLite: code 1811 "FOREIGN KEY constraint failed"
        // Postgres: 23001 "violates RESTRICT setting of foreign key constraint"
        if message.contains("FOREIGN KEY constraint failed")
            || message.contains("foreign key constraint")
        {
            return Some(ConstraintKind::ForeignKey);
        }

        None
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(DbErr),

    #[error("Constraint violation ({kind}): {detail}")]
    ConstraintViolation { kind: ConstraintKind, detail: String },

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match ConstraintKind::classify(&err) {
            Some(kind) => AppError::ConstraintViolation {
                kind,
                detail: err.to_string(),
            },
            None => AppError::DbErr(err),
        }
    }
}

impl AppError {
    /// 制約違反かどうか
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, AppError::ConstraintViolation { .. })
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                // サーバーログには詳細を出す
                tracing::error!(error = ?db_err, "Database error");

                let (status, message) = match &db_err {
                    DbErr::RecordNotFound(_) => (
                        StatusCode::NOT_FOUND,
                        "The requested resource was not found",
                    ),
                    DbErr::Exec(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "A database operation failed",
                    ),
                    DbErr::Query(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "A database query failed",
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "A database error occurred",
                    ),
                };
                (status, ErrorResponse::new(message, "database_error"))
            }
            AppError::ConstraintViolation { kind, detail } => {
                tracing::warn!(kind = %kind, detail = %detail, "Constraint violation");
                let message = match kind {
                    ConstraintKind::Unique => "A record with the same unique value already exists",
                    ConstraintKind::ForeignKey => {
                        "The record references or is referenced by another record"
                    }
                    ConstraintKind::Check => "A value is outside of its allowed range",
                };
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new(message, "constraint_violation"),
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(message, "not_found"),
            ),
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message.clone(), "validation_error").with_errors(vec![message]),
            ),
            AppError::ValidationErrors(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed", "validation_errors").with_errors(errors),
            ),
            AppError::ValidationFailure(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed", "validation_errors")
                    .with_errors(validation_messages(&errors)),
            ),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "bad_request"),
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(message, "unauthorized"),
            ),
            AppError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(message, "forbidden"),
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(message, "conflict"),
            ),
            AppError::InternalServerError(message) => {
                tracing::error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An internal server error occurred", "internal_server_error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// validator のエラーを "field: message" 形式に展開する
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();
    messages
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
    pub error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: &str) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Vec::new(),
            error_type: error_type.to_string(),
        }
    }

    fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}
