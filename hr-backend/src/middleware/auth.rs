// src/middleware/auth.rs

use crate::config::AppConfig;
use crate::domain::account_model::AccountClaims;
use crate::error::AppError;
use crate::utils::jwt::JwtManager;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, warn};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// JWT認証ミドルウェアの設定
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub jwt_manager: Arc<JwtManager>,
    pub access_token_cookie_name: String,
    pub skip_auth_paths: Vec<String>,
}

impl AuthMiddlewareConfig {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self {
            jwt_manager,
            access_token_cookie_name: ACCESS_TOKEN_COOKIE.to_string(),
            skip_auth_paths: vec!["/api/auth/login".to_string(), "/health".to_string()],
        }
    }
}

/// 認証済み社員。ハンドラの引数で受け取る
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: AccountClaims,
    pub access_token: String,
}

impl AuthenticatedUser {
    pub fn new(claims: AccountClaims, access_token: String) -> Self {
        Self {
            claims,
            access_token,
        }
    }

    pub fn employee_id(&self) -> i32 {
        self.claims.employee_id
    }

    pub fn account_id(&self) -> i32 {
        self.claims.account_id
    }
}

/// Bearer トークン（なければ Cookie）を検証し、AuthenticatedUser を extensions に入れる
pub async fn jwt_auth_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    cookie_jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    if request.method() == Method::OPTIONS || should_skip_auth(&path, &config.skip_auth_paths) {
        return Ok(next.run(request).await);
    }

    let token = extract_token(&headers, &cookie_jar, &config.access_token_cookie_name)
        .ok_or_else(|| {
            warn!(path = %path, "Missing authentication token");
            AppError::Unauthorized("Authentication required".to_string())
        })?;

    let access_claims = config
        .jwt_manager
        .verify_access_token(&token)
        .map_err(|e| {
            warn!(path = %path, error = %e, "Invalid access token");
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

    debug!(
        employee_id = access_claims.user.employee_id,
        path = %path,
        "Authenticated request"
    );

    request
        .extensions_mut()
        .insert(AuthenticatedUser::new(access_claims.user, token));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

/// 許可リストのオリジンのみ通す CORS 設定（FRONTEND_URL を含む）
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// セキュリティヘッダーミドルウェア
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

// --- ヘルパー関数 ---

fn extract_token(headers: &HeaderMap, cookie_jar: &CookieJar, cookie_name: &str) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer ").map(|s| s.to_string()));

    // Cookie はフォールバック
    let cookie_token = cookie_jar
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string());

    auth_header.or(cookie_token)
}

fn should_skip_auth(path: &str, skip_paths: &[String]) -> bool {
    skip_paths.iter().any(|skip_path| path == skip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn test_should_skip_auth() {
        let skip_paths = vec!["/api/auth/login".to_string(), "/health".to_string()];

        assert!(should_skip_auth("/api/auth/login", &skip_paths));
        assert!(should_skip_auth("/health", &skip_paths));
        assert!(!should_skip_auth("/api/auth/accounts", &skip_paths));
        assert!(!should_skip_auth("/api/employees", &skip_paths));
    }

    #[test]
    fn test_bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer header-token"),
        );
        let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, "cookie-token"));

        assert_eq!(
            extract_token(&headers, &jar, ACCESS_TOKEN_COOKIE).as_deref(),
            Some("header-token")
        );
        assert_eq!(
            extract_token(&HeaderMap::new(), &jar, ACCESS_TOKEN_COOKIE).as_deref(),
            Some("cookie-token")
        );
        assert!(extract_token(&HeaderMap::new(), &CookieJar::new(), ACCESS_TOKEN_COOKIE).is_none());
    }
}
