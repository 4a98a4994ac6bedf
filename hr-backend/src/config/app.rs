use crate::utils::jwt::JwtConfig;
use std::env;
use std::str::FromStr;

/// 起動時マイグレーション失敗時の挙動
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MigrationErrorPolicy {
    /// ログを出して起動を続行する
    #[default]
    Continue,
    /// プロセスを終了する
    Abort,
}

impl FromStr for MigrationErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "abort" => Ok(Self::Abort),
            other => Err(format!("Invalid ON_MIGRATION_ERROR value: {}", other)),
        }
    }
}

/// 画面権限の取得失敗時の挙動
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PermissionFetchPolicy {
    /// 全画面を許可してキャッシュする
    #[default]
    Allow,
    /// エラーを返しキャッシュしない
    Deny,
}

impl FromStr for PermissionFetchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "deny" => Ok(Self::Deny),
            other => Err(format!("Invalid ON_PERMISSION_FETCH_ERROR value: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub database_url: String,
    pub frontend_url: Option<String>,
    pub jwt: JwtConfig,
    pub on_migration_error: MigrationErrorPolicy,
    pub on_permission_fetch_error: PermissionFetchPolicy,
    pub server: ServerConfig,
}

const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024; // 10MiB

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let on_migration_error = match env::var("ON_MIGRATION_ERROR") {
            Ok(value) => value.parse()?,
            Err(_) => MigrationErrorPolicy::default(),
        };
        let on_permission_fetch_error = match env::var("ON_PERMISSION_FETCH_ERROR") {
            Ok(value) => value.parse()?,
            Err(_) => PermissionFetchPolicy::default(),
        };

        let jwt = JwtConfig::from_env().map_err(|e| e.to_string())?;
        jwt.validate().map_err(|e| e.to_string())?;

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            ),
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            frontend_url: env::var("FRONTEND_URL").ok().filter(|s| !s.trim().is_empty()),
            jwt,
            on_migration_error,
            on_permission_fetch_error,
            server: ServerConfig {
                body_limit: DEFAULT_BODY_LIMIT,
            },
        })
    }

    /// CORS 許可オリジン一覧（FRONTEND_URL を含む）
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = self.cors_allowed_origins.clone();
        if let Some(frontend) = &self.frontend_url {
            if !origins.contains(frontend) {
                origins.push(frontend.clone());
            }
        }
        origins
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["http://localhost:3001".to_string()],
            database_url: "sqlite::memory:".to_string(),
            frontend_url: None,
            jwt: JwtConfig {
                secret_key: "test-secret-key-that-is-at-least-32-characters-long".to_string(),
                access_token_expiry_minutes: 15,
                issuer: "hr-backend".to_string(),
                audience: "hr-backend-users".to_string(),
            },
            on_migration_error: MigrationErrorPolicy::Abort,
            on_permission_fetch_error: PermissionFetchPolicy::Allow,
            server: ServerConfig {
                body_limit: DEFAULT_BODY_LIMIT,
            },
        }
    }
}

// Backward compatibility
pub type Config = AppConfig;
