// src/utils/jwt.rs

use crate::domain::account_model::AccountClaims;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use uuid::Uuid;

/// JWT関連のエラー
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Failed to encode JWT: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to decode JWT: {0}")]
    DecodingError(String),

    #[error("JWT token has expired")]
    TokenExpired,

    #[error("Invalid JWT token")]
    InvalidToken,

    #[error("Missing JWT secret key")]
    MissingSecretKey,

    #[error("Invalid JWT configuration: {0}")]
    ConfigurationError(String),
}

/// アクセストークンのClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessTokenClaims {
    /// Subject (employee ID)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
    /// Not before
    pub nbf: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// JWT ID
    pub jti: String,
    /// Token type
    pub typ: String,
    /// サインイン中の社員情報
    pub user: AccountClaims,
}

/// JWT設定
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT秘密鍵
    pub secret_key: String,
    /// アクセストークンの有効期限（分）
    pub access_token_expiry_minutes: i64,
    /// 発行者
    pub issuer: String,
    /// 対象者
    pub audience: String,
}

impl JwtConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Result<Self, JwtError> {
        let secret_key = env::var("JWT_SECRET_KEY")
            .or_else(|_| env::var("JWT_SECRET"))
            .map_err(|_| JwtError::MissingSecretKey)?;

        let access_token_expiry_minutes = env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map_err(|_| JwtError::ConfigurationError("Invalid access token expiry".to_string()))?;

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "hr-backend".to_string());

        let audience = env::var("JWT_AUDIENCE").unwrap_or_else(|_| "hr-backend-users".to_string());

        Ok(Self {
            secret_key,
            access_token_expiry_minutes,
            issuer,
            audience,
        })
    }

    /// 秘密鍵の検証
    pub fn validate(&self) -> Result<(), JwtError> {
        if self.secret_key.len() < 32 {
            return Err(JwtError::ConfigurationError(
                "JWT secret key must be at least 32 characters".to_string(),
            ));
        }

        if self.access_token_expiry_minutes <= 0 {
            return Err(JwtError::ConfigurationError(
                "Access token expiry must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// JWTトークン管理
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtManager {
    /// 新しいJwtManagerを作成
    pub fn new(config: JwtConfig) -> Result<Self, JwtError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// アクセストークンの有効期限（秒）
    pub fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }

    /// アクセストークンを生成
    pub fn generate_access_token(&self, user: AccountClaims) -> Result<String, JwtError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.config.access_token_expiry_minutes);

        let claims = AccessTokenClaims {
            sub: user.employee_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
            typ: "access".to_string(),
            user,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(JwtError::EncodingError)
    }

    /// アクセストークンを検証・デコード
    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, JwtError> {
        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            _ => JwtError::DecodingError(e.to_string()),
        })?;

        // トークンタイプの検証
        if token_data.claims.typ != "access" {
            return Err(JwtError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// アクセストークンの有効期限をISO 8601形式で取得
    pub fn get_access_token_expires_at(&self, claims: &AccessTokenClaims) -> String {
        DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or_else(Utc::now)
            .to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> JwtConfig {
        JwtConfig {
            secret_key: "test-secret-key-must-be-at-least-32-characters-long".to_string(),
            access_token_expiry_minutes: 15,
            issuer: "test-issuer".to_string(),
            audience: "test-audience".to_string(),
        }
    }

    fn create_test_claims() -> AccountClaims {
        AccountClaims {
            employee_id: 7,
            account_id: 3,
            username: "ayse.yilmaz".to_string(),
            level_id: Some(2),
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let manager = JwtManager::new(create_test_config()).unwrap();
        let token = manager.generate_access_token(create_test_claims()).unwrap();

        let claims = manager.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.typ, "access");
        assert_eq!(claims.user.username, "ayse.yilmaz");
        assert_eq!(claims.user.level_id, Some(2));
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_token_from_other_audience_is_rejected() {
        let manager = JwtManager::new(create_test_config()).unwrap();
        let mut other_config = create_test_config();
        other_config.audience = "someone-else".to_string();
        let other = JwtManager::new(other_config).unwrap();

        let token = other.generate_access_token(create_test_claims()).unwrap();
        assert!(matches!(
            manager.verify_access_token(&token),
            Err(JwtError::DecodingError(_))
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let manager = JwtManager::new(create_test_config()).unwrap();
        let mut other_config = create_test_config();
        other_config.secret_key = "another-secret-key-that-is-long-enough-too".to_string();
        let other = JwtManager::new(other_config).unwrap();

        let token = other.generate_access_token(create_test_claims()).unwrap();
        assert!(manager.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let mut config = create_test_config();
        config.secret_key = "short".to_string();
        assert!(matches!(
            JwtManager::new(config),
            Err(JwtError::ConfigurationError(_))
        ));
    }
}
