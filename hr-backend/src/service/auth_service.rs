// src/service/auth_service.rs

use crate::api::dto::auth_dto::*;
use crate::domain::account_model::{self, AccountClaims};
use crate::error::{AppError, AppResult};
use crate::repository::account_repository::AccountRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use sea_orm::{DbConn, Set};
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService {
    account_repo: AccountRepository,
    employee_repo: EmployeeRepository,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        db: DbConn,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> Self {
        Self {
            account_repo: AccountRepository::new(db.clone()),
            employee_repo: EmployeeRepository::new(db),
            password_manager,
            jwt_manager,
        }
    }

    /// ユーザー名とパスワードでログインし、アクセストークンを発行する
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let account = match self.account_repo.find_by_username(&request.username).await? {
            Some(account) => account,
            None => {
                warn!(username = %request.username, "Login failed: unknown username");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let verified = self
            .password_manager
            .verify_password(&request.password, &account.password_hash)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        if !verified {
            warn!(account_id = account.id, "Login failed: wrong password");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        if !account.is_active {
            warn!(account_id = account.id, "Login rejected: account is inactive");
            return Err(AppError::Forbidden("Account is inactive".to_string()));
        }

        let account = self.account_repo.touch_last_login(account).await?;
        let level_id = self.employee_repo.find_level_id(account.employee_id).await?;
        let claims = AccountClaims::new(&account, level_id);

        let access_token = self
            .jwt_manager
            .generate_access_token(claims.clone())
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        let token_claims = self
            .jwt_manager
            .verify_access_token(&access_token)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        info!(
            account_id = account.id,
            employee_id = account.employee_id,
            "Login succeeded"
        );

        Ok(LoginResponse {
            expires_at: self.jwt_manager.get_access_token_expires_at(&token_claims),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_manager.access_token_expires_in(),
            account: claims,
        })
    }

    /// 社員にログインアカウントを作成する（1 社員 1 アカウント）
    pub async fn create_account(
        &self,
        employee_id: i32,
        request: CreateAccountRequest,
    ) -> AppResult<account_model::Model> {
        self.employee_repo
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with id {} not found", employee_id)))?;

        if self
            .account_repo
            .find_by_employee_id(employee_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Employee already has an account".to_string(),
            ));
        }
        if self
            .account_repo
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }

        let password_hash = self
            .password_manager
            .hash_password(&request.password)
            .map_err(|e| match e {
                PasswordError::WeakPassword(message) => AppError::ValidationError(message),
                other => AppError::InternalServerError(other.to_string()),
            })?;

        let account = self
            .account_repo
            .create(account_model::ActiveModel {
                username: Set(request.username),
                password_hash: Set(password_hash),
                employee_id: Set(employee_id),
                is_active: Set(true),
                ..Default::default()
            })
            .await?;

        info!(account_id = account.id, employee_id, "Account created");
        Ok(account)
    }

    pub async fn get_account(&self, account_id: i32) -> AppResult<account_model::Model> {
        self.account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Account with id {} not found", account_id)))
    }

    pub async fn set_account_active(
        &self,
        account_id: i32,
        is_active: bool,
    ) -> AppResult<account_model::Model> {
        let account = self.get_account(account_id).await?;
        let mut active: account_model::ActiveModel = account.into();
        active.is_active = Set(is_active);
        let updated = self.account_repo.update(active).await?;
        info!(account_id, is_active, "Account activation changed");
        Ok(updated)
    }
}
