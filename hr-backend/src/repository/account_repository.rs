// src/repository/account_repository.rs

use crate::domain::account_model::{self, ActiveModel as AccountActiveModel, Entity as AccountEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter, Set};

#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DbConn,
}

impl AccountRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<account_model::Model>, DbErr> {
        AccountEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<account_model::Model>, DbErr> {
        AccountEntity::find()
            .filter(account_model::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    pub async fn find_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<account_model::Model>, DbErr> {
        AccountEntity::find()
            .filter(account_model::Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
    }

    pub async fn create(&self, account: AccountActiveModel) -> Result<account_model::Model, DbErr> {
        account.insert(&self.db).await
    }

    pub async fn update(&self, account: AccountActiveModel) -> Result<account_model::Model, DbErr> {
        account.update(&self.db).await
    }

    /// 最終ログイン日時を記録
    pub async fn touch_last_login(
        &self,
        account: account_model::Model,
    ) -> Result<account_model::Model, DbErr> {
        let mut active: AccountActiveModel = account.into();
        active.last_login_at = Set(Some(Utc::now()));
        active.update(&self.db).await
    }
}
