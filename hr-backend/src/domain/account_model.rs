// src/domain/account_model.rs

use crate::domain::timestamp::stamp;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

/// 社員のログインアカウント（社員 1 人につき 1 つ）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    #[serde(skip_serializing)] // パスワードハッシュは絶対にシリアライズしない
    pub password_hash: String,

    #[sea_orm(unique)]
    pub employee_id: i32,

    pub is_active: bool,

    pub last_login_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

crate::impl_timestamped!(ActiveModel);

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(stamp(self, insert))
    }
}

/// トークンに埋め込むサインイン中の社員情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountClaims {
    pub employee_id: i32,
    pub account_id: i32,
    pub username: String,
    /// ポジション経由で解決した職位
    pub level_id: Option<i32>,
}

impl AccountClaims {
    pub fn new(account: &Model, level_id: Option<i32>) -> Self {
        Self {
            employee_id: account.employee_id,
            account_id: account.id,
            username: account.username.clone(),
            level_id,
        }
    }
}
