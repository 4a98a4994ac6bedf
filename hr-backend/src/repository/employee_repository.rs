// src/repository/employee_repository.rs

use crate::domain::employee_model::{
    self, ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity,
};
use crate::domain::position_model::Entity as PositionEntity;
use sea_orm::entity::*;
use sea_orm::{
    ConnectionTrait, DbConn, DbErr, DeleteResult, Order, PaginatorTrait, QueryFilter, QueryOrder,
};

/// 社員一覧の絞り込み条件
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub is_active: Option<bool>,
    pub position_id: Option<i32>,
    pub manager_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    db: DbConn,
}

impl EmployeeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<employee_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    /// トランザクション内など任意の接続で検索する
    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find_by_id(id).one(conn).await
    }

    pub async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .filter(employee_model::Column::NationalId.eq(national_id))
            .one(&self.db)
            .await
    }

    /// ページネーション付きで取得（page は 0 始まり）
    pub async fn find_paginated(
        &self,
        filter: &EmployeeFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<employee_model::Model>, u64), DbErr> {
        let mut query = EmployeeEntity::find();
        if let Some(is_active) = filter.is_active {
            query = query.filter(employee_model::Column::IsActive.eq(is_active));
        }
        if let Some(position_id) = filter.position_id {
            query = query.filter(employee_model::Column::PositionId.eq(position_id));
        }
        if let Some(manager_id) = filter.manager_id {
            query = query.filter(employee_model::Column::ManagerId.eq(manager_id));
        }

        let paginator = query
            .order_by(employee_model::Column::LastName, Order::Asc)
            .order_by(employee_model::Column::FirstName, Order::Asc)
            .paginate(&self.db, page_size);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;
        Ok((items, total))
    }

    /// 直属の部下
    pub async fn find_direct_reports(
        &self,
        manager_id: i32,
    ) -> Result<Vec<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .filter(employee_model::Column::ManagerId.eq(manager_id))
            .order_by(employee_model::Column::Id, Order::Asc)
            .all(&self.db)
            .await
    }

    /// ポジション経由で職位 ID を解決する
    pub async fn find_level_id(&self, employee_id: i32) -> Result<Option<i32>, DbErr> {
        let found = EmployeeEntity::find_by_id(employee_id)
            .find_also_related(PositionEntity)
            .one(&self.db)
            .await?;
        Ok(found.and_then(|(_, position)| position.map(|p| p.level_id)))
    }

    pub async fn create(
        &self,
        employee: EmployeeActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        employee.insert(&self.db).await
    }

    pub async fn update(
        &self,
        employee: EmployeeActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        employee.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        EmployeeEntity::delete_by_id(id).exec(&self.db).await
    }
}
