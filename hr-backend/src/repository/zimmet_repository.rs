// src/repository/zimmet_repository.rs

use crate::domain::status::{CustodyStatus, StockApprovalStatus};
use crate::domain::zimmet_assignment_model::{
    self, ActiveModel as AssignmentActiveModel, Entity as AssignmentEntity,
};
use crate::domain::zimmet_stock_model::{self, ActiveModel as StockActiveModel, Entity as StockEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, DbConn, DbErr, DeleteResult, Order, QueryFilter, QueryOrder};

#[derive(Debug, Clone)]
pub struct ZimmetStockRepository {
    db: DbConn,
}

impl ZimmetStockRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<zimmet_stock_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<zimmet_stock_model::Model>, DbErr> {
        StockEntity::find_by_id(id).one(conn).await
    }

    pub async fn find_all(
        &self,
        status: Option<StockApprovalStatus>,
    ) -> Result<Vec<zimmet_stock_model::Model>, DbErr> {
        let mut query = StockEntity::find();
        if let Some(status) = status {
            query = query.filter(zimmet_stock_model::Column::ApprovalStatus.eq(status));
        }
        query
            .order_by(zimmet_stock_model::Column::CreatedDate, Order::Asc)
            .order_by(zimmet_stock_model::Column::Id, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        stock: StockActiveModel,
    ) -> Result<zimmet_stock_model::Model, DbErr> {
        stock.insert(&self.db).await
    }

    pub async fn update(
        &self,
        stock: StockActiveModel,
    ) -> Result<zimmet_stock_model::Model, DbErr> {
        stock.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        StockEntity::delete_by_id(id).exec(&self.db).await
    }

    /// 承認済み在庫から数量を確保する。残数不足なら false
    ///
    /// 条件付き UPDATE なので同時実行でも残数がマイナスにならない。
    /// 一括更新は before_save を通らないため last_modified はここで刻む。
    pub async fn reserve_quantity_with<C: ConnectionTrait>(
        conn: &C,
        stock_id: i32,
        quantity: i32,
    ) -> Result<bool, DbErr> {
        let result = StockEntity::update_many()
            .col_expr(
                zimmet_stock_model::Column::RemainingQuantity,
                Expr::col(zimmet_stock_model::Column::RemainingQuantity).sub(quantity),
            )
            .col_expr(
                zimmet_stock_model::Column::LastModified,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(zimmet_stock_model::Column::Id.eq(stock_id))
            .filter(zimmet_stock_model::Column::ApprovalStatus.eq(StockApprovalStatus::Approved))
            .filter(zimmet_stock_model::Column::RemainingQuantity.gte(quantity))
            .exec(conn)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// 返却分を在庫に戻す
    pub async fn release_quantity_with<C: ConnectionTrait>(
        conn: &C,
        stock_id: i32,
        quantity: i32,
    ) -> Result<bool, DbErr> {
        let result = StockEntity::update_many()
            .col_expr(
                zimmet_stock_model::Column::RemainingQuantity,
                Expr::col(zimmet_stock_model::Column::RemainingQuantity).add(quantity),
            )
            .col_expr(
                zimmet_stock_model::Column::LastModified,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(zimmet_stock_model::Column::Id.eq(stock_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected == 1)
    }
}

#[derive(Debug, Clone)]
pub struct ZimmetAssignmentRepository {
    db: DbConn,
}

impl ZimmetAssignmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<zimmet_assignment_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<zimmet_assignment_model::Model>, DbErr> {
        AssignmentEntity::find_by_id(id).one(conn).await
    }

    pub async fn find_by_employee(
        &self,
        employee_id: i32,
        status: Option<CustodyStatus>,
    ) -> Result<Vec<zimmet_assignment_model::Model>, DbErr> {
        let mut query = AssignmentEntity::find()
            .filter(zimmet_assignment_model::Column::EmployeeId.eq(employee_id));
        if let Some(status) = status {
            query = query.filter(zimmet_assignment_model::Column::Status.eq(status));
        }
        query
            .order_by(zimmet_assignment_model::Column::AssignedAt, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_stock(
        &self,
        stock_id: i32,
    ) -> Result<Vec<zimmet_assignment_model::Model>, DbErr> {
        AssignmentEntity::find()
            .filter(zimmet_assignment_model::Column::StockId.eq(stock_id))
            .order_by(zimmet_assignment_model::Column::AssignedAt, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn create_with<C: ConnectionTrait>(
        conn: &C,
        assignment: AssignmentActiveModel,
    ) -> Result<zimmet_assignment_model::Model, DbErr> {
        assignment.insert(conn).await
    }

    pub async fn update_with<C: ConnectionTrait>(
        conn: &C,
        assignment: AssignmentActiveModel,
    ) -> Result<zimmet_assignment_model::Model, DbErr> {
        assignment.update(conn).await
    }
}
