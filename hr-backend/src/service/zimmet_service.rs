// src/service/zimmet_service.rs

use crate::api::dto::zimmet_dto::*;
use crate::domain::status::{CustodyStatus, StockApprovalStatus};
use crate::domain::{zimmet_assignment_model, zimmet_stock_model};
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::zimmet_repository::{ZimmetAssignmentRepository, ZimmetStockRepository};
use crate::types::normalize_to_utc;
use chrono::Utc;
use sea_orm::{DbConn, Set};
use tracing::{info, warn};

/// 備品（zimmet）在庫と社員への貸与
pub struct ZimmetService {
    db: DbConn,
    stock_repo: ZimmetStockRepository,
    assignment_repo: ZimmetAssignmentRepository,
}

impl ZimmetService {
    pub fn new(db: DbConn) -> Self {
        Self {
            stock_repo: ZimmetStockRepository::new(db.clone()),
            assignment_repo: ZimmetAssignmentRepository::new(db.clone()),
            db,
        }
    }

    // --- 在庫 ---

    pub async fn list_stocks(
        &self,
        status: Option<StockApprovalStatus>,
    ) -> AppResult<Vec<zimmet_stock_model::Model>> {
        Ok(self.stock_repo.find_all(status).await?)
    }

    pub async fn get_stock(&self, id: i32) -> AppResult<zimmet_stock_model::Model> {
        self.stock_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Stock with id {} not found", id)))
    }

    /// 在庫を登録する。承認されるまで貸与できない
    pub async fn create_stock(
        &self,
        created_by_id: i32,
        request: CreateStockRequest,
    ) -> AppResult<zimmet_stock_model::Model> {
        let stock = self
            .stock_repo
            .create(zimmet_stock_model::ActiveModel {
                item_name: Set(request.item_name),
                category: Set(request.category),
                brand: Set(request.brand),
                model: Set(request.model),
                serial_number: Set(request.serial_number),
                quantity: Set(request.quantity),
                remaining_quantity: Set(request.quantity),
                approval_status: Set(StockApprovalStatus::Pending),
                created_by_id: Set(created_by_id),
                note: Set(request.note),
                ..Default::default()
            })
            .await?;

        info!(stock_id = stock.id, created_by_id, quantity = stock.quantity, "Stock created");
        Ok(stock)
    }

    pub async fn approve_stock(
        &self,
        id: i32,
        approver_id: i32,
    ) -> AppResult<zimmet_stock_model::Model> {
        self.decide_stock(id, approver_id, StockApprovalStatus::Approved)
            .await
    }

    pub async fn reject_stock(
        &self,
        id: i32,
        approver_id: i32,
    ) -> AppResult<zimmet_stock_model::Model> {
        self.decide_stock(id, approver_id, StockApprovalStatus::Rejected)
            .await
    }

    /// 先頭から順に 1 件ずつ承認し、最初の失敗で止める
    ///
    /// 失敗より前の承認は取り消さない。失敗した id とそれ以降は未変更のまま返す。
    pub async fn batch_approve(
        &self,
        ids: Vec<i32>,
        approver_id: i32,
    ) -> AppResult<BatchApprovalResponse> {
        let mut response = BatchApprovalResponse::default();
        let mut remaining = ids.into_iter();

        for id in remaining.by_ref() {
            match self.approve_stock(id, approver_id).await {
                Ok(_) => response.approved.push(id),
                Err(e) => {
                    warn!(stock_id = id, error = %e, "Batch approval stopped");
                    response.failed.push(BatchFailure {
                        id,
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }
        response.skipped = remaining.collect();

        info!(
            approver_id,
            approved = response.approved.len(),
            failed = response.failed.len(),
            skipped = response.skipped.len(),
            "Batch stock approval finished"
        );
        Ok(response)
    }

    /// 貸与履歴がある在庫は削除できない（FK restrict）
    pub async fn delete_stock(&self, id: i32) -> AppResult<()> {
        let result = self.stock_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Stock with id {} not found", id)));
        }
        Ok(())
    }

    async fn decide_stock(
        &self,
        id: i32,
        approver_id: i32,
        status: StockApprovalStatus,
    ) -> AppResult<zimmet_stock_model::Model> {
        let stock = self.get_stock(id).await?;
        if stock.approval_status != StockApprovalStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Stock {} is already {:?}",
                id, stock.approval_status
            )));
        }

        let mut active: zimmet_stock_model::ActiveModel = stock.into();
        active.approval_status = Set(status);
        active.approved_by_id = Set(Some(approver_id));
        active.approved_at = Set(Some(Utc::now().fixed_offset()));
        let updated = self.stock_repo.update(active).await?;

        info!(stock_id = id, approver_id, status = ?status, "Stock decided");
        Ok(updated)
    }

    // --- 貸与 ---

    pub async fn get_assignment(&self, id: i32) -> AppResult<zimmet_assignment_model::Model> {
        self.assignment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment with id {} not found", id)))
    }

    pub async fn list_by_employee(
        &self,
        employee_id: i32,
        status: Option<CustodyStatus>,
    ) -> AppResult<Vec<zimmet_assignment_model::Model>> {
        Ok(self
            .assignment_repo
            .find_by_employee(employee_id, status)
            .await?)
    }

    pub async fn list_by_stock(
        &self,
        stock_id: i32,
    ) -> AppResult<Vec<zimmet_assignment_model::Model>> {
        self.get_stock(stock_id).await?;
        Ok(self.assignment_repo.find_by_stock(stock_id).await?)
    }

    /// 承認済み在庫を社員に貸与し、残数を減らす
    pub async fn assign(
        &self,
        assigned_by_id: i32,
        request: AssignZimmetRequest,
    ) -> AppResult<zimmet_assignment_model::Model> {
        let assigned_at = request
            .assigned_at
            .map(normalize_to_utc)
            .unwrap_or_else(|| Utc::now().fixed_offset());

        let assignment = crate::with_transaction!(self.db, |txn| async move {
            EmployeeRepository::find_by_id_with(txn, request.employee_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Employee with id {} not found", request.employee_id))
                })?;

            let stock = ZimmetStockRepository::find_by_id_with(txn, request.stock_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Stock with id {} not found", request.stock_id))
                })?;
            if stock.approval_status != StockApprovalStatus::Approved {
                return Err(AppError::Conflict(format!(
                    "Stock {} is not approved",
                    stock.id
                )));
            }

            let reserved =
                ZimmetStockRepository::reserve_quantity_with(txn, stock.id, request.quantity)
                    .await?;
            if !reserved {
                return Err(AppError::Conflict(format!(
                    "Insufficient remaining quantity for stock {}",
                    stock.id
                )));
            }

            let assignment = ZimmetAssignmentRepository::create_with(
                txn,
                zimmet_assignment_model::ActiveModel {
                    stock_id: Set(stock.id),
                    employee_id: Set(request.employee_id),
                    assigned_by_id: Set(Some(assigned_by_id)),
                    quantity: Set(request.quantity),
                    assigned_at: Set(assigned_at),
                    status: Set(CustodyStatus::Assigned),
                    note: Set(request.note),
                    ..Default::default()
                },
            )
            .await?;
            Ok(assignment)
        })?;

        info!(
            assignment_id = assignment.id,
            stock_id = assignment.stock_id,
            employee_id = assignment.employee_id,
            quantity = assignment.quantity,
            "Zimmet assigned"
        );
        Ok(assignment)
    }

    /// 返却。残数を戻し、返却日時を記録する
    pub async fn return_assignment(
        &self,
        id: i32,
        request: ReturnZimmetRequest,
    ) -> AppResult<zimmet_assignment_model::Model> {
        let returned_at = request
            .returned_at
            .map(normalize_to_utc)
            .unwrap_or_else(|| Utc::now().fixed_offset());

        let assignment = crate::with_transaction!(self.db, |txn| async move {
            let assignment = ZimmetAssignmentRepository::find_by_id_with(txn, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Assignment with id {} not found", id)))?;
            if assignment.status == CustodyStatus::Returned {
                return Err(AppError::Conflict(format!(
                    "Assignment {} is already returned",
                    id
                )));
            }
            if returned_at < assignment.assigned_at {
                return Err(AppError::ValidationError(
                    "Return date must not be before the custody date".to_string(),
                ));
            }

            let released = ZimmetStockRepository::release_quantity_with(
                txn,
                assignment.stock_id,
                assignment.quantity,
            )
            .await?;
            if !released {
                return Err(AppError::NotFound(format!(
                    "Stock with id {} not found",
                    assignment.stock_id
                )));
            }

            let mut active: zimmet_assignment_model::ActiveModel = assignment.into();
            active.status = Set(CustodyStatus::Returned);
            active.returned_at = Set(Some(returned_at));
            if request.note.is_some() {
                active.note = Set(request.note);
            }
            Ok(ZimmetAssignmentRepository::update_with(txn, active).await?)
        })?;

        info!(
            assignment_id = assignment.id,
            stock_id = assignment.stock_id,
            "Zimmet returned"
        );
        Ok(assignment)
    }
}
