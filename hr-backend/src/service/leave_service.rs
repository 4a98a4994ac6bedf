// src/service/leave_service.rs

use crate::api::dto::leave_dto::*;
use crate::domain::leave_request_model;
use crate::domain::status::LeaveStatus;
use crate::error::{AppError, AppResult};
use crate::repository::leave_request_repository::LeaveRequestRepository;
use chrono::Utc;
use sea_orm::{DbConn, Set};
use tracing::info;

pub struct LeaveService {
    leave_repo: LeaveRequestRepository,
}

impl LeaveService {
    pub fn new(db: DbConn) -> Self {
        Self {
            leave_repo: LeaveRequestRepository::new(db),
        }
    }

    pub async fn get_request(&self, id: i32) -> AppResult<leave_request_model::Model> {
        self.leave_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Leave request with id {} not found", id)))
    }

    /// 休暇申請を登録する（状態は Pending）
    pub async fn submit(
        &self,
        employee_id: i32,
        request: CreateLeaveRequest,
    ) -> AppResult<leave_request_model::Model> {
        if request.end_date < request.start_date {
            return Err(AppError::ValidationError(
                "End date must not be before start date".to_string(),
            ));
        }

        let day_count = request.day_count();
        let leave = self
            .leave_repo
            .create(leave_request_model::ActiveModel {
                employee_id: Set(employee_id),
                start_date: Set(request.start_date),
                end_date: Set(request.end_date),
                day_count: Set(day_count),
                reason: Set(request.reason),
                status: Set(LeaveStatus::Pending),
                ..Default::default()
            })
            .await?;

        info!(
            leave_request_id = leave.id,
            employee_id,
            day_count,
            "Leave request submitted"
        );
        Ok(leave)
    }

    pub async fn list_for_employee(
        &self,
        employee_id: i32,
    ) -> AppResult<Vec<leave_request_model::Model>> {
        Ok(self.leave_repo.find_by_employee(employee_id).await?)
    }

    /// 承認待ち一覧（古い順）
    pub async fn list_pending(&self) -> AppResult<Vec<leave_request_model::Model>> {
        Ok(self.leave_repo.find_pending().await?)
    }

    pub async fn approve(
        &self,
        id: i32,
        approver_id: i32,
        request: LeaveDecisionRequest,
    ) -> AppResult<leave_request_model::Model> {
        self.decide(id, approver_id, LeaveStatus::Approved, request.note)
            .await
    }

    pub async fn reject(
        &self,
        id: i32,
        approver_id: i32,
        request: LeaveDecisionRequest,
    ) -> AppResult<leave_request_model::Model> {
        self.decide(id, approver_id, LeaveStatus::Rejected, request.note)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = self.leave_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Leave request with id {} not found", id)));
        }
        Ok(())
    }

    async fn decide(
        &self,
        id: i32,
        approver_id: i32,
        status: LeaveStatus,
        note: Option<String>,
    ) -> AppResult<leave_request_model::Model> {
        let leave = self.get_request(id).await?;
        if leave.status != LeaveStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Leave request {} is already {:?}",
                id, leave.status
            )));
        }

        let mut active: leave_request_model::ActiveModel = leave.into();
        active.status = Set(status);
        active.approver_id = Set(Some(approver_id));
        active.decided_at = Set(Some(Utc::now()));
        active.decision_note = Set(note);
        let updated = self.leave_repo.update(active).await?;

        info!(leave_request_id = id, approver_id, status = ?status, "Leave request decided");
        Ok(updated)
    }
}
