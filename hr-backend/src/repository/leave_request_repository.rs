// src/repository/leave_request_repository.rs

use crate::domain::leave_request_model::{
    self, ActiveModel as LeaveRequestActiveModel, Entity as LeaveRequestEntity,
};
use crate::domain::status::LeaveStatus;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, DeleteResult, Order, QueryFilter, QueryOrder};

#[derive(Debug, Clone)]
pub struct LeaveRequestRepository {
    db: DbConn,
}

impl LeaveRequestRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<leave_request_model::Model>, DbErr> {
        LeaveRequestEntity::find_by_id(id).one(&self.db).await
    }

    /// 社員本人の申請（新しい順）
    pub async fn find_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<leave_request_model::Model>, DbErr> {
        LeaveRequestEntity::find()
            .filter(leave_request_model::Column::EmployeeId.eq(employee_id))
            .order_by(leave_request_model::Column::StartDate, Order::Desc)
            .all(&self.db)
            .await
    }

    /// 承認待ちキュー（古い順）
    pub async fn find_pending(&self) -> Result<Vec<leave_request_model::Model>, DbErr> {
        LeaveRequestEntity::find()
            .filter(leave_request_model::Column::Status.eq(LeaveStatus::Pending))
            .order_by(leave_request_model::Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        request: LeaveRequestActiveModel,
    ) -> Result<leave_request_model::Model, DbErr> {
        request.insert(&self.db).await
    }

    pub async fn update(
        &self,
        request: LeaveRequestActiveModel,
    ) -> Result<leave_request_model::Model, DbErr> {
        request.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        LeaveRequestEntity::delete_by_id(id).exec(&self.db).await
    }
}
