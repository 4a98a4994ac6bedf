// src/repository/clock_event_repository.rs

use crate::domain::clock_event_model::{
    self, ActiveModel as ClockEventActiveModel, Entity as ClockEventEntity,
};
use chrono::{DateTime, Utc};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, DeleteResult, Order, QueryFilter, QueryOrder};

#[derive(Debug, Clone)]
pub struct ClockEventRepository {
    db: DbConn,
}

impl ClockEventRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<clock_event_model::Model>, DbErr> {
        ClockEventEntity::find_by_id(id).one(&self.db).await
    }

    /// 期間内（clock_in 基準、from <= t < to）の記録
    pub async fn find_by_employee_in_range(
        &self,
        employee_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<clock_event_model::Model>, DbErr> {
        let mut query = ClockEventEntity::find()
            .filter(clock_event_model::Column::EmployeeId.eq(employee_id));
        if let Some(from) = from {
            query = query.filter(clock_event_model::Column::ClockIn.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(clock_event_model::Column::ClockIn.lt(to));
        }
        query
            .order_by(clock_event_model::Column::ClockIn, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        event: ClockEventActiveModel,
    ) -> Result<clock_event_model::Model, DbErr> {
        event.insert(&self.db).await
    }

    pub async fn update(
        &self,
        event: ClockEventActiveModel,
    ) -> Result<clock_event_model::Model, DbErr> {
        event.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        ClockEventEntity::delete_by_id(id).exec(&self.db).await
    }
}
