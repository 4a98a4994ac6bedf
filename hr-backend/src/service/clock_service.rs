// src/service/clock_service.rs

use crate::api::dto::clock_dto::*;
use crate::domain::clock_event_model;
use crate::error::{AppError, AppResult};
use crate::repository::clock_event_repository::ClockEventRepository;
use crate::repository::employee_repository::EmployeeRepository;
use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::{DbConn, Set};
use tracing::info;

/// 出退勤記録
pub struct ClockService {
    clock_repo: ClockEventRepository,
    employee_repo: EmployeeRepository,
}

impl ClockService {
    pub fn new(db: DbConn) -> Self {
        Self {
            clock_repo: ClockEventRepository::new(db.clone()),
            employee_repo: EmployeeRepository::new(db),
        }
    }

    pub async fn get_event(&self, id: i32) -> AppResult<clock_event_model::Model> {
        self.clock_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Clock event with id {} not found", id)))
    }

    pub async fn record(
        &self,
        request: CreateClockEventRequest,
    ) -> AppResult<clock_event_model::Model> {
        self.employee_repo
            .find_by_id(request.employee_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Employee with id {} not found", request.employee_id))
            })?;

        let event = self
            .clock_repo
            .create(clock_event_model::ActiveModel {
                employee_id: Set(request.employee_id),
                event_type: Set(request.event_type),
                clock_in: Set(request.clock_in),
                clock_out: Set(request.clock_out),
                note: Set(request.note),
                ..Default::default()
            })
            .await?;

        info!(
            clock_event_id = event.id,
            employee_id = event.employee_id,
            event_type = ?event.event_type,
            "Clock event recorded"
        );
        Ok(event)
    }

    /// 退勤時刻を記録する
    pub async fn clock_out(
        &self,
        id: i32,
        request: ClockOutRequest,
    ) -> AppResult<clock_event_model::Model> {
        let event = self.get_event(id).await?;
        if event.clock_out.is_some() {
            return Err(AppError::Conflict(format!(
                "Clock event {} is already closed",
                id
            )));
        }
        if request.clock_out < event.clock_in {
            return Err(AppError::ValidationError(
                "Clock-out must not be before clock-in".to_string(),
            ));
        }

        let mut active: clock_event_model::ActiveModel = event.into();
        active.clock_out = Set(Some(request.clock_out));
        Ok(self.clock_repo.update(active).await?)
    }

    pub async fn list_for_employee(
        &self,
        employee_id: i32,
        query: &ClockEventQuery,
    ) -> AppResult<Vec<clock_event_model::Model>> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if to < from {
                return Err(AppError::ValidationError(
                    "'to' must not be before 'from'".to_string(),
                ));
            }
        }

        let from = query.from.map(start_of_day);
        let to = query
            .to
            .and_then(|date| date.checked_add_days(Days::new(1)))
            .map(start_of_day);

        Ok(self
            .clock_repo
            .find_by_employee_in_range(employee_id, from, to)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = self.clock_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Clock event with id {} not found", id)));
        }
        Ok(())
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
