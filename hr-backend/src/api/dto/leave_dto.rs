// src/api/dto/leave_dto.rs

use crate::domain::leave_request_model;
use crate::domain::status::LeaveStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_leave_range))]
pub struct CreateLeaveRequest {
    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(length(max = 1000, message = "Reason must be at most 1000 characters"))]
    pub reason: Option<String>,
}

fn validate_leave_range(request: &CreateLeaveRequest) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        let mut error = ValidationError::new("date_range");
        error.message = Some("End date must not be before start date".into());
        return Err(error);
    }
    Ok(())
}

impl CreateLeaveRequest {
    /// 開始日と終了日を含む日数
    pub fn day_count(&self) -> i32 {
        ((self.end_date - self.start_date).num_days() + 1) as i32
    }
}

/// 承認/却下時のメモ
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LeaveDecisionRequest {
    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    pub id: i32,
    pub employee_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<leave_request_model::Model> for LeaveRequestResponse {
    fn from(m: leave_request_model::Model) -> Self {
        Self {
            id: m.id,
            employee_id: m.employee_id,
            approver_id: m.approver_id,
            start_date: m.start_date,
            end_date: m.end_date,
            day_count: m.day_count,
            reason: m.reason,
            status: m.status,
            decided_at: m.decided_at,
            decision_note: m.decision_note,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: (i32, u32, u32), end: (i32, u32, u32)) -> CreateLeaveRequest {
        CreateLeaveRequest {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            reason: None,
        }
    }

    #[test]
    fn test_day_count_is_inclusive() {
        assert_eq!(request((2024, 7, 1), (2024, 7, 1)).day_count(), 1);
        assert_eq!(request((2024, 2, 28), (2024, 3, 1)).day_count(), 3);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        assert!(request((2024, 7, 1), (2024, 7, 5)).validate().is_ok());
        assert!(request((2024, 7, 5), (2024, 7, 1)).validate().is_err());
    }
}
