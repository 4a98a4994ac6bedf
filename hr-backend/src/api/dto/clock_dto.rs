// src/api/dto/clock_dto.rs

use crate::domain::clock_event_model;
use crate::domain::status::ClockEventType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_clock_range))]
pub struct CreateClockEventRequest {
    pub employee_id: i32,

    #[serde(default)]
    pub event_type: ClockEventType,

    pub clock_in: DateTime<Utc>,

    pub clock_out: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,
}

fn validate_clock_range(request: &CreateClockEventRequest) -> Result<(), ValidationError> {
    if let Some(clock_out) = request.clock_out {
        if clock_out < request.clock_in {
            let mut error = ValidationError::new("clock_range");
            error.message = Some("Clock-out must not be before clock-in".into());
            return Err(error);
        }
    }
    Ok(())
}

/// 退勤打刻
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRequest {
    pub clock_out: DateTime<Utc>,
}

/// 期間指定（日付、両端を含む）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockEventQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockEventResponse {
    pub id: i32,
    pub employee_id: i32,
    pub event_type: ClockEventType,
    pub clock_in: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worked_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<clock_event_model::Model> for ClockEventResponse {
    fn from(m: clock_event_model::Model) -> Self {
        Self {
            worked_minutes: m.worked_minutes(),
            id: m.id,
            employee_id: m.employee_id,
            event_type: m.event_type,
            clock_in: m.clock_in,
            clock_out: m.clock_out,
            note: m.note,
        }
    }
}
