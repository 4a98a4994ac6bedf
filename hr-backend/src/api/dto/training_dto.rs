// src/api/dto/training_dto.rs

use crate::domain::status::TrainingAssignmentStatus;
use crate::domain::{training_assignment_model, training_model};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTrainingRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: String,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTrainingRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: Option<String>,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingListQuery {
    #[serde(default)]
    pub only_active: bool,
}

/// 複数社員への割り当て
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignTrainingRequest {
    #[validate(length(min = 1, message = "At least one employee is required"))]
    pub employee_ids: Vec<i32>,

    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrainingProgressRequest {
    #[validate(range(min = 0, max = 100, message = "Watched percent must be between 0 and 100"))]
    pub watched_percent: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResponse {
    pub id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub video_url: String,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<training_model::Model> for TrainingResponse {
    fn from(m: training_model::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            video_url: m.video_url,
            duration_minutes: m.duration_minutes,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingAssignmentResponse {
    pub id: i32,
    pub training_id: i32,
    pub employee_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: TrainingAssignmentStatus,
    pub watched_percent: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_code: Option<String>,
}

impl From<training_assignment_model::Model> for TrainingAssignmentResponse {
    fn from(m: training_assignment_model::Model) -> Self {
        Self {
            id: m.id,
            training_id: m.training_id,
            employee_id: m.employee_id,
            assigned_by_id: m.assigned_by_id,
            due_date: m.due_date,
            status: m.status,
            watched_percent: m.watched_percent,
            completed_at: m.completed_at,
            certificate_code: m.certificate_code,
        }
    }
}
