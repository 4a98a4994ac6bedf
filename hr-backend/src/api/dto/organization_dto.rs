// src/api/dto/organization_dto.rs

use crate::domain::{city_model, department_model, level_model, position_model};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Level ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLevelRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 0, message = "Rank must not be negative"))]
    pub rank: i32,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLevelRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Rank must not be negative"))]
    pub rank: Option<i32>,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelResponse {
    pub id: i32,
    pub name: String,
    pub rank: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<level_model::Model> for LevelResponse {
    fn from(m: level_model::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            rank: m.rank,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// --- Department ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,

    #[validate(custom(function = validation::validate_department_code))]
    pub code: String,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = validation::validate_department_code))]
    pub code: Option<String>,

    pub description: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentResponse {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<department_model::Model> for DepartmentResponse {
    fn from(m: department_model::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            code: m.code,
            description: m.description,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// --- Position ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePositionRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: String,

    pub department_id: i32,

    pub level_id: i32,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePositionRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be between 1 and 150 characters"))]
    pub name: Option<String>,

    pub department_id: Option<i32>,

    pub level_id: Option<i32>,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionQuery {
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionResponse {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
    pub level_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<position_model::Model> for PositionResponse {
    fn from(m: position_model::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            department_id: m.department_id,
            level_id: m.level_id,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// --- City ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 81, message = "Plate code must be between 1 and 81"))]
    pub plate_code: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCityRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 81, message = "Plate code must be between 1 and 81"))]
    pub plate_code: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityResponse {
    pub id: i32,
    pub name: String,
    pub plate_code: i32,
}

impl From<city_model::Model> for CityResponse {
    fn from(m: city_model::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            plate_code: m.plate_code,
        }
    }
}
