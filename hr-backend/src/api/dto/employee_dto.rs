// src/api/dto/employee_dto.rs

use crate::domain::employee_model;
use crate::types::query::deserialize_optional_from_str;
use crate::types::PaginationQuery;
use crate::utils::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(custom(function = validation::validate_national_id))]
    pub national_id: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub hire_date: NaiveDate,

    pub position_id: i32,

    pub manager_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub position_id: Option<i32>,

    pub is_active: Option<bool>,
}

/// 上司の設定（None で解除）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetManagerRequest {
    pub manager_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub position_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_from_str")]
    pub manager_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub hire_date: NaiveDate,
    pub position_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<employee_model::Model> for EmployeeResponse {
    fn from(m: employee_model::Model) -> Self {
        Self {
            full_name: m.full_name(),
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            national_id: m.national_id,
            email: m.email,
            phone: m.phone,
            hire_date: m.hire_date,
            position_id: m.position_id,
            manager_id: m.manager_id,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            national_id: "10000000146".to_string(),
            email: "ayse@example.com".to_string(),
            phone: None,
            hire_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            position_id: 1,
            manager_id: None,
        }
    }

    #[test]
    fn test_create_employee_validation() {
        assert!(valid_request().validate().is_ok());

        let request = CreateEmployeeRequest {
            national_id: "0123".to_string(),
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("national_id"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_list_query_accepts_string_numbers() {
        let query: EmployeeListQuery =
            serde_json::from_str(r#"{"page":"2","per_page":"5","is_active":true}"#).unwrap();
        assert_eq!(query.pagination.page_index_and_size(), (1, 5));
        assert_eq!(query.is_active, Some(true));
    }
}
