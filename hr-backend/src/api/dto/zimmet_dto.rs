// src/api/dto/zimmet_dto.rs

use crate::domain::status::{CustodyStatus, StockApprovalStatus};
use crate::domain::{zimmet_assignment_model, zimmet_stock_model};
use crate::types::datetime::deserialize_optional_utc;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- 在庫 ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStockRequest {
    #[validate(length(min = 1, max = 200, message = "Item name must be between 1 and 200 characters"))]
    pub item_name: String,

    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: String,

    #[validate(length(max = 100, message = "Brand must be at most 100 characters"))]
    pub brand: Option<String>,

    #[validate(length(max = 100, message = "Model must be at most 100 characters"))]
    pub model: Option<String>,

    #[validate(length(max = 100, message = "Serial number must be at most 100 characters"))]
    pub serial_number: Option<String>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockListQuery {
    pub status: Option<StockApprovalStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchApproveRequest {
    #[validate(length(min = 1, max = 500, message = "Between 1 and 500 ids are required"))]
    pub ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub id: i32,
    pub reason: String,
}

/// 一括承認の結果。先頭から順に処理し、最初の失敗で打ち切る
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchApprovalResponse {
    pub approved: Vec<i32>,
    pub failed: Vec<BatchFailure>,
    pub skipped: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockResponse {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub quantity: i32,
    pub remaining_quantity: i32,
    pub approval_status: StockApprovalStatus,
    pub created_by_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_date: DateTime<FixedOffset>,
    pub last_modified: DateTime<FixedOffset>,
}

impl From<zimmet_stock_model::Model> for StockResponse {
    fn from(m: zimmet_stock_model::Model) -> Self {
        Self {
            id: m.id,
            item_name: m.item_name,
            category: m.category,
            brand: m.brand,
            model: m.model,
            serial_number: m.serial_number,
            quantity: m.quantity,
            remaining_quantity: m.remaining_quantity,
            approval_status: m.approval_status,
            created_by_id: m.created_by_id,
            approved_by_id: m.approved_by_id,
            approved_at: m.approved_at,
            note: m.note,
            created_date: m.created_date,
            last_modified: m.last_modified,
        }
    }
}

// --- 割り当て ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignZimmetRequest {
    pub stock_id: i32,

    pub employee_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    /// 省略時は現在時刻。タイムゾーンなしの値は UTC として扱う
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub assigned_at: Option<DateTime<FixedOffset>>,

    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnZimmetRequest {
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub returned_at: Option<DateTime<FixedOffset>>,

    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentListQuery {
    pub status: Option<CustodyStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub id: i32,
    pub stock_id: i32,
    pub employee_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by_id: Option<i32>,
    pub quantity: i32,
    pub assigned_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<FixedOffset>>,
    pub status: CustodyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_date: DateTime<FixedOffset>,
    pub last_modified: DateTime<FixedOffset>,
}

impl From<zimmet_assignment_model::Model> for AssignmentResponse {
    fn from(m: zimmet_assignment_model::Model) -> Self {
        Self {
            id: m.id,
            stock_id: m.stock_id,
            employee_id: m.employee_id,
            assigned_by_id: m.assigned_by_id,
            quantity: m.quantity,
            assigned_at: m.assigned_at,
            returned_at: m.returned_at,
            status: m.status,
            note: m.note,
            created_date: m.created_date,
            last_modified: m.last_modified,
        }
    }
}
