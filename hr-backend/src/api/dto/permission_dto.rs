// src/api/dto/permission_dto.rs

use crate::domain::screen_permission_model;
use crate::navigation::{MenuEntry, ScreenGrant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScreenPermissionRequest {
    #[validate(length(min = 1, max = 100, message = "Screen code must be between 1 and 100 characters"))]
    pub screen_code: String,

    #[validate(length(min = 1, max = 150, message = "Display name must be between 1 and 150 characters"))]
    pub display_name: String,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateScreenPermissionRequest {
    #[validate(length(min = 1, max = 150, message = "Display name must be between 1 and 150 characters"))]
    pub display_name: Option<String>,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenPermissionResponse {
    pub id: i32,
    pub screen_code: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<screen_permission_model::Model> for ScreenPermissionResponse {
    fn from(m: screen_permission_model::Model) -> Self {
        Self {
            id: m.id,
            screen_code: m.screen_code,
            display_name: m.display_name,
            description: m.description,
            created_at: m.created_at,
        }
    }
}

/// レベルの画面権限を丸ごと置き換える
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetLevelGrantsRequest {
    #[validate(custom(function = validate_unique_screen_codes))]
    pub grants: Vec<ScreenGrant>,
}

fn validate_unique_screen_codes(grants: &[ScreenGrant]) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for grant in grants {
        if !seen.insert(grant.screen_code.as_str()) {
            let mut error = ValidationError::new("duplicate_screen_code");
            error.message = Some(format!("Duplicate screen code: {}", grant.screen_code).into());
            return Err(error);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGrantsResponse {
    pub level_id: i32,
    pub grants: Vec<ScreenGrant>,
}

/// ログイン中の社員向けに絞り込んだメニュー
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub menu: Vec<MenuEntry>,
    pub allow_all: bool,
}
