// src/utils/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// ユーザー名用正規表現（文字、数字、ドット、アンダースコアのみ）
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.]+$").expect("Invalid username regex"));

/// T.C. kimlik numarası: 11桁、先頭は0以外
pub static NATIONAL_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{10}$").expect("Invalid national id regex"));

/// 部署コード: 英大文字・数字・ハイフン
pub static DEPARTMENT_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9-]{1,19}$").expect("Invalid department code regex"));

fn with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// ユーザー名バリデーション
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_REGEX.is_match(username) {
        Ok(())
    } else {
        Err(with_message(
            "invalid_username",
            "Username may only contain letters, digits, dots and underscores",
        ))
    }
}

/// 国民ID バリデーション
pub fn validate_national_id(national_id: &str) -> Result<(), ValidationError> {
    if NATIONAL_ID_REGEX.is_match(national_id) {
        Ok(())
    } else {
        Err(with_message(
            "invalid_national_id",
            "National ID must be 11 digits and must not start with 0",
        ))
    }
}

/// 部署コード バリデーション
pub fn validate_department_code(code: &str) -> Result<(), ValidationError> {
    if DEPARTMENT_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(with_message(
            "invalid_department_code",
            "Department code must be 2-20 uppercase letters, digits or hyphens",
        ))
    }
}
