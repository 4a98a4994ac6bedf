// tests/common/test_data.rs

use crate::common::auth_helper::{call, login_token};
use axum::{http::StatusCode, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU32, Ordering};

pub const STAFF_PASSWORD: &str = "Personel123";

static COUNTER: AtomicU32 = AtomicU32::new(1);

pub fn next_suffix() -> u32 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// 先頭が 0 でない 11 桁の一意な TC kimlik 番号
pub fn unique_national_id() -> String {
    format!("2{:010}", next_suffix())
}

pub fn employee_body(position_id: i32, manager_id: Option<i32>) -> Value {
    let n = next_suffix();
    json!({
        "first_name": "Ayşe",
        "last_name": format!("Yılmaz{}", n),
        "national_id": unique_national_id(),
        "email": format!("personel{}@example.com", n),
        "hire_date": "2024-01-15",
        "position_id": position_id,
        "manager_id": manager_id,
    })
}

pub fn stock_body(quantity: i32) -> Value {
    json!({
        "item_name": format!("Dizüstü Bilgisayar {}", next_suffix()),
        "category": "Bilgisayar",
        "brand": "Lenovo",
        "quantity": quantity,
    })
}

fn created_id(status: StatusCode, body: &Value) -> i32 {
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body["data"]["id"].as_i64().unwrap() as i32
}

pub async fn create_level(app: &Router, token: &str, rank: i32) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/api/levels",
        token,
        Some(json!({ "name": format!("Kademe {}", next_suffix()), "rank": rank })),
    )
    .await;
    created_id(status, &body)
}

pub async fn create_department(app: &Router, token: &str) -> i32 {
    let n = next_suffix();
    let (status, body) = call(
        app,
        "POST",
        "/api/departments",
        token,
        Some(json!({ "name": format!("Departman {}", n), "code": format!("D-{}", n) })),
    )
    .await;
    created_id(status, &body)
}

pub async fn create_position(app: &Router, token: &str, department_id: i32, level_id: i32) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/api/positions",
        token,
        Some(json!({
            "name": format!("Uzman {}", next_suffix()),
            "department_id": department_id,
            "level_id": level_id,
        })),
    )
    .await;
    created_id(status, &body)
}

/// levels.rank は一意なので呼び出しごとに別の値を使う
pub fn unique_rank() -> i32 {
    10_000 + next_suffix() as i32
}

/// 新しい職位・部署・ポジションを作り、そのポジションを返す
pub async fn create_position_chain(app: &Router, token: &str) -> (i32, i32) {
    let level_id = create_level(app, token, unique_rank()).await;
    let department_id = create_department(app, token).await;
    let position_id = create_position(app, token, department_id, level_id).await;
    (level_id, position_id)
}

pub async fn create_employee(
    app: &Router,
    token: &str,
    position_id: i32,
    manager_id: Option<i32>,
) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/api/employees",
        token,
        Some(employee_body(position_id, manager_id)),
    )
    .await;
    created_id(status, &body)
}

pub async fn create_account(app: &Router, token: &str, employee_id: i32, username: &str) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        &format!("/api/employees/{}/account", employee_id),
        token,
        Some(json!({ "username": username, "password": STAFF_PASSWORD })),
    )
    .await;
    created_id(status, &body)
}

/// ログイン可能な一般社員
pub struct Staff {
    pub employee_id: i32,
    pub account_id: i32,
    pub level_id: i32,
    pub position_id: i32,
    pub token: String,
}

pub async fn create_staff(app: &Router, admin_token: &str, username: &str) -> Staff {
    let (level_id, position_id) = create_position_chain(app, admin_token).await;
    let employee_id = create_employee(app, admin_token, position_id, None).await;
    let account_id = create_account(app, admin_token, employee_id, username).await;
    let token = login_token(app, username, STAFF_PASSWORD).await;

    Staff {
        employee_id,
        account_id,
        level_id,
        position_id,
        token,
    }
}
