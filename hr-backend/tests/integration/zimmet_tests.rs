// tests/integration/zimmet_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::{http::StatusCode, Router};
use chrono::{DateTime, NaiveDate, Timelike};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::{json, Value};

async fn create_stock(app: &Router, token: &str, quantity: i32) -> i32 {
    let (status, body) = call(app, "POST", "/api/zimmet/stocks", token, Some(stock_body(quantity))).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["approval_status"], "Pending");
    assert_eq!(body["data"]["remaining_quantity"], quantity);
    body["data"]["id"].as_i64().unwrap() as i32
}

async fn approved_stock(app: &Router, token: &str, quantity: i32) -> i32 {
    let id = create_stock(app, token, quantity).await;
    let (status, _) = call(app, "POST", &format!("/api/zimmet/stocks/{}/approve", id), token, None).await;
    assert_eq!(status, StatusCode::OK);
    id
}

async fn stock_status(app: &Router, token: &str, id: i32) -> Value {
    let (_, body) = call(app, "GET", &format!("/api/zimmet/stocks/{}", id), token, None).await;
    body["data"]["approval_status"].clone()
}

#[tokio::test]
async fn test_batch_approval_stops_at_first_failure() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(create_stock(&app.router, &admin, 1).await);
    }
    // 3 件目は承認できない状態にしておく
    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/zimmet/stocks/{}/reject", ids[2]),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(
        &app.router,
        "POST",
        "/api/zimmet/stocks/approve-batch",
        &admin,
        Some(json!({ "ids": ids })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Batch approval stopped at first failure");
    assert_eq!(body["data"]["approved"], json!([ids[0], ids[1]]));
    assert_eq!(body["data"]["failed"][0]["id"], ids[2]);
    assert_eq!(body["data"]["skipped"], json!([ids[3], ids[4], ids[5]]));

    assert_eq!(stock_status(&app.router, &admin, ids[0]).await, "Approved");
    assert_eq!(stock_status(&app.router, &admin, ids[1]).await, "Approved");
    assert_eq!(stock_status(&app.router, &admin, ids[2]).await, "Rejected");
    for id in &ids[3..] {
        assert_eq!(stock_status(&app.router, &admin, *id).await, "Pending");
    }
}

#[tokio::test]
async fn test_batch_approval_of_all_pending() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let ids = vec![
        create_stock(&app.router, &admin, 2).await,
        create_stock(&app.router, &admin, 3).await,
    ];

    let (status, body) = call(
        &app.router,
        "POST",
        "/api/zimmet/stocks/approve-batch",
        &admin,
        Some(json!({ "ids": ids })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All stocks approved");
    assert_eq!(body["data"]["approved"].as_array().unwrap().len(), 2);
    assert!(body["data"]["failed"].as_array().unwrap().is_empty());

    let (_, body) = call(&app.router, "GET", "/api/zimmet/stocks?status=Approved", &admin, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_assign_and_return_track_remaining_quantity() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "zimmetli").await;
    let stock_id = approved_stock(&app.router, &admin, 5).await;

    let assign = json!({ "stock_id": stock_id, "employee_id": staff.employee_id, "quantity": 3 });
    let (status, body) = call(&app.router, "POST", "/api/zimmet/assignments", &admin, Some(assign.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["status"], "Assigned");
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    let (_, stock) = call(&app.router, "GET", &format!("/api/zimmet/stocks/{}", stock_id), &admin, None).await;
    assert_eq!(stock["data"]["remaining_quantity"], 2);

    // 残数を超える貸与は拒否され、残数は変わらない
    let (status, _) = call(&app.router, "POST", "/api/zimmet/assignments", &admin, Some(assign)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, stock) = call(&app.router, "GET", &format!("/api/zimmet/stocks/{}", stock_id), &admin, None).await;
    assert_eq!(stock["data"]["remaining_quantity"], 2);

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/zimmet/assignments/{}/return", assignment_id),
        &admin,
        Some(json!({ "note": "Sağlam teslim edildi" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Returned");
    assert!(body["data"]["returned_at"].is_string());

    let (_, stock) = call(&app.router, "GET", &format!("/api/zimmet/stocks/{}", stock_id), &admin, None).await;
    assert_eq!(stock["data"]["remaining_quantity"], 5);

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/zimmet/assignments/{}/return", assignment_id),
        &admin,
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = call(
        &app.router,
        "GET",
        &format!("/api/employees/{}/zimmet?status=Returned", staff.employee_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_return_fails_when_stock_row_is_missing() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "kayip_stok").await;
    let stock_id = approved_stock(&app.router, &admin, 2).await;

    let assign = json!({ "stock_id": stock_id, "employee_id": staff.employee_id, "quantity": 1 });
    let (status, body) = call(&app.router, "POST", "/api/zimmet/assignments", &admin, Some(assign)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    // FK を一時的に外して在庫行だけを消す
    let db = &app.db.connection;
    let backend = db.get_database_backend();
    for sql in [
        "PRAGMA foreign_keys = OFF".to_string(),
        format!("DELETE FROM zimmet_stocks WHERE id = {}", stock_id),
        "PRAGMA foreign_keys = ON".to_string(),
    ] {
        db.execute(Statement::from_string(backend, sql)).await.unwrap();
    }

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/zimmet/assignments/{}/return", assignment_id),
        &admin,
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(
        &app.router,
        "GET",
        &format!("/api/zimmet/assignments/{}", assignment_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(body["data"]["status"], "Assigned");
    assert!(body["data"]["returned_at"].is_null());
}

#[tokio::test]
async fn test_pending_stock_cannot_be_assigned() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "bekleyen").await;
    let stock_id = create_stock(&app.router, &admin, 4).await;

    let (status, _) = call(
        &app.router,
        "POST",
        "/api/zimmet/assignments",
        &admin,
        Some(json!({ "stock_id": stock_id, "employee_id": staff.employee_id, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_naive_custody_date_is_stored_as_utc() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "saat_dilimi").await;
    let stock_id = approved_stock(&app.router, &admin, 2).await;

    let (status, body) = call(
        &app.router,
        "POST",
        "/api/zimmet/assignments",
        &admin,
        Some(json!({
            "stock_id": stock_id,
            "employee_id": staff.employee_id,
            "quantity": 1,
            "assigned_at": "2024-03-15T09:30:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let id = body["data"]["id"].as_i64().unwrap();
    let (_, body) = call(&app.router, "GET", &format!("/api/zimmet/assignments/{}", id), &admin, None).await;
    let assigned_at =
        DateTime::parse_from_rfc3339(body["data"]["assigned_at"].as_str().unwrap()).unwrap();

    assert_eq!(assigned_at.offset().local_minus_utc(), 0);
    assert_eq!(
        assigned_at.date_naive(),
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
    assert_eq!((assigned_at.hour(), assigned_at.minute()), (9, 30));
}

#[tokio::test]
async fn test_stock_with_custody_history_cannot_be_deleted() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "gecmisli").await;
    let stock_id = approved_stock(&app.router, &admin, 1).await;

    let (status, _) = call(
        &app.router,
        "POST",
        "/api/zimmet/assignments",
        &admin,
        Some(json!({ "stock_id": stock_id, "employee_id": staff.employee_id, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        &app.router,
        "DELETE",
        &format!("/api/zimmet/stocks/{}", stock_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "constraint_violation");
}
