// tests/integration/leave_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::http::StatusCode;
use hr_backend::error::ConstraintKind;
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;

async fn submit_leave(app: &axum::Router, token: &str) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/api/leaves",
        token,
        Some(json!({
            "start_date": "2025-07-07",
            "end_date": "2025-07-11",
            "reason": "Yıllık izin",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["status"], "Pending");
    assert_eq!(body["data"]["day_count"], 5);
    body["data"]["id"].as_i64().unwrap() as i32
}

#[tokio::test]
async fn test_leave_is_submitted_for_current_employee() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "izinli").await;

    let id = submit_leave(&app.router, &staff.token).await;

    let (status, body) = call(&app.router, "GET", "/api/leaves/mine", &staff.token, None).await;
    assert_eq!(status, StatusCode::OK);
    let mine = body["data"].as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["id"], id);
    assert_eq!(mine[0]["employee_id"], staff.employee_id);

    let (_, body) = call(&app.router, "GET", "/api/leaves/pending", &admin, None).await;
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|leave| leave["id"] == id));
}

#[tokio::test]
async fn test_end_before_start_is_rejected() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (status, _) = call(
        &app.router,
        "POST",
        "/api/leaves",
        &admin,
        Some(json!({ "start_date": "2025-07-11", "end_date": "2025-07-07" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_approve_records_decision_once() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "onaylanan").await;
    let id = submit_leave(&app.router, &staff.token).await;

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/leaves/{}/approve", id),
        &admin,
        Some(json!({ "note": "İyi tatiller" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Approved");
    assert!(body["data"]["approver_id"].is_number());
    assert!(body["data"]["decided_at"].is_string());
    assert_eq!(body["data"]["decision_note"], "İyi tatiller");

    // 決定済みの申請は再度決定できない
    for action in ["approve", "reject"] {
        let (status, _) = call(
            &app.router,
            "POST",
            &format!("/api/leaves/{}/{}", id, action),
            &admin,
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}

#[tokio::test]
async fn test_reject_leave() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "reddedilen").await;
    let id = submit_leave(&app.router, &staff.token).await;

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/leaves/{}/reject", id),
        &admin,
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Rejected");

    let (_, body) = call(&app.router, "GET", "/api/leaves/pending", &admin, None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_store_rejects_unknown_leave_status() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "ham_kayit").await;

    let db = &app.db.connection;
    let sql = format!(
        "INSERT INTO leave_requests (employee_id, start_date, end_date, day_count, status) \
         VALUES ({}, '2025-01-01', '2025-01-02', 2, 'Cancelled')",
        staff.employee_id
    );
    let err = db
        .execute(Statement::from_string(db.get_database_backend(), sql))
        .await
        .unwrap_err();

    assert_eq!(ConstraintKind::classify(&err), Some(ConstraintKind::Check));
}
