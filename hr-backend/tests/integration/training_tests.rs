// tests/integration/training_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::{http::StatusCode, Router};
use serde_json::{json, Value};

async fn create_training(app: &Router, token: &str) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/api/trainings",
        token,
        Some(json!({
            "title": "İş Sağlığı ve Güvenliği",
            "video_url": "https://video.example.com/isg-temel",
            "duration_minutes": 45,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["is_active"], true);
    body["data"]["id"].as_i64().unwrap() as i32
}

async fn assign(app: &Router, token: &str, training_id: i32, employee_ids: &[i32]) -> Value {
    let (status, body) = call(
        app,
        "POST",
        &format!("/api/trainings/{}/assignments", training_id),
        token,
        Some(json!({ "employee_ids": employee_ids, "due_date": "2025-12-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"].clone()
}

async fn report(app: &Router, token: &str, assignment_id: i64, percent: i32) -> (StatusCode, Value) {
    call(
        app,
        "POST",
        &format!("/api/trainings/assignments/{}/progress", assignment_id),
        token,
        Some(json!({ "watched_percent": percent })),
    )
    .await
}

#[tokio::test]
async fn test_progress_to_completion_issues_certificate() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "egitimde").await;
    let training_id = create_training(&app.router, &admin).await;

    let assignments = assign(&app.router, &admin, training_id, &[staff.employee_id]).await;
    let assignment_id = assignments[0]["id"].as_i64().unwrap();
    assert_eq!(assignments[0]["status"], "Assigned");
    assert_eq!(assignments[0]["watched_percent"], 0);

    let (status, body) = report(&app.router, &staff.token, assignment_id, 40).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "InProgress");
    assert!(body["data"]["certificate_code"].is_null());

    // 進捗は後退しない
    let (_, body) = report(&app.router, &staff.token, assignment_id, 10).await;
    assert_eq!(body["data"]["watched_percent"], 40);

    let (_, body) = report(&app.router, &staff.token, assignment_id, 100).await;
    assert_eq!(body["data"]["status"], "Completed");
    assert!(body["data"]["completed_at"].is_string());
    let code = body["data"]["certificate_code"].as_str().unwrap().to_string();
    assert!(code.starts_with("CRT-"));

    // 修了後の報告は何も変えない
    let (_, body) = report(&app.router, &staff.token, assignment_id, 50).await;
    assert_eq!(body["data"]["certificate_code"], code.as_str());
    assert_eq!(body["data"]["watched_percent"], 100);

    let (_, body) = call(&app.router, "GET", "/api/trainings/mine", &staff.token, None).await;
    assert_eq!(body["data"][0]["status"], "Completed");
}

#[tokio::test]
async fn test_only_assignee_reports_progress() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "atanan").await;
    let other = create_staff(&app.router, &admin, "baskasi").await;
    let training_id = create_training(&app.router, &admin).await;

    let assignments = assign(&app.router, &admin, training_id, &[staff.employee_id]).await;
    let assignment_id = assignments[0]["id"].as_i64().unwrap();

    let (status, _) = report(&app.router, &other.token, assignment_id, 100).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_assignment_is_idempotent_per_employee() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let first = create_staff(&app.router, &admin, "birinci").await;
    let second = create_staff(&app.router, &admin, "ikinci").await;
    let training_id = create_training(&app.router, &admin).await;

    let initial = assign(&app.router, &admin, training_id, &[first.employee_id]).await;
    let again = assign(
        &app.router,
        &admin,
        training_id,
        &[first.employee_id, second.employee_id],
    )
    .await;

    assert_eq!(again.as_array().unwrap().len(), 2);
    assert_eq!(again[0]["id"], initial[0]["id"]);

    let (_, body) = call(
        &app.router,
        "GET",
        &format!("/api/trainings/{}/assignments", training_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_inactive_training_cannot_be_assigned() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "pasif_egitim").await;
    let training_id = create_training(&app.router, &admin).await;

    let (status, _) = call(
        &app.router,
        "PATCH",
        &format!("/api/trainings/{}", training_id),
        &admin,
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app.router, "GET", "/api/trainings?only_active=true", &admin, None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/trainings/{}/assignments", training_id),
        &admin,
        Some(json!({ "employee_ids": [staff.employee_id] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
