// tests/integration/clock_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::{http::StatusCode, Router};
use serde_json::json;

async fn record(app: &Router, token: &str, employee_id: i32, clock_in: &str) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/api/clock-events",
        token,
        Some(json!({
            "employee_id": employee_id,
            "event_type": "Normal",
            "clock_in": clock_in,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap() as i32
}

#[tokio::test]
async fn test_clock_out_computes_worked_minutes() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let employee_id = create_employee(&app.router, &admin, position_id, None).await;
    let id = record(&app.router, &admin, employee_id, "2025-05-05T08:00:00Z").await;

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/clock-events/{}/clock-out", id),
        &admin,
        Some(json!({ "clock_out": "2025-05-05T17:30:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["worked_minutes"], 570);

    // 二重の退勤は不可
    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/clock-events/{}/clock-out", id),
        &admin,
        Some(json!({ "clock_out": "2025-05-05T18:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_clock_out_before_clock_in_is_rejected() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let employee_id = create_employee(&app.router, &admin, position_id, None).await;
    let id = record(&app.router, &admin, employee_id, "2025-05-05T08:00:00Z").await;

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/clock-events/{}/clock-out", id),
        &admin,
        Some(json!({ "clock_out": "2025-05-05T07:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_events_by_inclusive_date_range() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let employee_id = create_employee(&app.router, &admin, position_id, None).await;

    record(&app.router, &admin, employee_id, "2025-05-04T09:00:00Z").await;
    let first = record(&app.router, &admin, employee_id, "2025-05-05T09:00:00Z").await;
    let last = record(&app.router, &admin, employee_id, "2025-05-07T23:30:00Z").await;
    record(&app.router, &admin, employee_id, "2025-05-08T00:00:00Z").await;

    let (status, body) = call(
        &app.router,
        "GET",
        &format!(
            "/api/employees/{}/clock-events?from=2025-05-05&to=2025-05-07",
            employee_id
        ),
        &admin,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&(first as i64)));
    assert!(ids.contains(&(last as i64)));

    let (_, body) = call(
        &app.router,
        "GET",
        &format!("/api/employees/{}/clock-events", employee_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_reversed_range_is_rejected() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let employee_id = create_employee(&app.router, &admin, position_id, None).await;

    let (status, _) = call(
        &app.router,
        "GET",
        &format!(
            "/api/employees/{}/clock-events?from=2025-05-07&to=2025-05-05",
            employee_id
        ),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
