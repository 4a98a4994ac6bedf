// tests/integration/timestamp_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::time::Duration;

fn instant(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_update_keeps_created_at_and_advances_updated_at() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (status, created) = call(
        &app.router,
        "POST",
        "/api/levels",
        &admin,
        Some(json!({ "name": "Uzman Yardımcısı", "rank": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created_at = instant(&created["data"]["created_at"]);
    let updated_at = instant(&created["data"]["updated_at"]);
    assert_eq!(created_at, updated_at);

    tokio::time::sleep(Duration::from_millis(20)).await;

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, updated) = call(
        &app.router,
        "PATCH",
        &format!("/api/levels/{}", id),
        &admin,
        Some(json!({ "rank": 25 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["rank"], 25);
    assert_eq!(instant(&updated["data"]["created_at"]), created_at);
    assert!(instant(&updated["data"]["updated_at"]) > updated_at);
}

#[tokio::test]
async fn test_custody_timestamps_use_utc_offset() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (status, body) = call(&app.router, "POST", "/api/zimmet/stocks", &admin, Some(stock_body(3))).await;
    assert_eq!(status, StatusCode::CREATED);

    for field in ["created_date", "last_modified"] {
        let raw = body["data"][field].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(raw).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0, "{} = {}", field, raw);
    }

    let id = body["data"]["id"].as_i64().unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    let (_, approved) = call(
        &app.router,
        "POST",
        &format!("/api/zimmet/stocks/{}/approve", id),
        &admin,
        None,
    )
    .await;
    assert_eq!(approved["data"]["created_date"], body["data"]["created_date"]);
    assert!(instant(&approved["data"]["last_modified"]) > instant(&body["data"]["last_modified"]));
}

#[tokio::test]
#[ignore = "requires Docker for the Postgres container"]
async fn test_migrations_and_seed_on_postgres() {
    use crate::common::app_helper::build_app;
    use crate::common::db::TestDatabase;
    use hr_backend::config::AppConfig;

    crate::common::init_test_env();
    let app = build_app(TestDatabase::postgres().await, AppConfig::for_testing());
    let admin = login_admin(&app.router).await;

    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let employee_id = create_employee(&app.router, &admin, position_id, None).await;
    let (status, body) = call(
        &app.router,
        "GET",
        &format!("/api/employees/{}", employee_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(instant(&body["data"]["created_at"]), instant(&body["data"]["updated_at"]));
}
