// tests/integration/organization_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_duplicate_department_code_is_conflict() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let body = json!({ "name": "Bilgi Teknolojileri", "code": "IT-01" });
    let (status, _) = call(&app.router, "POST", "/api/departments", &admin, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let again = json!({ "name": "Başka Departman", "code": "IT-01" });
    let (status, body) = call(&app.router, "POST", "/api/departments", &admin, Some(again)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "constraint_violation");
}

#[tokio::test]
async fn test_department_code_format_is_validated() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let body = json!({ "name": "Muhasebe", "code": "muhasebe" });
    let (status, body) = call(&app.router, "POST", "/api/departments", &admin, Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_errors");
}

#[tokio::test]
async fn test_position_requires_existing_level() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let department_id = create_department(&app.router, &admin).await;

    let body = json!({ "name": "Analist", "department_id": department_id, "level_id": 9999 });
    let (status, _) = call(&app.router, "POST", "/api/positions", &admin, Some(body)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_department_in_use_cannot_be_deleted() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let level_id = create_level(&app.router, &admin, 5).await;
    let department_id = create_department(&app.router, &admin).await;
    create_position(&app.router, &admin, department_id, level_id).await;

    let (status, body) = call(
        &app.router,
        "DELETE",
        &format!("/api/departments/{}", department_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "constraint_violation");

    // 参照されている職位も消せない
    let (status, body) = call(
        &app.router,
        "DELETE",
        &format!("/api/levels/{}", level_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "constraint_violation");
}

#[tokio::test]
async fn test_positions_filtered_by_department() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let level_id = create_level(&app.router, &admin, 5).await;
    let first = create_department(&app.router, &admin).await;
    let second = create_department(&app.router, &admin).await;
    create_position(&app.router, &admin, first, level_id).await;
    create_position(&app.router, &admin, first, level_id).await;
    create_position(&app.router, &admin, second, level_id).await;

    let (status, body) = call(
        &app.router,
        "GET",
        &format!("/api/positions?department_id={}", first),
        &admin,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let positions = body["data"].as_array().unwrap();
    assert_eq!(positions.len(), 2);
    assert!(positions.iter().all(|p| p["department_id"] == first));
}

#[tokio::test]
async fn test_city_lifecycle() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let body = json!({ "name": "İzmir", "plate_code": 35 });
    let (status, body) = call(&app.router, "POST", "/api/cities", &admin, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let city_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = call(&app.router, "GET", "/api/cities", &admin, None).await;
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["name"] == "İzmir"));

    let (status, body) = call(
        &app.router,
        "PATCH",
        &format!("/api/cities/{}", city_id),
        &admin,
        Some(json!({ "name": "Izmir" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Izmir");
    assert_eq!(body["data"]["plate_code"], 35);

    let (status, _) = call(
        &app.router,
        "PATCH",
        &format!("/api/cities/{}", city_id),
        &admin,
        Some(json!({ "plate_code": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app.router,
        "DELETE",
        &format!("/api/cities/{}", city_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app.router,
        "GET",
        &format!("/api/cities/{}", city_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
