// tests/integration/employee_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::http::StatusCode;
use hr_backend::error::AppError;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_employee() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;

    let mut body = employee_body(position_id, None);
    body["email"] = json!("Mehmet.Kaya@Example.com");
    body["first_name"] = json!("Mehmet");
    body["last_name"] = json!("Kaya");
    let (status, created) = call(&app.router, "POST", "/api/employees", &admin, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["full_name"], "Mehmet Kaya");
    assert_eq!(created["data"]["email"], "mehmet.kaya@example.com");
    assert_eq!(created["data"]["is_active"], true);

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, fetched) = call(&app.router, "GET", &format!("/api/employees/{}", id), &admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["national_id"], created["data"]["national_id"]);
}

#[tokio::test]
async fn test_duplicate_national_id_is_conflict() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;

    let first = employee_body(position_id, None);
    let mut second = employee_body(position_id, None);
    second["national_id"] = first["national_id"].clone();

    let (status, _) = call(&app.router, "POST", "/api/employees", &admin, Some(first)).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = call(&app.router, "POST", "/api/employees", &admin, Some(second)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "constraint_violation");
}

#[tokio::test]
async fn test_national_id_format_is_validated() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;

    for invalid in ["01234567890", "1234567890", "1234567890a"] {
        let mut body = employee_body(position_id, None);
        body["national_id"] = json!(invalid);
        let (status, _) = call(&app.router, "POST", "/api/employees", &admin, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", invalid);
    }
}

#[tokio::test]
async fn test_employee_cannot_manage_themselves() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let id = create_employee(&app.router, &admin, position_id, None).await;

    let (status, _) = call(
        &app.router,
        "PUT",
        &format!("/api/employees/{}/manager", id),
        &admin,
        Some(json!({ "manager_id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_manager_cycle_is_rejected() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;

    // a <- b <- c
    let a = create_employee(&app.router, &admin, position_id, None).await;
    let b = create_employee(&app.router, &admin, position_id, Some(a)).await;
    let c = create_employee(&app.router, &admin, position_id, Some(b)).await;

    let err = app
        .state
        .employee_service
        .set_manager(a, Some(c))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    // 循環しない付け替えは可能
    let updated = app.state.employee_service.set_manager(c, Some(a)).await.unwrap();
    assert_eq!(updated.manager_id, Some(a));
}

#[tokio::test]
async fn test_deleting_manager_clears_reports_manager() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let manager = create_employee(&app.router, &admin, position_id, None).await;
    let report = create_employee(&app.router, &admin, position_id, Some(manager)).await;

    let (status, body) = call(
        &app.router,
        "GET",
        &format!("/api/employees/{}/reports", manager),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = call(
        &app.router,
        "DELETE",
        &format!("/api/employees/{}", manager),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let remaining = app.state.employee_service.get_employee(report).await.unwrap();
    assert_eq!(remaining.manager_id, None);
}

#[tokio::test]
async fn test_deleting_employee_cascades_to_owned_records() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "silinecek").await;

    let (status, leave) = call(
        &app.router,
        "POST",
        "/api/leaves",
        &staff.token,
        Some(json!({ "start_date": "2025-03-10", "end_date": "2025-03-12" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let leave_id = leave["data"]["id"].as_i64().unwrap() as i32;

    let (status, event) = call(
        &app.router,
        "POST",
        "/api/clock-events",
        &admin,
        Some(json!({
            "employee_id": staff.employee_id,
            "event_type": "Normal",
            "clock_in": "2025-03-10T08:30:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let event_id = event["data"]["id"].as_i64().unwrap() as i32;

    app.state
        .employee_service
        .delete_employee(staff.employee_id)
        .await
        .unwrap();

    assert!(matches!(
        app.state.auth_service.get_account(staff.account_id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        app.state.leave_service.get_request(leave_id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        app.state.clock_service.get_event(event_id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_employees_with_query_filters() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    for _ in 0..3 {
        create_employee(&app.router, &admin, position_id, None).await;
    }
    let inactive = create_employee(&app.router, &admin, position_id, None).await;
    let (status, _) = call(
        &app.router,
        "PATCH",
        &format!("/api/employees/{}", inactive),
        &admin,
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!(
        "/api/employees?page=1&per_page=2&is_active=true&position_id={}",
        position_id
    );
    let (status, body) = call(&app.router, "GET", &uri, &admin, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["total_count"], 3);
    assert_eq!(body["data"]["pagination"]["total_pages"], 2);

    let uri = format!("/api/employees?is_active=false&position_id={}", position_id);
    let (_, body) = call(&app.router, "GET", &uri, &admin, None).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], inactive);
}

#[tokio::test]
async fn test_invalid_path_id_is_bad_request() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (status, _) = call(&app.router, "GET", "/api/employees/abc", &admin, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app.router, "GET", "/api/employees/0", &admin, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
