// tests/integration/auth_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_app().await;

    let (status, body) = send(&app.router, create_request("GET", "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_admin_login_returns_token_and_cookie() {
    let app = setup_app().await;

    let req = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD })),
    );
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));

    let (_, body) = login(&app.router, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["account"]["username"], ADMIN_USERNAME);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = setup_app().await;

    let (status, body) = login(&app.router, ADMIN_USERNAME, "Yanlis12345").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = login(&app.router, "olmayan_kullanici", ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = setup_app().await;

    let (status, _) = send(&app.router, create_request("GET", "/api/employees", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app.router, "GET", "/api/employees", "not-a-jwt", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_token_is_accepted() {
    let app = setup_app().await;
    let token = login_admin(&app.router).await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header(header::COOKIE, format!("access_token={}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app.router, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], ADMIN_USERNAME);
}

#[tokio::test]
async fn test_inactive_account_cannot_login() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "pasif_personel").await;

    let (status, body) = call(
        &app.router,
        "PATCH",
        &format!("/api/auth/accounts/{}/active", staff.account_id),
        &admin,
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);

    let (status, _) = login(&app.router, "pasif_personel", STAFF_PASSWORD).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_employee_can_have_only_one_account() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "tek_hesap").await;

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/employees/{}/account", staff.employee_id),
        &admin,
        Some(json!({ "username": "ikinci_hesap", "password": STAFF_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_weak_password_is_rejected() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let (_, position_id) = create_position_chain(&app.router, &admin).await;
    let employee_id = create_employee(&app.router, &admin, position_id, None).await;

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/employees/{}/account", employee_id),
        &admin,
        Some(json!({ "username": "zayif", "password": "sadecekucuk" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}
