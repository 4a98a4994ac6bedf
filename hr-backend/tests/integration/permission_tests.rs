// tests/integration/permission_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::{http::StatusCode, Router};
use hr_backend::config::PermissionFetchPolicy;
use hr_backend::navigation::{
    Action, GrantSource, HttpGrantSource, PermissionCheck, PermissionLoadError, PermissionLoader,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

fn grant(code: &str, read: bool, create: bool, update: bool, delete: bool) -> Value {
    json!({
        "screen_code": code,
        "can_read": read,
        "can_create": create,
        "can_update": update,
        "can_delete": delete,
    })
}

async fn set_grants(app: &Router, token: &str, level_id: i32, grants: Vec<Value>) -> (StatusCode, Value) {
    call(
        app,
        "PUT",
        &format!("/api/levels/{}/grants", level_id),
        token,
        Some(json!({ "grants": grants })),
    )
    .await
}

fn labels(menu: &Value) -> Vec<String> {
    menu.as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["label"].as_str().unwrap().to_string())
        .collect()
}

/// ルーターを実ポートで起動し、ベース URL を返す
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_menu_shows_only_granted_screens() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "menu_personel").await;

    let (status, body) = set_grants(
        &app.router,
        &admin,
        staff.level_id,
        vec![grant("personeller", true, false, false, false)],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["grants"].as_array().unwrap().len(), 1);

    let (status, body) = call(&app.router, "GET", "/api/navigation", &staff.token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["allow_all"], false);

    let menu = &body["data"]["menu"];
    assert_eq!(labels(menu), vec!["Ana Sayfa", "Personel", "Profilim"]);
    let personel = &menu[1]["children"];
    assert_eq!(labels(personel), vec!["Personeller"]);
    assert_eq!(personel[0]["path"], "/personeller");
}

#[tokio::test]
async fn test_level_without_grants_sees_only_ungated_entries() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "yetkisiz").await;

    let (_, body) = call(&app.router, "GET", "/api/navigation", &staff.token, None).await;
    assert_eq!(labels(&body["data"]["menu"]), vec!["Ana Sayfa", "Profilim"]);

    let (_, body) = call(&app.router, "GET", "/api/permissions/me", &staff.token, None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_sees_full_menu() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (_, body) = call(&app.router, "GET", "/api/navigation", &admin, None).await;
    let menu = &body["data"]["menu"];
    assert_eq!(
        labels(menu),
        vec![
            "Ana Sayfa",
            "Organizasyon",
            "Personel",
            "İzin",
            "Zimmet",
            "Eğitim",
            "İşe Alım",
            "Yönetim",
            "Profilim",
        ]
    );
}

#[tokio::test]
async fn test_row_actions_follow_grants() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "satir_aksiyon").await;
    set_grants(
        &app.router,
        &admin,
        staff.level_id,
        vec![grant("personeller", true, false, true, false)],
    )
    .await;

    let (status, body) = call(
        &app.router,
        "GET",
        "/api/navigation/actions/personeller",
        &staff.token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["view", "edit"]);
}

#[tokio::test]
async fn test_unknown_screen_code_leaves_grants_unchanged() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "bilinmeyen").await;
    set_grants(
        &app.router,
        &admin,
        staff.level_id,
        vec![grant("adaylar", true, true, true, true)],
    )
    .await;

    let (status, _) = set_grants(
        &app.router,
        &admin,
        staff.level_id,
        vec![
            grant("personeller", true, false, false, false),
            grant("olmayan-ekran", true, false, false, false),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call(
        &app.router,
        "GET",
        &format!("/api/levels/{}/grants", staff.level_id),
        &admin,
        None,
    )
    .await;
    let grants = body["data"]["grants"].as_array().unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0]["screen_code"], "adaylar");
}

#[tokio::test]
async fn test_http_grant_source_reads_permissions_endpoint() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let staff = create_staff(&app.router, &admin, "uzak_kaynak").await;
    set_grants(
        &app.router,
        &admin,
        staff.level_id,
        vec![grant("izin-talepleri", true, true, false, false)],
    )
    .await;
    let base_url = serve(app.router.clone()).await;

    let source = HttpGrantSource::new(base_url.clone(), staff.token.clone());
    let grants = source.fetch().await.unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0].screen_code, "izin-talepleri");
    assert!(grants[0].actions.can_create);

    let loader = PermissionLoader::new(Arc::new(source), PermissionFetchPolicy::Deny);
    loader.load().await.unwrap();
    assert!(loader.has_permission("izin-talepleri", Action::Create));
    assert!(!loader.has_permission("izin-talepleri", Action::Delete));
    assert!(!loader.has_permission("personeller", Action::Read));
}

#[tokio::test]
async fn test_http_grant_source_failure_follows_policy() {
    let app = setup_app().await;
    let base_url = serve(app.router.clone()).await;

    let deny = PermissionLoader::new(
        Arc::new(HttpGrantSource::new(base_url.clone(), "gecersiz-token")),
        PermissionFetchPolicy::Deny,
    );
    let err = deny.load().await.unwrap_err();
    assert!(matches!(err, PermissionLoadError::Status(401)));
    assert!(!deny.is_loaded());
    assert!(!deny.has_permission("personeller", Action::Read));

    let allow = PermissionLoader::new(
        Arc::new(HttpGrantSource::new(base_url, "gecersiz-token")),
        PermissionFetchPolicy::Allow,
    );
    assert!(allow.load().await.unwrap().is_allow_all());
    assert!(allow.has_permission("ekran-yetkileri", Action::Delete));
}
