// tests/integration/recruitment_tests.rs

use crate::common::app_helper::setup_app;
use crate::common::auth_helper::*;
use crate::common::test_data::*;
use axum::{http::StatusCode, Router};
use serde_json::{json, Value};

async fn create_posting(app: &Router, token: &str) -> i32 {
    let department_id = create_department(app, token).await;
    let (status, body) = call(
        app,
        "POST",
        "/api/job-postings",
        token,
        Some(json!({
            "title": "Kıdemli Rust Geliştirici",
            "description": "Arka uç servisleri geliştirecek ekip arkadaşı arıyoruz.",
            "department_id": department_id,
            "closing_date": "2025-12-31",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["status"], "Draft");
    body["data"]["id"].as_i64().unwrap() as i32
}

async fn publish(app: &Router, token: &str, posting_id: i32) {
    let (status, body) = call(
        app,
        "PATCH",
        &format!("/api/job-postings/{}", posting_id),
        token,
        Some(json!({ "status": "Published" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Published");
    assert!(body["data"]["published_at"].is_string());
}

async fn create_candidate(app: &Router, token: &str) -> i32 {
    let n = next_suffix();
    let (status, body) = call(
        app,
        "POST",
        "/api/candidates",
        token,
        Some(json!({
            "first_name": "Elif",
            "last_name": "Demir",
            "email": format!("aday{}@example.com", n),
            "languages": [
                { "language": "İngilizce", "reading": 5, "writing": 4, "speaking": 4 },
                { "language": "Almanca", "reading": 2, "writing": 1, "speaking": 2 },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["status"], "New");
    body["data"]["id"].as_i64().unwrap() as i32
}

async fn apply(app: &Router, token: &str, posting_id: i32, candidate_id: i32) -> (StatusCode, Value) {
    call(
        app,
        "POST",
        &format!("/api/job-postings/{}/applications", posting_id),
        token,
        Some(json!({ "candidate_id": candidate_id })),
    )
    .await
}

#[tokio::test]
async fn test_only_published_postings_accept_applications() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let posting_id = create_posting(&app.router, &admin).await;
    let candidate_id = create_candidate(&app.router, &admin).await;

    let (status, _) = apply(&app.router, &admin, posting_id, candidate_id).await;
    assert_eq!(status, StatusCode::CONFLICT);

    publish(&app.router, &admin, posting_id).await;
    let (status, body) = apply(&app.router, &admin, posting_id, candidate_id).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "Submitted");

    // 同じ候補者は同じ求人に一度だけ応募できる
    let (status, _) = apply(&app.router, &admin, posting_id, candidate_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_candidate_detail_includes_languages() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let candidate_id = create_candidate(&app.router, &admin).await;

    let (status, body) = call(
        &app.router,
        "GET",
        &format!("/api/candidates/{}", candidate_id),
        &admin,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["languages"].as_array().unwrap().len(), 2);

    let (status, body) = call(&app.router, "GET", "/api/candidates?page=1&per_page=10&status=New", &admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total_count"], 1);
}

#[tokio::test]
async fn test_interview_moves_application_forward() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let interviewer = create_staff(&app.router, &admin, "mulakatci").await;
    let posting_id = create_posting(&app.router, &admin).await;
    publish(&app.router, &admin, posting_id).await;
    let candidate_id = create_candidate(&app.router, &admin).await;
    let (_, body) = apply(&app.router, &admin, posting_id, candidate_id).await;
    let application_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/applications/{}/interviews", application_id),
        &admin,
        Some(json!({
            "interviewer_id": interviewer.employee_id,
            "interview_type": "Technical",
            "scheduled_at": "2025-06-02T10:00:00Z",
            "duration_minutes": 60,
            "location": "Toplantı Odası 3",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let interview_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = call(&app.router, "GET", &format!("/api/applications/{}", application_id), &admin, None).await;
    assert_eq!(body["data"]["status"], "InterviewScheduled");

    let (_, body) = call(&app.router, "GET", "/api/interviews/mine", &interviewer.token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = call(
        &app.router,
        "PATCH",
        &format!("/api/interviews/{}", interview_id),
        &interviewer.token,
        Some(json!({ "score": 8, "notes": "Güçlü sistem bilgisi" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"], 8);
}

#[tokio::test]
async fn test_accepted_offer_hires_candidate() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let posting_id = create_posting(&app.router, &admin).await;
    publish(&app.router, &admin, posting_id).await;
    let candidate_id = create_candidate(&app.router, &admin).await;
    let (_, body) = apply(&app.router, &admin, posting_id, candidate_id).await;
    let application_id = body["data"]["id"].as_i64().unwrap();

    let offer = json!({ "salary": 85000, "start_date": "2025-09-01" });
    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/applications/{}/offer", application_id),
        &admin,
        Some(offer.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let offer_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/applications/{}/offer", application_id),
        &admin,
        Some(offer),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = call(&app.router, "GET", &format!("/api/candidates/{}", candidate_id), &admin, None).await;
    assert_eq!(body["data"]["status"], "OfferSent");

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/offers/{}/decision", offer_id),
        &admin,
        Some(json!({ "accept": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_accepted"], true);

    let (_, body) = call(&app.router, "GET", &format!("/api/applications/{}", application_id), &admin, None).await;
    assert_eq!(body["data"]["status"], "Accepted");
    assert!(body["data"]["decided_at"].is_string());

    let (_, body) = call(&app.router, "GET", &format!("/api/candidates/{}", candidate_id), &admin, None).await;
    assert_eq!(body["data"]["status"], "Hired");

    // 回答済みのオファーは変更できない
    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/offers/{}/decision", offer_id),
        &admin,
        Some(json!({ "accept": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_declined_offer_withdraws_application() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let posting_id = create_posting(&app.router, &admin).await;
    publish(&app.router, &admin, posting_id).await;
    let candidate_id = create_candidate(&app.router, &admin).await;
    let (_, body) = apply(&app.router, &admin, posting_id, candidate_id).await;
    let application_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = call(
        &app.router,
        "POST",
        &format!("/api/applications/{}/offer", application_id),
        &admin,
        Some(json!({ "salary": 60000, "start_date": "2025-10-01" })),
    )
    .await;
    let offer_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/offers/{}/decision", offer_id),
        &admin,
        Some(json!({ "accept": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app.router, "GET", &format!("/api/applications/{}", application_id), &admin, None).await;
    assert_eq!(body["data"]["status"], "Withdrawn");

    // 終端状態からは動かせない
    let (status, _) = call(
        &app.router,
        "PATCH",
        &format!("/api/applications/{}/status", application_id),
        &admin,
        Some(json!({ "status": "UnderReview" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_offer_cannot_be_accepted_after_application_rejected() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let posting_id = create_posting(&app.router, &admin).await;
    publish(&app.router, &admin, posting_id).await;
    let candidate_id = create_candidate(&app.router, &admin).await;
    let (_, body) = apply(&app.router, &admin, posting_id, candidate_id).await;
    let application_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call(
        &app.router,
        "POST",
        &format!("/api/applications/{}/offer", application_id),
        &admin,
        Some(json!({ "salary": 70000, "start_date": "2025-11-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let offer_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = call(
        &app.router,
        "PATCH",
        &format!("/api/applications/{}/status", application_id),
        &admin,
        Some(json!({ "status": "Rejected" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app.router,
        "POST",
        &format!("/api/offers/{}/decision", offer_id),
        &admin,
        Some(json!({ "accept": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = call(&app.router, "GET", &format!("/api/applications/{}", application_id), &admin, None).await;
    assert_eq!(body["data"]["status"], "Rejected");
    let (_, body) = call(&app.router, "GET", &format!("/api/candidates/{}", candidate_id), &admin, None).await;
    assert_ne!(body["data"]["status"], "Hired");
}
