use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{TestApp, assert_reached_database, assert_validation_error};
use crate::integration::init_tracing;

#[tokio::test]
async fn test_contact_requires_message() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/contact",
            json!({ "name": "Asha", "email": "asha@example.com", "message": "   " }),
        )
        .await;

    assert_validation_error(status, &body, "message");
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_subscribe_rejects_bad_email() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/subscribe", json!({ "email": "not-an-address" }))
        .await;

    assert_validation_error(status, &body, "email");
}

#[tokio::test]
async fn test_choose_plan_requires_positive_price() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/choose-plan",
            json!({ "userId": "u1", "plan": "Gold", "price": -10 }),
        )
        .await;

    assert_validation_error(status, &body, "price");
}

#[tokio::test]
async fn test_register_requires_phone() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/register",
            json!({ "fullname": "Asha", "email": "asha@example.com", "course": "Rust" }),
        )
        .await;

    assert_validation_error(status, &body, "phone");
}

#[tokio::test]
async fn test_enroll_rejects_unknown_addon_answer() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/enroll",
            json!({
                "fullName": "Ravi",
                "email": "ravi@example.com",
                "service": [],
                "training": ["Rust"],
                "needsAddons": "sometimes",
                "addon": []
            }),
        )
        .await;

    assert_validation_error(status, &body, "needsAddons");
}

#[tokio::test]
async fn test_donation_date_must_be_iso() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/offlinedonations",
            json!({
                "village_name": "Kondapur",
                "collection_date": "02/11/2024",
                "manager_name": "Lakshmi",
                "amount": 100
            }),
        )
        .await;

    assert_validation_error(status, &body, "collection_date");
}

#[tokio::test]
async fn test_project_complexity_is_checked() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/submit-project",
            json!({
                "projectName": "Relay",
                "shortDescription": "Signaling",
                "category": "Networking",
                "technologies": "axum",
                "languages": "Rust",
                "complexity": "Guru",
                "country": "India",
                "startupCompany": "Hitaishi"
            }),
        )
        .await;

    assert_validation_error(status, &body, "complexity");
}

#[tokio::test]
async fn test_overseas_course_requires_country() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/overseas-courses",
            json!({ "university_name": "TU Munich", "course_name": "MSc Informatics" }),
        )
        .await;

    assert_validation_error(status, &body, "country");
}

#[tokio::test]
async fn test_blank_search_lists_everything() {
    init_tracing();
    let app = TestApp::new();

    for uri in ["/api/search?q=", "/api/search?q=%20%20", "/api/search"] {
        let (status, body) = app.get(uri).await;
        assert_reached_database(status, &body);
    }
}

#[tokio::test]
async fn test_enroll_without_addon_answer_is_accepted() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/enroll",
            json!({
                "fullName": "Ravi",
                "email": "ravi@example.com",
                "training": ["Rust"]
            }),
        )
        .await;

    assert_reached_database(status, &body);
}

#[tokio::test]
async fn test_enroll_checks_name_before_addons() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/enroll",
            json!({ "email": "ravi@example.com", "needsAddons": "sometimes" }),
        )
        .await;

    assert_validation_error(status, &body, "fullName");
}

#[tokio::test]
async fn test_overseas_blank_filters_are_ignored() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/overseas-courses?country=&maxFee=&intake=%20")
        .await;

    assert_reached_database(status, &body);
}

#[tokio::test]
async fn test_overseas_fee_must_be_numeric() {
    init_tracing();
    let app = TestApp::new();

    let (status, _) = app.get("/api/overseas-courses?maxFee=cheap").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_course_requires_trainer() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/submit-course",
            json!({ "title": "Axum", "description": "Web", "mode": "online" }),
        )
        .await;

    assert_validation_error(status, &body, "trainerId");
}
