use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{TestApp, assert_reached_database, assert_validation_error};
use crate::integration::init_tracing;

#[tokio::test]
async fn test_register_requires_password() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/register",
            json!({
                "fullname": "Asha",
                "email": "asha@example.com",
                "phone": "9999999999",
                "course": "Rust",
                "password": "abc"
            }),
        )
        .await;

    assert_validation_error(status, &body, "password");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/login", json!({ "email": "asha@example.com" }))
        .await;
    assert_validation_error(status, &body, "password");

    let (status, body) = app
        .post_json("/api/login-trainer", json!({ "password": "hunter22" }))
        .await;
    assert_validation_error(status, &body, "email");

    let (status, body) = app
        .post_json("/api/nplogin", json!({ "email": " ", "password": "hunter22" }))
        .await;
    assert_validation_error(status, &body, "email");
}

#[tokio::test]
async fn test_login_looks_up_the_account() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/login",
            json!({ "email": "asha@example.com", "password": "hunter22" }),
        )
        .await;

    assert_reached_database(status, &body);
}

#[tokio::test]
async fn test_trainer_password_reset_checks_new_password() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/reset-trainer-password",
            json!({ "email": "ravi@example.com", "newPassword": "12" }),
        )
        .await;

    assert_validation_error(status, &body, "newPassword");
}

#[tokio::test]
async fn test_member_registration_checks_type_and_aadhaar() {
    init_tracing();
    let app = TestApp::new();
    let member = json!({
        "name": "Ravi",
        "email": "ravi@example.org",
        "password": "hunter22",
        "user_type": "Volunteer",
        "aadhaar_number": "123456789012",
        "address_line1": "1 Main Road",
        "zip_code": "500001",
        "country": "India",
        "state": "Telangana",
        "district": "Hyderabad",
        "village": "Kondapur"
    });

    let (status, body) = app.post_json("/api/npregister", member.clone()).await;
    assert_validation_error(status, &body, "user_type");

    let mut short_aadhaar = member;
    short_aadhaar["user_type"] = json!("Donor");
    short_aadhaar["aadhaar_number"] = json!("1234");
    let (status, body) = app.post_json("/api/npregister", short_aadhaar).await;
    assert_validation_error(status, &body, "aadhaar_number");
}

#[tokio::test]
async fn test_member_profile_requires_age() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/npcomplete-profile",
            json!({ "userType": "Student", "data": { "userId": 4, "education": "B.Sc" } }),
        )
        .await;

    assert_validation_error(status, &body, "age");
}

#[tokio::test]
async fn test_member_dashboard_checks_type() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app.get("/api/npget-user-dashboard/4/Volunteer").await;

    assert_validation_error(status, &body, "user_type");
}

#[tokio::test]
async fn test_operational_report_requires_manager() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/manager/operational", json!({ "villages": ["Kondapur"] }))
        .await;

    assert_validation_error(status, &body, "manager_id");
}

#[tokio::test]
async fn test_translations_are_served_by_code() {
    init_tracing();
    let app = TestApp::new();
    std::fs::write(
        app.lang.path().join("hi.json"),
        r#"{"title":"हितैषी ट्रेनिंग में आपका स्वागत है"}"#,
    )
    .unwrap();

    let (status, body) = app.get("/api/lang/hi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "हितैषी ट्रेनिंग में आपका स्वागत है" }));

    let (status, body) = app.get("/api/lang/ta").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = app.get("/api/lang/english").await;
    assert_validation_error(status, &body, "code");
}

#[tokio::test]
async fn test_get_trainer_alias_is_routed() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app.get("/api/get-trainer/TID-00000000").await;

    assert_reached_database(status, &body);
}
