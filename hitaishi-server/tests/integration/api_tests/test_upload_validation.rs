use axum::http::StatusCode;

use super::helpers::{MultipartBody, TestApp, assert_validation_error};
use crate::integration::init_tracing;

#[tokio::test]
async fn test_resume_requires_file() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default().text("email", "asha@example.com");
    let (status, body) = app.post_multipart("/api/submit-resume", form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "upload_error");
    assert_eq!(body["message"], "resume file is required");
}

#[tokio::test]
async fn test_resume_rejects_empty_file() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default()
        .text("email", "asha@example.com")
        .file("resume", "cv.pdf", b"");
    let (status, body) = app.post_multipart("/api/submit-resume", form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "resume file is empty");
}

#[tokio::test]
async fn test_resume_requires_email_before_storing() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default().file("resume", "cv.pdf", b"%PDF-1.4");
    let (status, body) = app.post_multipart("/api/submit-resume", form).await;

    assert_validation_error(status, &body, "email");
    let stored = std::fs::read_dir(app.uploads.path()).unwrap().count();
    assert_eq!(stored, 0, "nothing is written for a rejected submission");
}

#[tokio::test]
async fn test_trainer_profile_requires_id() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default()
        .text("gender", "female")
        .text("experience", "4");
    let (status, body) = app
        .post_multipart("/api/complete-trainer-profile", form)
        .await;

    assert_validation_error(status, &body, "trainerId");
}

#[tokio::test]
async fn test_trainer_experience_must_be_numeric() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default()
        .text("trainerId", "TID-00000000")
        .text("experience", "lots");
    let (status, body) = app
        .post_multipart("/api/complete-trainer-profile", form)
        .await;

    assert_validation_error(status, &body, "experience");
}

#[tokio::test]
async fn test_resume_above_default_body_limit_is_read() {
    init_tracing();
    let app = TestApp::new();

    // Larger than axum's 2 MB default, smaller than the configured limit.
    let resume = vec![b'x'; 3 * 1024 * 1024];
    let form = MultipartBody::default().file("resume", "cv.pdf", &resume);
    let (status, body) = app.post_multipart("/api/submit-resume", form).await;

    assert_validation_error(status, &body, "email");
}

#[tokio::test]
async fn test_resume_over_limit_is_413() {
    init_tracing();
    let app = TestApp::with_upload_limit(64 * 1024);

    let resume = vec![b'x'; 128 * 1024];
    let form = MultipartBody::default()
        .text("email", "asha@example.com")
        .file("resume", "cv.pdf", &resume);
    let (status, body) = app.post_multipart("/api/submit-resume", form).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "payload_too_large");
    assert_eq!(app.stored_uploads(), 0);
}

#[tokio::test]
async fn test_profile_image_over_limit_is_413() {
    init_tracing();
    let app = TestApp::with_upload_limit(64 * 1024);

    let image = vec![0u8; 128 * 1024];
    let form = MultipartBody::default()
        .text("fullname", "Asha")
        .text("phone", "9999999999")
        .text("course", "Rust")
        .file("profileImage", "me.png", &image);
    let (status, body) = app
        .put_multipart("/api/profile/asha@example.com", form)
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE, "body: {body}");
    assert_eq!(app.stored_uploads(), 0);
}

#[tokio::test]
async fn test_profile_update_is_multipart() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default()
        .text("phone", "9999999999")
        .text("course", "Rust")
        .text("existingProfileImage", "/uploads/1700-me.png")
        .file("resume", "cv.pdf", b"%PDF-1.4");
    let (status, body) = app
        .put_multipart("/api/profile/asha@example.com", form)
        .await;

    assert_validation_error(status, &body, "fullname");
    assert_eq!(app.stored_uploads(), 0, "nothing is written for a rejected update");
}

#[tokio::test]
async fn test_profile_update_rejects_bad_list() {
    init_tracing();
    let app = TestApp::new();

    let form = MultipartBody::default()
        .text("fullname", "Asha")
        .text("phone", "9999999999")
        .text("course", "Rust")
        .text("skills", "[\"rust\"");
    let (status, body) = app
        .put_multipart("/api/profile/asha@example.com", form)
        .await;

    assert_validation_error(status, &body, "skills");
}
