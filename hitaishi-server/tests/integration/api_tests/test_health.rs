use axum::http::StatusCode;
use serde_json::json;

use super::helpers::TestApp;
use crate::integration::init_tracing;

#[tokio::test]
async fn test_health() {
    init_tracing();
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
