use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use hitaishi_server::app;
use hitaishi_server::upload::{DEFAULT_MAX_UPLOAD_BYTES, UploadStore};

use crate::integration::create_test_state;
use crate::utils::RecordingMailer;

pub struct TestApp {
    pub router: Router,
    pub mailer: RecordingMailer,
    pub uploads: TempDir,
    pub lang: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_upload_limit(DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// App whose file-accepting routes refuse bodies over `max_bytes`.
    pub fn with_upload_limit(max_bytes: usize) -> Self {
        let uploads = tempfile::tempdir().expect("temp dir");
        let lang = tempfile::tempdir().expect("temp dir");
        let mailer = RecordingMailer::new();
        let state = create_test_state(
            UploadStore::new(uploads.path()).with_max_bytes(max_bytes),
            lang.path(),
            Arc::new(mailer.clone()),
        );

        Self {
            router: app(state),
            mailer,
            uploads,
            lang,
        }
    }

    pub fn stored_uploads(&self) -> usize {
        std::fs::read_dir(self.uploads.path()).unwrap().count()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(&self, uri: &str, form: MultipartBody) -> (StatusCode, Value) {
        self.send_multipart(Request::post(uri), form).await
    }

    pub async fn put_multipart(&self, uri: &str, form: MultipartBody) -> (StatusCode, Value) {
        self.send_multipart(Request::put(uri), form).await
    }

    async fn send_multipart(
        &self,
        request: axum::http::request::Builder,
        form: MultipartBody,
    ) -> (StatusCode, Value) {
        let request = request
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", MultipartBody::BOUNDARY),
            )
            .body(Body::from(form.finish()))
            .unwrap();
        self.send(request).await
    }
}

/// Hand-built `multipart/form-data` payload.
#[derive(Default)]
pub struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    pub const BOUNDARY: &'static str = "hitaishi-test-boundary";

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                Self::BOUNDARY,
                name,
                value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                Self::BOUNDARY,
                name,
                file_name
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{}--\r\n", Self::BOUNDARY).as_bytes());
        self.buf
    }
}

/// Rejected by the handler, not by the (unreachable) database.
pub fn assert_reached_database(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body}");
    assert_eq!(body["error"], "internal_error");
}

pub fn assert_validation_error(status: StatusCode, body: &Value, field: &str) {
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "validation_error");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(
        message.starts_with(field),
        "expected message about {field}, got {message}"
    );
}
