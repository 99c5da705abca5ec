use crate::PasswordError;
use crate::db::DbError;
use crate::lang::LangError;
use crate::upload::UploadError;
use crate::validation::ValidationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

/// Handler error; rendered as `{"success": false, "error", "message"}`.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Unauthorized { message: String },
    Conflict { message: String },
    NotFound { resource: &'static str, id: String },
    Upload(UploadError),
    Database(DbError),
    Internal { message: String },
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
            Self::Unauthorized { message } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message.clone())
            }
            Self::Conflict { message } => (StatusCode::CONFLICT, "conflict", message.clone()),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{} '{}' not found", resource, id),
            ),
            Self::Upload(e @ UploadError::TooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", e.to_string())
            }
            Self::Upload(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, "upload_error", e.to_string())
            }
            Self::Upload(e) => {
                error!("Upload error: {}", e);
                internal()
            }
            Self::Database(e) => {
                error!("Database error: {}", e);
                internal()
            }
            Self::Internal { message } => {
                error!("Internal error: {}", message);
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "an internal error occurred".to_owned(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = json!({
            "success": false,
            "error": code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        Self::Internal {
            message: e.to_string(),
        }
    }
}

impl From<LangError> for ApiError {
    fn from(e: LangError) -> Self {
        match e {
            LangError::InvalidCode(code) => Self::Validation(ValidationError::Invalid {
                field: "code",
                reason: format!("'{code}' is not a language code"),
            }),
            LangError::Missing(code) => Self::NotFound {
                resource: "language",
                id: code,
            },
            _ => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Duplicate { resource } => Self::Conflict {
                message: format!("{} already exists", resource),
            },
            _ => Self::Database(e),
        }
    }
}
