//! Disk-backed storage for multipart uploads.

mod form;

pub use form::{MultipartForm, UploadedFile};

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Request body cap for multipart routes unless configured otherwise.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(MultipartError),

    #[error("upload exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("{field} file is required")]
    MissingFile { field: &'static str },

    #[error("{field} file is empty")]
    EmptyFile { field: &'static str },

    #[error("upload storage failed: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Sort a multipart read failure; hitting the body limit is not a
    /// formatting problem.
    pub(crate) fn from_multipart(e: MultipartError, limit: usize) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge { limit }
        } else {
            Self::Multipart(e)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name the client sent.
    pub original_name: String,
    /// Name inside the upload directory; what database rows reference.
    pub stored_name: String,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Largest request body accepted on routes that take files.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub async fn save(&self, file: &UploadedFile) -> Result<StoredFile, UploadError> {
        let stored_name = stored_name(&file.file_name);
        self.ensure_dir().await?;
        tokio::fs::write(self.dir.join(&stored_name), &file.data).await?;

        info!(
            "Stored upload '{}' as {} ({} bytes)",
            file.file_name,
            stored_name,
            file.data.len()
        );
        Ok(StoredFile {
            original_name: file.file_name.clone(),
            stored_name,
        })
    }
}

/// Last path component of a client-supplied path, either separator style.
pub fn base_name(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Unique, path-free name for an uploaded file that keeps its extension.
pub fn stored_name(original: &str) -> String {
    let base = base_name(original).unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    let cleaned = if cleaned.is_empty() { "file" } else { cleaned };

    let tag = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", Utc::now().timestamp_millis(), &tag[..8], cleaned)
}
