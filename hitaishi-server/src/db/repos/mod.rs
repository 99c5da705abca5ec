//! One repository per table. Each borrows the pool for the length of a
//! request and returns [`DbError`].

mod contacts;
mod courses;
mod donations;
mod enrollments;
mod newsletter;
mod nonprofit;
mod operational;
mod overseas;
mod plans;
mod projects;
mod resumes;
mod trainers;
mod users;
mod webinars;

pub use contacts::*;
pub use courses::*;
pub use donations::*;
pub use enrollments::*;
pub use newsletter::*;
pub use nonprofit::*;
pub use operational::*;
pub use overseas::*;
pub use plans::*;
pub use projects::*;
pub use resumes::*;
pub use trainers::*;
pub use users::*;
pub use webinars::*;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("{resource} already exists")]
    Duplicate { resource: &'static str },

    #[error("failed to encode column: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DbError {
    /// Map a unique-key violation on insert to [`DbError::Duplicate`].
    pub(crate) fn on_insert(resource: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate { resource },
            _ => Self::Sqlx(e),
        }
    }

    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Decode a JSON list column, treating null or garbage as empty.
pub(crate) fn json_list(column: Option<&str>) -> Vec<Value> {
    column
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}
