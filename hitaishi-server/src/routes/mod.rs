//! `/api` endpoints, one module per resource.

mod common;
mod contact;
mod courses;
mod donations;
mod enrollments;
mod health;
mod lang;
mod manager;
mod newsletter;
mod nonprofit;
mod overseas;
mod plans;
mod projects;
mod resumes;
mod search;
mod trainers;
mod users;
mod webinars;

pub use common::{Created, Envelope};
pub use health::health;

use crate::AppState;
use axum::Router;

/// `upload_limit` caps request bodies on the routes that accept files.
pub fn router(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .merge(contact::router())
        .merge(newsletter::router())
        .merge(plans::router())
        .merge(users::router(upload_limit))
        .merge(trainers::router(upload_limit))
        .merge(courses::router())
        .merge(enrollments::router())
        .merge(webinars::router())
        .merge(resumes::router(upload_limit))
        .merge(donations::router())
        .merge(projects::router())
        .merge(overseas::router())
        .merge(search::router())
        .merge(nonprofit::router())
        .merge(manager::router())
        .merge(lang::router())
}
