use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use super::common::{Created, Envelope, deliver, outcome};
use crate::db::repos::{ContactRepo, NewContactMessage};
use crate::mail::templates;
use crate::{ApiError, AppState, email, optional, required};

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub message: Option<String>,
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let msg = NewContactMessage {
        name: required("name", req.name)?,
        email: email("email", req.email)?,
        phone: optional(req.phone),
        course: optional(req.course),
        message: required("message", req.message)?,
    };

    let id = ContactRepo::new(state.pool()).create(&msg).await?;

    let mail = templates::contact_received(&msg.email, &msg.name, msg.course.as_deref(), &msg.message);
    let sent = deliver(&state, mail).await;

    Ok(Envelope::with_message(outcome("Message saved", sent), Created { id }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}
