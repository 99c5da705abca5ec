use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use super::common::{Created, Envelope, deliver, outcome};
use crate::db::repos::{NewWebinarRegistration, WebinarRepo};
use crate::mail::templates;
use crate::{ApiError, AppState, email, optional, required};

#[derive(Debug, Deserialize)]
pub struct WebinarRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub topic: Option<String>,
}

/// POST /api/webinar-register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<WebinarRequest>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let reg = NewWebinarRegistration {
        name: required("name", req.name)?,
        email: email("email", req.email)?,
        phone: optional(req.phone),
        topic: optional(req.topic),
    };

    let id = WebinarRepo::new(state.pool()).register(&reg).await?;

    let mail = templates::webinar_confirmation(&reg.email, &reg.name, reg.topic.as_deref());
    let sent = deliver(&state, mail).await;

    Ok(Envelope::with_message(outcome("Registered for the webinar", sent), Created { id }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webinar-register", post(register))
}
