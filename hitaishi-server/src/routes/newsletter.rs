use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::common::{Envelope, deliver, outcome};
use crate::db::repos::NewsletterRepo;
use crate::mail::templates;
use crate::{ApiError, AppState, email};

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

/// POST /api/subscribe
async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let email = email("email", req.email)?;

    let added = NewsletterRepo::new(state.pool()).subscribe(&email).await?;
    if !added {
        info!("{} was already subscribed", email);
    }

    let sent = deliver(&state, templates::newsletter_welcome(&email)).await;
    Ok(Envelope::message(outcome("Subscribed successfully", sent)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(subscribe))
}
