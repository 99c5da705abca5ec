use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};

use super::common::{Created, Envelope, deliver, outcome};
use crate::db::repos::ResumeRepo;
use crate::mail::templates;
use crate::upload::MultipartForm;
use crate::{ApiError, AppState, email};

/// POST /api/submit-resume (multipart)
async fn submit_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let mut form = MultipartForm::read(multipart, state.uploads().max_bytes()).await?;

    let email = email("email", form.text("email"))?;
    let resume = form.require_file("resume")?;

    let stored = state.uploads().save(&resume).await?;
    let id = ResumeRepo::new(state.pool())
        .create(&email, &stored.original_name, &stored.stored_name)
        .await?;

    let review = templates::resume_for_review(
        state.review_address(),
        &email,
        &stored.original_name,
        &stored.stored_name,
    );
    let reviewed = deliver(&state, review).await;
    let acknowledged = deliver(&state, templates::resume_received(&email)).await;

    Ok(Envelope::with_message(
        outcome("Resume submitted", reviewed && acknowledged),
        Created { id },
    ))
}

pub fn router(upload_limit: usize) -> Router<AppState> {
    Router::new().route(
        "/submit-resume",
        post(submit_resume).layer(DefaultBodyLimit::max(upload_limit)),
    )
}
