use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::{ApiError, AppState};

/// GET /api/lang/{code}
///
/// The translation file itself, unwrapped, so the front-end can use it as
/// its message table.
async fn get_translations(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let messages = state.translations().load(&code).await?;
    Ok(Json(messages))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/lang/{code}", get(get_translations))
}
