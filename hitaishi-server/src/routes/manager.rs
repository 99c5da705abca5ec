use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::Envelope;
use crate::db::repos::{OperationalRecord, OperationalReport, OperationalRepo, SaveAction};
use crate::{ApiError, AppState, ValidationError};

#[derive(Debug, Deserialize)]
pub struct OperationalRequest {
    pub manager_id: Option<u64>,
    #[serde(flatten)]
    pub report: OperationalReport,
}

#[derive(Debug, Serialize)]
pub struct Saved {
    pub action: SaveAction,
}

/// POST /api/manager/operational
async fn save_operational(
    State(state): State<AppState>,
    Json(req): Json<OperationalRequest>,
) -> Result<Json<Envelope<Saved>>, ApiError> {
    let manager_id = req
        .manager_id
        .filter(|id| *id > 0)
        .ok_or(ValidationError::Missing { field: "manager_id" })?;

    let action = OperationalRepo::new(state.pool())
        .save(manager_id, &req.report)
        .await?;
    info!(
        "Operational data for manager {}: {} villages, {} programs ({:?})",
        manager_id,
        req.report.villages.len(),
        req.report.programs.len(),
        action
    );

    let message = match action {
        SaveAction::Insert => "Saved successfully",
        SaveAction::Update => "Updated successfully",
    };
    Ok(Envelope::with_message(message, Saved { action }))
}

/// GET /api/manager/operational/{manager_id}
///
/// A manager with nothing saved yet gets `success` with no data.
async fn get_operational(
    State(state): State<AppState>,
    Path(manager_id): Path<u64>,
) -> Result<Json<Envelope<OperationalRecord>>, ApiError> {
    let record = OperationalRepo::new(state.pool()).get(manager_id).await?;

    Ok(match record {
        Some(record) => Envelope::with_message("Data found", record),
        None => Json(Envelope {
            success: true,
            message: Some("No operational data found".to_owned()),
            data: None,
        }),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/manager/operational", post(save_operational))
        .route("/manager/operational/{manager_id}", get(get_operational))
}
