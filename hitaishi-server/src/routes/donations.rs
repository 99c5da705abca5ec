use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::common::{Created, Envelope};
use crate::db::repos::{Donation, DonationRepo, NewDonation};
use crate::{ApiError, AppState, ValidationError, optional, parse_date, positive, required};

/// Field names follow the collection form, which posts snake_case.
#[derive(Debug, Default, Deserialize)]
pub struct DonationRequest {
    pub village_name: Option<String>,
    pub collection_date: Option<String>,
    pub manager_name: Option<String>,
    pub team_members: Option<String>,
    pub trainers: Option<String>,
    pub amount: Option<f64>,
}

impl TryFrom<DonationRequest> for NewDonation {
    type Error = ValidationError;

    fn try_from(req: DonationRequest) -> Result<Self, Self::Error> {
        let collection_date = required("collection_date", req.collection_date)?;

        Ok(Self {
            village_name: required("village_name", req.village_name)?,
            collection_date: parse_date("collection_date", &collection_date)?,
            manager_name: required("manager_name", req.manager_name)?,
            team_members: optional(req.team_members),
            trainers: optional(req.trainers),
            amount: positive("amount", req.amount)?,
        })
    }
}

/// POST /api/offlinedonations
async fn create_donation(
    State(state): State<AppState>,
    Json(req): Json<DonationRequest>,
) -> Result<(StatusCode, Json<Envelope<Created>>), ApiError> {
    let donation = NewDonation::try_from(req)?;
    let id = DonationRepo::new(state.pool()).create(&donation).await?;

    Ok((
        StatusCode::CREATED,
        Envelope::with_message("Donation recorded", Created { id }),
    ))
}

/// GET /api/offlinedonations
async fn list_donations(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Donation>>>, ApiError> {
    let donations = DonationRepo::new(state.pool()).list().await?;
    Ok(Envelope::data(donations))
}

/// GET /api/offlinedonations/{id}
async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<Donation>>, ApiError> {
    let donation = DonationRepo::new(state.pool()).get(id).await?;
    Ok(Envelope::data(donation))
}

/// DELETE /api/offlinedonations/{id}
async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<()>>, ApiError> {
    DonationRepo::new(state.pool()).delete(id).await?;
    Ok(Envelope::message("Donation deleted"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/offlinedonations", get(list_donations).post(create_donation))
        .route(
            "/offlinedonations/{id}",
            get(get_donation).delete(delete_donation),
        )
}
