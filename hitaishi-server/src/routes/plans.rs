use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::common::{Created, Envelope, deliver};
use crate::db::repos::PlanOrderRepo;
use crate::mail::templates;
use crate::{ApiError, AppState, email, positive, required};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoosePlanRequest {
    pub user_id: Option<String>,
    pub plan: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PlanEmailRequest {
    pub email: Option<String>,
    pub plan: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummaryRequest {
    pub email: Option<String>,
    pub plan_name: Option<String>,
    /// Shown as-is; forms send both numbers and formatted strings.
    pub price: Option<Value>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// POST /api/choose-plan
async fn choose_plan(
    State(state): State<AppState>,
    Json(req): Json<ChoosePlanRequest>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let user_id = required("userId", req.user_id)?;
    let plan = required("plan", req.plan)?;
    let price = positive("price", req.price)?;

    let id = PlanOrderRepo::new(state.pool())
        .create(&user_id, &plan, price)
        .await?;

    Ok(Envelope::with_message("Plan successfully selected!", Created { id }))
}

/// POST /api/plan-email
async fn plan_email(
    State(state): State<AppState>,
    Json(req): Json<PlanEmailRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let email = email("email", req.email)?;
    let plan = required("plan", req.plan)?;

    send_or_fail(&state, templates::plan_interest(&email, &plan)).await
}

/// POST /api/send-plan-email
async fn send_plan_email(
    State(state): State<AppState>,
    Json(req): Json<PlanSummaryRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let email = email("email", req.email)?;
    let plan = required("planName", req.plan_name)?;
    let price = match req.price {
        Some(Value::String(s)) => required("price", Some(s))?,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(crate::ValidationError::Missing { field: "price" }.into()),
    };

    send_or_fail(&state, templates::plan_summary(&email, &plan, &price, &req.features)).await
}

/// These endpoints write nothing, so a failed send is the failure.
async fn send_or_fail(
    state: &AppState,
    mail: crate::mail::Email,
) -> Result<Json<Envelope<()>>, ApiError> {
    if deliver(state, mail).await {
        Ok(Envelope::message("Email sent successfully!"))
    } else {
        Err(ApiError::Internal {
            message: "plan email could not be sent".to_owned(),
        })
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/choose-plan", post(choose_plan))
        .route("/plan-email", post(plan_email))
        .route("/send-plan-email", post(send_plan_email))
}
