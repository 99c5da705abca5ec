use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use super::common::{Created, Envelope, deliver, outcome};
use crate::db::repos::{EnrollmentRepo, NewEnrollment};
use crate::mail::templates::{self, EnrollmentSummary};
use crate::{ApiError, AppState, ValidationError, email, one_of, optional, required};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualification: Option<String>,
    pub current_study: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    #[serde(default)]
    pub service: Vec<String>,
    #[serde(default)]
    pub training: Vec<String>,
    pub other_training_text: Option<String>,
    pub needs_addons: Option<String>,
    #[serde(default)]
    pub addon: Vec<String>,
}

/// Checkbox answers as one comma-separated string, blanks dropped.
fn join_answers<'a>(answers: impl IntoIterator<Item = &'a str>) -> String {
    answers
        .into_iter()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

impl EnrollRequest {
    fn into_enrollment(self) -> Result<NewEnrollment, ValidationError> {
        let full_name = required("fullName", self.full_name)?;
        let email = email("email", self.email)?;
        let needs_addons = needs_addons(self.needs_addons)?;

        let other_training_text = optional(self.other_training_text);
        let trainings = join_answers(
            self.training
                .iter()
                .map(String::as_str)
                .chain(other_training_text.as_deref()),
        );

        Ok(NewEnrollment {
            full_name,
            email,
            phone: optional(self.phone),
            qualification: optional(self.qualification),
            current_study: optional(self.current_study),
            address: optional(self.address),
            city: optional(self.city),
            state: optional(self.state),
            zip_code: optional(self.zip_code),
            services: join_answers(self.service.iter().map(String::as_str)),
            trainings,
            other_training_text,
            needs_addons,
            addons: join_answers(self.addon.iter().map(String::as_str)),
        })
    }
}

/// Unanswered counts as "no"; anything else must be yes or no.
fn needs_addons(answer: Option<String>) -> Result<bool, ValidationError> {
    match optional(answer) {
        None => Ok(false),
        Some(answer) => {
            Ok(one_of("needsAddons", answer.to_lowercase(), &["yes", "no"])? == "yes")
        }
    }
}

fn full_address(e: &NewEnrollment) -> String {
    [&e.address, &e.city, &e.state, &e.zip_code]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// POST /api/enroll
async fn enroll(
    State(state): State<AppState>,
    Json(req): Json<EnrollRequest>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let enrollment = req.into_enrollment()?;

    let id = EnrollmentRepo::new(state.pool()).create(&enrollment).await?;

    let summary = EnrollmentSummary {
        full_name: &enrollment.full_name,
        phone: enrollment.phone.as_deref(),
        qualification: enrollment.qualification.as_deref(),
        current_study: enrollment.current_study.as_deref(),
        address: full_address(&enrollment),
        services: &enrollment.services,
        trainings: &enrollment.trainings,
        needs_addons: enrollment.needs_addons,
        addons: &enrollment.addons,
    };
    let sent = deliver(&state, templates::enrollment_confirmation(&enrollment.email, &summary)).await;

    Ok(Envelope::with_message(outcome("Enrollment saved", sent), Created { id }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/enroll", post(enroll))
}
