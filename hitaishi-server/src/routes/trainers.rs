use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::Envelope;
use crate::db::repos::{
    Course, CourseRepo, DEFAULT_TRAINER_IMAGE, TrainerDetail, TrainerProfileUpdate, TrainerRepo,
    TrainerSummary, new_trainer_id,
};
use crate::upload::MultipartForm;
use crate::{
    ApiError, AppState, ValidationError, email, hash_password, optional, optional_date, password,
    required, verify_password,
};

#[derive(Debug, Deserialize)]
pub struct TrainerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrainerLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSession {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Upload URL of the photo, or the placeholder image.
    pub profile_image: String,
}

fn profile_image_url(stored: Option<&str>) -> String {
    match stored.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => format!("/uploads/{name}"),
        None => DEFAULT_TRAINER_IMAGE.to_owned(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerCreated {
    pub trainer_id: String,
}

/// POST /api/register-trainer
async fn register_trainer(
    State(state): State<AppState>,
    Json(req): Json<TrainerRequest>,
) -> Result<Json<Envelope<TrainerCreated>>, ApiError> {
    let name = required("name", req.name)?;
    let email = email("email", req.email)?;
    let password = password("password", req.password)?;
    let trainer_id = new_trainer_id();

    TrainerRepo::new(state.pool())
        .create(&trainer_id, &name, &email, &hash_password(&password)?)
        .await?;
    info!("Registered trainer {} ({})", trainer_id, email);

    Ok(Envelope::with_message(
        "Trainer registered successfully",
        TrainerCreated { trainer_id },
    ))
}

/// POST /api/login-trainer
async fn login_trainer(
    State(state): State<AppState>,
    Json(req): Json<TrainerLoginRequest>,
) -> Result<Json<Envelope<TrainerSession>>, ApiError> {
    let email = required("email", req.email)?;
    let password = required("password", req.password)?;

    let trainer = TrainerRepo::new(state.pool())
        .credentials(&email)
        .await?
        .filter(|t| {
            t.password_hash
                .as_deref()
                .is_some_and(|hash| verify_password(&password, hash))
        })
        .ok_or_else(|| ApiError::Unauthorized {
            message: "invalid email or password".to_owned(),
        })?;
    info!("Trainer {} logged in", trainer.id);

    Ok(Envelope::with_message(
        "Login successful",
        TrainerSession {
            profile_image: profile_image_url(trainer.profile_image.as_deref()),
            id: trainer.id,
            name: trainer.name,
            email: trainer.email,
        },
    ))
}

/// POST /api/reset-trainer-password
async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let email = required("email", req.email)?;
    let password = password("newPassword", req.new_password)?;

    TrainerRepo::new(state.pool())
        .set_password(&email, &hash_password(&password)?)
        .await?;
    info!("Password reset for trainer {}", email);

    Ok(Envelope::message("Password updated"))
}

fn experience(value: Option<String>) -> Result<Option<i32>, ValidationError> {
    optional(value)
        .map(|v| {
            v.parse::<i32>()
                .ok()
                .filter(|years| *years >= 0)
                .ok_or(ValidationError::Invalid {
                    field: "experience",
                    reason: format!("expected a whole number of years, got '{v}'"),
                })
        })
        .transpose()
}

/// POST /api/complete-trainer-profile (multipart)
async fn complete_profile(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Envelope<()>>, ApiError> {
    let mut form = MultipartForm::read(multipart, state.uploads().max_bytes()).await?;

    let trainer_id = required("trainerId", form.text("trainerId"))?;
    let mut update = TrainerProfileUpdate {
        dob: optional_date("dob", form.text("dob"))?,
        gender: optional(form.text("gender")),
        phone: optional(form.text("phone")),
        address: optional(form.text("address")),
        qualification: optional(form.text("qualification")),
        experience: experience(form.text("experience"))?,
        skills: optional(form.text("skills")),
        certifications: optional(form.text("certifications")),
        linkedin: optional(form.text("linkedin")),
        profile_image: None,
    };

    if let Some(image) = form.file("profileImage") {
        let stored = state.uploads().save(&image).await?;
        update.profile_image = Some(stored.stored_name);
    }

    TrainerRepo::new(state.pool())
        .complete_profile(&trainer_id, &update)
        .await?;

    Ok(Envelope::message("Profile updated successfully"))
}

/// GET /api/trainers
async fn list_trainers(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<TrainerSummary>>>, ApiError> {
    let trainers = TrainerRepo::new(state.pool()).list().await?;
    Ok(Envelope::data(trainers))
}

/// GET /api/trainers/{id}, also mounted as /api/get-trainer/{id}
async fn get_trainer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<TrainerDetail>>, ApiError> {
    let trainer = TrainerRepo::new(state.pool()).get(&id).await?;
    Ok(Envelope::data(trainer))
}

/// GET /api/trainers/{id}/courses
async fn trainer_courses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<Course>>>, ApiError> {
    let courses = CourseRepo::new(state.pool()).by_trainer(&id).await?;
    Ok(Envelope::data(courses))
}

pub fn router(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/register-trainer", post(register_trainer))
        .route("/login-trainer", post(login_trainer))
        .route("/reset-trainer-password", post(reset_password))
        .route(
            "/complete-trainer-profile",
            post(complete_profile).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/trainers", get(list_trainers))
        .route("/trainers/{id}", get(get_trainer))
        .route("/get-trainer/{id}", get(get_trainer))
        .route("/trainers/{id}/courses", get(trainer_courses))
}
