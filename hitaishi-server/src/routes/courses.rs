use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::common::{Created, Envelope};
use crate::db::repos::{Course, CourseFields, CourseRepo};
use crate::{ApiError, AppState, ValidationError, optional, optional_date, required};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub trainer_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub mode: Option<String>,
    pub duration: Option<String>,
    pub fee: Option<i32>,
    pub start_date: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<Value>,
    pub tags: Option<String>,
    pub media: Option<String>,
}

impl CourseRequest {
    fn fields(self) -> Result<CourseFields, ValidationError> {
        if let Some(fee) = self.fee.filter(|fee| *fee < 0) {
            return Err(ValidationError::Invalid {
                field: "fee",
                reason: format!("must not be negative, got {fee}"),
            });
        }

        Ok(CourseFields {
            title: required("title", self.title)?,
            description: required("description", self.description)?,
            mode: required("mode", self.mode)?,
            duration: optional(self.duration),
            fee: self.fee,
            start_date: optional_date("startDate", self.start_date)?,
            time_slots: self.time_slots,
            tags: optional(self.tags),
            media: optional(self.media),
        })
    }
}

/// POST /api/submit-course
async fn submit_course(
    State(state): State<AppState>,
    Json(mut req): Json<CourseRequest>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let trainer_id = required("trainerId", req.trainer_id.take())?;
    let fields = req.fields()?;

    let id = CourseRepo::new(state.pool())
        .create(&trainer_id, &fields)
        .await?;

    Ok(Envelope::with_message("Course submitted successfully", Created { id }))
}

/// GET /api/my-courses/{trainer_id}
async fn my_courses(
    State(state): State<AppState>,
    Path(trainer_id): Path<String>,
) -> Result<Json<Envelope<Vec<Course>>>, ApiError> {
    let courses = CourseRepo::new(state.pool()).by_trainer(&trainer_id).await?;
    Ok(Envelope::data(courses))
}

/// GET /api/course/{id}
async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = CourseRepo::new(state.pool()).get(id).await?;
    Ok(Envelope::data(course))
}

/// PUT /api/course/{id}
async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CourseRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let fields = req.fields()?;
    CourseRepo::new(state.pool()).update(id, &fields).await?;
    Ok(Envelope::message("Course updated successfully"))
}

/// DELETE /api/delete-course/{id}
async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<()>>, ApiError> {
    CourseRepo::new(state.pool()).delete(id).await?;
    Ok(Envelope::message("Course deleted successfully"))
}

/// GET /api/all-trainer-courses
async fn all_courses(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Course>>>, ApiError> {
    let courses = CourseRepo::new(state.pool()).all().await?;
    Ok(Envelope::data(courses))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-course", post(submit_course))
        .route("/my-courses/{trainer_id}", get(my_courses))
        .route("/course/{id}", get(get_course).put(update_course))
        .route("/delete-course/{id}", delete(delete_course))
        .route("/all-trainer-courses", get(all_courses))
}
