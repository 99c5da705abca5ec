use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use super::common::{Created, Envelope};
use crate::db::repos::{NewOverseasCourse, OverseasCourse, OverseasFilter, OverseasRepo, University};
use crate::{ApiError, AppState, ValidationError, optional};

/// Trims the text fields and checks the three that identify a course.
fn checked(mut c: NewOverseasCourse) -> Result<NewOverseasCourse, ValidationError> {
    c.university_name = optional(c.university_name);
    c.course_name = optional(c.course_name);
    c.country = optional(c.country);

    for (field, value) in [
        ("university_name", &c.university_name),
        ("course_name", &c.course_name),
        ("country", &c.country),
    ] {
        if value.is_none() {
            return Err(ValidationError::Missing { field });
        }
    }

    Ok(c)
}

/// GET /api/overseas-courses
async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<OverseasFilter>,
) -> Result<Json<Envelope<Vec<OverseasCourse>>>, ApiError> {
    let courses = OverseasRepo::new(state.pool()).list(&filter).await?;
    Ok(Envelope::data(courses))
}

/// POST /api/overseas-courses
async fn create_course(
    State(state): State<AppState>,
    Json(course): Json<NewOverseasCourse>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let course = checked(course)?;
    let id = OverseasRepo::new(state.pool()).create(&course).await?;

    Ok(Envelope::with_message("Course added successfully", Created { id }))
}

/// GET /api/overseas-courses/{id}
async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<OverseasCourse>>, ApiError> {
    let course = OverseasRepo::new(state.pool()).get(id).await?;
    Ok(Envelope::data(course))
}

/// GET /api/universities
async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<University>>>, ApiError> {
    let universities = OverseasRepo::new(state.pool()).universities().await?;
    Ok(Envelope::data(universities))
}

/// GET /api/universities/{name}
async fn university_courses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Envelope<Vec<OverseasCourse>>>, ApiError> {
    let courses = OverseasRepo::new(state.pool()).by_university(&name).await?;
    Ok(Envelope::data(courses))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overseas-courses", get(list_courses).post(create_course))
        .route("/overseas-courses/{id}", get(get_course))
        .route("/universities", get(list_universities))
        .route("/universities/{name}", get(university_courses))
}
