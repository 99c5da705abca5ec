use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::common::{Created, Envelope};
use crate::db::repos::{COMPLEXITIES, NewProject, Project, ProjectRepo};
use crate::{ApiError, AppState, ValidationError, one_of, optional, required};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub project_name: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub technologies: Option<String>,
    pub languages: Option<String>,
    pub complexity: Option<String>,
    pub country: Option<String>,
    pub startup_company: Option<String>,
}

impl TryFrom<ProjectRequest> for NewProject {
    type Error = ValidationError;

    fn try_from(req: ProjectRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            project_name: required("projectName", req.project_name)?,
            short_description: required("shortDescription", req.short_description)?,
            category: required("category", req.category)?,
            technologies: required("technologies", req.technologies)?,
            languages: required("languages", req.languages)?,
            complexity: one_of(
                "complexity",
                required("complexity", req.complexity)?,
                COMPLEXITIES,
            )?,
            country: required("country", req.country)?,
            startup_company: required("startupCompany", req.startup_company)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub search: Option<String>,
}

/// POST /api/submit-project
async fn submit_project(
    State(state): State<AppState>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<Envelope<Created>>, ApiError> {
    let project = NewProject::try_from(req)?;
    let id = ProjectRepo::new(state.pool()).create(&project).await?;

    Ok(Envelope::with_message("Project submitted successfully", Created { id }))
}

/// GET /api/projects?search=
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Envelope<Vec<Project>>>, ApiError> {
    let search = optional(query.search);
    let projects = ProjectRepo::new(state.pool())
        .list(search.as_deref())
        .await?;

    Ok(Envelope::data(projects))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-project", post(submit_project))
        .route("/projects", get(list_projects))
}
