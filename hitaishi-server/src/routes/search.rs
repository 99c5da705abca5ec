use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::common::Envelope;
use crate::db::repos::{Course, CourseRepo, TrainerRepo, TrainerSummary};
use crate::{ApiError, AppState, optional};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// An empty or absent keyword matches everything.
    fn keyword(self) -> String {
        optional(self.q).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub trainers: Vec<TrainerSummary>,
    pub courses: Vec<Course>,
}

/// GET /api/search?q=
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Envelope<SearchResults>>, ApiError> {
    let keyword = query.keyword();

    let trainer_repo = TrainerRepo::new(state.pool());
    let course_repo = CourseRepo::new(state.pool());
    let (trainers, courses) = tokio::try_join!(
        trainer_repo.search(&keyword),
        course_repo.search(&keyword),
    )?;

    Ok(Envelope::data(SearchResults { trainers, courses }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search))
}
