use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

pub const COMPLEXITIES: &[&str] = &["Beginner", "Intermediate", "Advanced"];

#[derive(Debug, Clone)]
pub struct NewProject {
    pub project_name: String,
    pub short_description: String,
    pub category: String,
    pub technologies: String,
    pub languages: String,
    pub complexity: String,
    pub country: String,
    pub startup_company: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub project_name: String,
    pub short_description: String,
    pub category: String,
    pub technologies: String,
    pub languages: String,
    pub complexity: String,
    pub country: String,
    pub startup_company: String,
    pub submitted_at: DateTime<Utc>,
}

pub struct ProjectRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, p: &NewProject) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (
                project_name, short_description, category, technologies,
                languages, complexity, country, startup_company
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&p.project_name)
        .bind(&p.short_description)
        .bind(&p.category)
        .bind(&p.technologies)
        .bind(&p.languages)
        .bind(&p.complexity)
        .bind(&p.country)
        .bind(&p.startup_company)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    /// All projects, or those whose name, technologies or languages contain `search`.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Project>, DbError> {
        let projects: Vec<Project> = match search {
            Some(term) => {
                let pattern = format!("%{term}%");
                sqlx::query_as(
                    r#"
                    SELECT * FROM projects
                    WHERE project_name LIKE ? OR technologies LIKE ? OR languages LIKE ?
                    ORDER BY submitted_at DESC
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM projects ORDER BY submitted_at DESC")
                    .fetch_all(self.pool)
                    .await?
            }
        };

        Ok(projects)
    }
}
