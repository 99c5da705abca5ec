use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{FromRow, MySqlPool};

use super::{DbError, json_list};

/// A manager's field report: villages, people and programs they run.
///
/// The front-end owns the shape of each entry; the server stores them as
/// opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalReport {
    #[serde(default)]
    pub villages: Vec<Value>,
    #[serde(default)]
    pub trainers: Vec<Value>,
    #[serde(default)]
    pub programs: Vec<Value>,
    #[serde(default)]
    pub students_by_village: Vec<Value>,
    #[serde(default)]
    pub resources: Map<String, Value>,
    #[serde(default)]
    pub totals: Map<String, Value>,
}

/// Keys match what the dashboard posts: `manager_id` and `updated_at` stay
/// snake case, the report sections are camel case.
#[derive(Debug, Clone, Serialize)]
pub struct OperationalRecord {
    pub manager_id: i32,
    #[serde(flatten)]
    pub report: OperationalReport,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct OperationalRow {
    manager_id: i32,
    villages: Option<String>,
    trainers: Option<String>,
    programs: Option<String>,
    students_by_village: Option<String>,
    resources: Option<String>,
    totals: Option<String>,
    updated_at: DateTime<Utc>,
}

fn json_object(column: Option<&str>) -> Map<String, Value> {
    column
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

impl From<OperationalRow> for OperationalRecord {
    fn from(r: OperationalRow) -> Self {
        Self {
            manager_id: r.manager_id,
            report: OperationalReport {
                villages: json_list(r.villages.as_deref()),
                trainers: json_list(r.trainers.as_deref()),
                programs: json_list(r.programs.as_deref()),
                students_by_village: json_list(r.students_by_village.as_deref()),
                resources: json_object(r.resources.as_deref()),
                totals: json_object(r.totals.as_deref()),
            },
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    Insert,
    Update,
}

pub struct OperationalRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> OperationalRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// One report per manager; a second save replaces the first.
    pub async fn save(&self, manager_id: u64, r: &OperationalReport) -> Result<SaveAction, DbError> {
        let villages = serde_json::to_string(&r.villages)?;
        let trainers = serde_json::to_string(&r.trainers)?;
        let programs = serde_json::to_string(&r.programs)?;
        let students_by_village = serde_json::to_string(&r.students_by_village)?;
        let resources = serde_json::to_string(&r.resources)?;
        let totals = serde_json::to_string(&r.totals)?;

        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id FROM manager_operational WHERE manager_id = ? FOR UPDATE")
                .bind(manager_id)
                .fetch_optional(&mut *tx)
                .await?;

        let action = if existing.is_some() {
            sqlx::query(
                r#"
                UPDATE manager_operational SET
                    villages = ?, trainers = ?, programs = ?, students_by_village = ?,
                    resources = ?, totals = ?, updated_at = NOW()
                WHERE manager_id = ?
                "#,
            )
            .bind(&villages)
            .bind(&trainers)
            .bind(&programs)
            .bind(&students_by_village)
            .bind(&resources)
            .bind(&totals)
            .bind(manager_id)
            .execute(&mut *tx)
            .await?;
            SaveAction::Update
        } else {
            sqlx::query(
                r#"
                INSERT INTO manager_operational (
                    manager_id, villages, trainers, programs,
                    students_by_village, resources, totals
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(manager_id)
            .bind(&villages)
            .bind(&trainers)
            .bind(&programs)
            .bind(&students_by_village)
            .bind(&resources)
            .bind(&totals)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DbError::not_found("manager", manager_id)
                }
                _ => DbError::Sqlx(e),
            })?;
            SaveAction::Insert
        };

        tx.commit().await?;
        Ok(action)
    }

    pub async fn get(&self, manager_id: u64) -> Result<Option<OperationalRecord>, DbError> {
        let row: Option<OperationalRow> = sqlx::query_as(
            r#"
            SELECT manager_id, villages, trainers, programs, students_by_village,
                   resources, totals, updated_at
            FROM manager_operational
            WHERE manager_id = ?
            "#,
        )
        .bind(manager_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(OperationalRecord::from))
    }
}
