use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, MySqlPool};

use super::{DEFAULT_TRAINER_IMAGE, DbError, json_list};

/// Editable course fields; the owning trainer is fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub mode: String,
    pub duration: Option<String>,
    pub fee: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub time_slots: Vec<Value>,
    pub tags: Option<String>,
    pub media: Option<String>,
}

#[derive(Debug, FromRow)]
struct CourseRow {
    id: i32,
    trainer_id: String,
    trainer_name: Option<String>,
    trainer_image: Option<String>,
    title: String,
    description: String,
    mode: String,
    duration: Option<String>,
    fee: Option<i32>,
    start_date: Option<NaiveDate>,
    time_slots: Option<String>,
    tags: Option<String>,
    media: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub trainer_id: String,
    pub trainer_name: Option<String>,
    pub trainer_image: Option<String>,
    pub title: String,
    pub description: String,
    pub mode: String,
    pub duration: Option<String>,
    pub fee: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub time_slots: Vec<Value>,
    pub tags: Option<String>,
    pub media: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Self {
            time_slots: json_list(r.time_slots.as_deref()),
            id: r.id,
            trainer_id: r.trainer_id,
            trainer_name: r.trainer_name,
            trainer_image: r.trainer_image,
            title: r.title,
            description: r.description,
            mode: r.mode,
            duration: r.duration,
            fee: r.fee,
            start_date: r.start_date,
            tags: r.tags,
            media: r.media,
            created_at: r.created_at,
        }
    }
}

impl Course {
    pub fn with_default_trainer_image(mut self) -> Self {
        if self.trainer_image.as_deref().is_none_or(|p| p.trim().is_empty()) {
            self.trainer_image = Some(DEFAULT_TRAINER_IMAGE.to_owned());
        }
        self
    }
}

const SELECT_COURSES: &str = r#"
    SELECT c.id, c.trainer_id, t.name AS trainer_name, t.profile_image AS trainer_image,
           c.title, c.description,
           c.mode, c.duration, c.fee, c.start_date, c.time_slots, c.tags,
           c.media, c.created_at
    FROM courses c
    LEFT JOIN trainers t ON t.id = c.trainer_id
"#;

pub struct CourseRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, trainer_id: &str, c: &CourseFields) -> Result<u64, DbError> {
        let time_slots = serde_json::to_string(&c.time_slots)?;

        let result = sqlx::query(
            r#"
            INSERT INTO courses (
                trainer_id, title, description, mode, duration,
                fee, start_date, time_slots, tags, media
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trainer_id)
        .bind(&c.title)
        .bind(&c.description)
        .bind(&c.mode)
        .bind(&c.duration)
        .bind(c.fee)
        .bind(c.start_date)
        .bind(&time_slots)
        .bind(&c.tags)
        .bind(&c.media)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    pub async fn get(&self, id: i32) -> Result<Course, DbError> {
        let sql = format!("{SELECT_COURSES} WHERE c.id = ?");
        let row: CourseRow = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("course", id))?;

        Ok(row.into())
    }

    pub async fn by_trainer(&self, trainer_id: &str) -> Result<Vec<Course>, DbError> {
        let sql = format!("{SELECT_COURSES} WHERE c.trainer_id = ? ORDER BY c.created_at DESC");
        let rows: Vec<CourseRow> = sqlx::query_as(&sql)
            .bind(trainer_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    /// Every course with its trainer's name, newest first.
    pub async fn all(&self) -> Result<Vec<Course>, DbError> {
        let sql = format!("{SELECT_COURSES} ORDER BY c.created_at DESC");
        let rows: Vec<CourseRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Course>, DbError> {
        let pattern = format!("%{keyword}%");
        let sql = format!(
            "{SELECT_COURSES} WHERE c.title LIKE ? OR c.description LIKE ? ORDER BY c.created_at DESC"
        );
        let rows: Vec<CourseRow> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Course::from(row).with_default_trainer_image())
            .collect())
    }

    pub async fn update(&self, id: i32, c: &CourseFields) -> Result<(), DbError> {
        let time_slots = serde_json::to_string(&c.time_slots)?;

        let result = sqlx::query(
            r#"
            UPDATE courses SET
                title = ?, description = ?, mode = ?, duration = ?,
                fee = ?, start_date = ?, time_slots = ?, tags = ?, media = ?
            WHERE id = ?
            "#,
        )
        .bind(&c.title)
        .bind(&c.description)
        .bind(&c.mode)
        .bind(&c.duration)
        .bind(c.fee)
        .bind(c.start_date)
        .bind(&time_slots)
        .bind(&c.tags)
        .bind(&c.media)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("course", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("course", id));
        }
        Ok(())
    }
}
