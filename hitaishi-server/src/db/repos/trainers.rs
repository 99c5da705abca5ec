use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use super::DbError;

/// Shown for trainers who never uploaded a photo.
pub const DEFAULT_TRAINER_IMAGE: &str = "/images/default_trainer.png";

/// Trainer ids are short and human-readable: `TID-` plus 8 hex digits.
pub fn new_trainer_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("TID-{}", &simple[..8])
}

#[derive(Debug, Clone, Default)]
pub struct TrainerProfileUpdate {
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i32>,
    pub skills: Option<String>,
    pub certifications: Option<String>,
    pub linkedin: Option<String>,
    /// Replaces the stored image only when present.
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSummary {
    pub id: String,
    pub name: String,
    pub expertise: Option<String>,
    pub experience: Option<i32>,
    pub skills: Option<String>,
    pub profile_image: Option<String>,
}

impl TrainerSummary {
    pub fn with_default_image(mut self) -> Self {
        if self.profile_image.as_deref().is_none_or(|p| p.trim().is_empty()) {
            self.profile_image = Some(DEFAULT_TRAINER_IMAGE.to_owned());
        }
        self
    }
}

/// What a trainer login needs; the hash never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct TrainerCredentials {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainerDetail {
    pub id: String,
    pub name: String,
    pub email: String,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub expertise: Option<String>,
    pub experience: Option<i32>,
    pub skills: Option<String>,
    pub certifications: Option<String>,
    pub linkedin: Option<String>,
    pub profile_image: Option<String>,
}

const SUMMARY_COLUMNS: &str = r#"
    id, name, qualification AS expertise, experience, skills, profile_image
"#;

pub struct TrainerRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> TrainerRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        id: &str,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), DbError> {
        sqlx::query("INSERT INTO trainers (id, name, email, password_hash) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(self.pool)
            .await
            .map_err(DbError::on_insert("trainer"))?;

        Ok(())
    }

    pub async fn credentials(&self, email: &str) -> Result<Option<TrainerCredentials>, DbError> {
        let credentials = sqlx::query_as(
            "SELECT id, name, email, profile_image, password_hash FROM trainers WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(credentials)
    }

    pub async fn set_password(&self, email: &str, password_hash: &str) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE trainers SET password_hash = ? WHERE email = ?")
            .bind(password_hash)
            .bind(email)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("trainer", email));
        }
        Ok(())
    }

    pub async fn complete_profile(
        &self,
        trainer_id: &str,
        p: &TrainerProfileUpdate,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE trainers SET
                dob = ?, gender = ?, phone = ?, address = ?,
                qualification = ?, experience = ?, skills = ?,
                certifications = ?, linkedin = ?,
                profile_image = COALESCE(?, profile_image)
            WHERE id = ?
            "#,
        )
        .bind(p.dob)
        .bind(&p.gender)
        .bind(&p.phone)
        .bind(&p.address)
        .bind(&p.qualification)
        .bind(p.experience)
        .bind(&p.skills)
        .bind(&p.certifications)
        .bind(&p.linkedin)
        .bind(&p.profile_image)
        .bind(trainer_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("trainer", trainer_id));
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<TrainerSummary>, DbError> {
        let sql = format!("SELECT {SUMMARY_COLUMNS} FROM trainers ORDER BY name");
        let trainers: Vec<TrainerSummary> = sqlx::query_as(&sql).fetch_all(self.pool).await?;
        Ok(trainers)
    }

    pub async fn get(&self, id: &str) -> Result<TrainerDetail, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, email, dob, gender, phone, address,
                   qualification AS expertise, experience, skills,
                   certifications, linkedin, profile_image
            FROM trainers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("trainer", id))
    }

    /// Trainers whose name, skills or qualification contain `keyword`.
    pub async fn search(&self, keyword: &str) -> Result<Vec<TrainerSummary>, DbError> {
        let pattern = format!("%{keyword}%");
        let sql = format!(
            "SELECT {SUMMARY_COLUMNS} FROM trainers \
             WHERE name LIKE ? OR skills LIKE ? OR qualification LIKE ? \
             ORDER BY name"
        );

        let trainers: Vec<TrainerSummary> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(self.pool)
            .await?;
        Ok(trainers
            .into_iter()
            .map(TrainerSummary::with_default_image)
            .collect())
    }
}
