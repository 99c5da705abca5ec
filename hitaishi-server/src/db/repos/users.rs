use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, MySqlPool};

use super::{DbError, json_list};

/// Profile fields a student can set at registration and edit later.
#[derive(Debug, Clone, Default)]
pub struct UserDetails {
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub certificates: Option<String>,
    pub resume: Option<String>,
    pub profile_image: Option<String>,
    pub skills: Vec<Value>,
    pub languages: Vec<Value>,
    pub education: Vec<Value>,
    pub jobs: Vec<Value>,
    pub extra_course: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    /// Argon2 PHC string, never the password itself.
    pub password_hash: String,
    pub details: UserDetails,
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub fullname: String,
    pub phone: String,
    pub course: String,
    pub details: UserDetails,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    fullname: String,
    email: String,
    phone: String,
    course: String,
    dob: Option<NaiveDate>,
    gender: Option<String>,
    address: Option<String>,
    certificates: Option<String>,
    resume: Option<String>,
    profile_image: Option<String>,
    skills: Option<String>,
    languages: Option<String>,
    education: Option<String>,
    jobs: Option<String>,
    extra_course: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub certificates: Option<String>,
    pub resume: Option<String>,
    pub profile_image: Option<String>,
    pub skills: Vec<Value>,
    pub languages: Vec<Value>,
    pub education: Vec<Value>,
    pub jobs: Vec<Value>,
    pub extra_course: Option<String>,
}

impl From<UserRow> for UserProfile {
    fn from(r: UserRow) -> Self {
        Self {
            skills: json_list(r.skills.as_deref()),
            languages: json_list(r.languages.as_deref()),
            education: json_list(r.education.as_deref()),
            jobs: json_list(r.jobs.as_deref()),
            id: r.id,
            fullname: r.fullname,
            email: r.email,
            phone: r.phone,
            course: r.course,
            dob: r.dob,
            gender: r.gender,
            address: r.address,
            certificates: r.certificates,
            resume: r.resume,
            profile_image: r.profile_image,
            extra_course: r.extra_course,
        }
    }
}

struct EncodedLists {
    skills: String,
    languages: String,
    education: String,
    jobs: String,
}

impl EncodedLists {
    fn from_details(d: &UserDetails) -> Result<Self, DbError> {
        Ok(Self {
            skills: serde_json::to_string(&d.skills)?,
            languages: serde_json::to_string(&d.languages)?,
            education: serde_json::to_string(&d.education)?,
            jobs: serde_json::to_string(&d.jobs)?,
        })
    }
}

pub struct UserRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &NewUser) -> Result<(), DbError> {
        let d = &user.details;
        let lists = EncodedLists::from_details(d)?;

        sqlx::query(
            r#"
            INSERT INTO users (
                id, fullname, email, phone, course, password_hash,
                dob, gender, address, certificates, resume, profile_image,
                skills, languages, education, jobs, extra_course
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.course)
        .bind(&user.password_hash)
        .bind(d.dob)
        .bind(&d.gender)
        .bind(&d.address)
        .bind(&d.certificates)
        .bind(&d.resume)
        .bind(&d.profile_image)
        .bind(&lists.skills)
        .bind(&lists.languages)
        .bind(&lists.education)
        .bind(&lists.jobs)
        .bind(&d.extra_course)
        .execute(self.pool)
        .await
        .map_err(DbError::on_insert("user"))?;

        Ok(())
    }

    /// Stored hash for `email`; `None` when there is no such user or the
    /// account predates passwords.
    pub async fn password_hash(&self, email: &str) -> Result<Option<String>, DbError> {
        let hash: Option<Option<String>> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(self.pool)
                .await?;

        Ok(hash.flatten())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<UserProfile, DbError> {
        let row: UserRow = sqlx::query_as(
            r#"
            SELECT id, fullname, email, phone, course, dob, gender, address,
                   certificates, resume, profile_image,
                   skills, languages, education, jobs, extra_course
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("user", email))?;

        Ok(row.into())
    }

    pub async fn update_profile(&self, email: &str, update: &ProfileUpdate) -> Result<(), DbError> {
        let d = &update.details;
        let lists = EncodedLists::from_details(d)?;

        let result = sqlx::query(
            r#"
            UPDATE users SET
                fullname = ?, phone = ?, course = ?,
                dob = ?, gender = ?, address = ?, certificates = ?, extra_course = ?,
                skills = ?, languages = ?, education = ?, jobs = ?,
                resume = ?, profile_image = ?
            WHERE email = ?
            "#,
        )
        .bind(&update.fullname)
        .bind(&update.phone)
        .bind(&update.course)
        .bind(d.dob)
        .bind(&d.gender)
        .bind(&d.address)
        .bind(&d.certificates)
        .bind(&d.extra_course)
        .bind(&lists.skills)
        .bind(&lists.languages)
        .bind(&lists.education)
        .bind(&lists.jobs)
        .bind(&d.resume)
        .bind(&d.profile_image)
        .bind(email)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user", email));
        }
        Ok(())
    }
}
