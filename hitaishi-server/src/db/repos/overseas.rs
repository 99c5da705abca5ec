use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use super::DbError;
use crate::optional;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewOverseasCourse {
    pub university_name: Option<String>,
    pub course_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub course_type: Option<String>,
    pub duration: Option<String>,
    pub tuition_fee: Option<f64>,
    pub intake_month: Option<String>,
    pub ielts_required: Option<f64>,
    pub toefl_required: Option<i32>,
    pub gpa_required: Option<f64>,
    pub scholarships: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    pub career_outcomes: Option<String>,
    pub course_structure: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OverseasCourse {
    pub id: i32,
    pub university_name: String,
    pub course_name: String,
    pub country: String,
    pub city: Option<String>,
    pub course_type: Option<String>,
    pub duration: Option<String>,
    pub tuition_fee: Option<f64>,
    pub intake_month: Option<String>,
    pub ielts_required: Option<f64>,
    pub toefl_required: Option<i32>,
    pub gpa_required: Option<f64>,
    pub scholarships: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    pub career_outcomes: Option<String>,
    pub course_structure: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct University {
    pub university_name: String,
    pub country: String,
    pub city: Option<String>,
}

/// Listing filters; every field narrows the result when set.
///
/// Search forms submit untouched inputs as `name=`, so blank values are
/// read as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverseasFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub course_type: Option<String>,
    /// Substring match.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "blank_or_fee")]
    pub max_fee: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub intake: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(Option::<String>::deserialize(deserializer)?))
}

fn blank_or_fee<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = blank_as_none(deserializer)? else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(fee) if fee.is_finite() => Ok(Some(fee)),
        _ => Err(D::Error::custom(format!(
            "maxFee: expected a number, got '{raw}'"
        ))),
    }
}

impl OverseasFilter {
    fn apply(&self, qb: &mut QueryBuilder<'_, MySql>) {
        if let Some(country) = &self.country {
            qb.push(" AND country = ").push_bind(country.clone());
        }
        if let Some(city) = &self.city {
            qb.push(" AND city = ").push_bind(city.clone());
        }
        if let Some(course_type) = &self.course_type {
            qb.push(" AND course_type = ").push_bind(course_type.clone());
        }
        if let Some(duration) = &self.duration {
            qb.push(" AND duration LIKE ")
                .push_bind(format!("%{duration}%"));
        }
        if let Some(max_fee) = self.max_fee {
            qb.push(" AND tuition_fee <= ").push_bind(max_fee);
        }
        if let Some(intake) = &self.intake {
            qb.push(" AND intake_month = ").push_bind(intake.clone());
        }
    }
}

pub struct OverseasRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> OverseasRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &OverseasFilter) -> Result<Vec<OverseasCourse>, DbError> {
        let mut qb = QueryBuilder::<MySql>::new("SELECT * FROM overseas_courses WHERE 1=1");
        filter.apply(&mut qb);
        qb.push(" ORDER BY university_name, course_name");

        let courses = qb
            .build_query_as::<OverseasCourse>()
            .fetch_all(self.pool)
            .await?;
        Ok(courses)
    }

    /// Required fields are checked by the caller.
    pub async fn create(&self, c: &NewOverseasCourse) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO overseas_courses (
                university_name, course_name, country, city, course_type, duration,
                tuition_fee, intake_month, ielts_required, toefl_required, gpa_required,
                scholarships, application_deadline, career_outcomes, course_structure,
                description, image_url
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&c.university_name)
        .bind(&c.course_name)
        .bind(&c.country)
        .bind(&c.city)
        .bind(&c.course_type)
        .bind(&c.duration)
        .bind(c.tuition_fee)
        .bind(&c.intake_month)
        .bind(c.ielts_required)
        .bind(c.toefl_required)
        .bind(c.gpa_required)
        .bind(&c.scholarships)
        .bind(c.application_deadline)
        .bind(&c.career_outcomes)
        .bind(&c.course_structure)
        .bind(&c.description)
        .bind(&c.image_url)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    pub async fn get(&self, id: i32) -> Result<OverseasCourse, DbError> {
        sqlx::query_as("SELECT * FROM overseas_courses WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("overseas course", id))
    }

    pub async fn universities(&self) -> Result<Vec<University>, DbError> {
        let universities: Vec<University> = sqlx::query_as(
            r#"
            SELECT DISTINCT university_name, country, city
            FROM overseas_courses
            ORDER BY university_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(universities)
    }

    pub async fn by_university(&self, name: &str) -> Result<Vec<OverseasCourse>, DbError> {
        let courses: Vec<OverseasCourse> =
            sqlx::query_as("SELECT * FROM overseas_courses WHERE university_name = ? ORDER BY course_name")
                .bind(name)
                .fetch_all(self.pool)
                .await?;

        Ok(courses)
    }
}
