use sqlx::MySqlPool;

use super::DbError;

/// Enrollment form with list answers already flattened to text.
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub qualification: Option<String>,
    pub current_study: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub services: String,
    pub trainings: String,
    pub other_training_text: Option<String>,
    pub needs_addons: bool,
    pub addons: String,
}

pub struct EnrollmentRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, e: &NewEnrollment) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (
                full_name, email, phone, qualification, current_study,
                address, city, state, zip_code,
                service, training, other_training_text, needs_addons, addon
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&e.full_name)
        .bind(&e.email)
        .bind(&e.phone)
        .bind(&e.qualification)
        .bind(&e.current_study)
        .bind(&e.address)
        .bind(&e.city)
        .bind(&e.state)
        .bind(&e.zip_code)
        .bind(&e.services)
        .bind(&e.trainings)
        .bind(&e.other_training_text)
        .bind(if e.needs_addons { "yes" } else { "no" })
        .bind(&e.addons)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }
}
