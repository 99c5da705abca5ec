use sqlx::MySqlPool;

use super::DbError;

#[derive(Debug, Clone)]
pub struct NewWebinarRegistration {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub topic: Option<String>,
}

pub struct WebinarRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> WebinarRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, reg: &NewWebinarRegistration) -> Result<u64, DbError> {
        let result = sqlx::query(
            "INSERT INTO webinar_registrations (name, email, phone, topic) VALUES (?, ?, ?, ?)",
        )
        .bind(&reg.name)
        .bind(&reg.email)
        .bind(&reg.phone)
        .bind(&reg.topic)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }
}
