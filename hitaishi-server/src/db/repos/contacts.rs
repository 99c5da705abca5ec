use sqlx::MySqlPool;

use super::DbError;

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub message: String,
}

pub struct ContactRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ContactRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, msg: &NewContactMessage) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, phone, course, message)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.phone)
        .bind(&msg.course)
        .bind(&msg.message)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }
}
