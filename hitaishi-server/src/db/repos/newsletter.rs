use sqlx::MySqlPool;

use super::DbError;

pub struct NewsletterRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> NewsletterRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Idempotent; returns `false` when the address was already subscribed.
    pub async fn subscribe(&self, email: &str) -> Result<bool, DbError> {
        let result = sqlx::query("INSERT IGNORE INTO newsletter_subscribers (email) VALUES (?)")
            .bind(email)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
