use sqlx::MySqlPool;

use super::DbError;

pub struct ResumeRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ResumeRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Record a stored upload. `filename` is what the submitter called it,
    /// `stored_name` is its name inside the upload directory.
    pub async fn create(
        &self,
        email: &str,
        filename: &str,
        stored_name: &str,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "INSERT INTO resume_submissions (email, filename, stored_name) VALUES (?, ?, ?)",
        )
        .bind(email)
        .bind(filename)
        .bind(stored_name)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }
}
