use sqlx::MySqlPool;

use super::DbError;

pub struct PlanOrderRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PlanOrderRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: &str, plan: &str, price: f64) -> Result<u64, DbError> {
        let result = sqlx::query("INSERT INTO plan_orders (user_id, plan, price) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(plan)
            .bind(price)
            .execute(self.pool)
            .await?;

        Ok(result.last_insert_id())
    }
}
