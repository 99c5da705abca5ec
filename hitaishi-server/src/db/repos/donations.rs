use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

#[derive(Debug, Clone)]
pub struct NewDonation {
    pub village_name: String,
    pub collection_date: NaiveDate,
    pub manager_name: String,
    pub team_members: Option<String>,
    pub trainers: Option<String>,
    pub amount: f64,
}

/// A cash collection recorded by a field manager.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Donation {
    pub id: i32,
    pub village_name: String,
    pub collection_date: NaiveDate,
    pub manager_name: String,
    pub team_members: Option<String>,
    pub trainers: Option<String>,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

pub struct DonationRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> DonationRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, d: &NewDonation) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO offline_donations
                (village_name, collection_date, manager_name, team_members, trainers, amount)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&d.village_name)
        .bind(d.collection_date)
        .bind(&d.manager_name)
        .bind(&d.team_members)
        .bind(&d.trainers)
        .bind(d.amount)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    pub async fn list(&self) -> Result<Vec<Donation>, DbError> {
        let donations: Vec<Donation> = sqlx::query_as(
            "SELECT * FROM offline_donations ORDER BY collection_date DESC, created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(donations)
    }

    pub async fn get(&self, id: i32) -> Result<Donation, DbError> {
        sqlx::query_as("SELECT * FROM offline_donations WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("donation", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM offline_donations WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("donation", id));
        }
        Ok(())
    }
}
