//! MySQL pool construction. One pool is built at startup and handed to
//! every handler through `AppState`.

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;

/// Connect eagerly, failing fast when the database is unreachable.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Build a pool that opens connections on first use.
///
/// Lets the router be exercised without a running server. A query against
/// an unreachable database fails after `acquire_timeout`.
pub fn create_lazy_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}
