use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Opens the process-wide pool. Connects eagerly so that an unreachable database
/// aborts startup instead of failing the first request.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect(database_url)
        .await?;
    Ok(pool)
}
