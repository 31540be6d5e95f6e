use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool for the catalogue store. The service only reads, so a
/// failed acquire surfaces as a 500 on the request instead of queueing.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to catalogue database: {}", e))?;

    tracing::info!(max_connections, "Catalogue database pool ready");
    Ok(pool)
}
