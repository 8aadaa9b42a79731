//! Connection pool construction.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use ct_shared::config::DatabaseConfig;

/// Build a PostgreSQL connection pool from configuration.
///
/// The pool bounds concurrent store operations at `max_connections` and
/// enforces the acquisition and idle timeouts; exhaustion surfaces as an
/// acquire error on the calling request, never as a retry.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );

    Ok(pool)
}
