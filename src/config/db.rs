// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup the PostgreSQL pool backing the directory store

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Initialize the PostgreSQL connection pool for the directory store
/// DOCUMENTATION: Pool sizing and timeouts come from Config; called once
/// during startup in main.rs. Every repository operates on this pool.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!("Connecting directory store: {}", config.database_url);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Recycle idle connections after 5 minutes, all after 30
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Fail fast at boot if the store is unreachable
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Directory store pool ready");
    Ok(pool)
}
