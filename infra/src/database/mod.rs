//! MySQL persistence layer built on SQLx
//!
//! Connection pooling plus the concrete repository implementations for
//! the credential store. Schema lives under `migrations/`.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use og_shared::config::DatabaseConfig;

pub mod mysql;

pub use mysql::{MySqlOtpRepository, MySqlUserRepository};

/// Build a connection pool from database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool established"
    );

    Ok(pool)
}
