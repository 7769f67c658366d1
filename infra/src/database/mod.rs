//! Database module - MySQL implementations using SQLx

pub mod mysql;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use sm_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Build the MySQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
        .map_err(|e| InfrastructureError::Database(format!("Failed to connect to MySQL: {}", e)))
}
