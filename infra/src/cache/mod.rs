//! Cache module - Redis-backed OTP storage

mod otp_store;

pub use otp_store::RedisOtpStore;

use redis::aio::ConnectionManager;

use crate::InfrastructureError;

/// Connect to Redis and hand back a shareable connection manager.
pub async fn create_redis_connection(url: &str) -> Result<ConnectionManager, InfrastructureError> {
    let client = redis::Client::open(url)
        .map_err(|e| InfrastructureError::Cache(format!("Invalid Redis URL: {}", e)))?;
    ConnectionManager::new(client)
        .await
        .map_err(|e| InfrastructureError::Cache(format!("Failed to connect to Redis: {}", e)))
}
