//! Redis-backed OTP storage.
//!
//! Codes live under `otp:{purpose}:{email}` with the TTL doing the
//! expiry; an adjacent counter key tracks failed attempts. Both keys
//! vanish together, so a stale counter can never block a fresh code.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use sm_core::domain::entities::verification_code::OtpPurpose;
use sm_core::services::verification::OtpStore;

/// Redis implementation of the OTP store
pub struct RedisOtpStore {
    conn: ConnectionManager,
}

impl RedisOtpStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    fn code_key(email: &str, purpose: OtpPurpose) -> String {
        format!("otp:{}:{}", purpose.as_str(), email)
    }

    fn attempts_key(email: &str, purpose: OtpPurpose) -> String {
        format!("otp:attempts:{}:{}", purpose.as_str(), email)
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn store_code(
        &self,
        email: &str,
        purpose: OtpPurpose,
        code: &str,
        ttl_secs: u64,
    ) -> Result<(), String> {
        let mut conn = self.conn.clone();

        conn.set_ex::<_, _, ()>(Self::code_key(email, purpose), code, ttl_secs)
            .await
            .map_err(|e| format!("Redis SET failed: {}", e))?;

        // Reset the attempt counter alongside the new code.
        conn.set_ex::<_, _, ()>(Self::attempts_key(email, purpose), 0i64, ttl_secs)
            .await
            .map_err(|e| format!("Redis SET failed: {}", e))?;

        debug!(purpose = purpose.as_str(), ttl_secs, "Stored OTP code");
        Ok(())
    }

    async fn get_code(&self, email: &str, purpose: OtpPurpose) -> Result<Option<String>, String> {
        let mut conn = self.conn.clone();
        conn.get(Self::code_key(email, purpose))
            .await
            .map_err(|e| format!("Redis GET failed: {}", e))
    }

    async fn increment_attempts(&self, email: &str, purpose: OtpPurpose) -> Result<i64, String> {
        let mut conn = self.conn.clone();
        conn.incr(Self::attempts_key(email, purpose), 1i64)
            .await
            .map_err(|e| format!("Redis INCR failed: {}", e))
    }

    async fn remove_code(&self, email: &str, purpose: OtpPurpose) -> Result<(), String> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(vec![
            Self::code_key(email, purpose),
            Self::attempts_key(email, purpose),
        ])
        .await
        .map_err(|e| format!("Redis DEL failed: {}", e))
    }
}
