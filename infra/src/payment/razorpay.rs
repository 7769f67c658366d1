//! Razorpay order-creation client.
//!
//! Orders are created server-side over the gateway's REST API with
//! basic auth; amounts are sent in the smallest currency unit (paise).
//! Signature verification of completed checkouts happens in the core
//! crate against the key secret held here.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

use sm_core::errors::{DomainError, PaymentError};
use sm_core::services::payment::{GatewayOrder, PaymentGateway};
use sm_shared::config::PaymentGatewayConfig;

use crate::InfrastructureError;

/// Razorpay REST client
pub struct RazorpayClient {
    http: reqwest::Client,
    config: PaymentGatewayConfig,
}

impl RazorpayClient {
    /// Build a client from gateway configuration.
    pub fn new(config: PaymentGatewayConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(&self, amount: u32) -> Result<GatewayOrder, DomainError> {
        let body = json!({
            // Smallest currency unit
            "amount": amount as u64 * 100,
            "currency": self.config.currency,
            "receipt": format!("PAY-{}", Utc::now().timestamp_millis()),
        });

        debug!(amount = amount, "Creating gateway order");

        let response = self
            .http
            .post(format!("{}/orders", self.config.base_url))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gateway request failed");
                DomainError::Payment(PaymentError::GatewayFailure {
                    message: format!("Order request failed: {}", e),
                })
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, detail = %detail, "Gateway rejected order");
            return Err(DomainError::Payment(PaymentError::GatewayFailure {
                message: format!("Gateway returned {}", status),
            }));
        }

        response.json::<GatewayOrder>().await.map_err(|e| {
            DomainError::Payment(PaymentError::GatewayFailure {
                message: format!("Malformed gateway response: {}", e),
            })
        })
    }

    fn key_secret(&self) -> &str {
        &self.config.key_secret
    }
}
