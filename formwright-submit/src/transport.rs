//! HTTP delivery of submission payloads.

use crate::error::{SubmitError, SubmitResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Sends a JSON body to an endpoint.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Posts `body` to `endpoint` once and returns the success status code.
    async fn post_json(&self, endpoint: &str, body: &serde_json::Value) -> SubmitResult<u16>;
}

/// Webhook transport over `reqwest`.
pub struct WebhookTransport {
    client: Client,
}

impl WebhookTransport {
    pub fn new(timeout: Duration) -> SubmitResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SubmitTransport for WebhookTransport {
    async fn post_json(&self, endpoint: &str, body: &serde_json::Value) -> SubmitResult<u16> {
        debug!("POST {}", endpoint);
        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(format!("POST failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(status.as_u16())
    }
}
