//! Posts or previews a gated submission.

use crate::config::SubmitterConfig;
use crate::error::SubmitResult;
use crate::transport::{SubmitTransport, WebhookTransport};
use formwright_engine::SubmissionPayload;
use tracing::{info, warn};

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint accepted the payload.
    Posted { status: u16 },
    /// No endpoint is configured; the pretty JSON that would have been sent.
    Preview(String),
    /// Delivery failed. The message is meant for the user.
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Delivers submission payloads through a [`SubmitTransport`].
pub struct Submitter<T: SubmitTransport = WebhookTransport> {
    endpoint: Option<String>,
    transport: T,
}

impl Submitter<WebhookTransport> {
    pub fn from_config(config: &SubmitterConfig) -> SubmitResult<Self> {
        let transport = WebhookTransport::new(config.timeout())?;
        Ok(Self::with_transport(config.endpoint.clone(), transport))
    }
}

impl<T: SubmitTransport> Submitter<T> {
    pub fn with_transport(endpoint: Option<String>, transport: T) -> Self {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty());
        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Sends the payload with one POST, or previews it when there is no
    /// endpoint. Failures are logged and reported, never retried.
    pub async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let Some(endpoint) = &self.endpoint else {
            return match payload.to_pretty_string() {
                Ok(json) => {
                    info!("No endpoint configured, previewing {} value(s)", payload.len());
                    SubmissionOutcome::Preview(json)
                }
                Err(e) => {
                    warn!("Failed to encode submission: {}", e);
                    SubmissionOutcome::Failed(e.to_string())
                }
            };
        };

        match self.post(endpoint, payload).await {
            Ok(status) => {
                info!("Submitted {} value(s) to {} ({})", payload.len(), endpoint, status);
                SubmissionOutcome::Posted { status }
            }
            Err(e) => {
                warn!("Submission to {} failed: {}", endpoint, e);
                SubmissionOutcome::Failed(format!("Submission failed: {e}"))
            }
        }
    }

    async fn post(&self, endpoint: &str, payload: &SubmissionPayload) -> SubmitResult<u16> {
        let body = payload.to_json()?;
        self.transport.post_json(endpoint, &body).await
    }
}
