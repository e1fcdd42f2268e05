//! Error types for submission delivery.

use thiserror::Error;

pub type SubmitResult<T> = Result<T, SubmitError>;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
