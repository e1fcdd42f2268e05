//! Submission delivery for Formwright.
//!
//! The engine gates a submission and hands over an owned
//! [`SubmissionPayload`](formwright_engine::SubmissionPayload). A
//! [`Submitter`] then either posts it to the configured webhook or, without
//! an endpoint, returns a preview of the JSON it would have sent.

mod config;
mod error;
mod submitter;
mod transport;

pub use config::SubmitterConfig;
pub use error::{SubmitError, SubmitResult};
pub use submitter::{SubmissionOutcome, Submitter};
pub use transport::{SubmitTransport, WebhookTransport};
