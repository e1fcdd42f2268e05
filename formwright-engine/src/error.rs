//! Error types for the engine.

use formwright_model::ImportError;
use formwright_types::FieldId;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors the engine reports to its caller.
///
/// Persistence failures never appear here; they are logged and swallowed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Import payload rejected. The store is unchanged.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// At least one enabled control fails validation.
    #[error("Form is invalid: {} field(s) need attention", invalid.len())]
    InvalidForm { invalid: Vec<FieldId> },

    /// No field with this id.
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// The field exists but has no control (a section).
    #[error("field {0} has no input")]
    NoControl(FieldId),

    /// Schema could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export file could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
