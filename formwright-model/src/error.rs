//! Errors raised while importing a schema.

use formwright_types::FieldId;
use thiserror::Error;

/// Result type for schema import.
pub type ImportResult<T> = Result<T, ImportError>;

/// Reasons an imported payload was rejected.
///
/// The display text is shown to the user verbatim, so every variant reads
/// `Import failed: <message>`.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not JSON, or a field entry has the wrong shape.
    #[error("Import failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but has no array under `fields`.
    #[error("Import failed: expected an object with a \"fields\" array")]
    MissingFields,

    /// Two field entries share an id.
    #[error("Import failed: duplicate field id \"{0}\"")]
    DuplicateId(FieldId),

    /// The import file could not be read.
    #[error("Import failed: {0}")]
    Io(#[from] std::io::Error),
}
