//! File side of import/export.

use formwright_model::ImportResult;
use std::path::Path;
use tracing::debug;

/// Reads an import file. The text is meant for
/// [`FormEngine::import_schema_from_text`](crate::FormEngine::import_schema_from_text).
pub async fn read_schema_file(path: &Path) -> ImportResult<String> {
    let text = tokio::fs::read_to_string(path).await?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
