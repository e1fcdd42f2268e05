//! Engine configuration.

use formwright_model::FieldType;
use formwright_storage::SCHEMA_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Settings for a [`FormEngine`](crate::FormEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Storage key the schema is autosaved under.
    pub storage_key: String,
    /// File name used by `export_to_dir`.
    pub export_file_name: String,
    /// Type the builder draft starts with.
    pub default_field_type: FieldType,
    /// Label the builder draft starts with.
    pub default_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: SCHEMA_STORAGE_KEY.to_string(),
            export_file_name: "form-schema.json".to_string(),
            default_field_type: FieldType::Text,
            default_label: "New field".to_string(),
        }
    }
}
