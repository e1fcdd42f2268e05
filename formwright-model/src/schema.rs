use crate::{FieldDefinition, Group, ImportError, ImportResult};
use formwright_types::FieldId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The full definition of a form: ordered fields plus groups.
///
/// Field order only matters for rendering. Key order in the JSON form is
/// always `fields` then `groups`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDefinition>, groups: Vec<Group>) -> Self {
        Self { fields, groups }
    }

    /// Looks up a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Compact encoding used for autosave.
    pub fn to_compact_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Human-readable encoding (2-space indent) used for export files.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    /// Parses an imported or saved payload.
    ///
    /// The payload must be an object with an array under `fields`; `groups`
    /// may be missing. Entries without an id get a fresh one. Duplicate ids
    /// reject the whole payload.
    pub fn from_json_text(text: &str) -> ImportResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        if !raw.get("fields").is_some_and(serde_json::Value::is_array) {
            return Err(ImportError::MissingFields);
        }
        let mut schema: FormSchema = serde_json::from_value(raw)?;
        schema.normalize_ids()?;
        Ok(schema)
    }

    fn normalize_ids(&mut self) -> ImportResult<()> {
        let mut seen = HashSet::new();
        for field in &mut self.fields {
            if field.id.is_blank() {
                field.id = FieldId::generate();
            }
            if !seen.insert(field.id.clone()) {
                return Err(ImportError::DuplicateId(field.id.clone()));
            }
        }
        Ok(())
    }
}
