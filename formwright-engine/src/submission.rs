use formwright_types::{FieldId, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw control values gathered for submission.
///
/// Disabled controls are included with their last value. The payload is an
/// owned snapshot, so sending it never borrows the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    values: BTreeMap<FieldId, FieldValue>,
}

impl SubmissionPayload {
    pub fn new(values: BTreeMap<FieldId, FieldValue>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &BTreeMap<FieldId, FieldValue> {
        &self.values
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldValue> {
        self.values.get(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON object keyed by field id.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Indented JSON for showing the payload to the user.
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
