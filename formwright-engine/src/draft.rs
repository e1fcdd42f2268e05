//! Builder inputs: the pending field the user is composing or editing.

use formwright_model::{ConditionalRule, FieldDefinition, FieldMeta, FieldType};
use formwright_types::{FieldId, FieldValue};

/// The builder form's current inputs.
///
/// New fields start from the draft; `update_field` copies the draft onto the
/// selected field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDraft {
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub options: Vec<String>,
    pub group: Option<String>,
    pub meta: FieldMeta,
    pub conditional: Option<ConditionalRule>,
}

impl FieldDraft {
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_type,
            label: label.into(),
            ..Default::default()
        }
    }

    /// Loads an existing field's editable attributes.
    pub fn from_field(field: &FieldDefinition) -> Self {
        Self {
            field_type: field.field_type,
            label: field.label.clone(),
            placeholder: field.placeholder.clone(),
            required: field.required,
            options: field.options.clone(),
            group: field.group.clone(),
            meta: field.meta.clone(),
            conditional: field.conditional.clone(),
        }
    }

    /// Sets options from comma-separated text, dropping blank entries.
    pub fn set_options_text(&mut self, text: &str) {
        self.options = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Copies the draft onto `field`. The id and stored value are kept.
    pub fn apply_to(&self, field: &mut FieldDefinition) {
        field.field_type = self.field_type;
        field.label = self.label.clone();
        field.placeholder = self.placeholder.clone();
        field.required = self.required;
        field.options = if self.field_type.supports_options() {
            self.options.clone()
        } else {
            Vec::new()
        };
        field.group = self.group.clone();
        field.meta = self.meta.clone();
        field.conditional = self.conditional.clone();
    }
}

/// A partial field: set attributes override the draft, unset ones come
/// from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSpec {
    pub id: Option<FieldId>,
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub group: Option<String>,
    pub meta: Option<FieldMeta>,
    pub conditional: Option<ConditionalRule>,
    pub value: Option<FieldValue>,
}

impl FieldSpec {
    /// Shorthand for a spec that sets only type and label.
    pub fn of(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_type: Some(field_type),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<FieldId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: FieldMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ConditionalRule) -> Self {
        self.conditional = Some(rule);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builds a field from this spec over `draft`. A missing id is left
    /// blank for the caller to assign.
    pub fn merge_over(self, draft: &FieldDraft) -> FieldDefinition {
        let field_type = self.field_type.unwrap_or(draft.field_type);
        let options = self.options.unwrap_or_else(|| draft.options.clone());
        FieldDefinition {
            id: self.id.unwrap_or_default(),
            field_type,
            label: self.label.unwrap_or_else(|| draft.label.clone()),
            placeholder: self.placeholder.unwrap_or_else(|| draft.placeholder.clone()),
            required: self.required.unwrap_or(draft.required),
            options: if field_type.supports_options() {
                options
            } else {
                Vec::new()
            },
            group: self.group.or_else(|| draft.group.clone()),
            meta: self.meta.unwrap_or_else(|| draft.meta.clone()),
            conditional: self.conditional.or_else(|| draft.conditional.clone()),
            value: self.value.unwrap_or_default(),
        }
    }
}
