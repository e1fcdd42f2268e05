use crate::ConditionalRule;
use formwright_types::{FieldId, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One logical input of a form.
///
/// Every field except `section` gets a live control in the running form.
/// Missing keys take their defaults when a schema is parsed, so hand-written
/// imports only need `id` and `type`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefinition {
    /// Stable id, unique within a schema. Never changed after creation.
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    /// Choices for select/radio fields; empty otherwise.
    pub options: Vec<String>,
    /// Id or title of a [`Group`](crate::Group). Not checked against the group list.
    pub group: Option<String>,
    pub meta: FieldMeta,
    pub conditional: Option<ConditionalRule>,
    /// Last known value, or the default the control is seeded with.
    pub value: FieldValue,
}

impl FieldDefinition {
    /// Creates a field with a fresh id and everything else defaulted.
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: FieldId::generate(),
            field_type,
            label: label.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a text field.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(FieldType::Text, label)
    }

    /// Shorthand for an email field.
    pub fn email(label: impl Into<String>) -> Self {
        Self::new(FieldType::Email, label)
    }

    /// Shorthand for a number field.
    pub fn number(label: impl Into<String>) -> Self {
        Self::new(FieldType::Number, label)
    }

    /// Shorthand for a checkbox field.
    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::new(FieldType::Checkbox, label)
    }

    /// Shorthand for a select field with fixed options.
    pub fn select(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            options,
            ..Self::new(FieldType::Select, label)
        }
    }

    /// Shorthand for a visual section header.
    pub fn section(title: impl Into<String>) -> Self {
        Self::new(FieldType::Section, title)
    }

    /// Replaces the generated id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<FieldId>) -> Self {
        self.id = id.into();
        self
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a conditional rule, replacing any existing one.
    #[must_use]
    pub fn with_rule(mut self, rule: ConditionalRule) -> Self {
        self.conditional = Some(rule);
        self
    }

    /// Replaces the validation meta.
    #[must_use]
    pub fn with_meta(mut self, meta: FieldMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Sets the stored value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    /// False only for sections, which render but hold no value.
    #[must_use]
    pub fn has_control(&self) -> bool {
        self.field_type.has_control()
    }

    /// Value a new control starts from: the stored value if any, else the
    /// type's default.
    #[must_use]
    pub fn initial_value(&self) -> FieldValue {
        if self.value.is_absent() {
            self.field_type.default_value()
        } else {
            self.value.clone()
        }
    }
}

/// Optional validation constraints.
///
/// `min`/`max` only apply to number and date fields. `pattern` is a regular
/// expression the whole value must match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Multi-select; the value becomes a list of options.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
}

impl FieldMeta {
    /// Shorthand for a numeric/date range.
    pub fn range(min: Option<FieldValue>, max: Option<FieldValue>) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    /// Shorthand for a pattern constraint.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Default::default()
        }
    }
}

/// The kind of input a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Email,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Hidden,
    Date,
    Time,
    Password,
    /// Visual divider; never has a control.
    Section,
}

impl FieldType {
    pub const ALL: [FieldType; 12] = [
        Self::Text,
        Self::Number,
        Self::Email,
        Self::Textarea,
        Self::Select,
        Self::Radio,
        Self::Checkbox,
        Self::Hidden,
        Self::Date,
        Self::Time,
        Self::Password,
        Self::Section,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Hidden => "hidden",
            Self::Date => "date",
            Self::Time => "time",
            Self::Password => "password",
            Self::Section => "section",
        }
    }

    #[must_use]
    pub fn has_control(self) -> bool {
        self != Self::Section
    }

    /// Whether `min`/`max` constraints apply.
    #[must_use]
    pub fn supports_range(self) -> bool {
        matches!(self, Self::Number | Self::Date)
    }

    /// Whether `options` are meaningful.
    #[must_use]
    pub fn supports_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Value a fresh control of this type starts from.
    #[must_use]
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::Checkbox => FieldValue::Bool(false),
            _ => FieldValue::text(""),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown field type: {s}"))
    }
}
