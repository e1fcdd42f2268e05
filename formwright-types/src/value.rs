//! The value carried by a field definition and its live control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field or control value.
///
/// Serialized untagged, so the JSON form is the natural one: a string, a
/// number, a boolean, an array of strings (multi-select) or `null`.
///
/// Coercion rules follow HTML form semantics:
/// - [`to_text`](Self::to_text): numbers in shortest form (`3`, not `3.0`),
///   booleans as `"true"`/`"false"`, lists joined with `,`. `Absent` has no
///   string form.
/// - [`to_number`](Self::to_number): blank text is `0`, unparsable text is
///   `NaN`, booleans are `1`/`0`, `Absent` is `NaN`. Every comparison against
///   `NaN` is false.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    #[default]
    Absent,
}

impl FieldValue {
    /// Shorthand for a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// True for values a `required` constraint rejects: absent, empty text
    /// and empty lists. `false` and every number count as present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// True only for [`FieldValue::Absent`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// String form of the value, `None` when absent.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::List(items) => Some(items.join(",")),
        }
    }

    /// String form of the value with absent coerced to the empty string.
    #[must_use]
    pub fn to_text_lossy(&self) -> String {
        self.to_text().unwrap_or_default()
    }

    /// Numeric form of the value; `NaN` when it has none.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Absent => f64::NAN,
            Self::Number(n) => *n,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
            Self::Text(s) => parse_number(s),
            Self::List(items) => match items.as_slice() {
                [] => 0.0,
                [single] => parse_number(single),
                _ => f64::NAN,
            },
        }
    }
}

/// Parses text the way an HTML number input coerces it.
#[must_use]
pub fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust accepts "inf" and "nan" spellings that form inputs do not.
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_lossy())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}
