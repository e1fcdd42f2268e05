//! Validation constraints derived from a field definition.

use chrono::NaiveDate;
use formwright_model::{FieldDefinition, FieldType};
use formwright_types::FieldValue;
use regex_lite::Regex;
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A failed constraint on a control's current value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,

    #[error("must be at least {min}")]
    Min { min: String },

    #[error("must be at most {max}")]
    Max { max: String },

    #[error("must match the pattern {pattern}")]
    Pattern { pattern: String },
}

/// How range bounds are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// Numeric comparison after coercion.
    Number,
    /// Calendar comparison of `YYYY-MM-DD` dates.
    Date,
}

/// One constraint on a control.
#[derive(Debug, Clone)]
pub enum Validator {
    Required,
    Min { kind: RangeKind, limit: FieldValue },
    Max { kind: RangeKind, limit: FieldValue },
    Pattern { source: String, regex: Regex },
}

// Compiled regexes have no equality; two pattern validators are the same
// constraint when their sources are.
impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Required, Self::Required) => true,
            (Self::Min { kind: a, limit: x }, Self::Min { kind: b, limit: y })
            | (Self::Max { kind: a, limit: x }, Self::Max { kind: b, limit: y }) => a == b && x == y,
            (Self::Pattern { source: a, .. }, Self::Pattern { source: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Validator {
    /// Checks `value` against this constraint.
    ///
    /// Range and pattern constraints accept empty values; emptiness is the
    /// `Required` validator's concern.
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match self {
            Self::Required => {
                if value.is_empty() {
                    Err(ValidationError::Required)
                } else {
                    Ok(())
                }
            }
            Self::Min { kind, limit } => {
                if !value.is_empty() && compare(*kind, value, limit) == Some(std::cmp::Ordering::Less) {
                    Err(ValidationError::Min {
                        min: limit.to_text_lossy(),
                    })
                } else {
                    Ok(())
                }
            }
            Self::Max { kind, limit } => {
                if !value.is_empty() && compare(*kind, value, limit) == Some(std::cmp::Ordering::Greater) {
                    Err(ValidationError::Max {
                        max: limit.to_text_lossy(),
                    })
                } else {
                    Ok(())
                }
            }
            Self::Pattern { source, regex } => {
                let text = value.to_text_lossy();
                if text.is_empty() || regex.is_match(&text) {
                    Ok(())
                } else {
                    Err(ValidationError::Pattern {
                        pattern: source.clone(),
                    })
                }
            }
        }
    }
}

/// `None` when either side has no comparable form, which makes the
/// constraint pass.
fn compare(kind: RangeKind, value: &FieldValue, limit: &FieldValue) -> Option<std::cmp::Ordering> {
    match kind {
        RangeKind::Number => value.to_number().partial_cmp(&limit.to_number()),
        RangeKind::Date => {
            let value = parse_date(value)?;
            let limit = parse_date(limit)?;
            Some(value.cmp(&limit))
        }
    }
}

fn parse_date(value: &FieldValue) -> Option<NaiveDate> {
    let text = value.to_text()?;
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Derives the constraints for a field.
///
/// An invalid pattern is logged and skipped; the field is then validated
/// without it.
pub fn derive_validators(field: &FieldDefinition) -> Vec<Validator> {
    let mut validators = Vec::new();
    if field.required {
        validators.push(Validator::Required);
    }

    if field.field_type.supports_range() {
        let kind = if field.field_type == FieldType::Date {
            RangeKind::Date
        } else {
            RangeKind::Number
        };
        if let Some(limit) = field.meta.min.clone().filter(|v| !v.is_absent()) {
            validators.push(Validator::Min { kind, limit });
        }
        if let Some(limit) = field.meta.max.clone().filter(|v| !v.is_absent()) {
            validators.push(Validator::Max { kind, limit });
        }
    }

    if let Some(source) = field.meta.pattern.as_deref().filter(|p| !p.is_empty()) {
        match Regex::new(&format!("^(?:{source})$")) {
            Ok(regex) => validators.push(Validator::Pattern {
                source: source.to_string(),
                regex,
            }),
            Err(e) => warn!("Ignoring invalid pattern {:?} on field {}: {}", source, field.id, e),
        }
    }

    validators
}
