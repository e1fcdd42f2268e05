//! Form schema model for Formwright.
//!
//! Defines the types a form is built from:
//! - [`FieldDefinition`] — one logical input (type, label, validation meta, rule, value)
//! - [`FieldType`] — the closed set of input kinds; `section` is visual only
//! - [`ConditionalRule`] — gates a field's enabled state on another field's value
//! - [`Group`] — an organizational label bucket
//! - [`FormSchema`] — ordered fields plus groups, with the JSON codec used for
//!   autosave (compact), export (pretty) and import (validated)
//!
//! The JSON shape `{"fields": [...], "groups": [...]}` is the contract with
//! saved schemas and exported files, so field names here are part of the format.

mod error;
mod field;
mod group;
mod rule;
mod schema;

pub use error::{ImportError, ImportResult};
pub use field::{FieldDefinition, FieldMeta, FieldType};
pub use group::Group;
pub use rule::{ConditionalRule, RuleAction, RuleOperator};
pub use schema::FormSchema;
