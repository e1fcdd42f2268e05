//! Core type definitions for Formwright.
//!
//! This crate defines the small set of types every other crate agrees on:
//! - Field and group identifiers (opaque strings, fresh ones are UUID v7)
//! - [`FieldValue`], the tagged value carried by fields and live controls,
//!   together with its string/number coercion rules
//!
//! Field definitions, groups and schemas live in `formwright-model`.

mod ids;
mod value;

pub use ids::{FieldId, GroupId};
pub use value::{FieldValue, parse_number};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}
