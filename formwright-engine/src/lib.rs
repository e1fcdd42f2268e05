//! Schema-to-live-form reconciliation engine for Formwright.
//!
//! The engine keeps three things consistent:
//! - the [`SchemaStore`] — ordered field definitions and groups, the single
//!   source of truth for structure
//! - the [`ControlRegistry`] — one live control (value, constraints, enabled
//!   state) per non-section field, plus the current-values map
//! - conditional rules, re-evaluated by the [`evaluator`] after every value
//!   change and every structural mutation
//!
//! [`FormEngine`] drives all three and autosaves the schema through a
//! [`SchemaStorage`](formwright_storage::SchemaStorage) backend. Sending a
//! submission is left to `formwright-submit`; the engine only gates it and
//! produces the payload.

mod config;
mod control;
mod draft;
mod engine;
mod error;
pub mod evaluator;
mod io;
mod registry;
mod store;
mod submission;
mod validators;

pub use config::EngineConfig;
pub use control::Control;
pub use draft::{FieldDraft, FieldSpec};
pub use engine::{FormEngine, default_schema};
pub use error::{EngineError, EngineResult};
pub use io::read_schema_file;
pub use registry::{ControlRegistry, ValueListener};
pub use store::SchemaStore;
pub use submission::SubmissionPayload;
pub use validators::{RangeKind, ValidationError, Validator, derive_validators};
