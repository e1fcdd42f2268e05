//! Durable local storage for Formwright.
//!
//! Schemas are stored as opaque serialized blobs under a string key, the way
//! a browser's local storage holds them. The engine never looks inside the
//! store; it hands over compact JSON and gets it back on the next start.
//!
//! Two backends:
//! - [`SqliteStorage`] — a single `kv` table in a SQLite file
//! - [`MemoryStorage`] — a shared in-process map, for tests and dry runs

mod error;
mod memory;
mod sqlite;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key the engine saves its schema under.
pub const SCHEMA_STORAGE_KEY: &str = "dyn-form-schema-v1";

/// A key/value store for serialized schemas.
pub trait SchemaStorage: Send {
    /// Returns the blob stored under `key`, if any.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &str) -> StorageResult<()>;

    /// Deletes `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: SchemaStorage + ?Sized> SchemaStorage for Box<S> {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> StorageResult<()> {
        (**self).save(key, blob)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
