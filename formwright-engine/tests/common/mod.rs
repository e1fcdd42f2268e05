//! Shared test helpers for engine tests.

#![allow(dead_code)]

use formwright_engine::{EngineConfig, FormEngine};
use formwright_model::FormSchema;
use formwright_storage::{
    MemoryStorage, SchemaStorage, StorageError, StorageResult, SCHEMA_STORAGE_KEY,
};

/// Storage whose every call fails.
pub struct FailingStorage;

impl SchemaStorage for FailingStorage {
    fn load(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Io(std::io::Error::other("disk unplugged")))
    }

    fn save(&self, _key: &str, _blob: &str) -> StorageResult<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Poisoned)
    }
}

/// Opens an engine over fresh memory storage seeded with `schema`.
pub fn engine_with(schema: FormSchema) -> (FormEngine<MemoryStorage>, MemoryStorage) {
    let json = schema.to_compact_json().unwrap();
    let storage = MemoryStorage::with_entry(SCHEMA_STORAGE_KEY, &json);
    let engine = FormEngine::open(EngineConfig::default(), storage.clone());
    (engine, storage)
}

/// Opens an engine over empty memory storage (default seed).
pub fn fresh_engine() -> (FormEngine<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let engine = FormEngine::open(EngineConfig::default(), storage.clone());
    (engine, storage)
}

/// Decodes whatever the engine last autosaved.
pub fn saved_schema(storage: &MemoryStorage) -> FormSchema {
    let blob = storage.load(SCHEMA_STORAGE_KEY).unwrap().expect("nothing saved");
    FormSchema::from_json_text(&blob).unwrap()
}
