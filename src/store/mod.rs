//! Local persistence
//!
//! - `KeyValueStore`: string values under string keys
//! - `FileStore` / `MemoryStore`: the two backends
//! - `FavoritesStore`: the favorites list mirrored to one key

pub mod favorites;
pub mod file;

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

pub use favorites::FavoritesStore;
pub use file::FileStore;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Minimal key-value persistence
pub trait KeyValueStore: Send {
    /// Value stored under `key`, or `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store (tests, and fallback when no data directory exists)
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
