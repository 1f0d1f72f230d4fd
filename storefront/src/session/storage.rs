//! # Key/Value Storage
//!
//! The persistence seam behind [`super::Session`]: a string-keyed store
//! modelled on browser local storage.

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

/// Failure to read or persist storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value store.
///
/// Reads are infallible: a backend that cannot load its contents starts
/// empty. Writes report persistence failures. The batch methods let a
/// backend persist several keys in one step; the defaults loop. A failed
/// write leaves the stored values unchanged.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }

    /// Remove `remove`, then write `set`, as one batch.
    fn update(&self, remove: &[&str], set: &[(&str, String)]) -> Result<(), StorageError> {
        self.remove_many(remove)?;
        self.set_many(set)
    }
}

/// Process-local storage, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut map = self.entries.write();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut map = self.entries.write();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }

    fn update(&self, remove: &[&str], set: &[(&str, String)]) -> Result<(), StorageError> {
        let mut map = self.entries.write();
        for key in remove {
            map.remove(*key);
        }
        for (key, value) in set {
            map.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}
