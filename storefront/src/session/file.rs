//! # File-backed Storage
//!
//! Persists the key/value map as a single JSON object on disk so a session
//! survives restarts of the command-line client.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::storage::{Storage, StorageError};

/// JSON-file storage.
///
/// The whole map is cached in memory and rewritten on every change (temp file
/// then rename, so a crash never leaves a half-written file).
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load(&path);
        tracing::debug!(path = %path.display(), keys = entries.len(), "Session storage opened");
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

fn load(path: &Path) -> BTreeMap<String, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read session storage");
            return BTreeMap::new();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Session storage is corrupt, starting empty");
        BTreeMap::new()
    })
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(&[], &[(key, value.to_string())])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(&[key], &[])
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        self.update(&[], entries)
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(keys, &[])
    }

    fn update(&self, remove: &[&str], set: &[(&str, String)]) -> Result<(), StorageError> {
        let mut map = self.entries.write();
        let mut next = map.clone();
        for key in remove {
            next.remove(*key);
        }
        for (key, value) in set {
            next.insert((*key).to_string(), value.clone());
        }

        if next == *map && self.path.exists() {
            return Ok(());
        }
        // Cached entries only change once the file is written
        self.persist(&next)?;
        *map = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let storage = FileStorage::open(&path);
        storage
            .set_many(&[("accessToken", "a".to_string()), ("refreshToken", "r".to_string())])
            .unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("accessToken").as_deref(), Some("a"));
        assert_eq!(reopened.get("refreshToken").as_deref(), Some("r"));
    }

    #[test]
    fn test_file_storage_remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::open(&path);
        storage.set("userEmail", "a@b.co").unwrap();
        storage.remove("userEmail").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("userEmail"), None);
    }

    #[test]
    fn test_file_storage_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("accessToken"), None);

        storage.set("accessToken", "fresh").unwrap();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("accessToken").as_deref(), Some("fresh"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("absent.json"));
        assert_eq!(storage.get("anything"), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let storage = FileStorage::open(blocker.join("session.json"));
        let result = storage.set_many(&[("accessToken", "a".to_string()), ("isLoggedIn", "true".to_string())]);

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert_eq!(storage.get("accessToken"), None);
        assert_eq!(storage.get("isLoggedIn"), None);
    }
}
