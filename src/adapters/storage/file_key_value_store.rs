//! File-based Key-Value Store Adapter
//!
//! Stores each value in its own file named after the key, under a single
//! data directory. The directory is created on first write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

/// File-based storage for session records
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.file_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key, path = %path.display(), "Loaded value from file");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let path = self.file_path(key)?;
        fs::create_dir_all(&self.base_path).map_err(|e| KeyValueStoreError::io(key, e))?;
        fs::write(&path, value).map_err(|e| KeyValueStoreError::io(key, e))?;
        debug!(key, bytes = value.len(), "Wrote value to file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "Removed file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueStoreError::io(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("functional-age-assessment", "{\"step\":3}").unwrap();

        let loaded = store.get("functional-age-assessment").unwrap();
        assert_eq!(loaded.as_deref(), Some("{\"step\":3}"));
    }

    #[test]
    fn test_file_store_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert_eq!(store.get("brain-age-assessment").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let store = FileKeyValueStore::new(&nested);

        store.set("brain-age-assessment", "value").unwrap();

        assert!(nested.join("brain-age-assessment").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();

        assert_eq!(store.get("key").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_store_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("key", "value").unwrap();
        store.remove("key").unwrap();

        assert_eq!(store.get("key").unwrap(), None);
        // second remove is a no-op
        store.remove("key").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        let result = store.set("../escape", "value");
        assert!(matches!(result, Err(KeyValueStoreError::InvalidKey { .. })));
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("functional-age-assessment", "a").unwrap();
        store.set("brain-age-assessment", "b").unwrap();
        store.remove("functional-age-assessment").unwrap();

        assert_eq!(store.get("functional-age-assessment").unwrap(), None);
        assert_eq!(store.get("brain-age-assessment").unwrap().as_deref(), Some("b"));
    }
}
