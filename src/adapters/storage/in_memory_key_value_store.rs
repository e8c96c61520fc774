//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a map behind a lock. Useful for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

/// In-memory storage for session records
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.read().map(|values| values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored data (useful for tests)
    pub fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;
        let values = self.values.read().map_err(|_| KeyValueStoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        let mut values = self.values.write().map_err(|_| KeyValueStoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        let mut values = self.values.write().map_err(|_| KeyValueStoreError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}
