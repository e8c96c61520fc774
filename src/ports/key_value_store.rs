//! Key-Value Store Port - Interface for persisting session records.
//!
//! Values are opaque strings; encoding is the caller's concern. Adapters
//! decide where the strings live (memory, files on disk).

/// Errors that can occur during key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("IO error for key '{key}': {message}")]
    Io { key: String, message: String },

    #[error("Store lock poisoned")]
    Poisoned,
}

impl KeyValueStoreError {
    pub fn io(key: &str, err: std::io::Error) -> Self {
        KeyValueStoreError::Io {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

/// Port for storing string values under string keys
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// # Returns
    /// `None` when nothing has been stored under the key
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

/// Checks that a key is non-empty and uses only `[A-Za-z0-9_-]`.
///
/// Keys double as file names in the file adapter.
pub fn validate_key(key: &str) -> Result<(), KeyValueStoreError> {
    if key.is_empty() {
        return Err(KeyValueStoreError::InvalidKey {
            key: key.to_string(),
            reason: "key is empty".to_string(),
        });
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(KeyValueStoreError::InvalidKey {
            key: key.to_string(),
            reason: format!("character '{}' is not allowed", c),
        });
    }
    Ok(())
}
