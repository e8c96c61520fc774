//! Storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where and how session records are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per session record
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Encoding of stored session records
    #[serde(default)]
    pub format: StorageFormat,
}

/// Encoding used for stored session records
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Yaml,
}

impl StorageConfig {
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(ValidationError::DataDirNotADirectory(
                self.data_dir.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            format: StorageFormat::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
