//! Save/load boundary between session values and the key-value store.
//!
//! Sessions are encoded here and nowhere else; the domain never sees the
//! store or the wire format.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StorageFormat;
use crate::domain::session::{AssessmentKind, BrainSession, FunctionalSession};
use crate::ports::KeyValueStore;

use super::errors::SessionError;

/// Loads and saves both session types through a `KeyValueStore`.
#[derive(Clone)]
pub struct SessionGateway {
    store: Arc<dyn KeyValueStore>,
    format: StorageFormat,
}

impl SessionGateway {
    pub fn new(store: Arc<dyn KeyValueStore>, format: StorageFormat) -> Self {
        Self { store, format }
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    pub fn load_functional(&self) -> Result<Option<FunctionalSession>, SessionError> {
        self.load(AssessmentKind::Functional)
    }

    pub fn save_functional(&self, session: &FunctionalSession) -> Result<(), SessionError> {
        self.save(AssessmentKind::Functional, session)
    }

    pub fn load_brain(&self) -> Result<Option<BrainSession>, SessionError> {
        self.load(AssessmentKind::Brain)
    }

    pub fn save_brain(&self, session: &BrainSession) -> Result<(), SessionError> {
        self.save(AssessmentKind::Brain, session)
    }

    /// Removes the stored record for `kind`.
    pub fn clear(&self, kind: AssessmentKind) -> Result<(), SessionError> {
        self.store.remove(kind.storage_key())?;
        debug!(%kind, "Cleared stored session");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, kind: AssessmentKind) -> Result<Option<T>, SessionError> {
        let Some(raw) = self.store.get(kind.storage_key())? else {
            return Ok(None);
        };
        let session = match self.format {
            StorageFormat::Json => serde_json::from_str(&raw).map_err(|e| {
                warn!(%kind, error = %e, "Stored session is not valid JSON");
                SessionError::decode(kind, e)
            })?,
            StorageFormat::Yaml => serde_yaml::from_str(&raw).map_err(|e| {
                warn!(%kind, error = %e, "Stored session is not valid YAML");
                SessionError::decode(kind, e)
            })?,
        };
        Ok(Some(session))
    }

    fn save<T: Serialize>(&self, kind: AssessmentKind, session: &T) -> Result<(), SessionError> {
        let raw = match self.format {
            StorageFormat::Json => {
                serde_json::to_string(session).map_err(|e| SessionError::encode(kind, e))?
            }
            StorageFormat::Yaml => {
                serde_yaml::to_string(session).map_err(|e| SessionError::encode(kind, e))?
            }
        };
        self.store.set(kind.storage_key(), &raw)?;
        debug!(%kind, bytes = raw.len(), "Saved session");
        Ok(())
    }
}
