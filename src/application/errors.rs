//! Application-level errors for loading, saving and scoring sessions.

use thiserror::Error;

use crate::domain::export::ExportError;
use crate::domain::session::AssessmentKind;
use crate::ports::KeyValueStoreError;

/// Errors surfaced by the session gateway and handlers.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session store failed: {0}")]
    Store(#[from] KeyValueStoreError),

    #[error("Failed to encode {kind} session: {message}")]
    Encode { kind: AssessmentKind, message: String },

    #[error("Failed to decode {kind} session: {message}")]
    Decode { kind: AssessmentKind, message: String },

    #[error("No {0} assessment has been started")]
    NotStarted(AssessmentKind),

    #[error("The {0} assessment has no profile yet")]
    ProfileMissing(AssessmentKind),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl SessionError {
    pub fn encode(kind: AssessmentKind, err: impl std::fmt::Display) -> Self {
        SessionError::Encode {
            kind,
            message: err.to_string(),
        }
    }

    pub fn decode(kind: AssessmentKind, err: impl std::fmt::Display) -> Self {
        SessionError::Decode {
            kind,
            message: err.to_string(),
        }
    }
}
