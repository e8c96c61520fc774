//! Errors raised while building or reading an exported summary.

use thiserror::Error;

/// Errors that can occur during summary export or parsing.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON could not be produced or read.
    #[error("Summary serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `assessment.date` is not an ISO-8601 timestamp.
    #[error("Invalid summary date '{0}'")]
    InvalidDate(String),

    /// Document written by a newer schema.
    #[error("Unsupported summary schema version {0}")]
    UnsupportedSchemaVersion(u32),

    /// `assessment.type` disagrees with the kind of scores present.
    #[error("Summary type '{kind}' does not match its scores")]
    KindMismatch { kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            ExportError::UnsupportedSchemaVersion(7).to_string(),
            "Unsupported summary schema version 7"
        );
        assert_eq!(
            ExportError::InvalidDate("yesterday".into()).to_string(),
            "Invalid summary date 'yesterday'"
        );
    }
}
