//! Which of the two assessments a session or export belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Assessment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Functional,
    Brain,
}

impl AssessmentKind {
    /// Key under which the session record is persisted.
    pub fn storage_key(&self) -> &'static str {
        match self {
            AssessmentKind::Functional => "functional-age-assessment",
            AssessmentKind::Brain => "brain-age-assessment",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentKind::Functional => write!(f, "functional"),
            AssessmentKind::Brain => write!(f, "brain"),
        }
    }
}

impl FromStr for AssessmentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "functional" => Ok(AssessmentKind::Functional),
            "brain" => Ok(AssessmentKind::Brain),
            other => Err(ValidationError::invalid_format(
                "assessment_kind",
                format!("unknown assessment kind '{}'", other),
            )),
        }
    }
}
