//! Test slots: a completed result or an explicit skip marker.

use serde::{Deserialize, Serialize};

/// Why a user opted out of a test or game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    PainOrInjury,
    NoEquipment,
    NotSafe,
    PreferNot,
    Other,
}

/// Marker recorded when a test or game is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipMarker {
    pub reason: SkipReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SkipMarker {
    /// Creates a skip marker without details.
    pub fn new(reason: SkipReason) -> Self {
        Self {
            reason,
            details: None,
        }
    }

    /// Creates a skip marker with free-text details.
    pub fn with_details(reason: SkipReason, details: impl Into<String>) -> Self {
        Self {
            reason,
            details: Some(details.into()),
        }
    }
}

/// Outcome recorded for one test step.
///
/// A step not yet reached is represented by `Option::None` around the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestSlot<T> {
    Completed(T),
    Skipped(SkipMarker),
}

impl<T> TestSlot<T> {
    /// Returns true if the user skipped this step.
    pub fn is_skipped(&self) -> bool {
        matches!(self, TestSlot::Skipped(_))
    }

    /// Returns the completed result, if any.
    pub fn completed(&self) -> Option<&T> {
        match self {
            TestSlot::Completed(result) => Some(result),
            TestSlot::Skipped(_) => None,
        }
    }
}
