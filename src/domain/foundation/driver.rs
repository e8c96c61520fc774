//! Ranked drivers surfaced alongside an estimated age.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many drivers a result surfaces.
pub const TOP_DRIVER_COUNT: usize = 3;

/// Direction in which a driver moves the estimated age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Makes the estimate younger.
    Positive,
    /// Makes the estimate older.
    Negative,
    Neutral,
}

impl Impact {
    /// Derives the impact from a signed age offset.
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            Impact::Negative
        } else if offset < 0.0 {
            Impact::Positive
        } else {
            Impact::Neutral
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Positive => write!(f, "positive"),
            Impact::Negative => write!(f, "negative"),
            Impact::Neutral => write!(f, "neutral"),
        }
    }
}

/// One ranked contributor to an estimated age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub tag: String,
    pub impact: Impact,
    pub suggestion: String,
}

/// Returns the indices of the `TOP_DRIVER_COUNT` largest magnitudes.
///
/// Sorting is stable, so equal magnitudes keep their input order.
pub fn rank_by_magnitude(magnitudes: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..magnitudes.len()).collect();
    order.sort_by(|&a, &b| {
        magnitudes[b]
            .abs()
            .partial_cmp(&magnitudes[a].abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(TOP_DRIVER_COUNT);
    order
}
