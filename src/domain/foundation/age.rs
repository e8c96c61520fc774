//! Age value object and the final-age clamp shared by both scorers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Youngest age an assessment accepts or reports.
pub const MIN_AGE: u8 = 18;

/// Oldest age an assessment accepts or reports.
pub const MAX_AGE: u8 = 100;

/// A chronological age in whole years, always within `MIN_AGE..=MAX_AGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChronologicalAge(u8);

impl ChronologicalAge {
    /// Creates an age, returning error if outside 18-100.
    pub fn try_new(years: u8) -> Result<Self, ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&years) {
            return Err(ValidationError::out_of_range(
                "age",
                MIN_AGE,
                MAX_AGE,
                years,
            ));
        }
        Ok(Self(years))
    }

    /// Returns the age in years.
    pub fn years(&self) -> u8 {
        self.0
    }

    /// Returns the age as a float for offset arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for ChronologicalAge {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ChronologicalAge> for u8 {
    fn from(age: ChronologicalAge) -> Self {
        age.0
    }
}

impl fmt::Display for ChronologicalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounds an estimated age to whole years and clamps it to `MIN_AGE..=MAX_AGE`.
///
/// Halves round away from zero. NaN maps to `MIN_AGE`.
pub fn clamp_age(estimate: f64) -> u8 {
    if estimate.is_nan() {
        return MIN_AGE;
    }
    estimate
        .round()
        .clamp(f64::from(MIN_AGE), f64::from(MAX_AGE)) as u8
}

/// Signed difference between an estimated age and the chronological age.
pub fn age_gap(estimated: u8, chronological: ChronologicalAge) -> i16 {
    i16::from(estimated) - i16::from(chronological.years())
}
