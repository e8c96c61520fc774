//! Profile captured before the brain age games.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChronologicalAge, ValidationError};

/// Most sleep hours the profile accepts.
pub const MAX_SLEEP_HOURS: f64 = 12.0;

/// Caffeine taken before playing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineStatus {
    #[default]
    None,
    Light,
    Moderate,
    Heavy,
}

/// Part of the day the games were played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Detects the part of day from a local 24-hour clock hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Profile for the brain age assessment.
///
/// `time_of_day` is recorded and exported but no scorer reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBrainAgeProfile")]
pub struct BrainAgeProfile {
    age: ChronologicalAge,
    sleep_hours: f64,
    caffeine: CaffeineStatus,
    time_of_day: TimeOfDay,
}

#[derive(Deserialize)]
struct RawBrainAgeProfile {
    age: ChronologicalAge,
    sleep_hours: f64,
    #[serde(default)]
    caffeine: CaffeineStatus,
    time_of_day: TimeOfDay,
}

impl TryFrom<RawBrainAgeProfile> for BrainAgeProfile {
    type Error = ValidationError;

    fn try_from(raw: RawBrainAgeProfile) -> Result<Self, Self::Error> {
        BrainAgeProfile::new(raw.age, raw.sleep_hours, raw.caffeine, raw.time_of_day)
    }
}

impl BrainAgeProfile {
    /// Creates a profile.
    ///
    /// # Errors
    /// Sleep hours must be within 0-12 in half-hour steps.
    pub fn new(
        age: ChronologicalAge,
        sleep_hours: f64,
        caffeine: CaffeineStatus,
        time_of_day: TimeOfDay,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=MAX_SLEEP_HOURS).contains(&sleep_hours) {
            return Err(ValidationError::out_of_range(
                "sleep_hours",
                0,
                12,
                sleep_hours,
            ));
        }
        if (sleep_hours * 2.0).fract() != 0.0 {
            return Err(ValidationError::invalid_format(
                "sleep_hours",
                "must be a multiple of 0.5",
            ));
        }
        Ok(Self {
            age,
            sleep_hours,
            caffeine,
            time_of_day,
        })
    }

    pub fn age(&self) -> ChronologicalAge {
        self.age
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn caffeine(&self) -> CaffeineStatus {
        self.caffeine
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }
}
