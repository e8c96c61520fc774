//! User profile captured at the setup step of the functional assessment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{ChronologicalAge, ValidationError};

/// Self-reported sex. Optional and not used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    Other,
}

/// Self-reported fitness level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Flat adjustment applied to the functional age total.
    pub fn offset(&self) -> f64 {
        match self {
            FitnessLevel::Beginner => 2.0,
            FitnessLevel::Intermediate => 0.0,
            FitnessLevel::Advanced => -2.0,
        }
    }
}

/// Body areas a user can report as injured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyArea {
    None,
    Knees,
    Hips,
    Back,
    Shoulders,
    Ankles,
    Wrists,
}

/// Profile for the functional age assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUserProfile")]
pub struct UserProfile {
    chronological_age: ChronologicalAge,
    #[serde(skip_serializing_if = "Option::is_none")]
    sex: Option<Sex>,
    fitness_level: FitnessLevel,
    injuries: BTreeSet<BodyArea>,
    has_equipment: bool,
}

#[derive(Deserialize)]
struct RawUserProfile {
    chronological_age: ChronologicalAge,
    #[serde(default)]
    sex: Option<Sex>,
    fitness_level: FitnessLevel,
    #[serde(default)]
    injuries: BTreeSet<BodyArea>,
    #[serde(default)]
    has_equipment: bool,
}

impl TryFrom<RawUserProfile> for UserProfile {
    type Error = ValidationError;

    fn try_from(raw: RawUserProfile) -> Result<Self, Self::Error> {
        UserProfile::new(raw.chronological_age, raw.fitness_level)
            .with_sex(raw.sex)
            .with_equipment(raw.has_equipment)
            .with_injuries(raw.injuries)
    }
}

impl UserProfile {
    /// Creates a profile with no injuries and no equipment.
    pub fn new(chronological_age: ChronologicalAge, fitness_level: FitnessLevel) -> Self {
        Self {
            chronological_age,
            sex: None,
            fitness_level,
            injuries: BTreeSet::new(),
            has_equipment: false,
        }
    }

    /// Sets the optional self-reported sex.
    pub fn with_sex(mut self, sex: Option<Sex>) -> Self {
        self.sex = sex;
        self
    }

    /// Records whether the user has a chair and wall space available.
    pub fn with_equipment(mut self, has_equipment: bool) -> Self {
        self.has_equipment = has_equipment;
        self
    }

    /// Sets the injured body areas.
    ///
    /// # Errors
    /// `BodyArea::None` cannot be combined with any other area.
    pub fn with_injuries(
        mut self,
        injuries: impl IntoIterator<Item = BodyArea>,
    ) -> Result<Self, ValidationError> {
        let injuries: BTreeSet<BodyArea> = injuries.into_iter().collect();
        if injuries.contains(&BodyArea::None) && injuries.len() > 1 {
            return Err(ValidationError::invalid_format(
                "injuries",
                "'none' cannot be combined with other body areas",
            ));
        }
        self.injuries = injuries;
        Ok(self)
    }

    pub fn chronological_age(&self) -> ChronologicalAge {
        self.chronological_age
    }

    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn fitness_level(&self) -> FitnessLevel {
        self.fitness_level
    }

    pub fn injuries(&self) -> &BTreeSet<BodyArea> {
        &self.injuries
    }

    pub fn has_equipment(&self) -> bool {
        self.has_equipment
    }

    /// Returns true if any body area other than `None` is reported.
    pub fn has_injuries(&self) -> bool {
        self.injuries.iter().any(|area| *area != BodyArea::None)
    }
}
