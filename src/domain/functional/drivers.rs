//! Ranked functional-age drivers and their canned suggestions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{rank_by_magnitude, Driver, Impact};

/// Drivers that are ranked individually in a functional result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverTag {
    LowerBodyCapacity,
    BalanceCoordination,
    CardiovascularFitness,
    RecoverySpeed,
    Mobility,
}

impl DriverTag {
    /// Display label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            DriverTag::LowerBodyCapacity => "Lower-body capacity",
            DriverTag::BalanceCoordination => "Balance/coordination",
            DriverTag::CardiovascularFitness => "Cardiovascular fitness",
            DriverTag::RecoverySpeed => "Recovery speed",
            DriverTag::Mobility => "Mobility",
        }
    }

    /// Largest offset this driver can contribute, used for normalization.
    pub fn max_possible(&self) -> f64 {
        match self {
            DriverTag::LowerBodyCapacity => 11.0,
            DriverTag::BalanceCoordination => 7.0,
            DriverTag::CardiovascularFitness => 4.0,
            DriverTag::RecoverySpeed => 3.0,
            DriverTag::Mobility => 4.0,
        }
    }

    /// Suggestion text; neutral drivers get the maintenance advice.
    pub fn suggestion(&self, impact: Impact) -> &'static str {
        let strength = impact != Impact::Negative;
        match (self, strength) {
            (DriverTag::LowerBodyCapacity, true) => {
                "Your legs are a real asset. Keep them strong with squats or stair climbing two to three times a week."
            }
            (DriverTag::LowerBodyCapacity, false) => {
                "Build leg strength with daily sit-to-stands from a chair, adding a few reps each week."
            }
            (DriverTag::BalanceCoordination, true) => {
                "Your balance is solid. Maintain it with single-leg stands while brushing your teeth."
            }
            (DriverTag::BalanceCoordination, false) => {
                "Practice standing on one leg near a counter for 30 seconds a side, twice a day."
            }
            (DriverTag::CardiovascularFitness, true) => {
                "Your heart and lungs handle effort well. Keep up regular brisk walks or rides."
            }
            (DriverTag::CardiovascularFitness, false) => {
                "Add 20 minutes of brisk walking most days and practice slow nasal breathing while you move."
            }
            (DriverTag::RecoverySpeed, true) => {
                "You bounce back quickly after effort. Protect it with good sleep and hydration."
            }
            (DriverTag::RecoverySpeed, false) => {
                "Short intervals of effort followed by easy walking will train your heart to settle faster."
            }
            (DriverTag::Mobility, true) => {
                "Your joints move freely. A few minutes of daily stretching will keep it that way."
            }
            (DriverTag::Mobility, false) => {
                "Spend five minutes a day on gentle shoulder and hip mobility drills, and sit on the floor more often."
            }
        }
    }
}

impl fmt::Display for DriverTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw score for one ranked driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverScore {
    pub tag: DriverTag,
    /// Summed age offset of the driver's tests.
    pub score: f64,
    pub max_possible: f64,
}

impl DriverScore {
    pub fn new(tag: DriverTag, score: f64) -> Self {
        Self {
            tag,
            score,
            max_possible: tag.max_possible(),
        }
    }

    /// Score scaled by the driver's maximum contribution.
    pub fn normalized(&self) -> f64 {
        if self.max_possible == 0.0 {
            0.0
        } else {
            self.score / self.max_possible
        }
    }
}

/// Picks the top drivers by normalized magnitude, ties kept in input order.
pub fn rank_drivers(scores: &[DriverScore]) -> Vec<Driver> {
    let magnitudes: Vec<f64> = scores.iter().map(DriverScore::normalized).collect();
    rank_by_magnitude(&magnitudes)
        .into_iter()
        .map(|index| {
            let score = &scores[index];
            let impact = Impact::from_offset(score.score);
            Driver {
                tag: score.tag.label().to_string(),
                impact,
                suggestion: score.tag.suggestion(impact).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_divides_by_max_possible() {
        let score = DriverScore::new(DriverTag::RecoverySpeed, 3.0);
        assert_eq!(score.normalized(), 1.0);
        let score = DriverScore::new(DriverTag::LowerBodyCapacity, -5.5);
        assert_eq!(score.normalized(), -0.5);
    }

    #[test]
    fn ranking_uses_normalized_magnitude() {
        let scores = vec![
            DriverScore::new(DriverTag::LowerBodyCapacity, 4.0), // 0.36
            DriverScore::new(DriverTag::BalanceCoordination, -7.0), // -1.0
            DriverScore::new(DriverTag::CardiovascularFitness, 2.0), // 0.5
            DriverScore::new(DriverTag::RecoverySpeed, 0.0),
            DriverScore::new(DriverTag::Mobility, 1.0), // 0.25
        ];
        let drivers = rank_drivers(&scores);
        let tags: Vec<&str> = drivers.iter().map(|d| d.tag.as_str()).collect();
        assert_eq!(
            tags,
            vec!["Balance/coordination", "Cardiovascular fitness", "Lower-body capacity"]
        );
        assert_eq!(drivers[0].impact, Impact::Positive);
        assert_eq!(drivers[1].impact, Impact::Negative);
    }

    #[test]
    fn ties_keep_input_order() {
        let scores = vec![
            DriverScore::new(DriverTag::CardiovascularFitness, 2.0), // 0.5
            DriverScore::new(DriverTag::Mobility, -2.0), // -0.5
            DriverScore::new(DriverTag::RecoverySpeed, 1.5), // 0.5
            DriverScore::new(DriverTag::LowerBodyCapacity, 0.0),
        ];
        let drivers = rank_drivers(&scores);
        assert_eq!(drivers[0].tag, "Cardiovascular fitness");
        assert_eq!(drivers[1].tag, "Mobility");
        assert_eq!(drivers[2].tag, "Recovery speed");
    }

    #[test]
    fn suggestions_depend_on_impact() {
        let tag = DriverTag::Mobility;
        assert_ne!(tag.suggestion(Impact::Positive), tag.suggestion(Impact::Negative));
        assert_eq!(tag.suggestion(Impact::Neutral), tag.suggestion(Impact::Positive));
    }

    #[test]
    fn driver_suggestion_matches_impact() {
        let drivers = rank_drivers(&[DriverScore::new(DriverTag::RecoverySpeed, 3.0)]);
        assert_eq!(drivers.len(), 1);
        assert_eq!(
            drivers[0].suggestion,
            DriverTag::RecoverySpeed.suggestion(Impact::Negative)
        );
    }
}
