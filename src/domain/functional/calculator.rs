//! Functional Age Calculator - aggregates per-test offsets into a result.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{age_gap, clamp_age, Driver};

use super::assessment::FunctionalAssessmentData;
use super::drivers::{rank_drivers, DriverScore, DriverTag};
use super::scoring::{
    balance_offset, integration_offset, march_offsets, mobility_offset, recovery_context_offset,
    sit_to_stand_offset, wall_sit_offset,
};

/// Final functional age estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub functional_age: u8,
    pub chronological_age: u8,
    /// `functional_age - chronological_age`.
    pub gap: i16,
    pub top_drivers: Vec<Driver>,
}

/// Per-driver scores in ranking order, plus the unranked remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalBreakdown {
    pub drivers: Vec<DriverScore>,
    /// Integration, recovery context and fitness level.
    pub unranked_offset: f64,
}

impl FunctionalBreakdown {
    pub fn total_offset(&self) -> f64 {
        self.drivers.iter().map(|d| d.score).sum::<f64>() + self.unranked_offset
    }
}

/// Scores every test. Returns `None` until a profile exists.
pub fn score_breakdown(data: &FunctionalAssessmentData) -> Option<FunctionalBreakdown> {
    let profile = data.profile.as_ref()?;
    let age = profile.chronological_age();
    let march = march_offsets(data.march.as_ref());

    let drivers = vec![
        DriverScore::new(
            DriverTag::LowerBodyCapacity,
            sit_to_stand_offset(data.sit_to_stand.as_ref(), age)
                + wall_sit_offset(data.wall_sit.as_ref()),
        ),
        DriverScore::new(
            DriverTag::BalanceCoordination,
            balance_offset(data.balance.as_ref()),
        ),
        DriverScore::new(DriverTag::CardiovascularFitness, march.cardiovascular),
        DriverScore::new(DriverTag::RecoverySpeed, march.recovery_speed),
        DriverScore::new(DriverTag::Mobility, mobility_offset(data.mobility.as_ref())),
    ];

    let unranked_offset = integration_offset(data.integration.as_ref())
        + recovery_context_offset(data.recovery_context.as_ref())
        + profile.fitness_level().offset();

    Some(FunctionalBreakdown {
        drivers,
        unranked_offset,
    })
}

/// Computes the functional age result from a frozen assessment snapshot.
///
/// Returns `None` when no profile has been captured yet.
pub fn calculate_results(data: &FunctionalAssessmentData) -> Option<AssessmentResult> {
    let profile = data.profile.as_ref()?;
    let breakdown = score_breakdown(data)?;
    let age = profile.chronological_age();

    let functional_age = clamp_age(age.as_f64() + breakdown.total_offset());

    Some(AssessmentResult {
        functional_age,
        chronological_age: age.years(),
        gap: age_gap(functional_age, age),
        top_drivers: rank_drivers(&breakdown.drivers),
    })
}
