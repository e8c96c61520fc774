//! Per-test offset rules for the functional assessment.
//!
//! Every function here is pure: a result (or skip) in, years out.

use crate::domain::foundation::{ChronologicalAge, TestSlot};

use super::test_results::{
    BalanceResult, IntegrationResult, MarchResult, MobilityResult, RecoveryContextResult,
    SitToStandResult, WallSitResult,
};

/// Penalty for a skipped sit-to-stand.
pub const SIT_TO_STAND_SKIP_PENALTY: f64 = 3.0;
/// Penalty for a skipped wall sit.
pub const WALL_SIT_SKIP_PENALTY: f64 = 3.0;
/// Penalty for a skipped balance test.
pub const BALANCE_SKIP_PENALTY: f64 = 4.0;
/// Penalty applied to each of the two march buckets when skipped.
pub const MARCH_SKIP_PENALTY: f64 = 3.0;
/// Penalty for skipped mobility questions.
pub const MOBILITY_SKIP_PENALTY: f64 = 2.0;

/// Expected 30-second sit-to-stand reps for an age.
pub fn expected_sit_to_stand_reps(age: ChronologicalAge) -> i64 {
    match age.years() {
        0..=39 => 20,
        40..=49 => 17,
        50..=59 => 15,
        60..=69 => 12,
        _ => 10,
    }
}

/// Offset for how far actual reps landed from the age expectation.
fn rep_difference_offset(difference: i64) -> f64 {
    if difference >= 5 {
        -3.0
    } else if difference >= 2 {
        -1.0
    } else if difference >= -2 {
        0.0
    } else if difference >= -5 {
        2.0
    } else {
        4.0
    }
}

/// Offset for perceived exertion on the 0-10 scale.
fn exertion_offset(exertion: u8) -> f64 {
    match exertion {
        0..=3 => -1.0,
        4..=5 => 0.0,
        6..=7 => 1.0,
        _ => 2.0,
    }
}

/// Sit-to-stand offset: reps against the age band plus perceived exertion.
pub fn sit_to_stand_offset(
    slot: Option<&TestSlot<SitToStandResult>>,
    age: ChronologicalAge,
) -> f64 {
    match slot {
        Some(TestSlot::Completed(result)) => {
            let difference = i64::from(result.reps) - expected_sit_to_stand_reps(age);
            rep_difference_offset(difference) + exertion_offset(result.perceived_exertion)
        }
        _ => SIT_TO_STAND_SKIP_PENALTY,
    }
}

pub fn wall_sit_offset(slot: Option<&TestSlot<WallSitResult>>) -> f64 {
    match slot {
        Some(TestSlot::Completed(result)) => {
            result.duration.offset() + result.stop_reason.offset()
        }
        _ => WALL_SIT_SKIP_PENALTY,
    }
}

pub fn balance_offset(slot: Option<&TestSlot<BalanceResult>>) -> f64 {
    match slot {
        Some(TestSlot::Completed(result)) => {
            result.best_time.offset() + result.end_reason.offset()
        }
        _ => BALANCE_SKIP_PENALTY,
    }
}

fn breathing_difficulty_offset(difficulty: u8) -> f64 {
    match difficulty {
        0..=2 => -1.0,
        3..=5 => 0.0,
        6..=7 => 1.0,
        _ => 2.0,
    }
}

/// Higher comfort reads younger.
fn nose_breathing_offset(comfort: u8) -> f64 {
    match comfort {
        8..=u8::MAX => -1.0,
        5..=7 => 0.0,
        3..=4 => 1.0,
        _ => 2.0,
    }
}

/// The march test feeds two drivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchOffsets {
    pub cardiovascular: f64,
    pub recovery_speed: f64,
}

impl MarchOffsets {
    pub fn total(&self) -> f64 {
        self.cardiovascular + self.recovery_speed
    }
}

pub fn march_offsets(slot: Option<&TestSlot<MarchResult>>) -> MarchOffsets {
    match slot {
        Some(TestSlot::Completed(result)) => MarchOffsets {
            cardiovascular: breathing_difficulty_offset(result.breathing_difficulty)
                + nose_breathing_offset(result.nose_breathing_comfort),
            recovery_speed: result.recovery_time.offset(),
        },
        _ => MarchOffsets {
            cardiovascular: MARCH_SKIP_PENALTY,
            recovery_speed: MARCH_SKIP_PENALTY,
        },
    }
}

pub fn mobility_offset(slot: Option<&TestSlot<MobilityResult>>) -> f64 {
    match slot {
        Some(TestSlot::Completed(result)) => {
            result.overhead_reach.offset() + result.cross_legged.offset()
        }
        _ => MOBILITY_SKIP_PENALTY,
    }
}

/// Not-yet-answered feel check contributes nothing.
pub fn integration_offset(result: Option<&IntegrationResult>) -> f64 {
    result
        .map(|r| r.energy.offset() + r.coordination.offset())
        .unwrap_or(0.0)
}

/// Not-yet-answered recovery context contributes nothing.
pub fn recovery_context_offset(result: Option<&RecoveryContextResult>) -> f64 {
    result
        .map(|r| r.morning_stiffness.offset() + r.soreness.offset())
        .unwrap_or(0.0)
}
