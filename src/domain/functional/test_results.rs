//! Self-reported outcomes for each functional test.
//!
//! Every answer enum carries its own age offset through a total `match`,
//! so an unexpected answer can never reach the aggregator as a missing key.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Highest value accepted on the 0-10 self-report scales.
pub const SCALE_MAX: u8 = 10;

fn check_scale(field: &str, value: u8) -> Result<u8, ValidationError> {
    if value > SCALE_MAX {
        return Err(ValidationError::out_of_range(field, 0, SCALE_MAX, value));
    }
    Ok(value)
}

/// 30-second sit-to-stand outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSitToStandResult")]
pub struct SitToStandResult {
    pub reps: u32,
    /// Perceived exertion on a 0-10 scale.
    pub perceived_exertion: u8,
}

#[derive(Deserialize)]
struct RawSitToStandResult {
    reps: u32,
    perceived_exertion: u8,
}

impl TryFrom<RawSitToStandResult> for SitToStandResult {
    type Error = ValidationError;

    fn try_from(raw: RawSitToStandResult) -> Result<Self, Self::Error> {
        SitToStandResult::new(raw.reps, raw.perceived_exertion)
    }
}

impl SitToStandResult {
    /// # Errors
    /// Perceived exertion above `SCALE_MAX`.
    pub fn new(reps: u32, perceived_exertion: u8) -> Result<Self, ValidationError> {
        Ok(Self {
            reps,
            perceived_exertion: check_scale("perceived_exertion", perceived_exertion)?,
        })
    }
}

/// How long the wall sit was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSitDuration {
    #[serde(rename = "under_15s")]
    Under15s,
    #[serde(rename = "15_30s")]
    From15To30s,
    #[serde(rename = "30_60s")]
    From30To60s,
    #[serde(rename = "60_90s")]
    From60To90s,
    #[serde(rename = "over_90s")]
    Over90s,
}

impl WallSitDuration {
    pub fn offset(&self) -> f64 {
        match self {
            WallSitDuration::Under15s => 3.0,
            WallSitDuration::From15To30s => 1.0,
            WallSitDuration::From30To60s => 0.0,
            WallSitDuration::From60To90s => -1.0,
            WallSitDuration::Over90s => -3.0,
        }
    }
}

/// What made the user stop the wall sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSitStopReason {
    MusclePain,
    Breathlessness,
    JointDiscomfort,
    MentalDiscomfort,
}

impl WallSitStopReason {
    pub fn offset(&self) -> f64 {
        match self {
            WallSitStopReason::MusclePain => 0.0,
            WallSitStopReason::Breathlessness => 1.0,
            WallSitStopReason::JointDiscomfort => 2.0,
            WallSitStopReason::MentalDiscomfort => -1.0,
        }
    }
}

/// Wall sit outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSitResult {
    pub duration: WallSitDuration,
    pub stop_reason: WallSitStopReason,
}

/// Best single-leg stance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTime {
    #[serde(rename = "under_5s")]
    Under5s,
    #[serde(rename = "5_15s")]
    From5To15s,
    #[serde(rename = "15_30s")]
    From15To30s,
    #[serde(rename = "30_45s")]
    From30To45s,
    #[serde(rename = "over_45s")]
    Over45s,
}

impl BalanceTime {
    pub fn offset(&self) -> f64 {
        match self {
            BalanceTime::Under5s => 4.0,
            BalanceTime::From5To15s => 2.0,
            BalanceTime::From15To30s => 0.0,
            BalanceTime::From30To45s => -1.0,
            BalanceTime::Over45s => -3.0,
        }
    }
}

/// How the balance attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceEndReason {
    ReachedMax,
    FootTouched,
    LostFocus,
    AnkleWobble,
    HipInstability,
}

impl BalanceEndReason {
    pub fn offset(&self) -> f64 {
        match self {
            BalanceEndReason::ReachedMax => -1.0,
            BalanceEndReason::FootTouched => 0.0,
            BalanceEndReason::LostFocus => 0.0,
            BalanceEndReason::AnkleWobble => 1.0,
            BalanceEndReason::HipInstability => 3.0,
        }
    }
}

/// Balance outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub best_time: BalanceTime,
    pub end_reason: BalanceEndReason,
}

/// Time for breathing and heart rate to settle after marching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRecovery {
    #[serde(rename = "under_30s")]
    Under30s,
    #[serde(rename = "30_60s")]
    From30To60s,
    #[serde(rename = "60_120s")]
    From60To120s,
    #[serde(rename = "over_120s")]
    Over120s,
}

impl HeartRecovery {
    pub fn offset(&self) -> f64 {
        match self {
            HeartRecovery::Under30s => -2.0,
            HeartRecovery::From30To60s => 0.0,
            HeartRecovery::From60To120s => 2.0,
            HeartRecovery::Over120s => 3.0,
        }
    }
}

/// March-in-place and recovery outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMarchResult")]
pub struct MarchResult {
    /// Breathing difficulty on a 0-10 scale.
    pub breathing_difficulty: u8,
    pub recovery_time: HeartRecovery,
    /// Comfort breathing through the nose on a 0-10 scale.
    pub nose_breathing_comfort: u8,
}

#[derive(Deserialize)]
struct RawMarchResult {
    breathing_difficulty: u8,
    recovery_time: HeartRecovery,
    nose_breathing_comfort: u8,
}

impl TryFrom<RawMarchResult> for MarchResult {
    type Error = ValidationError;

    fn try_from(raw: RawMarchResult) -> Result<Self, Self::Error> {
        MarchResult::new(
            raw.breathing_difficulty,
            raw.recovery_time,
            raw.nose_breathing_comfort,
        )
    }
}

impl MarchResult {
    /// # Errors
    /// Either self-report scale above `SCALE_MAX`.
    pub fn new(
        breathing_difficulty: u8,
        recovery_time: HeartRecovery,
        nose_breathing_comfort: u8,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            breathing_difficulty: check_scale("breathing_difficulty", breathing_difficulty)?,
            recovery_time,
            nose_breathing_comfort: check_scale(
                "nose_breathing_comfort",
                nose_breathing_comfort,
            )?,
        })
    }
}

/// Overhead reach answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverheadReach {
    FullEasily,
    FullWithEffort,
    Partial,
    Limited,
}

impl OverheadReach {
    pub fn offset(&self) -> f64 {
        match self {
            OverheadReach::FullEasily => -1.0,
            OverheadReach::FullWithEffort => 0.0,
            OverheadReach::Partial => 1.0,
            OverheadReach::Limited => 2.0,
        }
    }
}

/// Cross-legged floor sit answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossLegged {
    Easily,
    WithSupport,
    Uncomfortable,
    Unable,
}

impl CrossLegged {
    pub fn offset(&self) -> f64 {
        match self {
            CrossLegged::Easily => -1.0,
            CrossLegged::WithSupport => 0.0,
            CrossLegged::Uncomfortable => 1.0,
            CrossLegged::Unable => 2.0,
        }
    }
}

/// Mobility answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilityResult {
    pub overhead_reach: OverheadReach,
    pub cross_legged: CrossLegged,
}

/// Energy level after the physical tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Energized,
    Normal,
    Tired,
    Exhausted,
}

impl EnergyLevel {
    pub fn offset(&self) -> f64 {
        match self {
            EnergyLevel::Energized => -1.0,
            EnergyLevel::Normal => 0.0,
            EnergyLevel::Tired => 1.0,
            EnergyLevel::Exhausted => 2.0,
        }
    }
}

/// Coordination felt after the physical tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinationLevel {
    Coordinated,
    Normal,
    SlightlyOff,
    Unsteady,
}

impl CoordinationLevel {
    pub fn offset(&self) -> f64 {
        match self {
            CoordinationLevel::Coordinated => -1.0,
            CoordinationLevel::Normal => 0.0,
            CoordinationLevel::SlightlyOff => 1.0,
            CoordinationLevel::Unsteady => 2.0,
        }
    }
}

/// Post-test feel check. Never skippable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationResult {
    pub energy: EnergyLevel,
    pub coordination: CoordinationLevel,
}

/// Typical morning stiffness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorningStiffness {
    None,
    Mild,
    Moderate,
    Severe,
}

impl MorningStiffness {
    pub fn offset(&self) -> f64 {
        match self {
            MorningStiffness::None => -1.0,
            MorningStiffness::Mild => 0.0,
            MorningStiffness::Moderate => 1.0,
            MorningStiffness::Severe => 2.0,
        }
    }
}

/// How long soreness lasts after a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SorenessDuration {
    #[serde(rename = "under_24h")]
    Under24h,
    #[serde(rename = "1_2_days")]
    OneToTwoDays,
    #[serde(rename = "2_3_days")]
    TwoToThreeDays,
    #[serde(rename = "over_3_days")]
    OverThreeDays,
}

impl SorenessDuration {
    pub fn offset(&self) -> f64 {
        match self {
            SorenessDuration::Under24h => -1.0,
            SorenessDuration::OneToTwoDays => 0.0,
            SorenessDuration::TwoToThreeDays => 1.0,
            SorenessDuration::OverThreeDays => 2.0,
        }
    }
}

/// Everyday recovery context. Never skippable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryContextResult {
    pub morning_stiffness: MorningStiffness,
    pub soreness: SorenessDuration,
}
