//! Functional Age - physical self-report tests scored into an age estimate.
//!
//! # Components
//!
//! - `UserProfile` - age, fitness level and injuries captured at setup
//! - `test_results` - typed answers for the seven test steps
//! - `scoring` - per-test offset rules and skip penalties
//! - `calculate_results` - aggregation, clamping and driver ranking
//!
//! All functions are pure. They take a frozen `FunctionalAssessmentData`
//! snapshot and never touch storage.

mod assessment;
mod calculator;
mod drivers;
mod profile;
pub mod scoring;
pub mod test_results;

pub use assessment::FunctionalAssessmentData;
pub use calculator::{calculate_results, score_breakdown, AssessmentResult, FunctionalBreakdown};
pub use drivers::{rank_drivers, DriverScore, DriverTag};
pub use profile::{BodyArea, FitnessLevel, Sex, UserProfile};
pub use test_results::{
    BalanceEndReason, BalanceResult, BalanceTime, CoordinationLevel, CrossLegged, EnergyLevel,
    HeartRecovery, IntegrationResult, MarchResult, MobilityResult, MorningStiffness,
    OverheadReach, RecoveryContextResult, SitToStandResult, SorenessDuration, WallSitDuration,
    WallSitResult, WallSitStopReason,
};
