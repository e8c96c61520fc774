//! Functional assessment session state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, TestSlot, Timestamp};
use crate::domain::functional::{
    calculate_results, AssessmentResult, BalanceResult, FunctionalAssessmentData,
    IntegrationResult, MarchResult, MobilityResult, RecoveryContextResult, SitToStandResult,
    UserProfile, WallSitResult,
};

/// Step that shows the results. Steps before it are intro, profile and the seven tests.
pub const FUNCTIONAL_RESULTS_STEP: u8 = 9;

/// Step index of each functional test, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalStep {
    Intro,
    Profile,
    SitToStand,
    WallSit,
    Balance,
    March,
    Mobility,
    Integration,
    RecoveryContext,
    Results,
}

impl FunctionalStep {
    pub fn index(&self) -> u8 {
        match self {
            FunctionalStep::Intro => 0,
            FunctionalStep::Profile => 1,
            FunctionalStep::SitToStand => 2,
            FunctionalStep::WallSit => 3,
            FunctionalStep::Balance => 4,
            FunctionalStep::March => 5,
            FunctionalStep::Mobility => 6,
            FunctionalStep::Integration => 7,
            FunctionalStep::RecoveryContext => 8,
            FunctionalStep::Results => FUNCTIONAL_RESULTS_STEP,
        }
    }
}

/// Immutable snapshot of an in-progress or completed functional assessment.
///
/// Every operation returns a new value; persistence happens outside the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalSession {
    id: AssessmentId,
    started_at: Timestamp,
    step: u8,
    #[serde(default)]
    completed_at: Option<Timestamp>,
    #[serde(default)]
    data: FunctionalAssessmentData,
}

impl FunctionalSession {
    /// Starts an empty session at the intro step.
    pub fn new(id: AssessmentId, started_at: Timestamp) -> Self {
        Self {
            id,
            started_at,
            step: FunctionalStep::Intro.index(),
            completed_at: None,
            data: FunctionalAssessmentData::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn data(&self) -> &FunctionalAssessmentData {
        &self.data
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.data.profile = Some(profile);
        self.advance_past(FunctionalStep::Profile)
    }

    pub fn record_sit_to_stand(mut self, slot: TestSlot<SitToStandResult>) -> Self {
        self.data.sit_to_stand = Some(slot);
        self.advance_past(FunctionalStep::SitToStand)
    }

    pub fn record_wall_sit(mut self, slot: TestSlot<WallSitResult>) -> Self {
        self.data.wall_sit = Some(slot);
        self.advance_past(FunctionalStep::WallSit)
    }

    pub fn record_balance(mut self, slot: TestSlot<BalanceResult>) -> Self {
        self.data.balance = Some(slot);
        self.advance_past(FunctionalStep::Balance)
    }

    pub fn record_march(mut self, slot: TestSlot<MarchResult>) -> Self {
        self.data.march = Some(slot);
        self.advance_past(FunctionalStep::March)
    }

    pub fn record_mobility(mut self, slot: TestSlot<MobilityResult>) -> Self {
        self.data.mobility = Some(slot);
        self.advance_past(FunctionalStep::Mobility)
    }

    pub fn record_integration(mut self, result: IntegrationResult) -> Self {
        self.data.integration = Some(result);
        self.advance_past(FunctionalStep::Integration)
    }

    pub fn record_recovery_context(mut self, result: RecoveryContextResult) -> Self {
        self.data.recovery_context = Some(result);
        self.advance_past(FunctionalStep::RecoveryContext)
    }

    /// Jumps to a step, capped at the results step. Answers are kept.
    pub fn go_to_step(mut self, step: u8) -> Self {
        self.step = step.min(FUNCTIONAL_RESULTS_STEP);
        self
    }

    /// Marks the session finished and moves to the results step.
    pub fn complete(mut self, at: Timestamp) -> Self {
        self.completed_at = Some(at);
        self.step = FUNCTIONAL_RESULTS_STEP;
        self
    }

    /// Discards every answer and starts over with a fresh id.
    pub fn reset(&self, id: AssessmentId, started_at: Timestamp) -> Self {
        Self::new(id, started_at)
    }

    /// Scores the current snapshot. `None` until a profile is recorded.
    pub fn results(&self) -> Option<AssessmentResult> {
        calculate_results(&self.data)
    }

    fn advance_past(mut self, step: FunctionalStep) -> Self {
        self.step = (step.index() + 1).min(FUNCTIONAL_RESULTS_STEP);
        self
    }
}
