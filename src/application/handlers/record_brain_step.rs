//! RecordBrainStepHandler - Command handler for recording a brain game outcome.

use tracing::{debug, info};

use crate::application::errors::SessionError;
use crate::application::session_gateway::SessionGateway;
use crate::domain::brain::{
    BrainAgeProfile, ColorClashResult, FocusFilterResult, LightningTapResult, PatternSpanResult,
    TrailSwitchResult,
};
use crate::domain::foundation::{AssessmentId, TestSlot, Timestamp};
use crate::domain::session::{BrainSession, BRAIN_RESULTS_STEP};

/// One answer for the brain age assessment.
#[derive(Debug, Clone)]
pub enum BrainAnswer {
    Profile(BrainAgeProfile),
    LightningTap(TestSlot<LightningTapResult>),
    ColorClash(TestSlot<ColorClashResult>),
    PatternSpan(TestSlot<PatternSpanResult>),
    FocusFilter(TestSlot<FocusFilterResult>),
    TrailSwitch(TestSlot<TrailSwitchResult>),
}

impl BrainAnswer {
    fn name(&self) -> &'static str {
        match self {
            BrainAnswer::Profile(_) => "profile",
            BrainAnswer::LightningTap(_) => "lightning_tap",
            BrainAnswer::ColorClash(_) => "color_clash",
            BrainAnswer::PatternSpan(_) => "pattern_span",
            BrainAnswer::FocusFilter(_) => "focus_filter",
            BrainAnswer::TrailSwitch(_) => "trail_switch",
        }
    }

    fn apply(self, session: BrainSession) -> BrainSession {
        match self {
            BrainAnswer::Profile(profile) => session.with_profile(profile),
            BrainAnswer::LightningTap(slot) => session.record_lightning_tap(slot),
            BrainAnswer::ColorClash(slot) => session.record_color_clash(slot),
            BrainAnswer::PatternSpan(slot) => session.record_pattern_span(slot),
            BrainAnswer::FocusFilter(slot) => session.record_focus_filter(slot),
            BrainAnswer::TrailSwitch(slot) => session.record_trail_switch(slot),
        }
    }
}

/// Command to record one brain step.
#[derive(Debug, Clone)]
pub struct RecordBrainStepCommand {
    pub answer: BrainAnswer,
}

#[derive(Debug, Clone)]
pub struct RecordBrainStepResult {
    pub session: BrainSession,
    pub completed: bool,
}

/// Handler for recording brain game outcomes.
pub struct RecordBrainStepHandler {
    gateway: SessionGateway,
}

impl RecordBrainStepHandler {
    pub fn new(gateway: SessionGateway) -> Self {
        Self { gateway }
    }

    pub fn handle(
        &self,
        cmd: RecordBrainStepCommand,
    ) -> Result<RecordBrainStepResult, SessionError> {
        let session = match self.gateway.load_brain()? {
            Some(session) => session,
            None => {
                let session = BrainSession::new(AssessmentId::new(), Timestamp::now());
                info!(assessment_id = %session.id(), "Started brain age assessment");
                session
            }
        };

        let answer = cmd.answer.name();
        let mut session = cmd.answer.apply(session);
        debug!(answer, step = session.step(), "Recorded brain step");

        let completed = !session.is_complete() && session.step() == BRAIN_RESULTS_STEP;
        if completed {
            session = session.complete(Timestamp::now());
            info!(assessment_id = %session.id(), "Brain age assessment completed");
        }

        self.gateway.save_brain(&session)?;

        Ok(RecordBrainStepResult { session, completed })
    }
}
