//! GetBrainResultsHandler - Query handler for the brain age result.

use tracing::info;

use crate::application::errors::SessionError;
use crate::application::session_gateway::SessionGateway;
use crate::domain::brain::BrainAgeResult;
use crate::domain::session::{AssessmentKind, BrainSession};

#[derive(Debug, Clone, Default)]
pub struct GetBrainResultsQuery;

#[derive(Debug, Clone)]
pub struct BrainResultsView {
    pub session: BrainSession,
    pub result: BrainAgeResult,
}

/// Handler that scores the stored brain age session.
pub struct GetBrainResultsHandler {
    gateway: SessionGateway,
}

impl GetBrainResultsHandler {
    pub fn new(gateway: SessionGateway) -> Self {
        Self { gateway }
    }

    pub fn handle(&self, _query: GetBrainResultsQuery) -> Result<BrainResultsView, SessionError> {
        let session = self
            .gateway
            .load_brain()?
            .ok_or(SessionError::NotStarted(AssessmentKind::Brain))?;

        let result = session
            .results()
            .ok_or(SessionError::ProfileMissing(AssessmentKind::Brain))?;

        info!(
            assessment_id = %session.id(),
            brain_age = result.brain_age,
            gap = result.gap,
            has_note = result.contextual_note.is_some(),
            "Scored brain age assessment"
        );

        Ok(BrainResultsView { session, result })
    }
}
