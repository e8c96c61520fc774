//! ResetAssessmentHandler - Command handler that starts an assessment over.

use tracing::info;

use crate::application::errors::SessionError;
use crate::application::session_gateway::SessionGateway;
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::session::{AssessmentKind, BrainSession, FunctionalSession};

/// Command to discard all answers of one assessment.
#[derive(Debug, Clone)]
pub struct ResetAssessmentCommand {
    pub kind: AssessmentKind,
}

#[derive(Debug, Clone)]
pub struct ResetAssessmentResult {
    /// Id of the fresh, empty session.
    pub assessment_id: AssessmentId,
    /// Whether a previous session was discarded.
    pub replaced: bool,
}

/// Handler for resetting an assessment.
pub struct ResetAssessmentHandler {
    gateway: SessionGateway,
}

impl ResetAssessmentHandler {
    pub fn new(gateway: SessionGateway) -> Self {
        Self { gateway }
    }

    pub fn handle(
        &self,
        cmd: ResetAssessmentCommand,
    ) -> Result<ResetAssessmentResult, SessionError> {
        let id = AssessmentId::new();
        let now = Timestamp::now();

        let replaced = match cmd.kind {
            AssessmentKind::Functional => {
                let previous = self.gateway.load_functional()?;
                let fresh = match &previous {
                    Some(session) => session.reset(id, now),
                    None => FunctionalSession::new(id, now),
                };
                self.gateway.save_functional(&fresh)?;
                previous.is_some()
            }
            AssessmentKind::Brain => {
                let previous = self.gateway.load_brain()?;
                let fresh = match &previous {
                    Some(session) => session.reset(id, now),
                    None => BrainSession::new(id, now),
                };
                self.gateway.save_brain(&fresh)?;
                previous.is_some()
            }
        };

        info!(kind = %cmd.kind, assessment_id = %id, replaced, "Reset assessment");

        Ok(ResetAssessmentResult {
            assessment_id: id,
            replaced,
        })
    }
}
