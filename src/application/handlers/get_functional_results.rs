//! GetFunctionalResultsHandler - Query handler for the functional age result.

use tracing::info;

use crate::application::errors::SessionError;
use crate::application::session_gateway::SessionGateway;
use crate::domain::functional::AssessmentResult;
use crate::domain::session::{AssessmentKind, FunctionalSession};

/// Query for the current functional result.
#[derive(Debug, Clone, Default)]
pub struct GetFunctionalResultsQuery;

#[derive(Debug, Clone)]
pub struct FunctionalResultsView {
    pub session: FunctionalSession,
    pub result: AssessmentResult,
}

/// Handler that scores the stored functional session.
pub struct GetFunctionalResultsHandler {
    gateway: SessionGateway,
}

impl GetFunctionalResultsHandler {
    pub fn new(gateway: SessionGateway) -> Self {
        Self { gateway }
    }

    pub fn handle(
        &self,
        _query: GetFunctionalResultsQuery,
    ) -> Result<FunctionalResultsView, SessionError> {
        let session = self
            .gateway
            .load_functional()?
            .ok_or(SessionError::NotStarted(AssessmentKind::Functional))?;

        let result = session
            .results()
            .ok_or(SessionError::ProfileMissing(AssessmentKind::Functional))?;

        info!(
            assessment_id = %session.id(),
            functional_age = result.functional_age,
            gap = result.gap,
            "Scored functional assessment"
        );

        Ok(FunctionalResultsView { session, result })
    }
}
