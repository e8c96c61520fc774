//! ExportSummaryHandler - Query handler producing the shareable JSON summary.

use tracing::info;

use crate::application::errors::SessionError;
use crate::application::session_gateway::SessionGateway;
use crate::domain::export::{export_brain_summary, export_functional_summary};
use crate::domain::foundation::Timestamp;
use crate::domain::session::AssessmentKind;

/// Query to export one assessment.
#[derive(Debug, Clone)]
pub struct ExportSummaryQuery {
    pub kind: AssessmentKind,
    /// Export time written to `assessment.date`.
    pub at: Timestamp,
}

/// Handler for exporting summaries.
pub struct ExportSummaryHandler {
    gateway: SessionGateway,
}

impl ExportSummaryHandler {
    pub fn new(gateway: SessionGateway) -> Self {
        Self { gateway }
    }

    /// Returns the summary as pretty-printed JSON.
    pub fn handle(&self, query: ExportSummaryQuery) -> Result<String, SessionError> {
        let kind = query.kind;
        let json = match kind {
            AssessmentKind::Functional => {
                let session = self
                    .gateway
                    .load_functional()?
                    .ok_or(SessionError::NotStarted(kind))?;
                let result = session.results().ok_or(SessionError::ProfileMissing(kind))?;
                export_functional_summary(&session, &result, query.at)?
            }
            AssessmentKind::Brain => {
                let session = self
                    .gateway
                    .load_brain()?
                    .ok_or(SessionError::NotStarted(kind))?;
                let result = session.results().ok_or(SessionError::ProfileMissing(kind))?;
                export_brain_summary(&session, &result, query.at)?
            }
        };

        info!(%kind, bytes = json.len(), "Exported assessment summary");
        Ok(json)
    }
}
