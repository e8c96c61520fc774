//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates with the
//! key-value store port through `SessionGateway`.

mod errors;
pub mod handlers;
mod session_gateway;

pub use errors::SessionError;
pub use handlers::{
    BrainAnswer, BrainResultsView, ExportSummaryHandler, ExportSummaryQuery, FunctionalAnswer,
    FunctionalResultsView, GetBrainResultsHandler, GetBrainResultsQuery,
    GetFunctionalResultsHandler, GetFunctionalResultsQuery, RecordBrainStepCommand,
    RecordBrainStepHandler, RecordBrainStepResult, RecordFunctionalStepCommand,
    RecordFunctionalStepHandler, RecordFunctionalStepResult, ResetAssessmentCommand,
    ResetAssessmentHandler, ResetAssessmentResult,
};
pub use session_gateway::SessionGateway;
