//! Application handlers.
//!
//! Command and query handlers that load a session through the gateway,
//! apply a pure domain operation and save the result.

mod export_summary;
mod get_brain_results;
mod get_functional_results;
mod record_brain_step;
mod record_functional_step;
mod reset_assessment;

pub use export_summary::{ExportSummaryHandler, ExportSummaryQuery};
pub use get_brain_results::{BrainResultsView, GetBrainResultsHandler, GetBrainResultsQuery};
pub use get_functional_results::{
    FunctionalResultsView, GetFunctionalResultsHandler, GetFunctionalResultsQuery,
};
pub use record_brain_step::{
    BrainAnswer, RecordBrainStepCommand, RecordBrainStepHandler, RecordBrainStepResult,
};
pub use record_functional_step::{
    FunctionalAnswer, RecordFunctionalStepCommand, RecordFunctionalStepHandler,
    RecordFunctionalStepResult,
};
pub use reset_assessment::{
    ResetAssessmentCommand, ResetAssessmentHandler, ResetAssessmentResult,
};
