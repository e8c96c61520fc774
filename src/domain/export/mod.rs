//! JSON summary export for finished assessments.
//!
//! Export and parse are pure. The document carries the raw answers under
//! `assessment` and the computed scores under `scores`.

mod document;
mod errors;

pub use document::{
    export_brain_summary, export_functional_summary, parse_summary, BrainScores, DomainPercentile,
    ExportDocument, ExportedAssessment, ExportedScores, FunctionalScores, SCHEMA_VERSION,
};
pub use errors::ExportError;
