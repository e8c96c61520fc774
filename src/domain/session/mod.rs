//! Session state for both assessments.
//!
//! Sessions are immutable values. Each transition consumes the old value and
//! returns the next one; saving and loading happen in the application layer.

mod brain;
mod functional;
mod kind;

pub use brain::{BrainSession, BrainStep, BRAIN_RESULTS_STEP};
pub use functional::{FunctionalSession, FunctionalStep, FUNCTIONAL_RESULTS_STEP};
pub use kind::AssessmentKind;
