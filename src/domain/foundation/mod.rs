//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, slot and driver types, and error
//! types that form the vocabulary of both assessments.

mod age;
mod driver;
mod errors;
mod ids;
mod percentile;
mod slot;
mod timestamp;

pub use age::{age_gap, clamp_age, ChronologicalAge, MAX_AGE, MIN_AGE};
pub use driver::{rank_by_magnitude, Driver, Impact, TOP_DRIVER_COUNT};
pub use errors::ValidationError;
pub use ids::AssessmentId;
pub use percentile::Percentile;
pub use slot::{SkipMarker, SkipReason, TestSlot};
pub use timestamp::Timestamp;
