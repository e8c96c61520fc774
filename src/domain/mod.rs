//! Domain layer containing the scoring engines and their value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ages, ids, slots, drivers, errors)
//! - `functional` - Functional age tests and scoring
//! - `brain` - Brain age games, norms and scoring
//! - `session` - Immutable session state for both assessments
//! - `export` - JSON summary export and parsing

pub mod brain;
pub mod export;
pub mod foundation;
pub mod functional;
pub mod session;
