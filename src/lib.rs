//! Wellness Age - Functional Age and Brain Age scoring engine
//!
//! Maps self-reported physical test answers and cognitive mini-game results,
//! together with a user's chronological age, to an estimated functional age
//! or brain age, an age gap and the top contributing drivers.
//!
//! The scoring core in [`domain`] is pure. Session persistence goes through
//! the [`ports::KeyValueStore`] port and the handlers in [`application`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
