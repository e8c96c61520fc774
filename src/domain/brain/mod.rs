//! Brain Age - mini-game results scored against age-bracketed norms.
//!
//! # Components
//!
//! - `BrainAgeProfile` - age, sleep and caffeine captured before playing
//! - `games` - result records for the five games and their trial aggregates
//! - `norms` - bracket thresholds and the lower/higher-is-better scorers
//! - `domains` - one scorer per cognitive domain
//! - `calculate_brain_age_results` - weighted aggregation, drivers, context note

mod calculator;
mod domains;
pub mod games;
pub mod norms;
mod profile;
pub mod stats;

pub use calculator::{
    calculate_brain_age_results, contextual_note, rank_domain_drivers, score_domains,
    weighted_offset, BrainAgeData, BrainAgeResult, CAFFEINE_NOTE, SHORT_SLEEP_HOURS, SLEEP_NOTE,
};
pub use domains::{
    score_attention, score_cognitive_flexibility, score_executive_function,
    score_processing_speed, score_working_memory, CognitiveDomain, DomainScore, SKIP_PENALTY,
    SKIP_PERCENTILE,
};
pub use games::{
    ColorClashResult, ColorClashTrial, FocusFilterResult, FocusFilterTrial, LightningTapResult,
    PatternSpanResult, ReactionTrial, SpanAttempt, StimulusKind, TrailSwitchResult, UNMEASURED_MS,
};
pub use norms::{AgeBracket, NormMetric};
pub use profile::{BrainAgeProfile, CaffeineStatus, TimeOfDay};
