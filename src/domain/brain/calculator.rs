//! Brain Age Calculator - weighted domain offsets, drivers and context note.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    age_gap, clamp_age, rank_by_magnitude, Driver, Impact, TestSlot,
};

use super::domains::{
    score_attention, score_cognitive_flexibility, score_executive_function,
    score_processing_speed, score_working_memory, DomainScore,
};
use super::games::{
    ColorClashResult, FocusFilterResult, LightningTapResult, PatternSpanResult, TrailSwitchResult,
};
use super::profile::{BrainAgeProfile, CaffeineStatus};

/// Sleep below this many hours triggers the sleep caveat.
pub const SHORT_SLEEP_HOURS: f64 = 6.0;

pub const SLEEP_NOTE: &str = "You slept less than 6 hours last night. Sleep loss slows reaction time and memory, so these results may read older than usual. Try again after a full night's rest.";

pub const CAFFEINE_NOTE: &str = "Heavy caffeine intake can make you faster but less accurate. Consider retesting on a day with your usual intake.";

/// Profile plus the five game slots. `None` means the game was not reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrainAgeData {
    #[serde(default)]
    pub profile: Option<BrainAgeProfile>,
    #[serde(default)]
    pub lightning_tap: Option<TestSlot<LightningTapResult>>,
    #[serde(default)]
    pub color_clash: Option<TestSlot<ColorClashResult>>,
    #[serde(default)]
    pub pattern_span: Option<TestSlot<PatternSpanResult>>,
    #[serde(default)]
    pub focus_filter: Option<TestSlot<FocusFilterResult>>,
    #[serde(default)]
    pub trail_switch: Option<TestSlot<TrailSwitchResult>>,
}

/// Final brain age estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainAgeResult {
    pub brain_age: u8,
    pub chronological_age: u8,
    /// `brain_age - chronological_age`.
    pub gap: i16,
    pub domain_scores: Vec<DomainScore>,
    pub top_drivers: Vec<Driver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_note: Option<String>,
}

/// Scores all five domains in fixed order. Returns `None` until a profile exists.
pub fn score_domains(data: &BrainAgeData) -> Option<Vec<DomainScore>> {
    let age = data.profile.as_ref()?.age();
    Some(vec![
        score_processing_speed(data.lightning_tap.as_ref(), age),
        score_executive_function(data.color_clash.as_ref(), age),
        score_working_memory(data.pattern_span.as_ref(), age),
        score_attention(data.focus_filter.as_ref(), age),
        score_cognitive_flexibility(data.trail_switch.as_ref(), age),
    ])
}

/// Weighted mean of domain offsets, divided by the actual weight sum.
pub fn weighted_offset(scores: &[DomainScore]) -> f64 {
    let total_weight: f64 = scores.iter().map(|s| s.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    scores.iter().map(|s| s.age_offset * s.weight).sum::<f64>() / total_weight
}

/// Top domains by offset magnitude, ties kept in domain order.
pub fn rank_domain_drivers(scores: &[DomainScore]) -> Vec<Driver> {
    let offsets: Vec<f64> = scores.iter().map(|s| s.age_offset).collect();
    rank_by_magnitude(&offsets)
        .into_iter()
        .map(|index| {
            let score = &scores[index];
            let impact = Impact::from_offset(score.age_offset);
            Driver {
                tag: score.domain.label().to_string(),
                impact,
                suggestion: score.domain.suggestion(impact).to_string(),
            }
        })
        .collect()
}

/// Single caveat; short sleep takes priority over heavy caffeine.
pub fn contextual_note(profile: &BrainAgeProfile) -> Option<String> {
    if profile.sleep_hours() < SHORT_SLEEP_HOURS {
        Some(SLEEP_NOTE.to_string())
    } else if profile.caffeine() == CaffeineStatus::Heavy {
        Some(CAFFEINE_NOTE.to_string())
    } else {
        None
    }
}

/// Computes the brain age result from a frozen snapshot.
///
/// Returns `None` when no profile has been captured yet.
pub fn calculate_brain_age_results(data: &BrainAgeData) -> Option<BrainAgeResult> {
    let profile = data.profile.as_ref()?;
    let domain_scores = score_domains(data)?;
    let age = profile.age();

    let brain_age = clamp_age(age.as_f64() + weighted_offset(&domain_scores));

    Some(BrainAgeResult {
        brain_age,
        chronological_age: age.years(),
        gap: age_gap(brain_age, age),
        top_drivers: rank_domain_drivers(&domain_scores),
        domain_scores,
        contextual_note: contextual_note(profile),
    })
}
