//! Result records handed over by the five brain games.
//!
//! Games own trial capture. These records carry only the aggregates the
//! scorers read, and the constructors below derive them from raw trials so
//! every game computes them the same way.

use serde::{Deserialize, Serialize};

use super::stats::{mean, median, standard_deviation, trimmed_mean};

/// Milliseconds added to the trail switch time per wrong tap.
pub const TRAIL_ERROR_PENALTY_MS: f64 = 3000.0;

/// Trials compared at each end of the go/no-go run for vigilance decrement.
pub const VIGILANCE_WINDOW: usize = 20;

/// Stands in for a time that could not be measured. Always lands in the
/// worst norm bucket and stays finite so JSON can carry it.
pub const UNMEASURED_MS: f64 = f64::MAX;

/// One reaction-time tap. A missed window is `responded = false, reaction_ms = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionTrial {
    pub reaction_ms: f64,
    pub responded: bool,
}

/// Lightning Tap (processing speed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightningTapResult {
    /// Reaction times of responded trials, in play order.
    pub trials: Vec<f64>,
    pub trimmed_mean_ms: f64,
    pub standard_deviation_ms: f64,
}

impl LightningTapResult {
    /// Builds the result from raw taps, ignoring missed trials.
    ///
    /// A run with no responses at all has no reaction time to report.
    pub fn from_trials(trials: &[ReactionTrial]) -> Self {
        let times: Vec<f64> = trials
            .iter()
            .filter(|t| t.responded && t.reaction_ms > 0.0)
            .map(|t| t.reaction_ms)
            .collect();
        let trimmed_mean_ms = if times.is_empty() {
            UNMEASURED_MS
        } else {
            trimmed_mean(&times)
        };
        Self {
            trimmed_mean_ms,
            standard_deviation_ms: standard_deviation(&times),
            trials: times,
        }
    }
}

/// One Stroop-style trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorClashTrial {
    /// Word and ink color agree.
    pub congruent: bool,
    pub reaction_ms: f64,
    pub correct: bool,
}

/// Color Clash (executive function).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorClashResult {
    pub congruent_median_ms: f64,
    pub incongruent_median_ms: f64,
    /// Incongruent median minus congruent median.
    pub interference_ms: f64,
    /// Fraction of correct answers, 0-1.
    pub accuracy: f64,
}

impl ColorClashResult {
    pub fn new(congruent_median_ms: f64, incongruent_median_ms: f64, accuracy: f64) -> Self {
        Self {
            congruent_median_ms,
            incongruent_median_ms,
            interference_ms: incongruent_median_ms - congruent_median_ms,
            accuracy,
        }
    }

    /// Medians use correct trials only; accuracy counts every trial.
    ///
    /// Interference is unmeasured unless both conditions have a correct trial.
    pub fn from_trials(trials: &[ColorClashTrial]) -> Self {
        let correct_times = |congruent: bool| -> Vec<f64> {
            trials
                .iter()
                .filter(|t| t.correct && t.congruent == congruent)
                .map(|t| t.reaction_ms)
                .collect()
        };
        let accuracy = if trials.is_empty() {
            0.0
        } else {
            trials.iter().filter(|t| t.correct).count() as f64 / trials.len() as f64
        };
        let congruent = correct_times(true);
        let incongruent = correct_times(false);
        if congruent.is_empty() || incongruent.is_empty() {
            return Self {
                congruent_median_ms: median(&congruent),
                incongruent_median_ms: median(&incongruent),
                interference_ms: UNMEASURED_MS,
                accuracy,
            };
        }
        Self::new(median(&congruent), median(&incongruent), accuracy)
    }
}

/// One recall attempt at a given sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanAttempt {
    pub length: u8,
    pub correct: bool,
}

/// Longest correctly recalled length before two consecutive failures.
pub fn longest_span(attempts: &[SpanAttempt]) -> u8 {
    let mut best = 0;
    let mut consecutive_failures = 0;
    for attempt in attempts {
        if attempt.correct {
            best = best.max(attempt.length);
            consecutive_failures = 0;
        } else {
            consecutive_failures += 1;
            if consecutive_failures == 2 {
                break;
            }
        }
    }
    best
}

/// Pattern Span (working memory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpanResult {
    pub forward_span: u8,
    pub backward_span: u8,
}

impl PatternSpanResult {
    pub fn from_attempts(forward: &[SpanAttempt], backward: &[SpanAttempt]) -> Self {
        Self {
            forward_span: longest_span(forward),
            backward_span: longest_span(backward),
        }
    }

    /// Backward recall is weighted 1.5x.
    pub fn weighted_score(&self) -> f64 {
        f64::from(self.forward_span) + f64::from(self.backward_span) * 1.5
    }
}

/// Stimulus shown in a go/no-go trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusKind {
    Go,
    NoGo,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusFilterTrial {
    pub stimulus: StimulusKind,
    pub responded: bool,
    pub reaction_ms: f64,
}

/// Focus Filter go/no-go (attention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusFilterResult {
    pub go_hit_rate: f64,
    pub no_go_correct_rejection_rate: f64,
    /// 0-100 composite of hits and correct rejections.
    pub composite_score: f64,
    /// Mean go RT of the last trials minus the first trials.
    pub vigilance_decrement_ms: f64,
}

impl FocusFilterResult {
    pub fn from_trials(trials: &[FocusFilterTrial]) -> Self {
        let go: Vec<&FocusFilterTrial> = trials
            .iter()
            .filter(|t| t.stimulus == StimulusKind::Go)
            .collect();
        let no_go_total = trials.len() - go.len();

        let hit_times: Vec<f64> = go
            .iter()
            .filter(|t| t.responded)
            .map(|t| t.reaction_ms)
            .collect();
        let go_hit_rate = rate(hit_times.len(), go.len());
        let rejections = trials
            .iter()
            .filter(|t| t.stimulus == StimulusKind::NoGo && !t.responded)
            .count();
        let no_go_correct_rejection_rate = rate(rejections, no_go_total);

        let composite_score =
            (100.0 * (0.5 * go_hit_rate + 0.5 * no_go_correct_rejection_rate)).round();

        Self {
            go_hit_rate,
            no_go_correct_rejection_rate,
            composite_score,
            vigilance_decrement_ms: vigilance_decrement(&hit_times),
        }
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Windows shrink to half the series when fewer than 40 go responses exist.
fn vigilance_decrement(go_times: &[f64]) -> f64 {
    let window = VIGILANCE_WINDOW.min(go_times.len() / 2);
    if window == 0 {
        return 0.0;
    }
    let first = mean(&go_times[..window]);
    let last = mean(&go_times[go_times.len() - window..]);
    last - first
}

/// Trail Switch (cognitive flexibility).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSwitchResult {
    pub part_a_ms: f64,
    pub part_b_ms: f64,
    pub errors: u32,
    /// `(part_b + penalty * errors) - part_a`.
    pub switch_cost_ms: f64,
}

impl TrailSwitchResult {
    pub fn new(part_a_ms: f64, part_b_ms: f64, errors: u32) -> Self {
        Self {
            part_a_ms,
            part_b_ms,
            errors,
            switch_cost_ms: part_b_ms + TRAIL_ERROR_PENALTY_MS * f64::from(errors) - part_a_ms,
        }
    }
}
