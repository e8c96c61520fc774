//! Cognitive domain scorers for the brain age assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ChronologicalAge, Impact, Percentile, TestSlot};

use super::games::{
    ColorClashResult, FocusFilterResult, LightningTapResult, PatternSpanResult, TrailSwitchResult,
};
use super::norms::{
    score_higher_is_better, score_lower_is_better, AgeBracket, BracketScore, NormMetric,
};

/// Offset added when a game is skipped.
pub const SKIP_PENALTY: f64 = 3.0;

/// Percentile reported for a skipped game.
pub const SKIP_PERCENTILE: Percentile = Percentile::new(35);

/// The five measured cognitive domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveDomain {
    ProcessingSpeed,
    ExecutiveFunction,
    WorkingMemory,
    Attention,
    CognitiveFlexibility,
}

impl CognitiveDomain {
    /// All domains in scoring order.
    pub const ALL: [CognitiveDomain; 5] = [
        CognitiveDomain::ProcessingSpeed,
        CognitiveDomain::ExecutiveFunction,
        CognitiveDomain::WorkingMemory,
        CognitiveDomain::Attention,
        CognitiveDomain::CognitiveFlexibility,
    ];

    /// Share of the weighted brain age offset.
    pub fn weight(&self) -> f64 {
        match self {
            CognitiveDomain::ProcessingSpeed => 0.20,
            CognitiveDomain::ExecutiveFunction => 0.25,
            CognitiveDomain::WorkingMemory => 0.25,
            CognitiveDomain::Attention => 0.15,
            CognitiveDomain::CognitiveFlexibility => 0.15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CognitiveDomain::ProcessingSpeed => "Processing Speed",
            CognitiveDomain::ExecutiveFunction => "Executive Function",
            CognitiveDomain::WorkingMemory => "Working Memory",
            CognitiveDomain::Attention => "Attention",
            CognitiveDomain::CognitiveFlexibility => "Cognitive Flexibility",
        }
    }

    /// Suggestion text; neutral domains get the maintenance advice.
    pub fn suggestion(&self, impact: Impact) -> &'static str {
        let strength = impact != Impact::Negative;
        match (self, strength) {
            (CognitiveDomain::ProcessingSpeed, true) => {
                "Your reactions are quick. Fast-paced games and sports help keep them sharp."
            }
            (CognitiveDomain::ProcessingSpeed, false) => {
                "Regular aerobic exercise and reaction games can speed up how fast you process information."
            }
            (CognitiveDomain::ExecutiveFunction, true) => {
                "You filter distractions well. Keep challenging yourself with new skills and puzzles."
            }
            (CognitiveDomain::ExecutiveFunction, false) => {
                "Try single-tasking and short mindfulness sessions to strengthen your focus under conflict."
            }
            (CognitiveDomain::WorkingMemory, true) => {
                "Your working memory is strong. Learning an instrument or language keeps it that way."
            }
            (CognitiveDomain::WorkingMemory, false) => {
                "Practice holding short sequences in mind, like phone numbers or shopping lists, without writing them down."
            }
            (CognitiveDomain::Attention, true) => {
                "You sustain attention well. Protect it by limiting constant notifications."
            }
            (CognitiveDomain::Attention, false) => {
                "Work in focused 25-minute blocks with breaks, and cut down on multitasking."
            }
            (CognitiveDomain::CognitiveFlexibility, true) => {
                "You switch between tasks smoothly. Varied hobbies help maintain that flexibility."
            }
            (CognitiveDomain::CognitiveFlexibility, false) => {
                "Break routines on purpose: take new routes, try new recipes and alternate between different tasks."
            }
        }
    }
}

impl fmt::Display for CognitiveDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Score for one cognitive domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: CognitiveDomain,
    pub percentile: Percentile,
    pub age_offset: f64,
    pub weight: f64,
}

impl DomainScore {
    fn from_bracket(domain: CognitiveDomain, bracket_score: BracketScore, penalty: f64) -> Self {
        Self {
            domain,
            percentile: bracket_score.percentile,
            age_offset: bracket_score.age_offset + penalty,
            weight: domain.weight(),
        }
    }

    /// Fallback used when the game was skipped or never played.
    pub fn skipped(domain: CognitiveDomain) -> Self {
        Self {
            domain,
            percentile: SKIP_PERCENTILE,
            age_offset: SKIP_PENALTY,
            weight: domain.weight(),
        }
    }
}

fn scored<T>(
    domain: CognitiveDomain,
    slot: Option<&TestSlot<T>>,
    score: impl FnOnce(&T) -> DomainScore,
) -> DomainScore {
    match slot {
        Some(TestSlot::Completed(result)) => score(result),
        _ => DomainScore::skipped(domain),
    }
}

/// Processing Speed: trimmed mean reaction time plus a consistency penalty.
pub fn score_processing_speed(
    slot: Option<&TestSlot<LightningTapResult>>,
    age: ChronologicalAge,
) -> DomainScore {
    let domain = CognitiveDomain::ProcessingSpeed;
    scored(domain, slot, |result| {
        let thresholds = NormMetric::ReactionTime.thresholds(AgeBracket::for_age(age));
        let base = score_lower_is_better(result.trimmed_mean_ms, &thresholds);
        let sd = result.standard_deviation_ms;
        let penalty = if !sd.is_finite() || sd > 100.0 {
            1.0
        } else if sd > 70.0 {
            0.5
        } else {
            0.0
        };
        DomainScore::from_bracket(domain, base, penalty)
    })
}

/// Executive Function: Stroop interference plus an accuracy penalty.
pub fn score_executive_function(
    slot: Option<&TestSlot<ColorClashResult>>,
    age: ChronologicalAge,
) -> DomainScore {
    let domain = CognitiveDomain::ExecutiveFunction;
    scored(domain, slot, |result| {
        let thresholds = NormMetric::StroopInterference.thresholds(AgeBracket::for_age(age));
        let base = score_lower_is_better(result.interference_ms, &thresholds);
        let accuracy = result.accuracy;
        let penalty = if !accuracy.is_finite() || accuracy < 0.8 {
            2.0
        } else if accuracy < 0.9 {
            1.0
        } else {
            0.0
        };
        DomainScore::from_bracket(domain, base, penalty)
    })
}

/// Working Memory: weighted forward and backward span.
pub fn score_working_memory(
    slot: Option<&TestSlot<PatternSpanResult>>,
    age: ChronologicalAge,
) -> DomainScore {
    let domain = CognitiveDomain::WorkingMemory;
    scored(domain, slot, |result| {
        let thresholds = NormMetric::WeightedSpan.thresholds(AgeBracket::for_age(age));
        let base = score_higher_is_better(result.weighted_score(), &thresholds);
        DomainScore::from_bracket(domain, base, 0.0)
    })
}

/// Attention: go/no-go composite plus a vigilance decrement penalty.
pub fn score_attention(
    slot: Option<&TestSlot<FocusFilterResult>>,
    age: ChronologicalAge,
) -> DomainScore {
    let domain = CognitiveDomain::Attention;
    scored(domain, slot, |result| {
        let thresholds = NormMetric::GoNoGoComposite.thresholds(AgeBracket::for_age(age));
        let base = score_higher_is_better(result.composite_score, &thresholds);
        let vigilance = result.vigilance_decrement_ms;
        let penalty = if !vigilance.is_finite() || vigilance > 80.0 {
            1.0
        } else if vigilance > 50.0 {
            0.5
        } else {
            0.0
        };
        DomainScore::from_bracket(domain, base, penalty)
    })
}

/// Cognitive Flexibility: trail B minus A with errors already folded in.
pub fn score_cognitive_flexibility(
    slot: Option<&TestSlot<TrailSwitchResult>>,
    age: ChronologicalAge,
) -> DomainScore {
    let domain = CognitiveDomain::CognitiveFlexibility;
    scored(domain, slot, |result| {
        let thresholds = NormMetric::TrailSwitchCost.thresholds(AgeBracket::for_age(age));
        let base = score_lower_is_better(result.switch_cost_ms, &thresholds);
        DomainScore::from_bracket(domain, base, 0.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brain::games::{ColorClashTrial, ReactionTrial};
    use crate::domain::foundation::{SkipMarker, SkipReason};

    fn age(years: u8) -> ChronologicalAge {
        ChronologicalAge::try_new(years).unwrap()
    }

    fn tap(trimmed_mean_ms: f64, standard_deviation_ms: f64) -> TestSlot<LightningTapResult> {
        TestSlot::Completed(LightningTapResult {
            trials: vec![],
            trimmed_mean_ms,
            standard_deviation_ms,
        })
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = CognitiveDomain::ALL.iter().map(|d| d.weight()).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn skipped_game_uses_fallback() {
        let slot: TestSlot<TrailSwitchResult> =
            TestSlot::Skipped(SkipMarker::new(SkipReason::PreferNot));
        let score = score_cognitive_flexibility(Some(&slot), age(40));
        assert_eq!(score.percentile.value(), 35);
        assert_eq!(score.age_offset, 3.0);
        assert_eq!(score.weight, 0.15);
    }

    #[test]
    fn unplayed_game_uses_fallback() {
        let score = score_working_memory(None, age(40));
        assert_eq!(score, DomainScore::skipped(CognitiveDomain::WorkingMemory));
    }

    #[test]
    fn processing_speed_consistency_penalty() {
        // 30s bracket: 300ms is good (-2)
        assert_eq!(score_processing_speed(Some(&tap(300.0, 50.0)), age(35)).age_offset, -2.0);
        assert_eq!(score_processing_speed(Some(&tap(300.0, 71.0)), age(35)).age_offset, -1.5);
        assert_eq!(score_processing_speed(Some(&tap(300.0, 70.0)), age(35)).age_offset, -2.0);
        assert_eq!(score_processing_speed(Some(&tap(300.0, 101.0)), age(35)).age_offset, -1.0);
    }

    #[test]
    fn unmeasured_reaction_time_scores_worst_bucket() {
        let missed = ReactionTrial {
            reaction_ms: 0.0,
            responded: false,
        };
        let slot = TestSlot::Completed(LightningTapResult::from_trials(&[missed; 10]));
        let score = score_processing_speed(Some(&slot), age(40));
        assert_eq!(score.age_offset, 5.0);
        assert_eq!(score.percentile, Percentile::new(10));
    }

    #[test]
    fn all_wrong_stroop_scores_worst_bucket_with_accuracy_penalty() {
        let wrong = |congruent| ColorClashTrial {
            congruent,
            reaction_ms: 500.0,
            correct: false,
        };
        let slot = TestSlot::Completed(ColorClashResult::from_trials(&[wrong(true), wrong(false)]));
        let score = score_executive_function(Some(&slot), age(40));
        assert_eq!(score.age_offset, 7.0);
        assert_eq!(score.percentile, Percentile::new(10));
    }

    #[test]
    fn non_finite_penalty_inputs_take_the_maximum_penalty() {
        assert_eq!(score_processing_speed(Some(&tap(300.0, f64::NAN)), age(35)).age_offset, -1.0);

        let stroop = TestSlot::Completed(ColorClashResult::new(500.0, 650.0, f64::NAN));
        assert_eq!(score_executive_function(Some(&stroop), age(30)).age_offset, 2.0);

        let focus = TestSlot::Completed(FocusFilterResult {
            go_hit_rate: 1.0,
            no_go_correct_rejection_rate: 0.8,
            composite_score: 90.0,
            vigilance_decrement_ms: f64::NAN,
        });
        assert_eq!(score_attention(Some(&focus), age(45)).age_offset, -3.0);
    }

    #[test]
    fn stroop_example_selects_bracket_without_penalty() {
        let slot = TestSlot::Completed(ColorClashResult::new(500.0, 650.0, 0.95));
        // 150ms: good for 70+ (<=185), average for 30-39 (<=165), average for 18-29 (<=150)
        let thirties = score_executive_function(Some(&slot), age(30));
        assert_eq!(thirties.age_offset, 0.0);
        assert_eq!(thirties.percentile.value(), 50);

        let seventies = score_executive_function(Some(&slot), age(75));
        assert_eq!(seventies.age_offset, -2.0);
        assert_eq!(seventies.percentile.value(), 72);
    }

    #[test]
    fn stroop_accuracy_penalty() {
        let low = TestSlot::Completed(ColorClashResult::new(500.0, 650.0, 0.75));
        assert_eq!(score_executive_function(Some(&low), age(30)).age_offset, 2.0);
        let mid = TestSlot::Completed(ColorClashResult::new(500.0, 650.0, 0.85));
        assert_eq!(score_executive_function(Some(&mid), age(30)).age_offset, 1.0);
        let exact = TestSlot::Completed(ColorClashResult::new(500.0, 650.0, 0.9));
        assert_eq!(score_executive_function(Some(&exact), age(30)).age_offset, 0.0);
    }

    #[test]
    fn working_memory_is_higher_is_better() {
        let slot = TestSlot::Completed(PatternSpanResult {
            forward_span: 7,
            backward_span: 6,
        });
        // 16.0 >= 15 excellent for 18-29
        let score = score_working_memory(Some(&slot), age(22));
        assert_eq!(score.age_offset, -4.0);
        assert_eq!(score.percentile.value(), 90);
    }

    #[test]
    fn attention_vigilance_penalty() {
        let result = |decrement: f64| {
            TestSlot::Completed(FocusFilterResult {
                go_hit_rate: 1.0,
                no_go_correct_rejection_rate: 0.8,
                composite_score: 90.0,
                vigilance_decrement_ms: decrement,
            })
        };
        // 90 in 40-49 is excellent (-4)
        assert_eq!(score_attention(Some(&result(10.0)), age(45)).age_offset, -4.0);
        assert_eq!(score_attention(Some(&result(60.0)), age(45)).age_offset, -3.5);
        assert_eq!(score_attention(Some(&result(81.0)), age(45)).age_offset, -3.0);
    }

    #[test]
    fn cognitive_flexibility_is_lower_is_better() {
        let slot = TestSlot::Completed(TrailSwitchResult::new(20_000.0, 30_000.0, 2));
        // 16000ms is beyond poor for 60-69 (12800)
        let score = score_cognitive_flexibility(Some(&slot), age(65));
        assert_eq!(score.age_offset, 5.0);
        assert_eq!(score.percentile.value(), 10);
    }

    #[test]
    fn domain_suggestions_depend_on_impact() {
        for domain in CognitiveDomain::ALL {
            assert_ne!(domain.suggestion(Impact::Positive), domain.suggestion(Impact::Negative));
        }
    }
}
