//! Integration tests for the functional age scoring engine.
//!
//! Exercises the public API end to end: building an assessment snapshot,
//! scoring it, and checking the clamp, gap and driver invariants over
//! arbitrary answer combinations.

use proptest::prelude::*;
use proptest::sample::select;

use wellness_age::domain::foundation::{
    ChronologicalAge, Impact, SkipMarker, SkipReason, TestSlot, MAX_AGE, MIN_AGE,
};
use wellness_age::domain::functional::{
    calculate_results, score_breakdown, BalanceEndReason, BalanceResult, BalanceTime,
    CoordinationLevel, CrossLegged, EnergyLevel, FitnessLevel, FunctionalAssessmentData,
    HeartRecovery, IntegrationResult, MarchResult, MobilityResult, MorningStiffness,
    OverheadReach, RecoveryContextResult, SitToStandResult, SorenessDuration, UserProfile,
    WallSitDuration, WallSitResult, WallSitStopReason,
};

// =============================================================================
// Fixtures
// =============================================================================

fn profile(age: u8, level: FitnessLevel) -> UserProfile {
    UserProfile::new(ChronologicalAge::try_new(age).unwrap(), level)
}

fn skipped<T>() -> Option<TestSlot<T>> {
    Some(TestSlot::Skipped(SkipMarker::with_details(
        SkipReason::PainOrInjury,
        "left knee",
    )))
}

fn worked_example() -> FunctionalAssessmentData {
    FunctionalAssessmentData {
        profile: Some(profile(45, FitnessLevel::Intermediate)),
        sit_to_stand: Some(TestSlot::Completed(SitToStandResult {
            reps: 17,
            perceived_exertion: 5,
        })),
        wall_sit: skipped(),
        balance: skipped(),
        march: skipped(),
        mobility: skipped(),
        integration: Some(IntegrationResult {
            energy: EnergyLevel::Energized,
            coordination: CoordinationLevel::Coordinated,
        }),
        recovery_context: Some(RecoveryContextResult {
            morning_stiffness: MorningStiffness::None,
            soreness: SorenessDuration::Under24h,
        }),
    }
}

// =============================================================================
// Examples
// =============================================================================

#[test]
fn worked_example_scores_56() {
    let result = calculate_results(&worked_example()).unwrap();

    assert_eq!(result.functional_age, 56);
    assert_eq!(result.chronological_age, 45);
    assert_eq!(result.gap, 11);
    assert_eq!(result.top_drivers.len(), 3);
    assert_eq!(result.top_drivers[0].tag, "Recovery speed");
    assert_eq!(result.top_drivers[0].impact, Impact::Negative);
    assert!(!result.top_drivers[0].suggestion.is_empty());
}

#[test]
fn unreached_steps_count_as_skipped() {
    let reached = worked_example();
    let unreached = FunctionalAssessmentData {
        wall_sit: None,
        balance: None,
        march: None,
        mobility: None,
        ..worked_example()
    };

    assert_eq!(calculate_results(&reached), calculate_results(&unreached));
}

#[test]
fn missing_context_answers_are_neutral() {
    let data = FunctionalAssessmentData {
        integration: None,
        recovery_context: None,
        ..worked_example()
    };

    // the -2 and -2 from the context answers disappear
    let result = calculate_results(&data).unwrap();
    assert_eq!(result.functional_age, 60);
}

#[test]
fn breakdown_matches_final_age() {
    let data = worked_example();
    let breakdown = score_breakdown(&data).unwrap();
    let result = calculate_results(&data).unwrap();

    assert_eq!(breakdown.drivers.len(), 5);
    assert_eq!(45.0 + breakdown.total_offset(), f64::from(result.functional_age));
}

#[test]
fn assessment_data_survives_json() {
    let data = worked_example();
    let json = serde_json::to_string(&data).unwrap();
    let back: FunctionalAssessmentData = serde_json::from_str(&json).unwrap();

    assert_eq!(back, data);
    assert_eq!(calculate_results(&back), calculate_results(&data));
}

// =============================================================================
// Properties
// =============================================================================

fn slot<T: Clone + std::fmt::Debug + 'static>(
    completed: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Option<TestSlot<T>>> {
    prop_oneof![
        Just(None),
        Just(Some(TestSlot::Skipped(SkipMarker::new(SkipReason::PreferNot)))),
        completed.prop_map(|r| Some(TestSlot::Completed(r))),
    ]
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        MIN_AGE..=MAX_AGE,
        select(vec![
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ]),
    )
        .prop_map(|(age, level)| profile(age, level))
}

fn arb_data() -> impl Strategy<Value = FunctionalAssessmentData> {
    let sit = (0u32..60, 0u8..=10).prop_map(|(reps, perceived_exertion)| SitToStandResult {
        reps,
        perceived_exertion,
    });
    let wall = (
        select(vec![
            WallSitDuration::Under15s,
            WallSitDuration::From15To30s,
            WallSitDuration::From30To60s,
            WallSitDuration::From60To90s,
            WallSitDuration::Over90s,
        ]),
        select(vec![
            WallSitStopReason::MusclePain,
            WallSitStopReason::Breathlessness,
            WallSitStopReason::JointDiscomfort,
            WallSitStopReason::MentalDiscomfort,
        ]),
    )
        .prop_map(|(duration, stop_reason)| WallSitResult {
            duration,
            stop_reason,
        });
    let balance = (
        select(vec![
            BalanceTime::Under5s,
            BalanceTime::From5To15s,
            BalanceTime::From15To30s,
            BalanceTime::From30To45s,
            BalanceTime::Over45s,
        ]),
        select(vec![
            BalanceEndReason::ReachedMax,
            BalanceEndReason::FootTouched,
            BalanceEndReason::LostFocus,
            BalanceEndReason::AnkleWobble,
            BalanceEndReason::HipInstability,
        ]),
    )
        .prop_map(|(best_time, end_reason)| BalanceResult {
            best_time,
            end_reason,
        });
    let march = (
        0u8..=10,
        select(vec![
            HeartRecovery::Under30s,
            HeartRecovery::From30To60s,
            HeartRecovery::From60To120s,
            HeartRecovery::Over120s,
        ]),
        0u8..=10,
    )
        .prop_map(
            |(breathing_difficulty, recovery_time, nose_breathing_comfort)| MarchResult {
                breathing_difficulty,
                recovery_time,
                nose_breathing_comfort,
            },
        );
    let mobility = (
        select(vec![
            OverheadReach::FullEasily,
            OverheadReach::FullWithEffort,
            OverheadReach::Partial,
            OverheadReach::Limited,
        ]),
        select(vec![
            CrossLegged::Easily,
            CrossLegged::WithSupport,
            CrossLegged::Uncomfortable,
            CrossLegged::Unable,
        ]),
    )
        .prop_map(|(overhead_reach, cross_legged)| MobilityResult {
            overhead_reach,
            cross_legged,
        });
    let integration = proptest::option::of(
        (
            select(vec![
                EnergyLevel::Energized,
                EnergyLevel::Normal,
                EnergyLevel::Tired,
                EnergyLevel::Exhausted,
            ]),
            select(vec![
                CoordinationLevel::Coordinated,
                CoordinationLevel::Normal,
                CoordinationLevel::SlightlyOff,
                CoordinationLevel::Unsteady,
            ]),
        )
            .prop_map(|(energy, coordination)| IntegrationResult {
                energy,
                coordination,
            }),
    );
    let recovery_context = proptest::option::of(
        (
            select(vec![
                MorningStiffness::None,
                MorningStiffness::Mild,
                MorningStiffness::Moderate,
                MorningStiffness::Severe,
            ]),
            select(vec![
                SorenessDuration::Under24h,
                SorenessDuration::OneToTwoDays,
                SorenessDuration::TwoToThreeDays,
                SorenessDuration::OverThreeDays,
            ]),
        )
            .prop_map(|(morning_stiffness, soreness)| RecoveryContextResult {
                morning_stiffness,
                soreness,
            }),
    );

    (
        arb_profile(),
        slot(sit),
        slot(wall),
        slot(balance),
        slot(march),
        slot(mobility),
        integration,
        recovery_context,
    )
        .prop_map(
            |(
                profile,
                sit_to_stand,
                wall_sit,
                balance,
                march,
                mobility,
                integration,
                recovery_context,
            )| FunctionalAssessmentData {
                profile: Some(profile),
                sit_to_stand,
                wall_sit,
                balance,
                march,
                mobility,
                integration,
                recovery_context,
            },
        )
}

proptest! {
    #[test]
    fn prop_functional_age_is_clamped(data in arb_data()) {
        let result = calculate_results(&data).unwrap();
        prop_assert!((MIN_AGE..=MAX_AGE).contains(&result.functional_age));
    }

    #[test]
    fn prop_gap_is_age_difference(data in arb_data()) {
        let result = calculate_results(&data).unwrap();
        prop_assert_eq!(
            result.gap,
            i16::from(result.functional_age) - i16::from(result.chronological_age)
        );
    }

    #[test]
    fn prop_at_most_three_distinct_drivers(data in arb_data()) {
        let result = calculate_results(&data).unwrap();
        prop_assert!(result.top_drivers.len() <= 3);
        for (i, a) in result.top_drivers.iter().enumerate() {
            for b in &result.top_drivers[i + 1..] {
                prop_assert_ne!(&a.tag, &b.tag);
            }
        }
    }

    #[test]
    fn prop_scoring_is_deterministic(data in arb_data()) {
        prop_assert_eq!(calculate_results(&data), calculate_results(&data.clone()));
    }
}
