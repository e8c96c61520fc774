//! Brain age session state.

use serde::{Deserialize, Serialize};

use crate::domain::brain::{
    calculate_brain_age_results, BrainAgeData, BrainAgeProfile, BrainAgeResult, ColorClashResult,
    FocusFilterResult, LightningTapResult, PatternSpanResult, TrailSwitchResult,
};
use crate::domain::foundation::{AssessmentId, TestSlot, Timestamp};

/// Step that shows the results: intro, profile, then five games.
pub const BRAIN_RESULTS_STEP: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrainStep {
    Intro,
    Profile,
    LightningTap,
    ColorClash,
    PatternSpan,
    FocusFilter,
    TrailSwitch,
    Results,
}

impl BrainStep {
    pub fn index(&self) -> u8 {
        match self {
            BrainStep::Intro => 0,
            BrainStep::Profile => 1,
            BrainStep::LightningTap => 2,
            BrainStep::ColorClash => 3,
            BrainStep::PatternSpan => 4,
            BrainStep::FocusFilter => 5,
            BrainStep::TrailSwitch => 6,
            BrainStep::Results => BRAIN_RESULTS_STEP,
        }
    }
}

/// Immutable snapshot of a brain age session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainSession {
    id: AssessmentId,
    started_at: Timestamp,
    step: u8,
    #[serde(default)]
    completed_at: Option<Timestamp>,
    #[serde(default)]
    data: BrainAgeData,
}

impl BrainSession {
    pub fn new(id: AssessmentId, started_at: Timestamp) -> Self {
        Self {
            id,
            started_at,
            step: BrainStep::Intro.index(),
            completed_at: None,
            data: BrainAgeData::default(),
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn data(&self) -> &BrainAgeData {
        &self.data
    }

    pub fn with_profile(mut self, profile: BrainAgeProfile) -> Self {
        self.data.profile = Some(profile);
        self.advance_past(BrainStep::Profile)
    }

    pub fn record_lightning_tap(mut self, slot: TestSlot<LightningTapResult>) -> Self {
        self.data.lightning_tap = Some(slot);
        self.advance_past(BrainStep::LightningTap)
    }

    pub fn record_color_clash(mut self, slot: TestSlot<ColorClashResult>) -> Self {
        self.data.color_clash = Some(slot);
        self.advance_past(BrainStep::ColorClash)
    }

    pub fn record_pattern_span(mut self, slot: TestSlot<PatternSpanResult>) -> Self {
        self.data.pattern_span = Some(slot);
        self.advance_past(BrainStep::PatternSpan)
    }

    pub fn record_focus_filter(mut self, slot: TestSlot<FocusFilterResult>) -> Self {
        self.data.focus_filter = Some(slot);
        self.advance_past(BrainStep::FocusFilter)
    }

    pub fn record_trail_switch(mut self, slot: TestSlot<TrailSwitchResult>) -> Self {
        self.data.trail_switch = Some(slot);
        self.advance_past(BrainStep::TrailSwitch)
    }

    /// Jumps to a step, capped at the results step.
    pub fn go_to_step(mut self, step: u8) -> Self {
        self.step = step.min(BRAIN_RESULTS_STEP);
        self
    }

    pub fn complete(mut self, at: Timestamp) -> Self {
        self.completed_at = Some(at);
        self.step = BRAIN_RESULTS_STEP;
        self
    }

    pub fn reset(&self, id: AssessmentId, started_at: Timestamp) -> Self {
        Self::new(id, started_at)
    }

    pub fn results(&self) -> Option<BrainAgeResult> {
        calculate_brain_age_results(&self.data)
    }

    fn advance_past(mut self, step: BrainStep) -> Self {
        self.step = (step.index() + 1).min(BRAIN_RESULTS_STEP);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brain::{CaffeineStatus, TimeOfDay};
    use crate::domain::foundation::{ChronologicalAge, SkipMarker, SkipReason};

    fn profile() -> BrainAgeProfile {
        BrainAgeProfile::new(
            ChronologicalAge::try_new(30).unwrap(),
            5.0,
            CaffeineStatus::None,
            TimeOfDay::Evening,
        )
        .unwrap()
    }

    fn skipped<T>() -> TestSlot<T> {
        TestSlot::Skipped(SkipMarker::new(SkipReason::Other))
    }

    #[test]
    fn walks_every_game_to_results() {
        let s = BrainSession::new(AssessmentId::new(), Timestamp::now())
            .with_profile(profile())
            .record_lightning_tap(skipped())
            .record_color_clash(skipped())
            .record_pattern_span(skipped())
            .record_focus_filter(skipped())
            .record_trail_switch(skipped());
        assert_eq!(s.step(), BRAIN_RESULTS_STEP);

        let result = s.results().unwrap();
        assert_eq!(result.brain_age, 33);
        assert_eq!(result.gap, 3);
    }

    #[test]
    fn unfinished_games_still_score() {
        let s = BrainSession::new(AssessmentId::new(), Timestamp::now())
            .with_profile(profile())
            .record_pattern_span(TestSlot::Completed(PatternSpanResult {
                forward_span: 7,
                backward_span: 6,
            }));
        assert_eq!(s.step(), 5);
        assert_eq!(s.results().unwrap().domain_scores.len(), 5);
    }

    #[test]
    fn complete_and_reset() {
        let at = Timestamp::now();
        let s = BrainSession::new(AssessmentId::new(), at)
            .with_profile(profile())
            .complete(at);
        assert!(s.is_complete());
        assert_eq!(s.step(), BRAIN_RESULTS_STEP);

        let fresh = s.reset(AssessmentId::new(), Timestamp::now());
        assert!(fresh.data().profile.is_none());
        assert_eq!(fresh.step(), 0);
        assert_ne!(fresh.id(), s.id());
    }

    #[test]
    fn yaml_round_trip() {
        let s = BrainSession::new(AssessmentId::new(), Timestamp::now())
            .with_profile(profile())
            .record_trail_switch(TestSlot::Completed(TrailSwitchResult::new(
                20_000.0, 30_000.0, 1,
            )));
        let yaml = serde_yaml::to_string(&s).unwrap();
        let back: BrainSession = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, s);
    }
}
