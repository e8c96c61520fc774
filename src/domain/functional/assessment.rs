//! Snapshot of everything answered so far in a functional assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TestSlot;

use super::profile::UserProfile;
use super::test_results::{
    BalanceResult, IntegrationResult, MarchResult, MobilityResult, RecoveryContextResult,
    SitToStandResult, WallSitResult,
};

/// Profile plus the seven test slots. `None` means the step was not reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionalAssessmentData {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub sit_to_stand: Option<TestSlot<SitToStandResult>>,
    #[serde(default)]
    pub wall_sit: Option<TestSlot<WallSitResult>>,
    #[serde(default)]
    pub balance: Option<TestSlot<BalanceResult>>,
    #[serde(default)]
    pub march: Option<TestSlot<MarchResult>>,
    #[serde(default)]
    pub mobility: Option<TestSlot<MobilityResult>>,
    #[serde(default)]
    pub integration: Option<IntegrationResult>,
    #[serde(default)]
    pub recovery_context: Option<RecoveryContextResult>,
}

impl FunctionalAssessmentData {
    /// Number of test slots that hold an answer or a skip.
    pub fn answered_count(&self) -> usize {
        [
            self.sit_to_stand.is_some(),
            self.wall_sit.is_some(),
            self.balance.is_some(),
            self.march.is_some(),
            self.mobility.is_some(),
            self.integration.is_some(),
            self.recovery_context.is_some(),
        ]
        .iter()
        .filter(|answered| **answered)
        .count()
    }

    /// Number of test slots the user skipped.
    pub fn skipped_count(&self) -> usize {
        [
            self.sit_to_stand.as_ref().is_some_and(TestSlot::is_skipped),
            self.wall_sit.as_ref().is_some_and(TestSlot::is_skipped),
            self.balance.as_ref().is_some_and(TestSlot::is_skipped),
            self.march.as_ref().is_some_and(TestSlot::is_skipped),
            self.mobility.as_ref().is_some_and(TestSlot::is_skipped),
        ]
        .iter()
        .filter(|skipped| **skipped)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SkipMarker, SkipReason};

    #[test]
    fn empty_data_has_nothing_answered() {
        let data = FunctionalAssessmentData::default();
        assert_eq!(data.answered_count(), 0);
        assert_eq!(data.skipped_count(), 0);
    }

    #[test]
    fn counts_answers_and_skips() {
        let data = FunctionalAssessmentData {
            sit_to_stand: Some(TestSlot::Completed(SitToStandResult {
                reps: 14,
                perceived_exertion: 6,
            })),
            balance: Some(TestSlot::Skipped(SkipMarker::new(SkipReason::NotSafe))),
            ..Default::default()
        };
        assert_eq!(data.answered_count(), 2);
        assert_eq!(data.skipped_count(), 1);
    }

    #[test]
    fn missing_fields_deserialize_as_unreached() {
        let data: FunctionalAssessmentData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, FunctionalAssessmentData::default());
    }
}
