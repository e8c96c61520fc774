//! RecordFunctionalStepHandler - Command handler for answering a functional test step.

use tracing::{debug, info};

use crate::domain::foundation::{AssessmentId, TestSlot, Timestamp};
use crate::domain::functional::{
    BalanceResult, IntegrationResult, MarchResult, MobilityResult, RecoveryContextResult,
    SitToStandResult, UserProfile, WallSitResult,
};
use crate::domain::session::{FunctionalSession, FUNCTIONAL_RESULTS_STEP};

use crate::application::errors::SessionError;
use crate::application::session_gateway::SessionGateway;

/// One answer for the functional assessment.
#[derive(Debug, Clone)]
pub enum FunctionalAnswer {
    Profile(UserProfile),
    SitToStand(TestSlot<SitToStandResult>),
    WallSit(TestSlot<WallSitResult>),
    Balance(TestSlot<BalanceResult>),
    March(TestSlot<MarchResult>),
    Mobility(TestSlot<MobilityResult>),
    Integration(IntegrationResult),
    RecoveryContext(RecoveryContextResult),
}

impl FunctionalAnswer {
    fn name(&self) -> &'static str {
        match self {
            FunctionalAnswer::Profile(_) => "profile",
            FunctionalAnswer::SitToStand(_) => "sit_to_stand",
            FunctionalAnswer::WallSit(_) => "wall_sit",
            FunctionalAnswer::Balance(_) => "balance",
            FunctionalAnswer::March(_) => "march",
            FunctionalAnswer::Mobility(_) => "mobility",
            FunctionalAnswer::Integration(_) => "integration",
            FunctionalAnswer::RecoveryContext(_) => "recovery_context",
        }
    }

    fn apply(self, session: FunctionalSession) -> FunctionalSession {
        match self {
            FunctionalAnswer::Profile(profile) => session.with_profile(profile),
            FunctionalAnswer::SitToStand(slot) => session.record_sit_to_stand(slot),
            FunctionalAnswer::WallSit(slot) => session.record_wall_sit(slot),
            FunctionalAnswer::Balance(slot) => session.record_balance(slot),
            FunctionalAnswer::March(slot) => session.record_march(slot),
            FunctionalAnswer::Mobility(slot) => session.record_mobility(slot),
            FunctionalAnswer::Integration(result) => session.record_integration(result),
            FunctionalAnswer::RecoveryContext(result) => session.record_recovery_context(result),
        }
    }
}

/// Command to record one functional step.
#[derive(Debug, Clone)]
pub struct RecordFunctionalStepCommand {
    pub answer: FunctionalAnswer,
}

/// Result of a recorded step.
#[derive(Debug, Clone)]
pub struct RecordFunctionalStepResult {
    pub session: FunctionalSession,
    /// Set when this answer moved the session onto the results step.
    pub completed: bool,
}

/// Handler for recording functional answers.
pub struct RecordFunctionalStepHandler {
    gateway: SessionGateway,
}

impl RecordFunctionalStepHandler {
    pub fn new(gateway: SessionGateway) -> Self {
        Self { gateway }
    }

    pub fn handle(
        &self,
        cmd: RecordFunctionalStepCommand,
    ) -> Result<RecordFunctionalStepResult, SessionError> {
        // 1. Load or start a session
        let session = match self.gateway.load_functional()? {
            Some(session) => session,
            None => {
                let session = FunctionalSession::new(AssessmentId::new(), Timestamp::now());
                info!(assessment_id = %session.id(), "Started functional assessment");
                session
            }
        };

        // 2. Apply the answer
        let step_name = cmd.answer.name();
        let mut session = cmd.answer.apply(session);
        debug!(answer = step_name, step = session.step(), "Recorded functional step");

        // 3. Stamp completion on reaching results
        let completed = !session.is_complete() && session.step() == FUNCTIONAL_RESULTS_STEP;
        if completed {
            session = session.complete(Timestamp::now());
            info!(assessment_id = %session.id(), "Functional assessment completed");
        }

        // 4. Persist
        self.gateway.save_functional(&session)?;

        Ok(RecordFunctionalStepResult { session, completed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::config::StorageFormat;
    use crate::domain::foundation::{ChronologicalAge, SkipMarker, SkipReason};
    use crate::domain::functional::{
        CoordinationLevel, EnergyLevel, FitnessLevel, MorningStiffness, SorenessDuration,
    };
    use std::sync::Arc;

    fn handler() -> (RecordFunctionalStepHandler, SessionGateway) {
        let gateway = SessionGateway::new(
            Arc::new(InMemoryKeyValueStore::new()),
            StorageFormat::Json,
        );
        (RecordFunctionalStepHandler::new(gateway.clone()), gateway)
    }

    fn record(
        handler: &RecordFunctionalStepHandler,
        answer: FunctionalAnswer,
    ) -> RecordFunctionalStepResult {
        handler
            .handle(RecordFunctionalStepCommand { answer })
            .unwrap()
    }

    fn skipped<T>() -> TestSlot<T> {
        TestSlot::Skipped(SkipMarker::new(SkipReason::PainOrInjury))
    }

    #[test]
    fn first_answer_starts_and_persists_a_session() {
        let (handler, gateway) = handler();
        let profile = UserProfile::new(
            ChronologicalAge::try_new(45).unwrap(),
            FitnessLevel::Intermediate,
        );

        let result = record(&handler, FunctionalAnswer::Profile(profile.clone()));

        assert_eq!(result.session.step(), 2);
        assert!(!result.completed);
        let stored = gateway.load_functional().unwrap().unwrap();
        assert_eq!(stored.data().profile.as_ref(), Some(&profile));
    }

    #[test]
    fn later_answers_extend_the_same_session() {
        let (handler, _) = handler();
        let first = record(
            &handler,
            FunctionalAnswer::Profile(UserProfile::new(
                ChronologicalAge::try_new(45).unwrap(),
                FitnessLevel::Beginner,
            )),
        );
        let second = record(&handler, FunctionalAnswer::WallSit(skipped()));

        assert_eq!(first.session.id(), second.session.id());
        assert!(second.session.data().wall_sit.is_some());
        assert!(second.session.data().profile.is_some());
    }

    #[test]
    fn last_step_completes_the_session() {
        let (handler, _) = handler();
        record(
            &handler,
            FunctionalAnswer::Profile(UserProfile::new(
                ChronologicalAge::try_new(60).unwrap(),
                FitnessLevel::Advanced,
            )),
        );
        record(
            &handler,
            FunctionalAnswer::Integration(IntegrationResult {
                energy: EnergyLevel::Normal,
                coordination: CoordinationLevel::Normal,
            }),
        );
        let result = record(
            &handler,
            FunctionalAnswer::RecoveryContext(RecoveryContextResult {
                morning_stiffness: MorningStiffness::Mild,
                soreness: SorenessDuration::OneToTwoDays,
            }),
        );

        assert!(result.completed);
        assert!(result.session.is_complete());
        assert_eq!(result.session.step(), FUNCTIONAL_RESULTS_STEP);
    }
}
