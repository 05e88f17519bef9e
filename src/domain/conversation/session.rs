//! Session state for one user conversation.
//!
//! A [`Session`] is an explicit value owned by the caller and mutated only
//! through methods that preserve the stage invariants:
//!
//! - the flight sub-stage is present iff the flight-search stage is active
//! - flight options are only ever stored together with the parameters that
//!   produced them
//! - resetting to input clears all derived fields atomically

use serde::{Deserialize, Serialize};

use super::stage::{FlightStage, Stage};
use super::transcript::Transcript;
use crate::domain::foundation::{SessionId, StateMachine};

/// All conversation state for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Stable identifier for this session.
    id: SessionId,
    /// Top-level conversation stage.
    stage: Stage,
    /// Flight sub-stage; present iff `stage == Stage::FlightSearch`.
    flight_stage: Option<FlightStage>,
    /// Last raw query that produced the current report or flight search.
    pending_user_query: Option<String>,
    /// Last generated destination report (markdown).
    destination_report: Option<String>,
    /// Last generated flight-options summary.
    flight_options: Option<String>,
    /// Parameter set used for the last flight search.
    combined_flight_parameters: Option<String>,
    /// Append-only conversation history.
    transcript: Transcript,
}

impl Session {
    /// Creates a fresh session in the `Input` stage.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            stage: Stage::Input,
            flight_stage: None,
            pending_user_query: None,
            destination_report: None,
            flight_options: None,
            combined_flight_parameters: None,
            transcript: Transcript::new(),
        }
    }

    /// This session's identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Current top-level stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current flight sub-stage, if flight search is active.
    pub fn flight_stage(&self) -> Option<FlightStage> {
        self.flight_stage
    }

    /// Last stored user query, if any.
    pub fn pending_user_query(&self) -> Option<&str> {
        self.pending_user_query.as_deref()
    }

    /// Last destination report, if any.
    pub fn destination_report(&self) -> Option<&str> {
        self.destination_report.as_deref()
    }

    /// Last flight options, if any.
    pub fn flight_options(&self) -> Option<&str> {
        self.flight_options.as_deref()
    }

    /// Parameters behind the last flight search, if any.
    pub fn combined_flight_parameters(&self) -> Option<&str> {
        self.combined_flight_parameters.as_deref()
    }

    /// The conversation transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Mutable access to the transcript (append-only operations only).
    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Clears every derived field and returns to the `Input` stage.
    ///
    /// The transcript survives the reset; only planning state is dropped.
    pub fn reset_to_input(&mut self) {
        if self.stage != Stage::Input {
            self.advance_stage(Stage::Input);
        }
        self.flight_stage = None;
        self.pending_user_query = None;
        self.destination_report = None;
        self.flight_options = None;
        self.combined_flight_parameters = None;
    }

    /// Stores a freshly generated destination report and moves to `Results`.
    pub fn record_destination_report(
        &mut self,
        query: impl Into<String>,
        report: impl Into<String>,
    ) {
        self.pending_user_query = Some(query.into());
        self.destination_report = Some(report.into());
        self.advance_stage(Stage::Results);
        self.flight_stage = None;
    }

    /// Overwrites the destination report after a regeneration.
    pub fn replace_destination_report(&mut self, report: impl Into<String>) {
        self.destination_report = Some(report.into());
    }

    /// Enters the flight-search flow at its initial sub-stage.
    pub fn begin_flight_search(&mut self) {
        self.advance_stage(Stage::FlightSearch);
        self.flight_stage = Some(FlightStage::Initial);
    }

    /// Records the raw flight-preferences query.
    pub fn record_pending_query(&mut self, query: impl Into<String>) {
        self.pending_user_query = Some(query.into());
    }

    /// Moves to the clarification sub-stage after missing parameters were
    /// detected.
    pub fn await_missing_parameters(&mut self) {
        self.advance_flight_stage(FlightStage::AwaitingMissingParams);
    }

    /// Stores flight options together with the parameters that produced
    /// them and moves to the flight results sub-stage.
    pub fn record_flight_results(
        &mut self,
        options: impl Into<String>,
        parameters: impl Into<String>,
    ) {
        self.flight_options = Some(options.into());
        self.combined_flight_parameters = Some(parameters.into());
        self.advance_flight_stage(FlightStage::Results);
    }

    /// Overwrites the flight options after a regeneration.
    pub fn replace_flight_options(&mut self, options: impl Into<String>) {
        self.flight_options = Some(options.into());
    }

    /// Returns to the initial flight sub-stage for a new search, dropping
    /// the previous parameter set.
    pub fn restart_flight_search(&mut self) {
        self.advance_flight_stage(FlightStage::Initial);
        self.combined_flight_parameters = None;
    }

    /// Validated top-level stage transition.
    fn advance_stage(&mut self, target: Stage) {
        match self.stage.transition_to(target) {
            Ok(next) => self.stage = next,
            Err(err) => {
                debug_assert!(false, "{err}");
                self.stage = target;
            }
        }
    }

    /// Validated flight sub-stage transition; the top-level stage must
    /// already be `FlightSearch`.
    fn advance_flight_stage(&mut self, target: FlightStage) {
        debug_assert_eq!(self.stage, Stage::FlightSearch);
        match self.flight_stage.unwrap_or_default().transition_to(target) {
            Ok(next) => self.flight_stage = Some(next),
            Err(err) => {
                debug_assert!(false, "{err}");
                self.flight_stage = Some(target);
            }
        }
    }

    /// Checks the structural invariants; used by tests.
    pub fn invariants_hold(&self) -> bool {
        let flight_stage_matches =
            self.flight_stage.is_some() == (self.stage == Stage::FlightSearch);
        // Results are always stored together with their parameters; the
        // pairing can only be broken by restarting the search, which leaves
        // the results sub-stage.
        let results_paired = self.flight_stage != Some(FlightStage::Results)
            || self.flight_options.is_some() == self.combined_flight_parameters.is_some();
        flight_stage_matches && results_paired
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod fresh_session {
        use super::*;

        #[test]
        fn starts_in_input_with_nothing_stored() {
            let session = Session::new();
            assert_eq!(session.stage(), Stage::Input);
            assert!(session.flight_stage().is_none());
            assert!(session.pending_user_query().is_none());
            assert!(session.destination_report().is_none());
            assert!(session.flight_options().is_none());
            assert!(session.combined_flight_parameters().is_none());
            assert!(session.transcript().is_empty());
            assert!(session.invariants_hold());
        }

        #[test]
        fn sessions_get_distinct_ids() {
            assert_ne!(Session::new().id(), Session::new().id());
        }
    }

    mod destination_flow {
        use super::*;

        #[test]
        fn recording_report_moves_to_results() {
            let mut session = Session::new();
            session.record_destination_report("trip to Kyoto", "# Kyoto");

            assert_eq!(session.stage(), Stage::Results);
            assert_eq!(session.pending_user_query(), Some("trip to Kyoto"));
            assert_eq!(session.destination_report(), Some("# Kyoto"));
            assert!(session.invariants_hold());
        }

        #[test]
        fn replacing_report_keeps_stage_and_query() {
            let mut session = Session::new();
            session.record_destination_report("trip to Kyoto", "# Kyoto v1");
            session.replace_destination_report("# Kyoto v2");

            assert_eq!(session.stage(), Stage::Results);
            assert_eq!(session.pending_user_query(), Some("trip to Kyoto"));
            assert_eq!(session.destination_report(), Some("# Kyoto v2"));
        }
    }

    mod flight_flow {
        use super::*;

        #[test]
        fn begin_flight_search_sets_sub_stage() {
            let mut session = Session::new();
            session.record_destination_report("q", "r");
            session.begin_flight_search();

            assert_eq!(session.stage(), Stage::FlightSearch);
            assert_eq!(session.flight_stage(), Some(FlightStage::Initial));
            assert!(session.invariants_hold());
        }

        #[test]
        fn flight_results_store_options_and_parameters_together() {
            let mut session = Session::new();
            session.record_destination_report("q", "r");
            session.begin_flight_search();
            session.record_flight_results("- flight A", "Tokyo to Paris, June");

            assert_eq!(session.flight_stage(), Some(FlightStage::Results));
            assert_eq!(session.flight_options(), Some("- flight A"));
            assert_eq!(
                session.combined_flight_parameters(),
                Some("Tokyo to Paris, June")
            );
            assert!(session.invariants_hold());
        }

        #[test]
        fn restart_drops_parameters_and_returns_to_initial() {
            let mut session = Session::new();
            session.record_destination_report("q", "r");
            session.begin_flight_search();
            session.record_flight_results("- flight A", "params");
            session.restart_flight_search();

            assert_eq!(session.flight_stage(), Some(FlightStage::Initial));
            assert!(session.combined_flight_parameters().is_none());
            assert!(session.invariants_hold());
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic(expected = "Cannot transition from Input to FlightSearch")]
        fn flight_search_cannot_start_before_a_report() {
            let mut session = Session::new();
            session.begin_flight_search();
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic(expected = "Cannot transition from AwaitingMissingParams to Initial")]
        fn restart_is_rejected_while_awaiting_clarification() {
            let mut session = Session::new();
            session.record_destination_report("q", "r");
            session.begin_flight_search();
            session.await_missing_parameters();
            session.restart_flight_search();
        }

        #[test]
        fn awaiting_missing_parameters_keeps_options_unset() {
            let mut session = Session::new();
            session.record_destination_report("q", "r");
            session.begin_flight_search();
            session.record_pending_query("Tokyo to Paris");
            session.await_missing_parameters();

            assert_eq!(session.flight_stage(), Some(FlightStage::AwaitingMissingParams));
            assert!(session.flight_options().is_none());
            assert!(session.invariants_hold());
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn reset_clears_all_derived_fields_atomically() {
            let mut session = Session::new();
            session.record_destination_report("q", "r");
            session.begin_flight_search();
            session.record_pending_query("flights please");
            session.record_flight_results("options", "params");

            session.reset_to_input();

            assert_eq!(session.stage(), Stage::Input);
            assert!(session.flight_stage().is_none());
            assert!(session.pending_user_query().is_none());
            assert!(session.destination_report().is_none());
            assert!(session.flight_options().is_none());
            assert!(session.combined_flight_parameters().is_none());
            assert!(session.invariants_hold());
        }

        #[test]
        fn reset_preserves_the_transcript() {
            let mut session = Session::new();
            session.transcript_mut().push_user("hello");
            session.transcript_mut().push_assistant("hi");

            session.reset_to_input();

            assert_eq!(session.transcript().len(), 2);
        }
    }
}
