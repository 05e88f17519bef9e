//! ProcessTurnHandler - drive one user utterance through the stage machine.
//!
//! One turn is fully processed before the next is accepted: the handler
//! classifies the utterance where the stage branches, invokes agents
//! through the [`AgentRunner`] port, post-processes their responses, and
//! commits session state only when the branch succeeds. Failures become
//! user-visible assistant messages and leave the session in its pre-turn
//! state, with one preserved exception: the initial flight sub-stage
//! records the pending query before any agent call.
//!
//! Every produced report or flight summary is mirrored into the
//! [`MemoryStore`] fire-and-forget; a failed write is logged and never
//! blocks the conversation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::agent::{
    combine_parameters_task, detect_missing_parameters_task, extract_parameters_task,
    research_destination_task, search_flights_task,
};
use crate::domain::conversation::{
    classify_flight_results_intent, classify_results_intent, flight_options_reply,
    is_affirmative, missing_details_reply, process_destination_response,
    process_flight_response, regenerated_flight_options_reply, regenerated_travel_plan_reply,
    travel_plan_reply, FlightResultsIntent, FlightStage, ResultsIntent, Session, Stage,
    AGENT_FAILURE, DESTINATION_MENU_RETRY, FLIGHTS_REGENERATE_FAILED, FLIGHT_MENU_RETRY,
    FLIGHT_PREFERENCES_PROMPT, NEW_FLIGHT_PREFERENCES_PROMPT, NEW_TRIP_PROMPT,
    NO_PREVIOUS_FLIGHTS, NO_PREVIOUS_PLAN, PLAN_FAILED, PLAN_REGENERATE_FAILED,
};
use crate::ports::{AgentError, AgentRunner, MemoryStore};

/// Errors a turn branch can fail with.
///
/// These never escape the handler; they are converted into assistant
/// messages at the stage-machine boundary.
#[derive(Debug, Error)]
pub enum TurnError {
    /// An agent invocation failed.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// Post-processed agent output was blank.
    #[error("agent returned an empty result")]
    EmptyResult,
}

/// Handler processing one conversation turn.
pub struct ProcessTurnHandler {
    agents: Arc<dyn AgentRunner>,
    memory: Arc<dyn MemoryStore>,
}

impl ProcessTurnHandler {
    /// Creates a handler over the given ports.
    pub fn new(agents: Arc<dyn AgentRunner>, memory: Arc<dyn MemoryStore>) -> Self {
        Self { agents, memory }
    }

    /// Processes one user utterance.
    ///
    /// Appends exactly one user entry and one assistant entry to the
    /// transcript and returns the assistant reply.
    pub async fn handle(&self, session: &mut Session, utterance: &str) -> String {
        let stage = session.stage();
        let flight_stage = session.flight_stage();
        info!(session = %session.id(), ?stage, ?flight_stage, "processing turn");

        session.transcript_mut().push_user(utterance);

        let result = match stage {
            Stage::Input => self.handle_input(session, utterance).await,
            Stage::Results => self.handle_results(session, utterance).await,
            Stage::FlightSearch => match flight_stage.unwrap_or_default() {
                FlightStage::Initial => self.handle_flight_initial(session, utterance).await,
                FlightStage::AwaitingMissingParams => {
                    self.handle_flight_clarification(session, utterance).await
                }
                FlightStage::Results => self.handle_flight_results(session, utterance).await,
            },
        };

        let reply = match result {
            Ok(reply) => reply,
            Err(err) => {
                warn!(session = %session.id(), ?stage, error = %err, "turn failed");
                failure_reply(stage, &err)
            }
        };

        session.transcript_mut().push_assistant(reply.clone());
        reply
    }

    /// `Input`: treat the utterance as a destination query.
    async fn handle_input(
        &self,
        session: &mut Session,
        utterance: &str,
    ) -> Result<String, TurnError> {
        let raw = self.agents.run(&research_destination_task(utterance)).await?;
        let report = process_destination_response(&raw).to_string();
        if report.is_empty() {
            return Err(TurnError::EmptyResult);
        }

        self.remember(report.clone());
        session.record_destination_report(utterance, &report);
        Ok(travel_plan_reply(&report))
    }

    /// `Results`: branch on the destination-menu intent.
    async fn handle_results(
        &self,
        session: &mut Session,
        utterance: &str,
    ) -> Result<String, TurnError> {
        match classify_results_intent(utterance) {
            ResultsIntent::SearchFlights => {
                session.begin_flight_search();
                Ok(FLIGHT_PREFERENCES_PROMPT.to_string())
            }
            ResultsIntent::NewDestination => {
                session.reset_to_input();
                Ok(NEW_TRIP_PROMPT.to_string())
            }
            ResultsIntent::Regenerate => self.regenerate_travel_plan(session).await,
            ResultsIntent::Unrecognized => Ok(DESTINATION_MENU_RETRY.to_string()),
        }
    }

    /// Re-runs the researcher with the stored query.
    async fn regenerate_travel_plan(&self, session: &mut Session) -> Result<String, TurnError> {
        let query = match (session.pending_user_query(), session.destination_report()) {
            (Some(query), Some(_)) => query.to_string(),
            _ => return Ok(NO_PREVIOUS_PLAN.to_string()),
        };

        let raw = self.agents.run(&research_destination_task(&query)).await?;
        let report = process_destination_response(&raw).to_string();
        if report.is_empty() {
            return Err(TurnError::EmptyResult);
        }

        self.remember(report.clone());
        session.replace_destination_report(&report);
        Ok(regenerated_travel_plan_reply(&report))
    }

    /// `FlightSearch/Initial`: extract parameters, detect missing ones,
    /// and either ask for clarification or search directly.
    async fn handle_flight_initial(
        &self,
        session: &mut Session,
        utterance: &str,
    ) -> Result<String, TurnError> {
        // Recorded before any agent call; survives a failed turn.
        session.record_pending_query(utterance);

        let parameters = self.agents.run(&extract_parameters_task(utterance)).await?;
        let detection = self
            .agents
            .run(&detect_missing_parameters_task(&parameters))
            .await?;

        if is_affirmative(&detection) {
            session.await_missing_parameters();
            return Ok(missing_details_reply(&detection));
        }

        let raw = self.agents.run(&search_flights_task(&parameters)).await?;
        let options = process_flight_response(&raw).to_string();

        self.remember(options.clone());
        session.record_flight_results(&options, &parameters);
        Ok(flight_options_reply(&options))
    }

    /// `FlightSearch/AwaitingMissingParams`: merge the clarification into
    /// the stored query and search.
    async fn handle_flight_clarification(
        &self,
        session: &mut Session,
        utterance: &str,
    ) -> Result<String, TurnError> {
        let first_query = session.pending_user_query().unwrap_or_default().to_string();

        let combined = self
            .agents
            .run(&combine_parameters_task(&first_query, utterance))
            .await?;
        let raw = self.agents.run(&search_flights_task(&combined)).await?;
        let options = process_flight_response(&raw).to_string();

        self.remember(options.clone());
        session.record_flight_results(&options, &combined);
        Ok(flight_options_reply(&options))
    }

    /// `FlightSearch/Results`: branch on the flight-menu intent.
    async fn handle_flight_results(
        &self,
        session: &mut Session,
        utterance: &str,
    ) -> Result<String, TurnError> {
        match classify_flight_results_intent(utterance) {
            FlightResultsIntent::Regenerate => self.regenerate_flight_options(session).await,
            FlightResultsIntent::DifferentFlights => {
                session.restart_flight_search();
                Ok(NEW_FLIGHT_PREFERENCES_PROMPT.to_string())
            }
            FlightResultsIntent::BackToDestination => {
                session.reset_to_input();
                Ok(NEW_TRIP_PROMPT.to_string())
            }
            FlightResultsIntent::Unrecognized => Ok(FLIGHT_MENU_RETRY.to_string()),
        }
    }

    /// Re-runs the flight searcher with the stored parameter set.
    async fn regenerate_flight_options(&self, session: &mut Session) -> Result<String, TurnError> {
        let parameters = match (session.combined_flight_parameters(), session.flight_options()) {
            (Some(parameters), Some(_)) => parameters.to_string(),
            _ => return Ok(NO_PREVIOUS_FLIGHTS.to_string()),
        };

        let raw = self.agents.run(&search_flights_task(&parameters)).await?;
        let options = process_flight_response(&raw).to_string();
        if options.is_empty() {
            return Err(TurnError::EmptyResult);
        }

        self.remember(options.clone());
        session.replace_flight_options(&options);
        Ok(regenerated_flight_options_reply(&options))
    }

    /// Mirrors generated text into the memory store without blocking the
    /// turn.
    fn remember(&self, text: String) {
        let store = Arc::clone(&self.memory);
        tokio::spawn(async move {
            if let Err(err) = store.add_memory(&text).await {
                warn!(error = %err, "memory store write failed");
            }
        });
    }
}

/// Maps a branch failure to the user-visible apology for that stage.
fn failure_reply(stage: Stage, err: &TurnError) -> String {
    match err {
        TurnError::Agent(_) => AGENT_FAILURE.to_string(),
        TurnError::EmptyResult => match stage {
            Stage::Input => PLAN_FAILED.to_string(),
            Stage::Results => PLAN_REGENERATE_FAILED.to_string(),
            Stage::FlightSearch => FLIGHTS_REGENERATE_FAILED.to_string(),
        },
    }
}
