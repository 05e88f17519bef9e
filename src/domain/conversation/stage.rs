//! Conversation stages and flight-search sub-stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Top-level phase of the conversation.
///
/// - `Input`: waiting for a destination query
/// - `Results`: a destination report was produced, awaiting a menu choice
/// - `FlightSearch`: searching for flights (see [`FlightStage`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for a destination query.
    #[default]
    Input,

    /// Destination report produced, awaiting next action.
    Results,

    /// Flight search flow is active.
    FlightSearch,
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            // A report was produced
            (Input, Results) |
            // User picked "search for flights"
            (Results, FlightSearch) |
            // User asked for another destination
            (Results, Input) |
            // User returned to destination planning
            (FlightSearch, Input)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Input => vec![Results],
            Results => vec![FlightSearch, Input],
            FlightSearch => vec![Input],
        }
    }
}

/// Sub-stage of the flight search flow.
///
/// Meaningful only while [`Stage::FlightSearch`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlightStage {
    /// Waiting for the user's flight preferences.
    #[default]
    Initial,

    /// A clarification question was asked; waiting for the missing details.
    AwaitingMissingParams,

    /// Flight options produced, awaiting next action.
    Results,
}

impl StateMachine for FlightStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FlightStage::*;
        matches!(
            (self, target),
            // Extraction found missing parameters
            (Initial, AwaitingMissingParams) |
            // Search completed directly
            (Initial, Results) |
            // Clarification merged, search completed
            (AwaitingMissingParams, Results) |
            // User wants different flights
            (Results, Initial)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FlightStage::*;
        match self {
            Initial => vec![AwaitingMissingParams, Results],
            AwaitingMissingParams => vec![Results],
            Results => vec![Initial],
        }
    }
}
