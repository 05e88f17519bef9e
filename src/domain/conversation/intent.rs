//! Intent classification for menu-driven stages.
//!
//! Each branching stage carries a short ordered keyword table. Matching is
//! case-insensitive substring containment; the first matching row wins and
//! anything else is `Unrecognized`. Users may answer with keywords or the
//! menu ordinal ("1"/"2"/"3").

use serde::{Deserialize, Serialize};

/// What the user wants after seeing a destination report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsIntent {
    /// Move on to flight search.
    SearchFlights,
    /// Start over with a new destination.
    NewDestination,
    /// Regenerate the current travel plan.
    Regenerate,
    /// No keyword matched.
    Unrecognized,
}

/// What the user wants after seeing flight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightResultsIntent {
    /// Regenerate the current flight options.
    Regenerate,
    /// Search for different flights.
    DifferentFlights,
    /// Return to destination planning.
    BackToDestination,
    /// No keyword matched.
    Unrecognized,
}

/// Keyword rows for the `Results` stage, in priority order.
const RESULTS_TABLE: &[(&[&str], ResultsIntent)] = &[
    (&["flight", "flights", "1"], ResultsIntent::SearchFlights),
    (&["another", "destination", "2"], ResultsIntent::NewDestination),
    (&["regenerate", "travel plan", "3"], ResultsIntent::Regenerate),
];

/// Keyword rows for the `FlightSearch/Results` sub-stage, in priority order.
const FLIGHT_RESULTS_TABLE: &[(&[&str], FlightResultsIntent)] = &[
    (
        &["regenerate", "flight options", "3"],
        FlightResultsIntent::Regenerate,
    ),
    (
        &["different", "flights", "1"],
        FlightResultsIntent::DifferentFlights,
    ),
    (
        &["destination", "planning", "2"],
        FlightResultsIntent::BackToDestination,
    ),
];

fn first_match<I: Copy>(table: &[(&[&str], I)], utterance: &str, fallback: I) -> I {
    let lowered = utterance.to_lowercase();
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, intent)| *intent)
        .unwrap_or(fallback)
}

/// Classifies a reply to the destination-report menu.
pub fn classify_results_intent(utterance: &str) -> ResultsIntent {
    first_match(RESULTS_TABLE, utterance, ResultsIntent::Unrecognized)
}

/// Classifies a reply to the flight-options menu.
pub fn classify_flight_results_intent(utterance: &str) -> FlightResultsIntent {
    first_match(
        FLIGHT_RESULTS_TABLE,
        utterance,
        FlightResultsIntent::Unrecognized,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod results_stage {
        use super::*;

        #[test]
        fn matches_flight_keywords_and_ordinal() {
            assert_eq!(classify_results_intent("search flights"), ResultsIntent::SearchFlights);
            assert_eq!(classify_results_intent("1"), ResultsIntent::SearchFlights);
            assert_eq!(classify_results_intent("FLIGHT please"), ResultsIntent::SearchFlights);
        }

        #[test]
        fn matches_new_destination() {
            assert_eq!(classify_results_intent("another place"), ResultsIntent::NewDestination);
            assert_eq!(classify_results_intent("2"), ResultsIntent::NewDestination);
        }

        #[test]
        fn matches_regenerate() {
            assert_eq!(classify_results_intent("regenerate it"), ResultsIntent::Regenerate);
            assert_eq!(
                classify_results_intent("redo the travel plan"),
                ResultsIntent::Regenerate
            );
            assert_eq!(classify_results_intent("3"), ResultsIntent::Regenerate);
        }

        #[test]
        fn first_row_wins_on_ambiguous_input() {
            // "flights to another destination" matches rows 1 and 2
            assert_eq!(
                classify_results_intent("flights to another destination"),
                ResultsIntent::SearchFlights
            );
        }

        #[test]
        fn unmatched_input_is_unrecognized() {
            assert_eq!(classify_results_intent("tell me a joke"), ResultsIntent::Unrecognized);
            assert_eq!(classify_results_intent(""), ResultsIntent::Unrecognized);
        }
    }

    mod flight_results_stage {
        use super::*;

        #[test]
        fn regenerate_row_is_checked_first() {
            // "regenerate" appears in row 1; "flights" would match row 2
            assert_eq!(
                classify_flight_results_intent("regenerate these flights"),
                FlightResultsIntent::Regenerate
            );
            assert_eq!(
                classify_flight_results_intent("show the flight options again"),
                FlightResultsIntent::Regenerate
            );
            assert_eq!(classify_flight_results_intent("3"), FlightResultsIntent::Regenerate);
        }

        #[test]
        fn matches_different_flights() {
            assert_eq!(
                classify_flight_results_intent("different dates please"),
                FlightResultsIntent::DifferentFlights
            );
            assert_eq!(
                classify_flight_results_intent("1"),
                FlightResultsIntent::DifferentFlights
            );
        }

        #[test]
        fn matches_back_to_destination() {
            assert_eq!(
                classify_flight_results_intent("back to destination"),
                FlightResultsIntent::BackToDestination
            );
            assert_eq!(
                classify_flight_results_intent("planning"),
                FlightResultsIntent::BackToDestination
            );
            assert_eq!(
                classify_flight_results_intent("2"),
                FlightResultsIntent::BackToDestination
            );
        }

        #[test]
        fn unmatched_input_is_unrecognized() {
            assert_eq!(
                classify_flight_results_intent("what's the weather"),
                FlightResultsIntent::Unrecognized
            );
        }
    }
}
