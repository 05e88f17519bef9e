//! Conversation stage machine and session state.
//!
//! The conversation moves through three top-level stages (destination
//! input, report results, flight search) with flight search split into
//! its own sub-stages. All state lives in a [`Session`] value; the
//! mutators preserve the stage invariants.

mod intent;
mod postprocess;
mod reply;
mod session;
mod stage;
mod transcript;

pub use intent::{classify_flight_results_intent, classify_results_intent, FlightResultsIntent, ResultsIntent};
pub use postprocess::{
    extract_after_marker, is_affirmative, process_destination_response, process_flight_response,
    REASONING_END_MARKER, REQUEST_COMPLETED_MARKER,
};
pub use reply::*;
pub use session::Session;
pub use stage::{FlightStage, Stage};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
