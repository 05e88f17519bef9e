//! Use-case handlers.

mod process_turn;

pub use process_turn::{ProcessTurnHandler, TurnError};
