//! Domain layer - pure business logic, no I/O.
//!
//! - `foundation` - shared value objects and the state machine trait
//! - `agent` - immutable agent specifications and their task prompts
//! - `conversation` - the conversation stage machine and session state

pub mod agent;
pub mod conversation;
pub mod foundation;
