//! Agent specifications and task prompts.
//!
//! An agent is an immutable configuration (role, goal, attributes, model,
//! tools) used to parameterize a single text-generation call. The five
//! agents defined here cover destination research, flight parameter
//! extraction, missing-parameter detection, parameter combining, and
//! flight search.

mod spec;
mod tasks;

pub use spec::{roster, AgentSpec, AgentTool, ModelBackend, ModelId};
pub use tasks::{
    combine_parameters_task, detect_missing_parameters_task, extract_parameters_task,
    research_destination_task, search_flights_task, AgentTask,
};
