//! AI adapters - agent runner implementations.

mod chat_completions;
mod mock;

pub use chat_completions::{BackendEndpoint, ChatCompletionsRunner};
pub use mock::MockAgentRunner;
