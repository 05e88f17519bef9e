//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AgentRunner` - executes one agent task against an LLM backend
//! - `MemoryStore` - write-only semantic memory for generated text

mod agent_runner;
mod memory_store;

pub use agent_runner::{AgentError, AgentRunner};
pub use memory_store::{MemoryError, MemoryStore};
