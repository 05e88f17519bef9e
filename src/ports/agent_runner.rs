//! Agent runner port - executes agent tasks against LLM backends.
//!
//! The stage machine treats agent execution as a single opaque
//! text-in/text-out call: an [`AgentTask`] goes in, free-form text comes
//! back. Tool use, retrieval, and prompt mechanics are the backend's
//! business.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::agent::AgentTask;

/// Port for running one agent task.
///
/// Implementations connect to external model backends and translate the
/// task's spec, context, and instruction into a provider request.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Runs the task and returns the backend's raw text response.
    ///
    /// No retry is attempted here; failures surface to the caller.
    async fn run(&self, task: &AgentTask) -> Result<String, AgentError>;
}

/// Agent execution errors.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    /// The model or tool backend cannot be reached.
    #[error("agent backend unavailable: {message}")]
    Unavailable {
        /// Transport-level detail.
        message: String,
    },

    /// The backend returned a non-recoverable response.
    #[error("agent backend error: {message}")]
    Backend {
        /// Provider-side detail.
        message: String,
    },
}

impl AgentError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
