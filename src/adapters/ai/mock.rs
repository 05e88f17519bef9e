//! Mock agent runner for testing.
//!
//! Returns pre-configured responses in order and records every task it
//! receives, so tests can run the full stage machine without calling real
//! model backends and then assert on the prompts that were sent.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::agent::AgentTask;
use crate::ports::{AgentError, AgentRunner};

/// One scripted reply.
#[derive(Debug, Clone)]
enum MockReply {
    Success(String),
    Unavailable(String),
    Backend(String),
}

/// Mock agent runner with queued responses and call tracking.
///
/// Clones share the queue and the call history.
#[derive(Debug, Clone, Default)]
pub struct MockAgentRunner {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<AgentTask>>>,
}

impl MockAgentRunner {
    /// Creates a runner with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues a backend-unavailable failure.
    pub fn with_unavailable(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Unavailable(message.into()));
        self
    }

    /// Queues a backend error.
    pub fn with_backend_error(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Backend(message.into()));
        self
    }

    /// Number of tasks run so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All tasks run so far.
    pub fn calls(&self) -> Vec<AgentTask> {
        self.calls.lock().unwrap().clone()
    }

    /// Context strings of all tasks run so far, in order.
    pub fn contexts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|task| task.context.clone())
            .collect()
    }

    /// Role labels of all tasks run so far, in order.
    pub fn roles(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|task| task.spec.role.clone())
            .collect()
    }
}

#[async_trait]
impl AgentRunner for MockAgentRunner {
    async fn run(&self, task: &AgentTask) -> Result<String, AgentError> {
        self.calls.lock().unwrap().push(task.clone());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Success(content)) => Ok(content),
            Some(MockReply::Unavailable(message)) => Err(AgentError::unavailable(message)),
            Some(MockReply::Backend(message)) => Err(AgentError::backend(message)),
            None => Err(AgentError::backend("mock response queue is empty")),
        }
    }
}
