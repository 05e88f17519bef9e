//! Chat-completions agent runner.
//!
//! Runs agent tasks against OpenAI-compatible chat-completions endpoints.
//! The travel planner's agents are split across two such backends
//! (OpenRouter for the tool-using research and flight agents, Groq for the
//! parameter agents); this adapter holds one endpoint per backend and
//! routes by the task's model.
//!
//! The agent spec is rendered into the system prompt; context and
//! instruction form the user message. Tool labels are passed as prompt
//! hints, since tool execution is the backend's concern.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::agent::{AgentTask, ModelBackend};
use crate::ports::{AgentError, AgentRunner};

/// Connection details for one chat-completions backend.
#[derive(Debug, Clone)]
pub struct BackendEndpoint {
    api_key: Secret<String>,
    /// Base URL up to (not including) `/chat/completions`.
    pub base_url: String,
}

impl BackendEndpoint {
    /// Creates an endpoint.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: base_url.into(),
        }
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Agent runner over OpenAI-compatible chat-completions APIs.
pub struct ChatCompletionsRunner {
    client: Client,
    openrouter: BackendEndpoint,
    groq: BackendEndpoint,
}

impl ChatCompletionsRunner {
    /// Creates a runner with one endpoint per model backend.
    pub fn new(openrouter: BackendEndpoint, groq: BackendEndpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            openrouter,
            groq,
        }
    }

    fn endpoint_for(&self, backend: ModelBackend) -> &BackendEndpoint {
        match backend {
            ModelBackend::Openrouter => &self.openrouter,
            ModelBackend::Groq => &self.groq,
        }
    }

    fn to_request(task: &AgentTask) -> ChatRequest {
        ChatRequest {
            model: task.spec.model.name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: render_system_prompt(task),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Context: {}\n\nInstruction: {}",
                        task.context, task.instruction
                    ),
                },
            ],
            max_tokens: task.spec.max_tokens,
        }
    }
}

/// Renders the agent spec into a system prompt.
fn render_system_prompt(task: &AgentTask) -> String {
    let spec = &task.spec;
    let mut prompt = format!(
        "You are {role}.\nGoal: {goal}\nAttributes: {attributes}",
        role = spec.role,
        goal = spec.goal,
        attributes = spec.attributes,
    );
    if !spec.tools.is_empty() {
        let labels: Vec<&str> = spec.tools.iter().map(|t| t.label()).collect();
        prompt.push_str("\nAvailable tools: ");
        prompt.push_str(&labels.join(", "));
    }
    prompt
}

#[async_trait]
impl AgentRunner for ChatCompletionsRunner {
    async fn run(&self, task: &AgentTask) -> Result<String, AgentError> {
        let endpoint = self.endpoint_for(task.spec.model.backend);
        let request = Self::to_request(task);
        debug!(model = %request.model, role = %task.spec.role, "running agent task");

        let response = self
            .client
            .post(endpoint.completions_url())
            .bearer_auth(endpoint.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() || err.is_connect() {
                    AgentError::unavailable(err.to_string())
                } else {
                    AgentError::backend(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::backend(format!("HTTP {status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| AgentError::backend(format!("malformed response: {err}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AgentError::backend("response contained no choices"))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
