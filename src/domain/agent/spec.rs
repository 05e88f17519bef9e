//! Immutable agent specification value objects.

use serde::{Deserialize, Serialize};

/// Which family of backend a model is served by.
///
/// Adapters use this to pick the endpoint and API key for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    /// OpenRouter-hosted models.
    Openrouter,
    /// Groq-hosted models.
    Groq,
}

/// A model identifier bound to its backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelId {
    /// Backend serving the model.
    pub backend: ModelBackend,
    /// Provider-side model name (e.g. "deepseek/deepseek-chat-v3-0324:free").
    pub name: String,
}

impl ModelId {
    /// Creates an OpenRouter model id.
    pub fn openrouter(name: impl Into<String>) -> Self {
        Self {
            backend: ModelBackend::Openrouter,
            name: name.into(),
        }
    }

    /// Creates a Groq model id.
    pub fn groq(name: impl Into<String>) -> Self {
        Self {
            backend: ModelBackend::Groq,
            name: name.into(),
        }
    }
}

/// Tools an agent may use during a task.
///
/// Tools are opaque labels from the stage machine's point of view; the
/// backend decides how to execute them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentTool {
    /// Wikipedia image search for destination reports.
    WikipediaImageSearch,
    /// Wikipedia article search for destination research.
    WikipediaArticleSearch,
    /// Amadeus flight search.
    AmadeusFlightSearch,
}

impl AgentTool {
    /// Returns the wire label for this tool.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WikipediaImageSearch => "wikipedia_image_search",
            Self::WikipediaArticleSearch => "wikipedia_article_search",
            Self::AmadeusFlightSearch => "amadeus_flight_search",
        }
    }
}

/// Immutable specification of one agent.
///
/// Defined once at process start; never mutated by the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Role label presented to the model (e.g. "Travel Agent").
    pub role: String,
    /// Goal text describing the agent's job.
    pub goal: String,
    /// Personality attributes shaping tone.
    pub attributes: String,
    /// Target model.
    pub model: ModelId,
    /// Tools available to the agent, possibly empty.
    pub tools: Vec<AgentTool>,
    /// Optional response token cap.
    pub max_tokens: Option<u32>,
}

impl AgentSpec {
    /// Creates a new agent spec without tools.
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        attributes: impl Into<String>,
        model: ModelId,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            attributes: attributes.into(),
            model,
            tools: Vec::new(),
            max_tokens: None,
        }
    }

    /// Adds tools to the spec.
    pub fn with_tools(mut self, tools: Vec<AgentTool>) -> Self {
        self.tools = tools;
        self
    }

    /// Caps the response length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// The five agents used by the travel planner.
pub mod roster {
    use super::*;

    /// Researches a destination and produces a markdown report with images.
    pub fn destination_researcher() -> AgentSpec {
        AgentSpec::new(
            "Web Research Agent",
            "Extract the destination and interest of the traveller from the user query \
             and do research about the destination and find relevant images",
            "diligent, thorough, comprehensive, visual-focused",
            ModelId::openrouter("deepseek/deepseek-chat-v3-0324:free"),
        )
        .with_tools(vec![
            AgentTool::WikipediaImageSearch,
            AgentTool::WikipediaArticleSearch,
        ])
    }

    /// Extracts flight-search parameters from a free-text query.
    pub fn parameter_extractor() -> AgentSpec {
        AgentSpec::new(
            "Assistant",
            "Extract the location, destination, departure date, return date, travel class, \
             number of adult tickets, number of children tickets, max price, non_stop, and \
             currency from a user query and create a goal for another agent specifying the \
             identified parameters in the goal to find 3 flights for their trip. Do not make \
             any assumptions about parameters that are not specified. The parameter non_stop \
             means the user wants a direct flight rather than one with stops.",
            "Efficient and hardworking",
            ModelId::groq("deepseek-r1-distill-llama-70b"),
        )
    }

    /// Detects missing flight-search parameters and phrases a clarification.
    pub fn missing_parameter_detector() -> AgentSpec {
        AgentSpec::new(
            "Assistant",
            "The tool for searching flights requires the following parameters: location, \
             destination, departure date, return date, travel class, number of adult tickets, \
             number of children tickets, max price, non_stop, currency. You will be provided \
             a query and you will find whether any of the above parameters are missing. If \
             any are missing, create a query asking the user to specify those parameters. \
             Always start your reply with yes if parameters are missing and no if they are not.",
            "Concise and Efficient",
            ModelId::groq("deepseek-r1-distill-llama-70b"),
        )
    }

    /// Merges an initial parameter set with a clarification reply.
    pub fn parameter_combiner() -> AgentSpec {
        AgentSpec::new(
            "Assistant",
            "You will be provided with two queries holding different parameters for searching \
             flight tickets. Parameters missing from the first query may be present in the \
             second. Combine the parameters from both queries and create a goal for another \
             agent specifying the identified parameters in the goal to find 3 flights for \
             their trip.",
            "Efficient and hardworking",
            ModelId::groq("deepseek-r1-distill-llama-70b"),
        )
    }

    /// Searches for flights with the resolved parameters.
    pub fn flight_searcher() -> AgentSpec {
        AgentSpec::new(
            "Travel Agent",
            "Assist travelers by finding 3 flights for their destinations",
            "friendly, hardworking, and efficient in reporting back to users",
            ModelId::openrouter("deepseek/deepseek-chat-v3-0324:free"),
        )
        .with_tools(vec![AgentTool::AmadeusFlightSearch])
        .with_max_tokens(2000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_tools_and_max_tokens() {
        let spec = AgentSpec::new("Role", "Goal", "calm", ModelId::groq("model-x"))
            .with_tools(vec![AgentTool::AmadeusFlightSearch])
            .with_max_tokens(512);

        assert_eq!(spec.tools, vec![AgentTool::AmadeusFlightSearch]);
        assert_eq!(spec.max_tokens, Some(512));
    }

    #[test]
    fn researcher_carries_wikipedia_tools() {
        let spec = roster::destination_researcher();
        assert_eq!(spec.model.backend, ModelBackend::Openrouter);
        assert!(spec.tools.contains(&AgentTool::WikipediaImageSearch));
        assert!(spec.tools.contains(&AgentTool::WikipediaArticleSearch));
    }

    #[test]
    fn parameter_agents_run_on_groq() {
        for spec in [
            roster::parameter_extractor(),
            roster::missing_parameter_detector(),
            roster::parameter_combiner(),
        ] {
            assert_eq!(spec.model.backend, ModelBackend::Groq);
            assert!(spec.tools.is_empty());
        }
    }

    #[test]
    fn flight_searcher_is_capped_and_tooled() {
        let spec = roster::flight_searcher();
        assert_eq!(spec.max_tokens, Some(2000));
        assert_eq!(spec.tools, vec![AgentTool::AmadeusFlightSearch]);
    }

    #[test]
    fn detector_goal_states_yes_no_protocol() {
        let spec = roster::missing_parameter_detector();
        assert!(spec.goal.contains("start your reply with yes"));
    }

    #[test]
    fn tool_labels_are_snake_case() {
        assert_eq!(
            AgentTool::WikipediaImageSearch.label(),
            "wikipedia_image_search"
        );
        let json = serde_json::to_string(&AgentTool::AmadeusFlightSearch).unwrap();
        assert_eq!(json, "\"amadeus_flight_search\"");
    }
}
