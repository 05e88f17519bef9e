//! Task builders for the travel-planning agents.
//!
//! A task pairs an agent spec with the context and instruction for one
//! invocation. The builders here produce the exact prompts the planner
//! uses; the stage machine never assembles prompt text itself.

use super::spec::{roster, AgentSpec};

/// One fully-assembled agent invocation.
#[derive(Debug, Clone)]
pub struct AgentTask {
    /// Agent to run.
    pub spec: AgentSpec,
    /// Context text (conversation excerpt, user query, prior output).
    pub context: String,
    /// Instruction telling the agent what to produce.
    pub instruction: String,
}

impl AgentTask {
    /// Creates a new task.
    pub fn new(spec: AgentSpec, context: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            spec,
            context: context.into(),
            instruction: instruction.into(),
        }
    }
}

/// Instruction given to the destination researcher.
const RESEARCH_INSTRUCTION: &str = "\
Create a comprehensive report about the destination with the following:
1. Use Wikipedia tools to find and include 2-3 high-quality images of key attractions
2. Ensure images are full URLs starting with http:// or https://
3. Format images as: ![Description](https://full-image-url)
4. Include a brief caption for each image
5. Research attractions and activities related to the traveller's interests
6. Organize the report with proper headings and sections
7. Place images naturally throughout the content where relevant
8. Include practical visitor information
Format the entire response in clean markdown";

/// Builds the destination research task for a user query.
pub fn research_destination_task(query: &str) -> AgentTask {
    AgentTask::new(
        roster::destination_researcher(),
        format!("User Query: {query}"),
        RESEARCH_INSTRUCTION,
    )
}

/// Builds the parameter extraction task for a flight query.
pub fn extract_parameters_task(query: &str) -> AgentTask {
    AgentTask::new(
        roster::parameter_extractor(),
        format!("Extract the required parameters from the following User query: {query}"),
        "Be perfect in your response.",
    )
}

/// Builds the missing-parameter detection task over an extracted parameter set.
pub fn detect_missing_parameters_task(parameters: &str) -> AgentTask {
    AgentTask::new(
        roster::missing_parameter_detector(),
        format!("Identify missing parameters from the following User query: {parameters}"),
        "Be perfect in your response.",
    )
}

/// Builds the parameter combining task from the original query and the
/// clarification reply.
pub fn combine_parameters_task(first_query: &str, second_query: &str) -> AgentTask {
    AgentTask::new(
        roster::parameter_combiner(),
        format!("First query: {first_query}\nSecond query: {second_query}"),
        "Be perfect in your response.",
    )
}

/// Builds the flight search task for a resolved parameter set.
pub fn search_flights_task(parameters: &str) -> AgentTask {
    AgentTask::new(
        roster::flight_searcher(),
        parameters,
        "Find top 3 convenient flight options and provide concise bullet point information.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agent::ModelBackend;

    #[test]
    fn research_task_embeds_query_in_context() {
        let task = research_destination_task("Plan a trip to Kyoto");
        assert_eq!(task.context, "User Query: Plan a trip to Kyoto");
        assert!(task.instruction.contains("clean markdown"));
        assert!(task.instruction.contains("2-3 high-quality images"));
    }

    #[test]
    fn extraction_task_wraps_query() {
        let task = extract_parameters_task("Tokyo to Paris in June");
        assert!(task.context.ends_with("Tokyo to Paris in June"));
        assert_eq!(task.instruction, "Be perfect in your response.");
    }

    #[test]
    fn detection_task_receives_extractor_output() {
        let task = detect_missing_parameters_task("from Tokyo, to Paris, no dates");
        assert!(task
            .context
            .starts_with("Identify missing parameters from the following User query:"));
    }

    #[test]
    fn combine_task_orders_queries() {
        let task = combine_parameters_task("fly Tokyo to Paris", "June 1 to June 10");
        assert_eq!(
            task.context,
            "First query: fly Tokyo to Paris\nSecond query: June 1 to June 10"
        );
    }

    #[test]
    fn flight_task_passes_parameters_verbatim() {
        let task = search_flights_task("Tokyo to Paris, 2 adults, economy");
        assert_eq!(task.context, "Tokyo to Paris, 2 adults, economy");
        assert_eq!(task.spec.model.backend, ModelBackend::Openrouter);
        assert!(task.instruction.contains("top 3"));
    }
}
