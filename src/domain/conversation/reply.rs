//! Canonical assistant reply strings.
//!
//! Every user-facing message the stage machine can emit lives here, so the
//! handler never assembles presentation text inline and tests can assert
//! against exact strings.

/// Menu shown after a destination report.
pub const DESTINATION_MENU: &str = "What would you like to do next?\n\
    1. Search for flights\n\
    2. Plan another destination\n\
    3. Regenerate this travel plan";

/// Menu shown after flight options.
pub const FLIGHT_MENU: &str = "What would you like to do next?\n\
    1. Search for different flights\n\
    2. Return to destination planning\n\
    3. Regenerate these flight options";

/// Menu repeat when the reply to the destination menu wasn't understood.
pub const DESTINATION_MENU_RETRY: &str = "I didn't quite understand. What would you like to do?\n\
    1. Search for flights\n\
    2. Plan another destination\n\
    3. Regenerate this travel plan";

/// Menu repeat when the reply to the flight menu wasn't understood.
pub const FLIGHT_MENU_RETRY: &str = "I didn't quite understand. What would you like to do?\n\
    1. Search for different flights\n\
    2. Return to destination planning\n\
    3. Regenerate these flight options";

/// Prompt when the user chooses to search for flights.
pub const FLIGHT_PREFERENCES_PROMPT: &str = "Great! Let's find some flights. Please tell me your \
    flight preferences (e.g., departure city, dates, number of passengers, etc.)";

/// Prompt after a session reset.
pub const NEW_TRIP_PROMPT: &str = "Sure, let's plan a new trip! Where would you like to go?";

/// Prompt when the user wants different flights.
pub const NEW_FLIGHT_PREFERENCES_PROMPT: &str = "Please provide your new flight preferences.";

/// Regenerate requested with no stored travel plan.
pub const NO_PREVIOUS_PLAN: &str =
    "No previous travel plan to regenerate. Please create a new one.";

/// Regenerate requested with no stored flight options.
pub const NO_PREVIOUS_FLIGHTS: &str =
    "No previous flight options to regenerate. Please provide a new flight query.";

/// Destination report came back empty.
pub const PLAN_FAILED: &str =
    "Sorry, I couldn't generate a travel plan. Please try again with more details.";

/// Regenerated destination report came back empty.
pub const PLAN_REGENERATE_FAILED: &str =
    "Sorry, I couldn't regenerate the travel plan. Please try again.";

/// Regenerated flight options came back empty.
pub const FLIGHTS_REGENERATE_FAILED: &str =
    "Sorry, I couldn't regenerate flight options. Please try again.";

/// An agent backend call failed.
pub const AGENT_FAILURE: &str =
    "Sorry, something went wrong while contacting the travel agents. Please try again.";

/// Builds the assistant message for a fresh travel plan.
pub fn travel_plan_reply(report: &str) -> String {
    format!("Here's your travel plan:\n{report}\n\n{DESTINATION_MENU}")
}

/// Builds the assistant message for a regenerated travel plan.
pub fn regenerated_travel_plan_reply(report: &str) -> String {
    format!("Here's your regenerated travel plan:\n{report}\n\n{DESTINATION_MENU}")
}

/// Builds the assistant message for fresh flight options.
pub fn flight_options_reply(options: &str) -> String {
    format!("Here are your flight options:\n{options}\n\n{FLIGHT_MENU}")
}

/// Builds the assistant message for regenerated flight options.
pub fn regenerated_flight_options_reply(options: &str) -> String {
    format!("Here are your regenerated flight options:\n{options}\n\n{FLIGHT_MENU}")
}

/// Builds the clarification message from the detector's question.
pub fn missing_details_reply(question: &str) -> String {
    format!("{question}\nPlease provide the missing details.")
}
