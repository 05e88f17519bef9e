//! Response post-processing.
//!
//! Agent backends may prepend status banners or reasoning traces to their
//! answers. These filters strip everything up to and including a known
//! marker, falling back to the full text when the marker is absent so no
//! answer is ever lost.

/// Marker terminating the status banner on destination-report responses.
pub const REQUEST_COMPLETED_MARKER: &str = "\u{2714} Request completed";

/// Marker terminating the reasoning trace on flight-search responses.
pub const REASONING_END_MARKER: &str = "</think";

/// Returns the trimmed text strictly after the *last* occurrence of the
/// literal marker. If the marker is absent the trimmed input is returned
/// unchanged.
pub fn extract_after_marker<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.rfind(marker) {
        Some(index) => text[index + marker.len()..].trim(),
        None => text.trim(),
    }
}

/// Strips the completion banner from a destination-report response.
pub fn process_destination_response(response: &str) -> &str {
    extract_after_marker(response, REQUEST_COMPLETED_MARKER)
}

/// Strips the reasoning trace from a flight-search response.
pub fn process_flight_response(response: &str) -> &str {
    extract_after_marker(response, REASONING_END_MARKER)
}

/// Returns true if a detector response signals that parameters are missing.
///
/// The detector is prompted to begin its reply with "yes" when parameters
/// are missing; the contract is a case-insensitive substring match anywhere
/// in the response. Kept behind this single predicate so a structured
/// classifier can replace it without touching the stage machine.
pub fn is_affirmative(response: &str) -> bool {
    response.to_lowercase().contains("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod marker_extraction {
        use super::*;

        #[test]
        fn takes_text_after_marker() {
            let raw = "banner text \u{2714} Request completed  The real report  ";
            assert_eq!(
                extract_after_marker(raw, REQUEST_COMPLETED_MARKER),
                "The real report"
            );
        }

        #[test]
        fn uses_last_occurrence() {
            let raw = "</think first </think second";
            assert_eq!(extract_after_marker(raw, REASONING_END_MARKER), "second");
        }

        #[test]
        fn absent_marker_returns_trimmed_input() {
            let raw = "  no markers here  ";
            assert_eq!(extract_after_marker(raw, REASONING_END_MARKER), "no markers here");
        }

        #[test]
        fn marker_at_end_yields_empty() {
            let raw = "reasoning only </think";
            assert_eq!(extract_after_marker(raw, REASONING_END_MARKER), "");
        }

        #[test]
        fn destination_and_flight_helpers_use_their_markers() {
            assert_eq!(
                process_destination_response("x \u{2714} Request completed report"),
                "report"
            );
            assert_eq!(process_flight_response("<think>plan</think> flights"), "flights");
        }

        proptest! {
            #[test]
            fn absent_marker_equals_trim(text in "[^<]*") {
                prop_assert_eq!(
                    extract_after_marker(&text, REASONING_END_MARKER),
                    text.trim()
                );
            }

            #[test]
            fn extraction_is_idempotent(text in ".*") {
                let once = extract_after_marker(&text, REQUEST_COMPLETED_MARKER);
                let twice = extract_after_marker(once, REQUEST_COMPLETED_MARKER);
                // Idempotent whenever the marker does not recur in the remainder
                prop_assume!(!once.contains(REQUEST_COMPLETED_MARKER));
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn output_never_contains_leading_whitespace(text in ".*") {
                let out = extract_after_marker(&text, REASONING_END_MARKER);
                prop_assert_eq!(out, out.trim());
            }
        }
    }

    mod affirmative {
        use super::*;

        #[test]
        fn detects_yes_anywhere_case_insensitive() {
            assert!(is_affirmative("Yes, the dates are missing"));
            assert!(is_affirmative("the answer is YES indeed"));
            assert!(is_affirmative("maybe... yes"));
        }

        #[test]
        fn rejects_responses_without_yes() {
            assert!(!is_affirmative("No, everything is present"));
            assert!(!is_affirmative(""));
        }
    }
}
