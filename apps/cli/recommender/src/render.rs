//! Card rendering for assessment lists.
//!
//! Pure string builders; the controller decides where the text goes. One
//! card per assessment, in service order - no sorting, filtering, or
//! pagination.

use models::Assessment;

const TEST_TYPE_SEPARATOR: &str = ", ";
const UNNAMED_PLACEHOLDER: &str = "(unnamed assessment)";

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query.";
pub const NO_RESULTS_MESSAGE: &str = "No recommendations found for your query.";

/// Render one card per assessment, numbered 1-based in service order.
pub fn render_cards(assessments: &[Assessment]) -> String {
    let mut out = String::new();
    for (index, assessment) in assessments.iter().enumerate() {
        out.push_str(&render_card(index + 1, assessment));
        out.push('\n');
    }
    out
}

fn render_card(position: usize, assessment: &Assessment) -> String {
    let title = if assessment.name.is_empty() {
        UNNAMED_PLACEHOLDER
    } else {
        &assessment.name
    };

    let mut card = format!("{position}. {title} <{}>\n", assessment.url);

    if let Some(ref description) = assessment.description {
        card.push_str(&format!("   {description}\n"));
    }

    if let Some(duration) = assessment.duration {
        card.push_str(&format!("   Duration: {duration} minutes\n"));
    }

    if !assessment.test_type.is_empty() {
        card.push_str(&format!(
            "   Test type: {}\n",
            assessment.test_type.join(TEST_TYPE_SEPARATOR)
        ));
    }

    card
}

/// The loading line shown while a request is outstanding.
pub fn searching_message(query: &str) -> String {
    format!("Searching for recommendations for {query:?}...")
}

/// The count line preceding a non-empty card list.
pub fn result_count_message(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} recommendation{plural}:")
}

/// The single error line shown for any failed request cycle.
pub fn error_message(reason: &str) -> String {
    format!("Error: {reason}")
}
