// Unit tests for response deserialization
// Tests optional-field defaults and the missing-results-field edge case

use crate::{ApiErrorBody, RecommendResponse};

use serde_json::json;

/// **VALUE**: Verifies a fully-populated service item decodes with every field.
///
/// **WHY THIS MATTERS**: This is the shape the hosted service actually
/// emits; if any rename or type drifts, rendering silently loses data.
///
/// **BUG THIS CATCHES**: Would catch a field rename on the Rust side that no
/// longer matches the service's JSON keys.
#[test]
fn given_full_item_when_deserialized_then_all_fields_populated() {
    // GIVEN: A complete service response
    let body = json!({
        "recommended_assessments": [{
            "name": "Java Test",
            "url": "https://x/y",
            "description": "Core Java knowledge assessment",
            "duration": 30,
            "test_type": ["Knowledge & Skills"],
            "adaptive_support": "No",
            "remote_support": "Yes"
        }]
    });

    // WHEN: Deserializing
    let response: RecommendResponse = serde_json::from_value(body).unwrap();

    // THEN: Every field survives
    let item = &response.recommended_assessments[0];
    assert_eq!(item.name, "Java Test");
    assert_eq!(item.url, "https://x/y");
    assert_eq!(item.description.as_deref(), Some("Core Java knowledge assessment"));
    assert_eq!(item.duration, Some(30));
    assert_eq!(item.test_type, vec!["Knowledge & Skills"]);
    assert_eq!(item.adaptive_support.as_deref(), Some("No"));
    assert_eq!(item.remote_support.as_deref(), Some("Yes"));
}

/// **VALUE**: Verifies a minimal item (name + url only) still decodes.
///
/// **WHY THIS MATTERS**: The optional fields genuinely go missing for
/// scraped catalog entries; decoding must not fail over them.
///
/// **BUG THIS CATCHES**: Would catch a dropped `#[serde(default)]` turning
/// an optional field into a hard requirement.
#[test]
fn given_minimal_item_when_deserialized_then_optionals_default() {
    // GIVEN: An item with only the required fields
    let body = json!({
        "recommended_assessments": [{"name": "OPQ", "url": "https://x/opq"}]
    });

    // WHEN: Deserializing
    let response: RecommendResponse = serde_json::from_value(body).unwrap();

    // THEN: Optionals default to empty
    let item = &response.recommended_assessments[0];
    assert_eq!(item.description, None);
    assert_eq!(item.duration, None);
    assert!(item.test_type.is_empty());
}

/// **VALUE**: Verifies a response without the results field decodes as empty.
///
/// **WHY THIS MATTERS**: The contract maps "results field absent" onto the same
/// "no results" rendering as an empty list. The decode layer implements
/// half of that contract.
///
/// **BUG THIS CATCHES**: Would catch a removed `#[serde(default)]` on
/// `recommended_assessments`, which would turn this case into a decode
/// error shown as a malformed-response failure.
#[test]
fn given_missing_results_field_when_deserialized_then_list_is_empty() {
    // GIVEN: A 2xx body with no recommended_assessments key
    let body = json!({});

    // WHEN: Deserializing
    let response: RecommendResponse = serde_json::from_value(body).unwrap();

    // THEN: The list is empty, not an error
    assert!(response.recommended_assessments.is_empty());
}

/// **VALUE**: Verifies the error payload decodes with and without `detail`.
///
/// **WHY THIS MATTERS**: Error bodies drive the user-visible failure
/// message; a missing `detail` must fall through to the status-code path,
/// not fail a second time while decoding the error itself.
///
/// **BUG THIS CATCHES**: Would catch `detail` becoming a required field.
#[test]
fn given_error_body_when_deserialized_then_detail_is_optional() {
    let with_detail: ApiErrorBody =
        serde_json::from_value(json!({"detail": "Recommender model is not available"})).unwrap();
    assert_eq!(
        with_detail.detail.as_deref(),
        Some("Recommender model is not available")
    );

    let without_detail: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
    assert_eq!(without_detail.detail, None);
}
