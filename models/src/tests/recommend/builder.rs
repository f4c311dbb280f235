use crate::{ModelError, RecommendRequestBuilder};
use crate::recommend::builder::MAX_TOP_K;

/// **VALUE**: Verifies that builder validation rejects empty queries.
///
/// **WHY THIS MATTERS**: The contract says an empty query must never reach
/// the network. The builder is the single choke point enforcing that, so the
/// client and controller can trust any request they're handed.
///
/// **BUG THIS CATCHES**: Would catch if the emptiness check is removed or
/// bypassed during refactoring, letting blank queries hit the service.
#[test]
fn given_empty_query_when_building_then_returns_validation_error() {
    // GIVEN: Builder with an empty query
    let builder = RecommendRequestBuilder::default().with_query("");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Query cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that whitespace-only queries are rejected, not just "".
///
/// **WHY THIS MATTERS**: Users hit Enter on "   " all the time. The
/// contract treats whitespace-only input the same as empty: validation
/// message, no network call.
///
/// **BUG THIS CATCHES**: Would catch if trimming happens after the emptiness
/// check instead of before it.
#[test]
fn given_whitespace_query_when_building_then_returns_validation_error() {
    // GIVEN: Builder with a whitespace-only query
    let builder = RecommendRequestBuilder::default().with_query("   \t ");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Query cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that a missing query is rejected.
///
/// **WHY THIS MATTERS**: The builder must not silently substitute a default
/// query; a request without a query is a programming error.
///
/// **BUG THIS CATCHES**: Would catch if the required-field check is replaced
/// by `unwrap_or_default()`, which would send `{"query": ""}`.
#[test]
fn given_missing_query_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a query
    let builder = RecommendRequestBuilder::default().with_top_k(10);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Query is required");
        }
    }
}

/// **VALUE**: Verifies the query is trimmed before it goes on the wire.
///
/// **WHY THIS MATTERS**: The contract is "exactly one POST with the trimmed
/// query in the body". Trimming here means every consumer gets it for free.
///
/// **BUG THIS CATCHES**: Would catch if trimming is dropped, sending padded
/// queries that degrade recommendation quality.
#[test]
fn given_padded_query_when_building_then_query_is_trimmed() {
    // GIVEN: Builder with surrounding whitespace
    let builder = RecommendRequestBuilder::default().with_query("  Java developer test \n");

    // WHEN: Building
    let result = builder.build();

    // THEN: The stored query has no padding
    assert!(result.is_ok());
    assert_eq!(result.unwrap().query, "Java developer test");
}

/// **VALUE**: Verifies that a zero top_k is rejected.
///
/// **WHY THIS MATTERS**: top_k = 0 asks the service for nothing; every
/// response would look like "no results" for the wrong reason.
///
/// **BUG THIS CATCHES**: Would catch if the non-zero check disappears and a
/// misconfigured bound silently blanks all result lists.
#[test]
fn given_zero_top_k_when_building_then_returns_validation_error() {
    // GIVEN: Builder with top_k = 0
    let builder = RecommendRequestBuilder::default()
        .with_query("sales role")
        .with_top_k(0);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "top_k must be non-zero");
        }
    }
}

/// **VALUE**: Verifies the top_k upper bound is enforced.
///
/// **WHY THIS MATTERS**: The service caps its result lists; an oversized
/// top_k is a caller bug that should surface at build time, not be silently
/// truncated by the server.
///
/// **BUG THIS CATCHES**: Would catch if MAX_TOP_K enforcement is removed.
#[test]
fn given_oversized_top_k_when_building_then_returns_validation_error() {
    // GIVEN: Builder with top_k above the bound
    let builder = RecommendRequestBuilder::default()
        .with_query("sales role")
        .with_top_k(MAX_TOP_K + 1);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the offending value
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.starts_with("top_k too large:"));
        }
    }
}

/// **VALUE**: Verifies the happy path with all fields set.
///
/// **WHY THIS MATTERS**: Regression here would break every request the
/// application issues.
///
/// **BUG THIS CATCHES**: Would catch broken field assignments after a
/// refactor of the builder internals.
#[test]
fn given_valid_fields_when_building_then_returns_request() {
    // GIVEN: Builder with a valid query and bound
    let builder = RecommendRequestBuilder::default()
        .with_query("Java developer test")
        .with_top_k(10);

    // WHEN: Building
    let result = builder.build();

    // THEN: Should succeed and populate both fields
    assert!(result.is_ok());
    let request = result.unwrap();
    assert_eq!(request.query, "Java developer test");
    assert_eq!(request.top_k, Some(10));
}

/// **VALUE**: Verifies top_k stays optional and is omitted from the JSON body.
///
/// **WHY THIS MATTERS**: One deployment variant sends `top_k`, the other
/// doesn't; the wire body must not contain `"top_k": null` in the latter
/// case, since the service rejects nulls for that field.
///
/// **BUG THIS CATCHES**: Would catch a dropped `skip_serializing_if`
/// attribute on the request struct.
#[test]
fn given_no_top_k_when_serialized_then_field_is_omitted() {
    // GIVEN: A request built without top_k
    let request = RecommendRequestBuilder::default()
        .with_query("qa engineer")
        .build()
        .unwrap();

    // WHEN: Serializing to JSON
    let json = serde_json::to_string(&request).unwrap();

    // THEN: The body contains only the query
    assert_eq!(json, r#"{"query":"qa engineer"}"#);
}
