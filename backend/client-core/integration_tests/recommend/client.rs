use client_core::RecommendClient;
use client_core::error::recommend_client::RecommendClientError;

use models::RecommendRequest;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the recommend client against a mock service
// These test the PUBLIC interface from an external consumer's perspective
// ============================================================================

fn request(query: &str) -> RecommendRequest {
    RecommendRequest::builder()
        .with_query(query)
        .with_top_k(10)
        .build()
        .unwrap()
}

// ----------------------------------------------------------------------------
// recommend() - success paths
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies exactly one POST goes out with the trimmed query and
/// that N response items come back in service order.
///
/// **WHY THIS MATTERS**: "One trigger, one request, server order preserved"
/// is the entire behavioral contract of this client. Ordering must be
/// exactly what the service returned - no sorting, no dedup.
///
/// **BUG THIS CATCHES**: Would catch duplicate sends (retry logic creeping
/// in), body drift, or any reordering of the decoded list.
#[tokio::test]
async fn given_success_response_when_recommend_then_returns_items_in_order() {
    // GIVEN: A service returning three assessments
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!({"query": "Java developer test", "top_k": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended_assessments": [
                {"name": "Java Test", "url": "https://x/java", "duration": 30,
                 "test_type": ["Knowledge & Skills"]},
                {"name": "Core Java (Advanced)", "url": "https://x/java-adv"},
                {"name": "OPQ", "url": "https://x/opq",
                 "test_type": ["Personality & Behavior"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Recommending with a padded query (builder trims it)
    let client = RecommendClient::new(&server.uri()).unwrap();
    let items = client
        .recommend(&request("  Java developer test  "))
        .await
        .unwrap();

    // THEN: Three items, in service order
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name, "Java Test");
    assert_eq!(items[0].duration, Some(30));
    assert_eq!(items[1].name, "Core Java (Advanced)");
    assert_eq!(items[2].name, "OPQ");
}

/// **VALUE**: Verifies an empty result list decodes as Ok(empty), not an error.
///
/// **WHY THIS MATTERS**: Zero matches is a normal outcome that renders as
/// "no results"; routing it through the error branch would tell the user
/// the service failed when it didn't.
#[tokio::test]
async fn given_empty_result_list_when_recommend_then_returns_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"recommended_assessments": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendClient::new(&server.uri()).unwrap();
    let items = client.recommend(&request("obscure role")).await.unwrap();

    assert!(items.is_empty());
}

/// **VALUE**: Verifies a 2xx body without the results field behaves like an
/// empty list.
///
/// **WHY THIS MATTERS**: The contract maps "results field absent" onto the
/// same no-results state as an empty list.
#[tokio::test]
async fn given_missing_results_field_when_recommend_then_returns_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendClient::new(&server.uri()).unwrap();
    let items = client.recommend(&request("anything")).await.unwrap();

    assert!(items.is_empty());
}

/// **VALUE**: Verifies wire-shape normalization end to end: aliased keys,
/// string durations, and bare test_type strings all decode.
///
/// **WHY THIS MATTERS**: This is the tolerant-decode behavior the typed
/// models rely on; without it, older catalog rows fail the whole response.
#[tokio::test]
async fn given_legacy_field_shapes_when_recommend_then_items_are_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended_assessments": [
                {"assessment_name": "Java Test", "assessment_url": "https://x/java",
                 "duration": "30", "test_type": "Knowledge & Skills"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendClient::new(&server.uri()).unwrap();
    let items = client.recommend(&request("java")).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Java Test");
    assert_eq!(items[0].url, "https://x/java");
    assert_eq!(items[0].duration, Some(30));
    assert_eq!(items[0].test_type, vec!["Knowledge & Skills"]);
}

/// **VALUE**: Verifies a base URL with a path prefix and no trailing slash
/// keeps its prefix when endpoints are joined onto it.
///
/// **WHY THIS MATTERS**: Config accepts `http://host/api`; Url::join on
/// such a base silently replaces the last segment, so without
/// normalization every request to a path-mounted deployment would 404 on
/// `/recommend` instead of hitting `/api/recommend`.
///
/// **BUG THIS CATCHES**: Would catch removal of the trailing-slash
/// normalization in the client constructor.
#[tokio::test]
async fn given_path_mounted_base_url_when_recommend_then_prefix_is_kept() {
    // GIVEN: A service mounted under /api
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended_assessments": [{"name": "Java Test", "url": "https://x/java"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    // WHEN: The base URL carries the prefix without a trailing slash
    let client = RecommendClient::new(&format!("{}/api", server.uri())).unwrap();

    // THEN: Both endpoints resolve under the prefix
    assert!(client.check_health().await);
    let items = client.recommend(&request("java")).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Java Test");
}

// ----------------------------------------------------------------------------
// recommend() - failure paths
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the service's `detail` message is surfaced verbatim.
///
/// **WHY THIS MATTERS**: "Recommender model is not available" is actionable;
/// "HTTP 503" is not. When the service explains itself, the user must see
/// that explanation.
///
/// **BUG THIS CATCHES**: Would catch the error body being discarded in
/// favor of the generic status message.
#[tokio::test]
async fn given_error_with_detail_when_recommend_then_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "detail": "Recommender model is not available or failed to load."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendClient::new(&server.uri()).unwrap();
    let error = client.recommend(&request("java")).await.unwrap_err();

    match error {
        RecommendClientError::Server { message, .. } => {
            assert_eq!(message, "Recommender model is not available or failed to load.");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a non-2xx response without a parseable body falls
/// back to a status-code message.
///
/// **WHY THIS MATTERS**: Gateways and proxies return HTML error pages; the
/// user still needs to learn the status code, and the client must not fail
/// a second time while decoding the error itself.
#[tokio::test]
async fn given_error_without_body_when_recommend_then_uses_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendClient::new(&server.uri()).unwrap();
    let error = client.recommend(&request("java")).await.unwrap_err();

    match error {
        RecommendClientError::Server { message, .. } => {
            assert!(message.contains("502"), "message should name the status: {message}");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a malformed 2xx body maps to the Json error variant.
///
/// **WHY THIS MATTERS**: The four-way error taxonomy distinguishes
/// malformed-response failures from transport and application failures;
/// this is the path that must never surface as a panic.
#[tokio::test]
async fn given_malformed_success_body_when_recommend_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json {"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendClient::new(&server.uri()).unwrap();
    let error = client.recommend(&request("java")).await.unwrap_err();

    assert!(matches!(error, RecommendClientError::Json { .. }));
}

/// **VALUE**: Verifies a connection-refused transport failure becomes an
/// Http error carrying the transport's message.
///
/// **WHY THIS MATTERS**: The service being down is the most common failure
/// in practice; it must reach the error branch like every other failure,
/// not bubble up as a panic.
#[tokio::test]
async fn given_unreachable_service_when_recommend_then_returns_http_error() {
    // GIVEN: A port with nothing listening
    let client = RecommendClient::new("http://127.0.0.1:65534").unwrap();

    // WHEN: Recommending
    let error = client.recommend(&request("java")).await.unwrap_err();

    // THEN: Transport failure, not a panic
    assert!(matches!(error, RecommendClientError::Http { .. }));
}

// ----------------------------------------------------------------------------
// check_health()
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the health probe is a plain boolean reachability
/// signal: true on 2xx, false on 5xx, false on connection failure.
///
/// **BUG THIS CATCHES**: Would catch the probe starting to error or panic
/// on unreachable deployments, which would break startup.
#[tokio::test]
async fn given_various_service_states_when_check_health_then_returns_bool() {
    let healthy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&healthy)
        .await;
    assert!(RecommendClient::new(&healthy.uri()).unwrap().check_health().await);

    let unhealthy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&unhealthy)
        .await;
    assert!(!RecommendClient::new(&unhealthy.uri()).unwrap().check_health().await);

    let unreachable = RecommendClient::new("http://127.0.0.1:65534").unwrap();
    assert!(!unreachable.check_health().await);
}
