pub mod builder;

pub use builder::RecommendRequestBuilder;

use serde::Serialize;

/// A validated recommendation query.
///
/// Construct through [`RecommendRequestBuilder`]; the builder guarantees
/// the query is non-empty after trimming, so holding one of these means a
/// request is allowed to go out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub query: String,

    /// Upper bound on the number of results the service should return.
    /// Omitted from the wire body when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl RecommendRequest {
    pub fn builder() -> RecommendRequestBuilder {
        RecommendRequestBuilder::default()
    }
}
