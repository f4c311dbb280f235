use serde::{Deserialize, Serialize};

/// A recommended test/resource item returned by the recommendation service.
///
/// Constructed solely from response JSON and held only for the duration of
/// a single render pass. There is no identity beyond array position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub name: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Approximate completion time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Category labels, in service order.
    #[serde(default)]
    pub test_type: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_support: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_support: Option<String>,
}

/// Success shape of `POST /recommend`.
///
/// A missing `recommended_assessments` field deserializes as the empty
/// list, which drives the "no results" branch downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommended_assessments: Vec<Assessment>,
}

/// Error payload shape of non-2xx responses from the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
