use crate::RecommendRequest;
use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::panic::Location;

/// Upper bound on `top_k`. The service caps its own result lists; anything
/// larger than this is a caller bug, not a bigger result set.
pub const MAX_TOP_K: u32 = 50;

/// Builder for creating validated RecommendRequest instances.
///
/// Trims the query and rejects empty or whitespace-only input here, before
/// any network traffic can happen.
#[derive(Debug, Default)]
pub struct RecommendRequestBuilder {
    query: Option<String>,
    top_k: Option<u32>,
}

impl RecommendRequestBuilder {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Build the request with validation.
    #[track_caller]
    pub fn build(self) -> Result<RecommendRequest, ModelError> {
        let query = self.query.ok_or_else(|| ModelError::Validation {
            message: String::from("Query is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let query = query.trim().to_string();
        if query.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Query cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(top_k) = self.top_k {
            if top_k == 0 {
                return Err(ModelError::Validation {
                    message: String::from("top_k must be non-zero"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if top_k > MAX_TOP_K {
                return Err(ModelError::Validation {
                    message: format!("top_k too large: {top_k} (max {MAX_TOP_K})"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(RecommendRequest {
            query,
            top_k: self.top_k,
        })
    }
}
