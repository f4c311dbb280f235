use crate::error::recommend_client::RecommendClientError;
use crate::field_normalizer::normalize_json;

use common::{ErrorLocation, HttpStatusCode};
use models::{ApiErrorBody, Assessment, RecommendRequest, RecommendResponse};

use std::panic::Location;
use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const RECOMMEND_ENDPOINT: &str = "recommend";
const HEALTH_ENDPOINT: &str = "health";

#[derive(Clone)]
pub struct RecommendClient {
    base_url: Url,
    client: Client,
}

impl RecommendClient {
    pub fn new(base_url_str: &str) -> Result<Self, RecommendClientError> {
        let mut base_url = Url::parse(base_url_str)?;

        // Url::join drops the last path segment of a base without a
        // trailing slash ("http://host/api" + "recommend" would become
        // "http://host/recommend"). Normalize here so path-mounted
        // deployments keep their prefix.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a single `POST /recommend` and decode the assessment list.
    ///
    /// Exactly one request goes out per call; there are no retries. The
    /// returned list is in service order and may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendClientError`]:
    /// - `Http` for transport failures before a response body is available
    /// - `Server` for non-2xx responses, carrying the service's `detail`
    ///   message when present, else a status-code message
    /// - `Json` when a 2xx body is not valid JSON or not the expected shape
    pub async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Assessment>, RecommendClientError> {
        let url = self.base_url.join(RECOMMEND_ENDPOINT)?;
        debug!("POST {url} query={:?} top_k={:?}", request.query, request.top_k);

        let response = self.client.post(url).json(request).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|error_body| error_body.detail);

            return Err(RecommendClientError::Server {
                message: detail.unwrap_or_else(|| status.generic_message()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;
        let normalized = normalize_json(json);
        let decoded: RecommendResponse = serde_json::from_value(normalized)?;

        info!(
            "Received {} recommendations for query {:?}",
            decoded.recommended_assessments.len(),
            request.query
        );

        Ok(decoded.recommended_assessments)
    }

    /// Probe `GET /health` on the service.
    ///
    /// Returns true only for a 2xx response; URL and transport failures
    /// collapse to false so callers can treat this as a plain reachability
    /// signal.
    pub async fn check_health(&self) -> bool {
        let Ok(url) = self.base_url.join(HEALTH_ENDPOINT) else {
            return false;
        };

        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                debug!("Health check failed: {error}");
                false
            }
        }
    }
}
