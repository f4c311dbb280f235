use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RecommendClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },
}

impl RecommendClientError {
    /// The text shown to the user when a request cycle fails.
    ///
    /// Locations matter in logs but are noise in the rendered error line.
    pub fn user_message(&self) -> &str {
        match self {
            RecommendClientError::Http { message, .. }
            | RecommendClientError::Json { message, .. }
            | RecommendClientError::UrlParse { message, .. }
            | RecommendClientError::Server { message, .. } => message,
        }
    }
}

impl From<url::ParseError> for RecommendClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RecommendClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RecommendClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RecommendClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RecommendClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RecommendClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
