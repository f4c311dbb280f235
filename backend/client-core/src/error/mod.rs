pub mod config;
pub mod recommend_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    RecommendClient(#[from] recommend_client::RecommendClientError),
}
