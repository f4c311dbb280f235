pub mod config;
pub mod error;
pub mod field_normalizer;
pub mod recommend_client;


pub use recommend_client::RecommendClient;

pub const RECOMMEND_SERVICE_HOSTNAME: &str = "assessment-recommendation-system-vg9h.onrender.com";
pub const RECOMMEND_SERVICE_BASE_URL: &str =
    const_format::concatcp!("https://", RECOMMEND_SERVICE_HOSTNAME);
