//! Domain models for the assessment recommender.
//!
//! This crate contains pure data structures representing the core
//! concepts in our application. Models have no business logic beyond
//! construction-time validation - they're just data that can be passed
//! between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: Business logic operating on models
//! - **recommender**: Application wiring everything together
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod assessment;
pub mod error;
pub mod recommend;

#[cfg(test)]
mod tests;

pub use assessment::{ApiErrorBody, Assessment, RecommendResponse};
pub use error::model_error::ModelError;
pub use recommend::{RecommendRequest, RecommendRequestBuilder};
