//! Shared primitives for the recommender workspace.
//!
//! This crate contains the small pieces every other crate needs:
//! error source-location capture and HTTP status categorization.
//! No business logic, no I/O.

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
