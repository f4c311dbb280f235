use common::ErrorLocation;

use thiserror::Error;

/// Errors that can occur in the application shell.
///
/// Failures inside a request cycle are rendered inline by the controller
/// and never reach this type; these are the startup and terminal-I/O
/// failures that end the program instead.
#[derive(Debug, Error)]
pub enum RecommenderError {
    /// Error from this app (logging, directories, terminal I/O)
    #[error("Recommender Error: {message} {location}")]
    Recommender {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, client construction)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}
