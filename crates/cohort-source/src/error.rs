//! Error types for the source crate.

use thiserror::Error;

/// Errors that can occur while fetching from the upstream record API.
///
/// A response body that matches none of an endpoint's tolerated envelope
/// shapes is NOT an error: it normalizes to an empty dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A strict endpoint answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not JSON.
    #[error("failed to decode {endpoint} response: {message}")]
    Decode {
        /// Endpoint path.
        endpoint: String,
        /// Underlying decode failure.
        message: String,
    },
}
