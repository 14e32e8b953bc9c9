//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed (connection, TLS, DNS, reading the body, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status code received
    #[error("Invalid HTTP status {status} from {url}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
        /// The URL that was requested
        url: reqwest::Url,
    },

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
