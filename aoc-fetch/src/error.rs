//! Error types for the fetcher

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fetch operation failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure kinds of a single fetch run
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure or non-success HTTP status
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Writing an output file failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
