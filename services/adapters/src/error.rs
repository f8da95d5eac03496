//! Error types for the adapters module

use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Main error type for quote source operations.
///
/// An unknown symbol is not an error: collectors report it as an empty
/// history. Everything here is fatal for the run.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Transport failure: DNS, connect, TLS, timeout, body read
    #[error("HTTP request for {symbol} failed: {source}")]
    Http {
        /// Symbol being requested
        symbol: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a status that is neither success nor "not found"
    #[error("Unexpected HTTP status {status} for {symbol}")]
    UnexpectedStatus {
        /// Symbol being requested
        symbol: String,
        /// Response status code
        status: u16,
    },

    /// Response body did not match the expected chart schema
    #[error("Failed to decode quote response for {symbol}: {source}")]
    Decode {
        /// Symbol being requested
        symbol: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid quote source URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error in adapter settings
    #[error("Configuration error: {0}")]
    Configuration(String),
}
