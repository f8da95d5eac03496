//! Error types for the risk monitor pipeline

use adapter_service::AdapterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Quote source error: {0}")]
    Quote(#[from] AdapterError),

    #[error("Webhook delivery failed: {0}")]
    Webhook(#[source] reqwest::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, MonitorError>;
