//! Logging setup and standardized emoji log lines for the risk monitor

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_DIRECTIVES: &str = "risk_monitor=info,adapter_service=info,monitor_config=info";

/// Set to `json` for machine-readable log lines
const LOG_FORMAT_ENV: &str = "RISK_MONITOR_LOG_FORMAT";

/// Standard emoji set for risk monitor logging
pub struct LogEmoji;

impl LogEmoji {
    // Status indicators
    pub const SUCCESS: &'static str = "✅"; // Operation succeeded
    pub const WARNING: &'static str = "⚠️"; // Degraded input

    // Module-specific
    pub const SEARCH: &'static str = "🔍"; // Fetching indicators
    pub const CHART: &'static str = "📊"; // Scores
    pub const NETWORK: &'static str = "🌐"; // Webhook delivery
}

#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::SUCCESS, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_degraded {
    ($($arg:tt)*) => {
        tracing::warn!("{} {}", $crate::logging::LogEmoji::WARNING, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_search {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::SEARCH, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_metrics {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::CHART, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_network {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::NETWORK, format!($($arg)*))
    };
}

/// Install the global subscriber. `RUST_LOG` wins over the defaults.
pub fn init_logging(service_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))?;

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let installed = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install {} logger: {}", service_name, e))?;

    tracing::debug!(service = service_name, json, "Logging initialized");
    Ok(())
}
