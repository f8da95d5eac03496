//! # Risk Monitor Configuration
//!
//! Centralized configuration and defaults for the risk monitor services.
//!
//! ## Features
//!
//! - **Quote Source Defaults**: API host, user agent, timeout, lookback window
//! - **Indicator Symbols**: Overridable symbol and display name per indicator
//! - **Scoring Thresholds**: Risk rule cut-offs with their standard values
//! - **Report Language**: `en` (default) or `zh-TW`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use monitor_config::load_config;
//!
//! let config = load_config()?;
//! if config.webhook_url.is_none() {
//!     println!("delivery disabled");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod service;
pub mod service_config;

// Re-export commonly used types
pub use service_config::{
    load_config, resolve_config_path, IndicatorSet, IndicatorSpec, MonitorConfig,
    QuoteSourceConfig, ReportConfig, Thresholds,
};
