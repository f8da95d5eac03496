//! # Risk Monitor - Global Market Stress Report
//!
//! ## Purpose
//!
//! Scheduled one-shot job that samples four market stress indicators, scores
//! them against fixed thresholds and posts a short report to a chat webhook.
//!
//! ## Architecture Role
//!
//! ```text
//! QuoteSource → [IndicatorFetcher] → [RiskScorer] → [compose] → [WebhookNotifier]
//!      ↓               ↓                  ↓              ↓               ↓
//! Daily closes   IndicatorReading    score + tier    Report text    POST {"content"}
//! ```
//!
//! ## Error Model
//!
//! - Fewer than two sessions for an indicator degrades to a zero reading with
//!   a failure label. The run continues and still scores the zero.
//! - Any other failure (transport, decode, webhook transport) is returned to
//!   the caller. Nothing is retried.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adapter_service::YahooChartCollector;
//! use monitor_config::MonitorConfig;
//! use risk_monitor::RiskMonitor;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = MonitorConfig::default();
//! let source = YahooChartCollector::new(&config.quotes)?;
//! let monitor = RiskMonitor::new(source, config)?;
//!
//! let summary = monitor.run(chrono::Local::now().date_naive()).await?;
//! println!("{}", summary.report);
//! # Ok(())
//! # }
//! ```

pub mod composer;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod monitor;
pub mod notifier;
pub mod scorer;
pub mod testing;

pub use composer::{compose, compose_in, select_recommendation};
pub use error::{MonitorError, Result};
pub use fetcher::IndicatorFetcher;
pub use monitor::{RiskMonitor, RunSummary};
pub use notifier::{Delivery, WebhookNotifier};
pub use scorer::RiskScorer;
