//! Risk Monitor Main Entry Point
//!
//! Runs once and exits. Scheduling is left to cron or the CI scheduler.

use adapter_service::YahooChartCollector;
use anyhow::{Context, Result};
use chrono::Local;
use monitor_config::load_config;
use risk_monitor::logging::init_logging;
use risk_monitor::{Delivery, RiskMonitor};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("risk_monitor")?;

    info!("🌍 Starting global risk monitor");

    let config = load_config().context("Failed to load risk monitor configuration")?;
    debug!("Effective configuration:\n{}", config.redacted().to_toml_string()?);

    let source = YahooChartCollector::new(&config.quotes)
        .context("Failed to create quote collector")?;
    let monitor = RiskMonitor::new(source, config)?;

    let summary = monitor
        .run(Local::now().date_naive())
        .await
        .context("Risk monitor run failed")?;

    if summary.delivery == Delivery::Skipped {
        info!("Report not delivered (no webhook configured):\n{}", summary.report);
    }

    info!(
        score = summary.assessment.score,
        recommendation = ?summary.recommendation,
        "Risk monitor finished"
    );
    Ok(())
}
