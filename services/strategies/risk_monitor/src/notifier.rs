//! Webhook notifier: posts the report as `{"content": "..."}`

use std::time::Duration;
use tracing::{info, warn};
use types::Report;

use crate::error::{MonitorError, Result};
use crate::log_network;

/// Outcome of a delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// No webhook configured; nothing was sent
    Skipped,
    /// Posted once; the status is recorded but not validated
    Sent { status: u16 },
}

pub struct WebhookNotifier {
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::Configuration {
                message: format!("Failed to create webhook HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Post the report once. A missing or blank URL is a logged no-op.
    pub async fn notify(&self, report: &Report, webhook_url: Option<&str>) -> Result<Delivery> {
        let Some(url) = webhook_url.map(str::trim).filter(|url| !url.is_empty()) else {
            info!("No webhook configured, skipping delivery");
            return Ok(Delivery::Skipped);
        };

        log_network!("Posting risk report ({} bytes)", report.content().len());

        let response = self
            .client
            .post(url)
            .json(report)
            .send()
            .await
            .map_err(MonitorError::Webhook)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Webhook answered HTTP {}", status);
        }

        Ok(Delivery::Sent {
            status: status.as_u16(),
        })
    }
}
