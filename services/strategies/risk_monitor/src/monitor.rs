//! One-shot pipeline: fetch → score → compose → notify

use adapter_service::QuoteSource;
use chrono::NaiveDate;
use monitor_config::MonitorConfig;
use std::time::Duration;
use types::{MarketSnapshot, Recommendation, Report, RiskAssessment};

use crate::composer::{compose_in, select_recommendation};
use crate::error::Result;
use crate::fetcher::IndicatorFetcher;
use crate::notifier::{Delivery, WebhookNotifier};
use crate::scorer::RiskScorer;
use crate::{log_metrics, log_success};

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub snapshot: MarketSnapshot,
    pub assessment: RiskAssessment,
    pub recommendation: Recommendation,
    pub report: Report,
    pub delivery: Delivery,
}

pub struct RiskMonitor<S> {
    fetcher: IndicatorFetcher<S>,
    scorer: RiskScorer,
    notifier: WebhookNotifier,
    config: MonitorConfig,
}

impl<S: QuoteSource> RiskMonitor<S> {
    pub fn new(source: S, config: MonitorConfig) -> Result<Self> {
        let notifier = WebhookNotifier::new(Duration::from_millis(config.quotes.timeout_ms))?;

        Ok(Self {
            fetcher: IndicatorFetcher::new(source, config.quotes.lookback_sessions),
            scorer: RiskScorer::new(config.thresholds.clone()),
            notifier,
            config,
        })
    }

    pub fn fetcher(&self) -> &IndicatorFetcher<S> {
        &self.fetcher
    }

    /// Run the pipeline once. `today` is stamped into the report header.
    pub async fn run(&self, today: NaiveDate) -> Result<RunSummary> {
        let language = self.config.report.language;
        let snapshot = self
            .fetcher
            .fetch_snapshot(&self.config.indicators, language)
            .await?;

        let assessment = self.scorer.score(&snapshot);
        log_metrics!(
            "Risk score {} → {} ({} indicator(s) unavailable)",
            assessment.score,
            assessment.status,
            snapshot.unavailable_count()
        );

        let recommendation = select_recommendation(&snapshot, &assessment);
        let report = compose_in(&snapshot, &assessment, today, language);

        let delivery = self
            .notifier
            .notify(&report, self.config.webhook_url.as_deref())
            .await?;
        if let Delivery::Sent { status } = delivery {
            log_success!("Global risk report sent (HTTP {})", status);
        }

        Ok(RunSummary {
            snapshot,
            assessment,
            recommendation,
            report,
            delivery,
        })
    }
}
