//! Yahoo Finance chart API collector
//!
//! Pulls daily closes from `GET /v8/finance/chart/{symbol}?range=5d&interval=1d`.
//! The range is the smallest chart-API token covering the requested sessions.
//! Unknown symbols answer 404 with a `chart.error` body; both that and an
//! empty result set are reported as an empty history.

use async_trait::async_trait;
use monitor_config::QuoteSourceConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use crate::input::{QuoteHistory, QuoteSource, SessionClose};
use crate::{AdapterError, Result};

/// Chart API response envelope
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Chart-API range tokens with the trading sessions each one reliably covers
const CHART_RANGES: [(u32, &str); 8] = [
    (5, "5d"),
    (19, "1mo"),
    (60, "3mo"),
    (120, "6mo"),
    (250, "1y"),
    (500, "2y"),
    (1250, "5y"),
    (2500, "10y"),
];

/// Smallest range token that covers `sessions` daily closes
fn chart_range(sessions: u32) -> &'static str {
    CHART_RANGES
        .iter()
        .find(|(covered, _)| sessions <= *covered)
        .map(|(_, range)| *range)
        .unwrap_or("max")
}

/// Quote source backed by the Yahoo Finance chart API
pub struct YahooChartCollector {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooChartCollector {
    /// Create a collector with its own HTTP client
    pub fn new(config: &QuoteSourceConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AdapterError::Configuration(format!(
                "Quote source URL cannot be a base: {}",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AdapterError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    fn chart_url(&self, symbol: &str, sessions: u32) -> Url {
        // Index symbols carry `^` and futures carry `=`; encode both
        let encoded: String = form_urlencoded::byte_serialize(symbol.as_bytes()).collect();
        let path = format!(
            "{}/v8/finance/chart/{}",
            self.base_url.path().trim_end_matches('/'),
            encoded
        );

        let mut url = self.base_url.clone();
        url.set_path(&path);
        url.query_pairs_mut()
            .append_pair("range", chart_range(sessions))
            .append_pair("interval", "1d");
        url
    }
}

#[async_trait]
impl QuoteSource for YahooChartCollector {
    fn name(&self) -> &'static str {
        "yahoo_chart"
    }

    async fn daily_closes(&self, symbol: &str, sessions: u32) -> Result<QuoteHistory> {
        let url = self.chart_url(symbol, sessions);
        debug!("Requesting {} sessions for {} from {}", sessions, symbol, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| AdapterError::Http {
                symbol: symbol.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("No chart data for {} (HTTP 404)", symbol);
            return Ok(QuoteHistory::empty(symbol));
        }
        if !status.is_success() {
            return Err(AdapterError::UnexpectedStatus {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| AdapterError::Http {
            symbol: symbol.to_string(),
            source,
        })?;

        parse_chart(symbol, &body, sessions)
    }
}

/// Decode a chart response body into at most `sessions` closes
fn parse_chart(symbol: &str, body: &[u8], sessions: u32) -> Result<QuoteHistory> {
    let envelope: ChartEnvelope =
        serde_json::from_slice(body).map_err(|source| AdapterError::Decode {
            symbol: symbol.to_string(),
            source,
        })?;

    if let Some(error) = envelope.chart.error {
        warn!(
            "Chart API error for {}: {} ({})",
            symbol,
            error.code,
            error.description.as_deref().unwrap_or("no description")
        );
        return Ok(QuoteHistory::empty(symbol));
    }

    let Some(result) = envelope.chart.result.and_then(|results| results.into_iter().next()) else {
        return Ok(QuoteHistory::empty(symbol));
    };

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|block| block.close)
        .unwrap_or_default();

    // Sessions without a print (holidays, halted feeds) carry null closes
    let mut history: Vec<SessionClose> = closes
        .into_iter()
        .enumerate()
        .filter_map(|(i, close)| {
            close.map(|close| SessionClose {
                timestamp: result.timestamp.get(i).copied().unwrap_or_default(),
                close,
            })
        })
        .collect();

    let keep = sessions as usize;
    if history.len() > keep {
        history.drain(..history.len() - keep);
    }

    Ok(QuoteHistory::new(symbol, history))
}
