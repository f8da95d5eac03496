//! Indicator fetcher: quote history → named reading

use adapter_service::QuoteSource;
use monitor_config::IndicatorSet;
use tracing::debug;
use types::{Indicator, IndicatorReading, MarketSnapshot, ReportLanguage};

use crate::error::Result;
use crate::{log_degraded, log_search};

/// Turns raw quote histories into [`IndicatorReading`]s
pub struct IndicatorFetcher<S> {
    source: S,
    lookback_sessions: u32,
}

impl<S: QuoteSource> IndicatorFetcher<S> {
    pub fn new(source: S, lookback_sessions: u32) -> Self {
        Self {
            source,
            lookback_sessions,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read one indicator.
    ///
    /// Fewer than two sessions is recovered into the zero-valued reading.
    /// Source errors propagate.
    pub async fn fetch(&self, symbol: &str, display_name: &str) -> Result<IndicatorReading> {
        let history = self
            .source
            .daily_closes(symbol, self.lookback_sessions)
            .await?;

        debug!(
            "{} returned {} sessions for {}",
            self.source.name(),
            history.len(),
            symbol
        );

        let reading = IndicatorReading::from_closes(display_name, &history.closes());
        if !reading.is_available() {
            log_degraded!(
                "{} ({}): {} usable sessions, using zero reading",
                display_name,
                symbol,
                history.len()
            );
        }

        Ok(reading)
    }

    /// Read all four indicators one after another, in report order.
    /// Unnamed indicators take their built-in name in `language`.
    pub async fn fetch_snapshot(
        &self,
        indicators: &IndicatorSet,
        language: ReportLanguage,
    ) -> Result<MarketSnapshot> {
        log_search!("Fetching global risk indicators via {}", self.source.name());

        Ok(MarketSnapshot {
            volatility: self.fetch_indicator(indicators, Indicator::Volatility, language).await?,
            bond_yield: self.fetch_indicator(indicators, Indicator::BondYield, language).await?,
            currency: self.fetch_indicator(indicators, Indicator::Currency, language).await?,
            oil: self.fetch_indicator(indicators, Indicator::Oil, language).await?,
        })
    }

    async fn fetch_indicator(
        &self,
        indicators: &IndicatorSet,
        indicator: Indicator,
        language: ReportLanguage,
    ) -> Result<IndicatorReading> {
        let symbol = &indicators.spec(indicator).symbol;
        self.fetch(symbol, indicators.display_name(indicator, language)).await
    }
}
