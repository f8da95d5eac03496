//! Market indicators and the readings taken from them

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::report::ReportLanguage;

/// Label fragment used when an indicator could not be read
pub const FETCH_FAILED_MARKER: &str = "retrieval failed";

/// The four tracked market quantities, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// CBOE volatility index
    Volatility,
    /// US 10-year treasury yield
    BondYield,
    /// US dollar index
    Currency,
    /// WTI crude oil front-month future
    Oil,
}

impl Indicator {
    /// All indicators in the order they appear in a report
    pub const ALL: [Indicator; 4] = [
        Indicator::Volatility,
        Indicator::BondYield,
        Indicator::Currency,
        Indicator::Oil,
    ];

    /// Yahoo Finance symbol used when no override is configured
    pub fn default_symbol(self) -> &'static str {
        match self {
            Indicator::Volatility => "^VIX",
            Indicator::BondYield => "^TNX",
            Indicator::Currency => "DX-Y.NYB",
            Indicator::Oil => "CL=F",
        }
    }

    pub fn default_display_name(self) -> &'static str {
        self.display_name_in(ReportLanguage::English)
    }

    /// Built-in name for the indicator's report line
    pub fn display_name_in(self, language: ReportLanguage) -> &'static str {
        match (language, self) {
            (ReportLanguage::English, Indicator::Volatility) => "VIX Volatility Index",
            (ReportLanguage::English, Indicator::BondYield) => "US 10Y Treasury Yield",
            (ReportLanguage::English, Indicator::Currency) => "US Dollar Index",
            (ReportLanguage::English, Indicator::Oil) => "WTI Crude Oil",
            (ReportLanguage::TraditionalChinese, Indicator::Volatility) => "VIX 恐慌指數",
            (ReportLanguage::TraditionalChinese, Indicator::BondYield) => "10年美債殖利率",
            (ReportLanguage::TraditionalChinese, Indicator::Currency) => "美元指數",
            (ReportLanguage::TraditionalChinese, Indicator::Oil) => "WTI 原油價格",
        }
    }

    /// Emoji prefix for the indicator's report line
    pub fn emoji(self) -> &'static str {
        match self {
            Indicator::Volatility => "⚠️",
            Indicator::BondYield => "📈",
            Indicator::Currency => "💵",
            Indicator::Oil => "🛢️",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_display_name())
    }
}

/// Latest value of one indicator plus its move versus the prior session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub display_name: String,

    /// Most recent session close (0 when unavailable)
    pub latest_value: f64,

    /// Percent change of the latest close versus the previous one (0 when unavailable)
    pub percent_change: f64,

    /// Human-readable line, e.g. `VIX: 18.20 (+3.05%)`
    pub label: String,

    available: bool,
}

impl IndicatorReading {
    /// Build a reading from closing prices ordered oldest to newest.
    ///
    /// Fewer than two sessions, or a zero previous close, yields the
    /// degraded reading instead of indexing past the data.
    pub fn from_closes(display_name: &str, closes: &[f64]) -> Self {
        let [.., previous, latest] = closes else {
            return Self::unavailable(display_name);
        };

        if *previous == 0.0 || !previous.is_finite() || !latest.is_finite() {
            return Self::unavailable(display_name);
        }

        let percent_change = (latest - previous) / previous * 100.0;

        Self {
            display_name: display_name.to_string(),
            latest_value: *latest,
            percent_change,
            label: format!("{}: {:.2} ({:+.2}%)", display_name, latest, percent_change),
            available: true,
        }
    }

    /// Zero-valued sentinel for an indicator whose history came back empty
    pub fn unavailable(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            latest_value: 0.0,
            percent_change: 0.0,
            label: format!("{}: {}", display_name, FETCH_FAILED_MARKER),
            available: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Report label with the failure marker written in `language`
    pub fn label_in(&self, language: ReportLanguage) -> String {
        if self.available {
            self.label.clone()
        } else {
            format!("{}: {}", self.display_name, language.fetch_failed_marker())
        }
    }
}

/// The four readings of one run, held by name so call sites cannot swap them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub volatility: IndicatorReading,
    pub bond_yield: IndicatorReading,
    pub currency: IndicatorReading,
    pub oil: IndicatorReading,
}

impl MarketSnapshot {
    pub fn get(&self, indicator: Indicator) -> &IndicatorReading {
        match indicator {
            Indicator::Volatility => &self.volatility,
            Indicator::BondYield => &self.bond_yield,
            Indicator::Currency => &self.currency,
            Indicator::Oil => &self.oil,
        }
    }

    /// Readings paired with their indicator, in report order
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &IndicatorReading)> {
        Indicator::ALL.into_iter().map(move |indicator| (indicator, self.get(indicator)))
    }

    /// Number of indicators that fell back to the degraded reading
    pub fn unavailable_count(&self) -> usize {
        self.iter().filter(|(_, reading)| !reading.is_available()).count()
    }
}
