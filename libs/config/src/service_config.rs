//! Service Configuration Module
//!
//! Loads the risk monitor configuration in layers: built-in defaults, an
//! optional TOML file, `RISK_MONITOR__SECTION__KEY` environment overrides,
//! and finally the webhook URL from `DISCORD_WEBHOOK`.

use anyhow::{bail, ensure, Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use types::{Indicator, ReportLanguage};
use url::Url;

use crate::service::{env, quotes, thresholds};

/// Main risk monitor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Webhook delivery target; `None` turns delivery into a logged no-op
    pub webhook_url: Option<String>,

    /// Upstream quote source settings
    pub quotes: QuoteSourceConfig,

    /// Symbols and display names of the tracked indicators
    pub indicators: IndicatorSet,

    /// Risk scoring thresholds
    pub thresholds: Thresholds,

    /// Report rendering
    pub report: ReportConfig,
}

/// Report rendering settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// `en` or `zh-TW`
    pub language: ReportLanguage,
}

/// Upstream quote source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSourceConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub lookback_sessions: u32,
}

impl Default for QuoteSourceConfig {
    fn default() -> Self {
        Self {
            base_url: quotes::DEFAULT_BASE_URL.to_string(),
            user_agent: quotes::DEFAULT_USER_AGENT.to_string(),
            timeout_ms: quotes::REQUEST_TIMEOUT_MS,
            lookback_sessions: quotes::LOOKBACK_SESSIONS,
        }
    }
}

/// Symbol and display name for one indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub symbol: String,

    /// Falls back to the built-in name in the report language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl IndicatorSpec {
    pub fn defaults_for(indicator: Indicator) -> Self {
        Self {
            symbol: indicator.default_symbol().to_string(),
            display_name: None,
        }
    }
}

/// The four tracked indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSet {
    pub volatility: IndicatorSpec,
    pub bond_yield: IndicatorSpec,
    pub currency: IndicatorSpec,
    pub oil: IndicatorSpec,
}

impl Default for IndicatorSet {
    fn default() -> Self {
        Self {
            volatility: IndicatorSpec::defaults_for(Indicator::Volatility),
            bond_yield: IndicatorSpec::defaults_for(Indicator::BondYield),
            currency: IndicatorSpec::defaults_for(Indicator::Currency),
            oil: IndicatorSpec::defaults_for(Indicator::Oil),
        }
    }
}

impl IndicatorSet {
    pub fn spec(&self, indicator: Indicator) -> &IndicatorSpec {
        match indicator {
            Indicator::Volatility => &self.volatility,
            Indicator::BondYield => &self.bond_yield,
            Indicator::Currency => &self.currency,
            Indicator::Oil => &self.oil,
        }
    }

    /// Configured display name, or the built-in one for `language`
    pub fn display_name(&self, indicator: Indicator, language: ReportLanguage) -> &str {
        self.spec(indicator)
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| indicator.display_name_in(language))
    }
}

/// Risk scoring thresholds. All comparisons are strict `>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub volatility_high: f64,
    pub volatility_elevated: f64,
    pub bond_yield_jump_pct: f64,
    pub currency_strength_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            volatility_high: thresholds::VOLATILITY_HIGH,
            volatility_elevated: thresholds::VOLATILITY_ELEVATED,
            bond_yield_jump_pct: thresholds::BOND_YIELD_JUMP_PCT,
            currency_strength_pct: thresholds::CURRENCY_STRENGTH_PCT,
        }
    }
}

impl MonitorConfig {
    /// Load from an optional file with `RISK_MONITOR__` environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_environment(path, override_environment())
    }

    fn load_with_environment(path: Option<&Path>, environment: Environment) -> Result<Self> {
        // Defaults go in as the base layer so a partial table (a symbol
        // without its display name) still deserializes
        let defaults = Config::try_from(&MonitorConfig::default())
            .context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = path {
            info!("Loading risk monitor config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(environment)
            .build()
            .context("Failed to build configuration")?;

        let mut config: MonitorConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.webhook_url = normalize_webhook(config.webhook_url.take());
        Ok(config)
    }

    /// Replace the webhook URL, treating blank values as unset
    pub fn with_webhook_url(mut self, webhook_url: Option<String>) -> Self {
        self.webhook_url = normalize_webhook(webhook_url);
        self
    }

    /// Check values the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        let base_url = Url::parse(&self.quotes.base_url)
            .with_context(|| format!("Invalid quote source URL: {}", self.quotes.base_url))?;
        ensure!(
            matches!(base_url.scheme(), "http" | "https"),
            "Quote source URL must use http or https"
        );

        if let Some(webhook) = &self.webhook_url {
            if Url::parse(webhook).is_err() {
                bail!("Webhook URL is not a valid URL");
            }
        }

        ensure!(self.quotes.timeout_ms > 0, "Quote timeout must be positive");
        ensure!(
            self.quotes.lookback_sessions >= 2,
            "Lookback must cover at least two sessions, got {}",
            self.quotes.lookback_sessions
        );

        for indicator in Indicator::ALL {
            let spec = self.indicators.spec(indicator);
            ensure!(
                !spec.symbol.trim().is_empty(),
                "Symbol for {} cannot be empty",
                indicator
            );
        }

        ensure!(
            self.thresholds.volatility_high >= self.thresholds.volatility_elevated,
            "volatility_high ({}) must not be below volatility_elevated ({})",
            self.thresholds.volatility_high,
            self.thresholds.volatility_elevated
        );

        Ok(())
    }

    /// Copy safe to log: the webhook URL embeds its credentials
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.webhook_url.is_some() {
            copy.webhook_url = Some("<redacted>".to_string());
        }
        copy
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

fn override_environment() -> Environment {
    Environment::with_prefix(env::OVERRIDE_PREFIX)
        .separator(env::OVERRIDE_SEPARATOR)
        .try_parsing(true)
}

fn normalize_webhook(webhook_url: Option<String>) -> Option<String> {
    webhook_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// Resolve the config file path from `RISK_MONITOR_CONFIG_PATH`, expanding
/// `$VARS` and `~`
pub fn resolve_config_path() -> Result<Option<PathBuf>> {
    let Ok(raw) = std::env::var(env::CONFIG_PATH) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let expanded = shellexpand::full(&raw).context("Failed to expand config path")?;
    Ok(Some(PathBuf::from(expanded.as_ref())))
}

/// Convenience function: file from `RISK_MONITOR_CONFIG_PATH`, overrides,
/// then the webhook URL from `DISCORD_WEBHOOK`
pub fn load_config() -> Result<MonitorConfig> {
    let path = resolve_config_path()?;
    let mut config = MonitorConfig::load(path.as_deref())?;

    if let Ok(webhook) = std::env::var(env::WEBHOOK_URL) {
        config = config.with_webhook_url(Some(webhook));
    }

    debug!(
        "Webhook delivery {}",
        if config.webhook_url.is_some() { "enabled" } else { "disabled" }
    );

    config.validate()?;
    Ok(config)
}
