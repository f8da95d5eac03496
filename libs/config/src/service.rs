//! Service configuration and defaults
//!
//! Default values and environment variable names used by the risk monitor.

/// Environment variable names
pub mod env {
    /// Webhook URL the report is posted to; unset disables delivery
    pub const WEBHOOK_URL: &str = "DISCORD_WEBHOOK";

    /// Optional TOML config file path
    pub const CONFIG_PATH: &str = "RISK_MONITOR_CONFIG_PATH";

    /// Prefix for per-key overrides, e.g. `RISK_MONITOR__QUOTES__TIMEOUT_MS`
    pub const OVERRIDE_PREFIX: &str = "RISK_MONITOR";

    /// Separator between prefix, section and key in override names
    pub const OVERRIDE_SEPARATOR: &str = "__";
}

/// Upstream quote source defaults
pub mod quotes {
    /// Yahoo Finance API host
    pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

    /// Yahoo rejects requests without a browser-like agent
    pub const DEFAULT_USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

    /// Request timeout (milliseconds)
    pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

    /// Trading sessions requested per indicator
    pub const LOOKBACK_SESSIONS: u32 = 5;
}

/// Risk scoring defaults
pub mod thresholds {
    /// Volatility index level worth +2
    pub const VOLATILITY_HIGH: f64 = 25.0;

    /// Volatility index level worth +1
    pub const VOLATILITY_ELEVATED: f64 = 20.0;

    /// Bond yield daily jump (percent) worth +1
    pub const BOND_YIELD_JUMP_PCT: f64 = 1.5;

    /// Dollar index daily gain (percent) worth +1
    pub const CURRENCY_STRENGTH_PCT: f64 = 0.4;
}
