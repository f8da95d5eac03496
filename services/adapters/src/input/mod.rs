//! Input adapters for collecting market data from external sources

pub mod collectors;

use crate::Result;
use async_trait::async_trait;

pub use collectors::YahooChartCollector;

/// One trading session's close
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClose {
    /// Session timestamp (seconds since epoch)
    pub timestamp: i64,
    pub close: f64,
}

/// Daily closes for a symbol, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteHistory {
    pub symbol: String,
    pub sessions: Vec<SessionClose>,
}

impl QuoteHistory {
    pub fn new(symbol: impl Into<String>, sessions: Vec<SessionClose>) -> Self {
        Self {
            symbol: symbol.into(),
            sessions,
        }
    }

    /// History for a symbol the source has no data for
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Vec::new())
    }

    pub fn closes(&self) -> Vec<f64> {
        self.sessions.iter().map(|session| session.close).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Historical quote retrieval keyed by symbol
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &'static str;

    /// Fetch up to `sessions` most recent daily closes.
    ///
    /// Unknown symbols and missing data come back as an empty history;
    /// transport and decode failures are errors.
    async fn daily_closes(&self, symbol: &str, sessions: u32) -> Result<QuoteHistory>;
}
