//! Testing utilities for the risk monitor

use adapter_service::{AdapterError, QuoteHistory, QuoteSource, SessionClose};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// In-memory quote source. Unknown symbols return an empty history.
#[derive(Default)]
pub struct FakeQuoteSource {
    closes: HashMap<String, Vec<f64>>,
    failing: HashSet<String>,
    requested: Mutex<Vec<String>>,
    last_sessions: Mutex<Option<u32>>,
}

impl FakeQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these closes (oldest first) for `symbol`
    pub fn with_closes(mut self, symbol: &str, closes: &[f64]) -> Self {
        self.closes.insert(symbol.to_string(), closes.to_vec());
        self
    }

    /// Answer `symbol` with a fatal upstream error
    pub fn failing(mut self, symbol: &str) -> Self {
        self.failing.insert(symbol.to_string());
        self
    }

    /// Symbols requested so far, in call order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }

    pub fn last_sessions(&self) -> Option<u32> {
        *self.last_sessions.lock()
    }
}

#[async_trait]
impl QuoteSource for FakeQuoteSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn daily_closes(&self, symbol: &str, sessions: u32) -> adapter_service::Result<QuoteHistory> {
        self.requested.lock().push(symbol.to_string());
        *self.last_sessions.lock() = Some(sessions);

        if self.failing.contains(symbol) {
            return Err(AdapterError::UnexpectedStatus {
                symbol: symbol.to_string(),
                status: 503,
            });
        }

        let sessions = self
            .closes
            .get(symbol)
            .map(|closes| {
                closes
                    .iter()
                    .enumerate()
                    .map(|(i, close)| SessionClose {
                        timestamp: i as i64,
                        close: *close,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(QuoteHistory::new(symbol, sessions))
    }
}
