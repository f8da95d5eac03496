//! # Risk Monitor Adapters - Market Quote Collection
//!
//! ## Purpose
//!
//! Boundary between public market data APIs and the risk monitor. Collectors
//! fetch short daily close histories for index, yield, currency and commodity
//! symbols and hand them over as plain [`QuoteHistory`] records.
//!
//! ## Error Model
//!
//! - **No data** (unknown symbol, delisted, empty window): `Ok` with an empty
//!   history. Callers decide how to degrade.
//! - **Everything else** (transport, unexpected status, undecodable body):
//!   [`AdapterError`]. No retries are attempted here.
//!
//! ## Architecture Role
//!
//! ```text
//! Yahoo chart API → [YahooChartCollector] → QuoteHistory → Indicator Fetcher
//! ```

pub mod error;
pub mod input;

pub use error::{AdapterError, Result};
pub use input::{QuoteHistory, QuoteSource, SessionClose, YahooChartCollector};
