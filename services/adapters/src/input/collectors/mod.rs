//! Venue-specific quote collectors

pub mod yahoo;

pub use yahoo::YahooChartCollector;
