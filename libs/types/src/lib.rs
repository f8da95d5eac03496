//! # Risk Monitor Types
//!
//! Domain records that flow through the risk monitor pipeline. Every value here
//! is transient: built once per run, handed forward, then dropped.
//!
//! ## Data Flow
//!
//! ```text
//! Quote Source → [IndicatorReading x4] → [RiskAssessment] → [Report] → Webhook
//!                   MarketSnapshot          score + tier      text
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{IndicatorReading, RiskStatus};
//!
//! let vix = IndicatorReading::from_closes("VIX", &[18.2, 21.4]);
//! assert!(vix.is_available());
//!
//! let failed = IndicatorReading::unavailable("VIX");
//! assert_eq!(failed.latest_value, 0.0);
//!
//! assert_eq!(RiskStatus::from_score(7), RiskStatus::ExtremePanic);
//! ```

pub mod market;
pub mod report;
pub mod risk;

pub use market::{Indicator, IndicatorReading, MarketSnapshot, FETCH_FAILED_MARKER};
pub use report::{Report, ReportLanguage};
pub use risk::{Recommendation, RiskAssessment, RiskScore, RiskStatus, MAX_RISK_TIER};
