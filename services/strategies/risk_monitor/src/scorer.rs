//! Risk scorer: fixed threshold rules over the four readings

use monitor_config::Thresholds;
use tracing::debug;
use types::{MarketSnapshot, RiskAssessment, RiskScore};

/// Additive threshold scorer. Pure function of the snapshot.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    thresholds: Thresholds,
}

impl RiskScorer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Sum the rule points and map the total to a status tier
    pub fn score(&self, snapshot: &MarketSnapshot) -> RiskAssessment {
        let volatility = self.volatility_points(snapshot.volatility.latest_value);
        let bond_yield = self.bond_yield_points(snapshot.bond_yield.percent_change);
        let currency = self.currency_points(snapshot.currency.percent_change);

        debug!(volatility, bond_yield, currency, "Risk rule contributions");

        RiskAssessment::new(volatility + bond_yield + currency)
    }

    /// +2 above the high tier, +1 above the elevated tier
    pub fn volatility_points(&self, value: f64) -> RiskScore {
        if value > self.thresholds.volatility_high {
            2
        } else if value > self.thresholds.volatility_elevated {
            1
        } else {
            0
        }
    }

    /// +1 when the bond yield jumps sharply
    pub fn bond_yield_points(&self, percent_change: f64) -> RiskScore {
        RiskScore::from(percent_change > self.thresholds.bond_yield_jump_pct)
    }

    /// +1 when the dollar strengthens
    pub fn currency_points(&self, percent_change: f64) -> RiskScore {
        RiskScore::from(percent_change > self.thresholds.currency_strength_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{IndicatorReading, RiskStatus};

    fn reading(value: f64, change: f64) -> IndicatorReading {
        // Closes chosen so that latest == value and change == change
        let previous = value / (1.0 + change / 100.0);
        IndicatorReading::from_closes("test", &[previous, value])
    }

    fn snapshot(vix: f64, bond_change: f64, currency_change: f64, oil_change: f64) -> MarketSnapshot {
        MarketSnapshot {
            volatility: reading(vix, 0.0),
            bond_yield: reading(4.0, bond_change),
            currency: reading(100.0, currency_change),
            oil: reading(80.0, oil_change),
        }
    }

    #[test]
    fn test_volatility_boundaries_are_strict() {
        let scorer = RiskScorer::default();

        assert_eq!(scorer.volatility_points(20.0), 0);
        assert_eq!(scorer.volatility_points(20.01), 1);
        assert_eq!(scorer.volatility_points(25.0), 1);
        assert_eq!(scorer.volatility_points(25.01), 2);
    }

    #[test]
    fn test_change_boundaries_are_strict() {
        let scorer = RiskScorer::default();

        assert_eq!(scorer.bond_yield_points(1.5), 0);
        assert_eq!(scorer.bond_yield_points(1.51), 1);
        assert_eq!(scorer.currency_points(0.4), 0);
        assert_eq!(scorer.currency_points(0.41), 1);
    }

    #[test]
    fn test_score_is_monotonic_in_volatility() {
        let scorer = RiskScorer::default();
        let mut previous = 0;

        for step in 0..=400 {
            let vix = 10.0 + step as f64 * 0.05;
            let score = scorer.score(&snapshot(vix, 0.0, 0.0, 0.0)).score;
            assert!(score >= previous, "score dropped at vix {}", vix);
            previous = score;
        }
        assert_eq!(previous, 2);
    }

    #[test]
    fn test_score_is_monotonic_in_changes() {
        let scorer = RiskScorer::default();
        let mut previous = 0;

        for step in 0..=60 {
            let change = step as f64 * 0.05;
            let score = scorer.score(&snapshot(15.0, change, change, 0.0)).score;
            assert!(score >= previous, "score dropped at change {}", change);
            previous = score;
        }
        assert_eq!(previous, 2);
    }

    #[test]
    fn test_maximum_score() {
        let assessment = RiskScorer::default().score(&snapshot(40.0, 3.0, 1.0, 0.0));

        assert_eq!(assessment.score, 4);
        assert_eq!(assessment.status, RiskStatus::ExtremePanic);
    }

    #[test]
    fn test_high_risk_scenario() {
        let assessment = RiskScorer::default().score(&snapshot(28.0, 2.0, 0.1, 0.0));

        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.status, RiskStatus::HighRisk);
    }

    #[test]
    fn test_unavailable_readings_score_as_zero() {
        let snapshot = MarketSnapshot {
            volatility: IndicatorReading::unavailable("VIX"),
            bond_yield: IndicatorReading::unavailable("TNX"),
            currency: IndicatorReading::unavailable("DXY"),
            oil: IndicatorReading::unavailable("WTI"),
        };

        let assessment = RiskScorer::default().score(&snapshot);

        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.status, RiskStatus::Stable);
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = RiskScorer::new(Thresholds {
            volatility_high: 35.0,
            volatility_elevated: 30.0,
            ..Thresholds::default()
        });

        assert_eq!(scorer.volatility_points(28.0), 0);
        assert_eq!(scorer.volatility_points(31.0), 1);
    }
}
