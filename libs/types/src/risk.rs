//! Risk score, status tiers and trading recommendations

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::report::ReportLanguage;

/// Integer accumulator produced by the threshold rules
pub type RiskScore = u32;

/// Scores above this value share the top tier
pub const MAX_RISK_TIER: RiskScore = 4;

/// Overall market risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Stable,
    MildVolatility,
    ElevatedCaution,
    HighRisk,
    ExtremePanic,
}

impl RiskStatus {
    /// Map a raw score to its tier, clamping at [`MAX_RISK_TIER`]
    pub fn from_score(score: RiskScore) -> Self {
        match score.min(MAX_RISK_TIER) {
            0 => RiskStatus::Stable,
            1 => RiskStatus::MildVolatility,
            2 => RiskStatus::ElevatedCaution,
            3 => RiskStatus::HighRisk,
            4 => RiskStatus::ExtremePanic,
            _ => RiskStatus::ElevatedCaution,
        }
    }

    pub fn label(self) -> &'static str {
        self.label_in(ReportLanguage::English)
    }

    pub fn label_in(self, language: ReportLanguage) -> &'static str {
        match (language, self) {
            (ReportLanguage::English, RiskStatus::Stable) => "🟢 Market Stable",
            (ReportLanguage::English, RiskStatus::MildVolatility) => "🟡 Mild Volatility",
            (ReportLanguage::English, RiskStatus::ElevatedCaution) => "🟠 Elevated Caution",
            (ReportLanguage::English, RiskStatus::HighRisk) => "🔴 High Risk",
            (ReportLanguage::English, RiskStatus::ExtremePanic) => "🆘 Extreme Panic",
            (ReportLanguage::TraditionalChinese, RiskStatus::Stable) => "🟢 市場穩定",
            (ReportLanguage::TraditionalChinese, RiskStatus::MildVolatility) => "🟡 輕微波動",
            (ReportLanguage::TraditionalChinese, RiskStatus::ElevatedCaution) => "🟠 警戒上升",
            (ReportLanguage::TraditionalChinese, RiskStatus::HighRisk) => "🔴 高度風險",
            (ReportLanguage::TraditionalChinese, RiskStatus::ExtremePanic) => "🆘 極度恐慌",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score together with the tier it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: RiskScore,
    pub status: RiskStatus,
}

impl RiskAssessment {
    pub fn new(score: RiskScore) -> Self {
        Self {
            score,
            status: RiskStatus::from_score(score),
        }
    }
}

/// Positioning advice appended to the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Broad risk-off: trim exposure
    Defensive,
    /// Strong oil with a soft dollar
    CommodityShipping,
    /// Strong dollar pressuring large caps
    LargeCapOutflow,
    Stable,
}

impl Recommendation {
    /// Score at or above which defensive advice always wins
    pub const DEFENSIVE_SCORE: RiskScore = 3;
    /// Oil percent change above which commodity advice may apply
    pub const OIL_RALLY_PCT: f64 = 2.0;
    /// Dollar percent change above which outflow advice applies
    pub const STRONG_DOLLAR_PCT: f64 = 0.5;

    /// Pick the advice for a run. Rules overlap, so the first match wins.
    pub fn select(score: RiskScore, oil_change: f64, currency_change: f64) -> Self {
        if score >= Self::DEFENSIVE_SCORE {
            Recommendation::Defensive
        } else if oil_change > Self::OIL_RALLY_PCT && currency_change < 0.0 {
            Recommendation::CommodityShipping
        } else if currency_change > Self::STRONG_DOLLAR_PCT {
            Recommendation::LargeCapOutflow
        } else {
            Recommendation::Stable
        }
    }

    pub fn text(self) -> &'static str {
        self.text_in(ReportLanguage::English)
    }

    pub fn text_in(self, language: ReportLanguage) -> &'static str {
        match language {
            ReportLanguage::English => self.english_text(),
            ReportLanguage::TraditionalChinese => self.chinese_text(),
        }
    }

    fn chinese_text(self) -> &'static str {
        match self {
            Recommendation::Defensive => "全球避險情緒高漲，建議今日台股操作以防禦為主，縮小部位。",
            Recommendation::CommodityShipping => {
                "原油走強且美元偏弱，這有利於原物料(散裝)與能源類股，盤面動能強。"
            }
            Recommendation::LargeCapOutflow => "美元異常強勢，注意外資對權值股的調節壓力。",
            Recommendation::Stable => "盤勢平穩，適合回歸個股籌碼分析與 BDI 趨勢操作。",
        }
    }

    fn english_text(self) -> &'static str {
        match self {
            Recommendation::Defensive => {
                "Global risk-off sentiment is running high. Keep today's Taiwan equity positioning defensive and reduce position size."
            }
            Recommendation::CommodityShipping => {
                "Oil is rallying while the dollar softens. This favors raw-material (dry bulk) and energy names, and market momentum is strong."
            }
            Recommendation::LargeCapOutflow => {
                "The dollar is unusually strong. Watch for foreign selling pressure on large-cap heavyweights."
            }
            Recommendation::Stable => {
                "Conditions are calm. Return to stock-level chip analysis and BDI trend trading."
            }
        }
    }
}
