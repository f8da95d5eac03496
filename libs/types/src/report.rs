//! Composed report text and its webhook payload form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the report text is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl ReportLanguage {
    pub fn header(self) -> &'static str {
        match self {
            ReportLanguage::English => "Global Financial Stress Monitor (US Market Close)",
            ReportLanguage::TraditionalChinese => "全球金融壓力監控 (美股收盤)",
        }
    }

    pub fn date_label(self) -> &'static str {
        match self {
            ReportLanguage::English => "Date",
            ReportLanguage::TraditionalChinese => "日期",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            ReportLanguage::English => "Overall Risk Status",
            ReportLanguage::TraditionalChinese => "綜合風險狀態",
        }
    }

    pub fn advice_label(self) -> &'static str {
        match self {
            ReportLanguage::English => "Advice",
            ReportLanguage::TraditionalChinese => "建議",
        }
    }

    /// Replaces the value on an indicator line that could not be read
    pub fn fetch_failed_marker(self) -> &'static str {
        match self {
            ReportLanguage::English => crate::market::FETCH_FAILED_MARKER,
            ReportLanguage::TraditionalChinese => "獲取失敗",
        }
    }
}

/// Final message for one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    content: String,
}

impl Report {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
