//! Message composer: fixed report template

use chrono::NaiveDate;
use types::{MarketSnapshot, Recommendation, ReportLanguage, RiskAssessment, Report};

const SEPARATOR: &str = "---";

/// Advice for this run. Overlapping rules resolve by fixed precedence.
pub fn select_recommendation(
    snapshot: &MarketSnapshot,
    assessment: &RiskAssessment,
) -> Recommendation {
    Recommendation::select(
        assessment.score,
        snapshot.oil.percent_change,
        snapshot.currency.percent_change,
    )
}

/// Build the English report: header, date, one line per indicator, status, advice
pub fn compose(snapshot: &MarketSnapshot, assessment: &RiskAssessment, date: NaiveDate) -> Report {
    compose_in(snapshot, assessment, date, ReportLanguage::English)
}

/// Same template as [`compose`], with the fixed text in `language`
pub fn compose_in(
    snapshot: &MarketSnapshot,
    assessment: &RiskAssessment,
    date: NaiveDate,
    language: ReportLanguage,
) -> Report {
    let recommendation = select_recommendation(snapshot, assessment);

    let mut lines = vec![
        format!("🌍 **{}**", language.header()),
        format!("📅 {}: {}", language.date_label(), date.format("%Y-%m-%d")),
        SEPARATOR.to_string(),
    ];
    lines.extend(snapshot.iter().map(|(indicator, reading)| {
        format!("{} **{}**", indicator.emoji(), reading.label_in(language))
    }));
    lines.push(SEPARATOR.to_string());
    lines.push(format!(
        "🛡️ {}: **{}**",
        language.status_label(),
        assessment.status.label_in(language)
    ));
    lines.push(format!(
        "💡 **{}:** {}",
        language.advice_label(),
        recommendation.text_in(language)
    ));

    Report::new(lines.join("\n"))
}
