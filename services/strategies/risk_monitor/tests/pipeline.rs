//! End-to-end runs of the risk monitor with an in-memory quote source

use chrono::NaiveDate;
use mockito::Matcher;
use monitor_config::MonitorConfig;
use risk_monitor::testing::FakeQuoteSource;
use risk_monitor::{Delivery, MonitorError, RiskMonitor};
use types::{Recommendation, ReportLanguage, RiskStatus, FETCH_FAILED_MARKER};

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 9).unwrap()
}

/// VIX 28 (+2), bond yield +2.0% (+1), dollar +0.1% (+0), oil flat
fn high_risk_source() -> FakeQuoteSource {
    FakeQuoteSource::new()
        .with_closes("^VIX", &[21.0, 24.0, 25.0, 28.0])
        .with_closes("^TNX", &[4.1, 4.0, 4.08])
        .with_closes("DX-Y.NYB", &[101.0, 100.0, 100.1])
        .with_closes("CL=F", &[79.0, 80.0, 80.0])
}

#[tokio::test]
async fn test_high_risk_scenario_without_webhook() {
    let monitor = RiskMonitor::new(high_risk_source(), MonitorConfig::default()).unwrap();

    let summary = monitor.run(run_date()).await.unwrap();

    assert_eq!(summary.assessment.score, 3);
    assert_eq!(summary.assessment.status, RiskStatus::HighRisk);
    assert_eq!(summary.recommendation, Recommendation::Defensive);
    assert_eq!(summary.delivery, Delivery::Skipped);

    let report = summary.report.content();
    assert!(report.contains("📅 Date: 2025-04-09"));
    assert!(report.contains("VIX Volatility Index: 28.00 (+12.00%)"));
    assert!(report.contains("US 10Y Treasury Yield: 4.08 (+2.00%)"));
    assert!(report.contains("🔴 High Risk"));
    assert!(report.ends_with(Recommendation::Defensive.text()));
}

#[tokio::test]
async fn test_report_is_posted_to_webhook() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/webhooks/1/abc")
        .match_body(Matcher::Regex("High Risk".to_string()))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let config = MonitorConfig::default()
        .with_webhook_url(Some(format!("{}/api/webhooks/1/abc", server.url())));
    let monitor = RiskMonitor::new(high_risk_source(), config).unwrap();

    let summary = monitor.run(run_date()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(summary.delivery, Delivery::Sent { status: 204 });
}

#[tokio::test]
async fn test_missing_data_degrades_every_indicator() {
    let monitor = RiskMonitor::new(FakeQuoteSource::new(), MonitorConfig::default()).unwrap();

    let summary = monitor.run(run_date()).await.unwrap();

    assert_eq!(summary.snapshot.unavailable_count(), 4);
    assert_eq!(summary.assessment.score, 0);
    assert_eq!(summary.assessment.status, RiskStatus::Stable);
    assert_eq!(summary.recommendation, Recommendation::Stable);
    assert_eq!(
        summary.report.content().matches(FETCH_FAILED_MARKER).count(),
        4
    );
}

#[tokio::test]
async fn test_single_session_indicator_does_not_abort_run() {
    let source = high_risk_source().with_closes("^VIX", &[31.0]);
    let monitor = RiskMonitor::new(source, MonitorConfig::default()).unwrap();

    let summary = monitor.run(run_date()).await.unwrap();

    assert!(!summary.snapshot.volatility.is_available());
    assert_eq!(summary.assessment.score, 1);
    assert_eq!(summary.assessment.status, RiskStatus::MildVolatility);
}

#[tokio::test]
async fn test_quote_source_failure_is_fatal() {
    let source = high_risk_source().failing("DX-Y.NYB");
    let monitor = RiskMonitor::new(source, MonitorConfig::default()).unwrap();

    let err = monitor.run(run_date()).await.unwrap_err();

    assert!(matches!(err, MonitorError::Quote(_)));
    // Oil is never requested once the dollar index fails
    assert_eq!(
        monitor.fetcher().source().requested(),
        vec!["^VIX", "^TNX", "DX-Y.NYB"]
    );
}

#[tokio::test]
async fn test_configured_symbols_are_used() {
    let mut config = MonitorConfig::default();
    config.indicators.oil.symbol = "BZ=F".to_string();
    config.indicators.oil.display_name = Some("Brent Crude".to_string());

    let source = high_risk_source().with_closes("BZ=F", &[70.0, 72.1]);
    let monitor = RiskMonitor::new(source, config).unwrap();

    let summary = monitor.run(run_date()).await.unwrap();

    assert!(summary.report.content().contains("🛢️ **Brent Crude: 72.10 (+3.00%)**"));
    assert_eq!(monitor.fetcher().source().requested()[3], "BZ=F");
}

#[tokio::test]
async fn test_traditional_chinese_report_is_posted() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .match_body(Matcher::Regex("高度風險".to_string()))
        .with_status(204)
        .create_async()
        .await;

    let mut config =
        MonitorConfig::default().with_webhook_url(Some(format!("{}/hook", server.url())));
    config.report.language = ReportLanguage::TraditionalChinese;
    let source = high_risk_source().with_closes("CL=F", &[80.0]);
    let monitor = RiskMonitor::new(source, config).unwrap();

    let summary = monitor.run(run_date()).await.unwrap();

    mock.assert_async().await;
    let report = summary.report.content();
    assert!(report.starts_with("🌍 **全球金融壓力監控 (美股收盤)**"));
    assert!(report.contains("⚠️ **VIX 恐慌指數: 28.00 (+12.00%)**"));
    assert!(report.contains("🛢️ **WTI 原油價格: 獲取失敗**"));
    assert!(report.ends_with(Recommendation::Defensive.text_in(ReportLanguage::TraditionalChinese)));
}
