//! Yahoo chart collector against a mock HTTP server

use adapter_service::{AdapterError, QuoteSource, YahooChartCollector};
use mockito::Matcher;
use monitor_config::QuoteSourceConfig;

fn collector_for(base_url: String) -> YahooChartCollector {
    let config = QuoteSourceConfig {
        base_url,
        timeout_ms: 2_000,
        ..QuoteSourceConfig::default()
    };
    YahooChartCollector::new(&config).unwrap()
}

fn chart_body(closes: &[Option<f64>]) -> String {
    let timestamps: Vec<i64> = (0..closes.len() as i64).map(|i| 1_700_000_000 + i * 86_400).collect();
    serde_json::json!({
        "chart": {
            "result": [{
                "meta": { "currency": "USD" },
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_fetches_daily_closes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/v8/finance/chart/(%5E|\^)VIX$".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("range".into(), "5d".into()),
            Matcher::UrlEncoded("interval".into(), "1d".into()),
        ]))
        .match_header("user-agent", Matcher::Regex("Mozilla".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chart_body(&[Some(15.1), Some(16.0), None, Some(17.2), Some(21.5)]))
        .create_async()
        .await;

    let collector = collector_for(server.url());
    let history = collector.daily_closes("^VIX", 5).await.unwrap();

    mock.assert_async().await;
    assert_eq!(history.symbol, "^VIX");
    assert_eq!(history.closes(), vec![15.1, 16.0, 17.2, 21.5]);
}

#[tokio::test]
async fn test_not_found_is_empty_history() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v8/finance/chart/BOGUS")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#)
        .create_async()
        .await;

    let history = collector_for(server.url())
        .daily_closes("BOGUS", 5)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_empty_result_is_empty_history() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/TNX")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"chart":{"result":[],"error":null}}"#)
        .create_async()
        .await;

    let history = collector_for(server.url())
        .daily_closes("TNX", 5)
        .await
        .unwrap();

    assert!(history.is_empty());
}

#[tokio::test]
async fn test_server_error_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/DXY")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = collector_for(server.url())
        .daily_closes("DXY", 5)
        .await
        .unwrap_err();

    assert!(matches!(err, AdapterError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/OIL")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let err = collector_for(server.url())
        .daily_closes("OIL", 5)
        .await
        .unwrap_err();

    assert!(matches!(err, AdapterError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_fatal() {
    // Nothing listens on the discard port
    let err = collector_for("http://127.0.0.1:9".to_string())
        .daily_closes("VIX", 5)
        .await
        .unwrap_err();

    assert!(matches!(err, AdapterError::Http { .. }));
}

#[test]
fn test_rejects_invalid_base_url() {
    let config = QuoteSourceConfig {
        base_url: "not a url".to_string(),
        ..QuoteSourceConfig::default()
    };

    assert!(matches!(
        YahooChartCollector::new(&config),
        Err(AdapterError::InvalidUrl(_))
    ));
}
