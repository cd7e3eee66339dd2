//! End-to-end tests for the analyze and suggest endpoints against a fake
//! scoring service.

mod common;

use std::io::Write;
use std::time::Duration;

use common::FakeService;
use pretty_assertions::assert_eq;
use rank_client::{AnalysisError, ScoringClient};
use rank_core::Tier;

const TWO_TASKS: &str = r#"[
  {"id": "a", "title": "Write report", "due_date": null, "importance": 8, "estimated_hours": 2, "dependencies": []},
  {"id": "b", "title": "Review", "importance": "7", "dependencies": ["a"]}
]"#;

#[tokio::test]
async fn posts_json_array_with_strategy_query() {
    let fake = FakeService::once(200, r#"{"tasks": [], "strategy": "high_impact"}"#);
    let client = ScoringClient::new(&fake.config());

    let report = client
        .analyze_report(TWO_TASKS, Some("high_impact"))
        .await
        .expect("analysis succeeds");
    assert!(report.tasks.is_empty());
    assert_eq!(report.strategy.as_deref(), Some("high_impact"));

    let seen = fake.finish();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/api/tasks/analyze/?strategy=high_impact");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let expected: serde_json::Value = serde_json::from_str(TWO_TASKS).unwrap();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn blank_strategy_sends_smart_balance() {
    let fake = FakeService::once(200, r#"{"tasks": []}"#);
    let client = ScoringClient::new(&fake.config());

    client.analyze("[]", Some("  ")).await.expect("analysis succeeds");

    let seen = fake.finish();
    assert_eq!(seen[0].url, "/api/tasks/analyze/?strategy=smart_balance");
}

#[tokio::test]
async fn returns_tasks_in_service_order() {
    let fake = FakeService::once(
        200,
        r#"{"tasks":[{"title":"X","score":200},{"title":"Y","score":50},{"title":"Z"}]}"#,
    );
    let client = ScoringClient::new(&fake.config());

    let tasks = client.analyze(TWO_TASKS, None).await.expect("analysis succeeds");
    let titles: Vec<_> = tasks.iter().filter_map(|t| t.title.as_deref()).collect();
    let tiers: Vec<_> = tasks.iter().map(rank_core::ScoredTask::tier).collect();
    assert_eq!(titles, vec!["X", "Y", "Z"]);
    assert_eq!(tiers, vec![Tier::High, Tier::Med, Tier::Low]);
    fake.finish();
}

#[tokio::test]
async fn missing_tasks_field_is_empty_list() {
    let fake = FakeService::once(200, r#"{"strategy": "smart_balance"}"#);
    let client = ScoringClient::new(&fake.config());

    let tasks = client.analyze(TWO_TASKS, None).await.expect("analysis succeeds");
    assert!(tasks.is_empty());
    fake.finish();
}

#[tokio::test]
async fn malformed_parts_of_a_success_body_keep_the_good_tasks() {
    let fake = FakeService::once(
        200,
        r#"{"tasks":[{"title":"A","score":90},null,7],"dependency_cycles":null}"#,
    );
    let client = ScoringClient::new(&fake.config());

    let report = client
        .analyze_report(TWO_TASKS, None)
        .await
        .expect("analysis succeeds");
    assert_eq!(report.tasks.len(), 3);
    assert_eq!(report.tasks[0].tier(), Tier::MedHigh);
    assert!(report.tasks[1].title.is_none());
    assert!(report.dependency_cycles.is_empty());
    fake.finish();
}

#[tokio::test]
async fn null_tasks_field_is_empty_list() {
    let fake = FakeService::once(200, r#"{"tasks": null}"#);
    let client = ScoringClient::new(&fake.config());

    let tasks = client.analyze(TWO_TASKS, None).await.expect("analysis succeeds");
    assert!(tasks.is_empty());
    fake.finish();
}

#[tokio::test]
async fn failure_status_carries_body_text() {
    let fake = FakeService::once(429, "quota exceeded");
    let client = ScoringClient::new(&fake.config());

    let err = client.analyze(TWO_TASKS, None).await.unwrap_err();
    assert!(matches!(
        &err,
        AnalysisError::Service { status: 429, message } if message == "quota exceeded"
    ));
    assert_eq!(fake.finish().len(), 1, "no retry after a failure");
}

#[tokio::test]
async fn failure_with_empty_body_uses_status_line() {
    let fake = FakeService::once(404, "");
    let client = ScoringClient::new(&fake.config());

    let err = client.analyze(TWO_TASKS, None).await.unwrap_err();
    assert_eq!(err.to_string(), "404 Not Found");
    fake.finish();
}

#[tokio::test]
async fn truncated_failure_body_uses_status_line() {
    // tiny_http always sends a complete body, so this reply is hand-written.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        common::drain_request(&mut stream);
        let _ = stream.write_all(
            b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial",
        );
    });

    let mut config = rank_config::RankConfig::default();
    config.service.base_url = format!("http://127.0.0.1:{port}");
    let err = ScoringClient::new(&config)
        .analyze(TWO_TASKS, None)
        .await
        .unwrap_err();
    assert!(matches!(
        &err,
        AnalysisError::Service { status: 502, message } if message == "502 Bad Gateway"
    ));
    server.join().expect("server thread");
}

#[tokio::test]
async fn non_json_success_body_is_service_error() {
    let fake = FakeService::once(200, "<!doctype html>");
    let client = ScoringClient::new(&fake.config());

    let err = client.analyze(TWO_TASKS, None).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Service { status: 200, .. }));
    fake.finish();
}

#[tokio::test]
async fn preflight_failures_send_nothing() {
    let fake = FakeService::start(vec![(200, "{}")], Duration::from_millis(300));
    let client = ScoringClient::new(&fake.config());

    for raw in ["", "{not json", r#"{"a":1}"#] {
        let err = client.analyze(raw, None).await.unwrap_err();
        assert!(err.is_preflight(), "{raw:?} gave {err:?}");
    }

    assert!(fake.finish().is_empty());
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .unwrap();
    let mut config = rank_config::RankConfig::default();
    config.service.base_url = format!("http://127.0.0.1:{port}");
    let client = ScoringClient::new(&config);

    let err = client.analyze("[]", None).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Http(_)));
    assert!(!err.is_preflight());
}

#[tokio::test]
async fn suggest_returns_top_three() {
    let fake = FakeService::once(
        200,
        r#"{"strategy":"smart_balance","top_3":[
            {"id":"a","title":"Write report","score":120.5,"why":"due soon","flags":{"overdue":false,"has_dependencies":false}},
            {"id":"b","title":"Review","score":40,"why":"1 unresolved dependency(ies)","flags":{"overdue":false,"has_dependencies":true}}
        ]}"#,
    );
    let client = ScoringClient::new(&fake.config());

    let suggestions = client.suggest(TWO_TASKS, Some("smart_balance")).await.unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].id.as_deref(), Some("a"));
    assert_eq!(suggestions[1].flags.map(|f| f.has_dependencies), Some(true));

    let seen = fake.finish();
    assert_eq!(seen[0].url, "/api/tasks/suggest/?strategy=smart_balance");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&seen[0].body).unwrap(),
        serde_json::from_str::<serde_json::Value>(TWO_TASKS).unwrap()
    );
}
