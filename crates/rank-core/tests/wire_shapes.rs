//! Wire-shape tests: what the client sends and what it accepts back.

use pretty_assertions::assert_eq;
use rank_core::ids::generate_task_id;
use rank_core::{AnalysisReport, TaskFields, TaskRecord, Tier};
use serde_json::json;

fn record(title: &str, deps: &str) -> TaskRecord {
    TaskFields {
        title: title.into(),
        due_date: "2025-06-30".into(),
        importance: "8".into(),
        estimated_hours: "3".into(),
        dependencies: deps.into(),
    }
    .validate()
    .expect("valid fields")
    .into_record(generate_task_id())
}

#[test]
fn records_serialize_to_service_task_objects() {
    let tasks = vec![record("Draft", ""), record("Review", "draft-id")];
    let value = serde_json::to_value(&tasks).unwrap();

    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 2);
    for task in array {
        let object = task.as_object().expect("object");
        for key in [
            "id",
            "title",
            "due_date",
            "importance",
            "estimated_hours",
            "dependencies",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }
    assert_eq!(array[1]["dependencies"], json!(["draft-id"]));
    assert_eq!(array[0]["importance"], json!(8));
}

#[test]
fn records_read_back_from_preview_text() {
    let tasks = vec![record("Draft", "x, y")];
    let text = serde_json::to_string_pretty(&tasks).unwrap();
    let parsed: Vec<TaskRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, tasks);
}

#[test]
fn service_body_classifies_into_tiers() {
    let body = r#"{"tasks":[{"title":"X","score":200},{"title":"Y","score":50},{"title":"Z"}]}"#;
    let report: AnalysisReport = serde_json::from_str(body).unwrap();
    let tiers: Vec<Tier> = report.tasks.iter().map(rank_core::ScoredTask::tier).collect();
    assert_eq!(tiers, vec![Tier::High, Tier::Med, Tier::Low]);
}
