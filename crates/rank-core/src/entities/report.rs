use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::scored::{ScoredTask, TaskFlags};
use crate::lenient_serde;

/// Success body of the analyze endpoint.
///
/// Decoded from any JSON value: a body that is not an object, or a field of
/// the wrong type, yields the default for that part instead of an error, so
/// one malformed element never hides the rest of the scored tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct AnalysisReport {
    /// Scored tasks in the order the service chose.
    pub tasks: Vec<ScoredTask>,
    /// Strategy the service actually applied (it may substitute its default
    /// for names it does not recognize).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// Dependency cycles detected across the submitted tasks, as ID paths.
    pub dependency_cycles: Vec<Vec<String>>,
}

impl From<Value> for AnalysisReport {
    fn from(body: Value) -> Self {
        let mut fields = into_fields(body);
        Self {
            tasks: lenient_serde::value_to_object_list(fields.remove("tasks")),
            strategy: fields.get("strategy").and_then(lenient_serde::value_to_text),
            dependency_cycles: lenient_serde::value_to_nested_text_list(
                fields.get("dependency_cycles"),
            ),
        }
    }
}

/// One entry of the suggest endpoint's `top_3` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_serde::opt_f64")]
    pub score: Option<f64>,
    /// Plain-language reason the task was suggested.
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub why: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_serde::opt_shape",
        skip_serializing_if = "Option::is_none"
    )]
    pub flags: Option<TaskFlags>,
}

/// Success body of the suggest endpoint, decoded as leniently as
/// [`AnalysisReport`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct SuggestionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    pub top_3: Vec<Suggestion>,
}

impl From<Value> for SuggestionReport {
    fn from(body: Value) -> Self {
        let mut fields = into_fields(body);
        Self {
            strategy: fields.get("strategy").and_then(lenient_serde::value_to_text),
            top_3: lenient_serde::value_to_object_list(fields.remove("top_3")),
        }
    }
}

fn into_fields(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(fields) => fields,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_defaults_when_fields_missing() {
        let report: AnalysisReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, AnalysisReport::default());
    }

    #[test]
    fn report_reads_cycles_and_strategy() {
        let report: AnalysisReport = serde_json::from_str(
            r#"{"tasks":[{"title":"a","score":10}],"strategy":"high_impact","dependency_cycles":[["a","b","a"]]}"#,
        )
        .unwrap();
        assert_eq!(report.tasks.len(), 1);
        assert_eq!(report.strategy.as_deref(), Some("high_impact"));
        assert_eq!(
            report.dependency_cycles,
            vec![vec!["a".to_string(), "b".to_string(), "a".to_string()]]
        );
    }

    #[test]
    fn null_tasks_and_cycles_are_empty() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"tasks":null,"dependency_cycles":null}"#).unwrap();
        assert_eq!(report, AnalysisReport::default());
    }

    #[test]
    fn bad_task_elements_become_untitled_tasks_in_place() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"tasks":[{"title":"A","score":90},null,7]}"#).unwrap();
        assert_eq!(report.tasks.len(), 3);
        assert_eq!(report.tasks[0].title.as_deref(), Some("A"));
        assert_eq!(report.tasks[1], ScoredTask::default());
        assert_eq!(report.tasks[2], ScoredTask::default());
    }

    #[test]
    fn broken_cycles_do_not_discard_tasks() {
        let report: AnalysisReport = serde_json::from_str(
            r#"{"tasks":[{"title":"A","score":90}],"dependency_cycles":"none","strategy":7}"#,
        )
        .unwrap();
        assert_eq!(report.tasks.len(), 1);
        assert!(report.dependency_cycles.is_empty());
        assert_eq!(report.strategy.as_deref(), Some("7"));
    }

    #[test]
    fn non_object_body_is_an_empty_report() {
        for body in ["[]", "\"ok\"", "null", "42"] {
            let report: AnalysisReport = serde_json::from_str(body).unwrap();
            assert_eq!(report, AnalysisReport::default(), "body {body}");
        }
    }

    #[test]
    fn bad_flags_do_not_sink_the_task() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"tasks":[{"title":"A","flags":"yes"}]}"#).unwrap();
        assert_eq!(report.tasks[0].title.as_deref(), Some("A"));
        assert!(report.tasks[0].flags.is_none());
    }

    #[test]
    fn suggestion_report_tolerates_null_and_bad_entries() {
        let report: SuggestionReport =
            serde_json::from_str(r#"{"top_3":[null,{"title":"T2","why":"quick"}]}"#).unwrap();
        assert_eq!(report.top_3.len(), 2);
        assert_eq!(report.top_3[0], Suggestion::default());
        assert_eq!(report.top_3[1].why.as_deref(), Some("quick"));

        let report: SuggestionReport = serde_json::from_str(r#"{"top_3":null}"#).unwrap();
        assert!(report.top_3.is_empty());
    }

    #[test]
    fn suggestion_report_reads_top_three() {
        let report: SuggestionReport = serde_json::from_str(
            r#"{"strategy":"smart_balance","top_3":[{"id":"1","title":"T1","score":120,"why":"overdue","flags":{"overdue":true,"has_dependencies":false}}]}"#,
        )
        .unwrap();
        assert_eq!(report.top_3.len(), 1);
        let first = &report.top_3[0];
        assert_eq!(first.why.as_deref(), Some("overdue"));
        assert_eq!(first.flags.map(|f| f.overdue), Some(true));
    }
}
