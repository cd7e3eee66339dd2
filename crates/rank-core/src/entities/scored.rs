use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Tier;
use crate::lenient_serde;

/// Boolean markers the scoring service attaches to each task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFlags {
    #[serde(default)]
    pub overdue: bool,
    #[serde(default)]
    pub has_dependencies: bool,
}

/// A task as returned by the scoring service.
///
/// Every field is optional and decoded leniently because the service echoes
/// whatever the user typed into the JSON preview. Fields this client does not
/// know about are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_serde::opt_i64")]
    pub importance: Option<i64>,
    #[serde(default, deserialize_with = "lenient_serde::opt_f64")]
    pub estimated_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_serde::text_list")]
    pub dependencies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_serde::opt_f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_serde::opt_text")]
    pub explanation: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_serde::opt_shape",
        skip_serializing_if = "Option::is_none"
    )]
    pub flags: Option<TaskFlags>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScoredTask {
    /// The score, treating a missing value as zero.
    #[must_use]
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    /// The display tier for this task's score.
    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::classify(self.score_or_zero())
    }
}
