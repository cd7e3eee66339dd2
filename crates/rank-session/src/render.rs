//! Result cards: one classified, display-ready unit per scored task.

use rank_core::{ScoredTask, TaskFlags, Tier};
use serde::Serialize;

/// Shown in place of a missing title.
pub const NO_TITLE_PLACEHOLDER: &str = "(no title)";

/// Shown in place of a missing due date, importance, or estimate.
pub const MISSING_PLACEHOLDER: &str = "—";

/// Shown when the service returned no tasks at all.
pub const NO_RESULTS_TEXT: &str = "No tasks returned";

/// A scored task prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCard {
    pub tier: Tier,
    pub title: String,
    pub due_date: String,
    pub importance: String,
    pub estimated_hours: String,
    pub score: f64,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<TaskFlags>,
}

impl TaskCard {
    #[must_use]
    pub fn from_task(task: &ScoredTask) -> Self {
        let score = task.score_or_zero();
        Self {
            tier: Tier::classify(score),
            title: task
                .title
                .clone()
                .unwrap_or_else(|| NO_TITLE_PLACEHOLDER.to_string()),
            due_date: placeholder_or(task.due_date.clone()),
            importance: placeholder_or(task.importance.map(|v| v.to_string())),
            estimated_hours: placeholder_or(task.estimated_hours.map(|v| v.to_string())),
            score,
            explanation: task.explanation.clone().unwrap_or_default(),
            flags: task.flags,
        }
    }

    /// The `Due: … | Importance: … | Est hrs: … | Score: …` line.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!(
            "Due: {} | Importance: {} | Est hrs: {} | Score: {}",
            self.due_date, self.importance, self.estimated_hours, self.score
        )
    }
}

fn placeholder_or(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string())
}

/// What the results region currently shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "cards", rename_all = "snake_case")]
pub enum ResultsRegion {
    /// Nothing rendered yet, or cleared.
    #[default]
    Empty,
    /// An analysis succeeded but returned no tasks.
    NoResults,
    /// One card per returned task, in service order.
    Cards(Vec<TaskCard>),
}

impl ResultsRegion {
    #[must_use]
    pub fn cards(&self) -> &[TaskCard] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty | Self::NoResults => &[],
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Build the results region for `tasks`, replacing whatever was shown.
///
/// Order is preserved exactly; the client never re-sorts.
#[must_use]
pub fn render(tasks: &[ScoredTask]) -> ResultsRegion {
    if tasks.is_empty() {
        return ResultsRegion::NoResults;
    }
    ResultsRegion::Cards(tasks.iter().map(TaskCard::from_task).collect())
}
