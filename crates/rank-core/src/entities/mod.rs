//! Entity structs for taskrank.
//!
//! [`TaskRecord`] is what the user builds locally; [`ScoredTask`],
//! [`AnalysisReport`] and [`Suggestion`] are what the scoring service sends
//! back. All structs derive `Serialize` and `Deserialize` so they can travel
//! through the JSON preview and over the wire.

mod report;
mod scored;
mod task;

pub use report::{AnalysisReport, Suggestion, SuggestionReport};
pub use scored::{ScoredTask, TaskFlags};
pub use task::{DEFAULT_ESTIMATED_HOURS, DEFAULT_IMPORTANCE, TaskDraft, TaskFields, TaskRecord};
