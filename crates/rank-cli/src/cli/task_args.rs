use clap::Args;
use rank_core::TaskFields;

/// Task form fields, shared by `trk new` and the session shell's `add`.
///
/// Every field is taken as raw text; defaults and validation happen in
/// [`TaskFields::validate`], so malformed numbers never fail parsing here.
#[derive(Clone, Debug, Default, Args)]
pub struct TaskArgs {
    /// Task title (required, must not be blank)
    #[arg(long, short = 't')]
    pub title: String,

    /// Due date, e.g. 2025-03-01
    #[arg(long, short = 'd', default_value = "")]
    pub due_date: String,

    /// Importance, an integer (default 5)
    #[arg(long, short = 'i', default_value = "", allow_hyphen_values = true)]
    pub importance: String,

    /// Estimated hours (default 1)
    #[arg(long, short = 'e', visible_alias = "hours", default_value = "", allow_hyphen_values = true)]
    pub estimated_hours: String,

    /// Comma-separated IDs this task depends on
    #[arg(long, visible_alias = "deps", default_value = "")]
    pub dependencies: String,
}

impl TaskArgs {
    #[must_use]
    pub fn into_fields(self) -> TaskFields {
        TaskFields {
            title: self.title,
            due_date: self.due_date,
            importance: self.importance,
            estimated_hours: self.estimated_hours,
            dependencies: self.dependencies,
        }
    }
}
