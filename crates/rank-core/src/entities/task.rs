use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Importance used when the field does not start with an integer.
pub const DEFAULT_IMPORTANCE: i64 = 5;

/// Estimated hours used when the field does not start with a finite number.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

/// Raw task form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub due_date: String,
    pub importance: String,
    pub estimated_hours: String,
    /// Comma-separated task IDs.
    pub dependencies: String,
}

impl TaskFields {
    /// Shorthand for a form with only the title filled in.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Validate the form into a draft record.
    ///
    /// Only a missing title is an error. Malformed numbers fall back to
    /// [`DEFAULT_IMPORTANCE`] and [`DEFAULT_ESTIMATED_HOURS`] so that a typo
    /// never blocks adding a task.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleRequired`] if the title is empty or
    /// whitespace-only.
    pub fn validate(&self) -> Result<TaskDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let due_date = Some(self.due_date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(TaskDraft {
            title: title.to_string(),
            due_date,
            importance: parse_importance(&self.importance),
            estimated_hours: parse_estimated_hours(&self.estimated_hours),
            dependencies: split_dependencies(&self.dependencies),
        })
    }
}

/// A validated task that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: Option<String>,
    pub importance: i64,
    pub estimated_hours: f64,
    pub dependencies: Vec<String>,
}

impl TaskDraft {
    /// Attach an ID to produce a storable record.
    #[must_use]
    pub fn into_record(self, id: impl Into<String>) -> TaskRecord {
        TaskRecord {
            id: id.into(),
            title: self.title,
            due_date: self.due_date,
            importance: self.importance,
            estimated_hours: self.estimated_hours,
            dependencies: self.dependencies,
        }
    }
}

/// A task in the local collection.
///
/// Serializes in the field order the scoring service expects, with
/// `due_date: null` when no date was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub due_date: Option<String>,
    pub importance: i64,
    pub estimated_hours: f64,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Importance from the leading integer of the field: `"7.9"` is 7 and
/// `"8abc"` is 8.
fn parse_importance(raw: &str) -> i64 {
    leading_integer(raw)
        .and_then(|digits| digits.parse::<i64>().ok())
        .unwrap_or(DEFAULT_IMPORTANCE)
}

/// Hours from the leading decimal number of the field: `"2.5h"` is 2.5.
fn parse_estimated_hours(raw: &str) -> f64 {
    leading_decimal(raw)
        .and_then(|number| number.parse::<f64>().ok())
        .filter(|hours| hours.is_finite())
        .unwrap_or(DEFAULT_ESTIMATED_HOURS)
}

/// Optional sign followed by at least one digit, after leading whitespace.
fn leading_integer(raw: &str) -> Option<&str> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = start + digit_run(&bytes[start..]);
    (end > start).then(|| &text[..end])
}

/// Optional sign, digits with an optional fraction, and an optional
/// exponent, after leading whitespace. At least one mantissa digit is needed.
fn leading_decimal(raw: &str) -> Option<&str> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = digit_run(&bytes[end..]);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(&bytes[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digit_run(&bytes[end + 1 + sign..]);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    Some(&text[..end])
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Split a comma-separated dependency field into trimmed IDs.
///
/// A blank field yields an empty list, and empty segments left by stray
/// commas are dropped.
#[must_use]
pub fn split_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(str::to_string)
        .collect()
}
