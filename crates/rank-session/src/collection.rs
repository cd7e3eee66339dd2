use std::collections::HashSet;

use rank_core::ids::generate_task_id;
use rank_core::{TaskFields, TaskRecord, ValidationError};

/// Ordered, append-only list of tasks built from form input.
#[derive(Debug, Default)]
pub struct TaskCollection {
    records: Vec<TaskRecord>,
    ids: HashSet<String>,
}

impl TaskCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `fields`, assign a fresh ID, and append the record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the title is blank; the collection is
    /// left untouched.
    pub fn add(&mut self, fields: &TaskFields) -> Result<TaskRecord, ValidationError> {
        self.add_with_ids(fields, generate_task_id)
    }

    /// Like [`TaskCollection::add`], drawing IDs from `next_id`.
    ///
    /// IDs already present in the collection are skipped, so `next_id` is
    /// called until it yields an unused one.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the title is blank.
    pub fn add_with_ids(
        &mut self,
        fields: &TaskFields,
        mut next_id: impl FnMut() -> String,
    ) -> Result<TaskRecord, ValidationError> {
        let draft = fields.validate()?;

        let id = loop {
            let candidate = next_id();
            if !self.ids.contains(&candidate) {
                break candidate;
            }
            tracing::debug!(id = %candidate, "task id collision, regenerating");
        };

        let record = draft.into_record(id.clone());
        self.ids.insert(id);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    #[must_use]
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
