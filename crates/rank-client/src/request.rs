//! Pre-flight validation of the JSON preview text.
//!
//! Everything here is synchronous and side-effect free: a request that fails
//! pre-flight never reaches the network.

use serde_json::Value;

use crate::error::AnalysisError;

/// A validated scoring request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    tasks: Vec<Value>,
    strategy: String,
}

impl AnalysisRequest {
    /// Parse and validate raw preview text.
    ///
    /// The parsed array is kept as untyped JSON so hand-edited fields reach
    /// the service exactly as written.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyInput`] if `raw_text` is blank.
    /// - [`AnalysisError::InvalidJson`] if it does not parse.
    /// - [`AnalysisError::InvalidShape`] if it is not an array of objects.
    pub fn parse(raw_text: &str, strategy: impl Into<String>) -> Result<Self, AnalysisError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let value: Value = serde_json::from_str(trimmed)
            .map_err(|e| AnalysisError::InvalidJson(e.to_string()))?;

        let Value::Array(tasks) = value else {
            return Err(AnalysisError::InvalidShape);
        };
        if !tasks.iter().all(Value::is_object) {
            return Err(AnalysisError::InvalidShape);
        }

        Ok(Self {
            tasks,
            strategy: strategy.into(),
        })
    }

    /// Strategy identifier sent as the `strategy` query parameter.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Number of task objects in the body.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Request body: the parsed task array.
    #[must_use]
    pub fn body(&self) -> &[Value] {
        &self.tasks
    }

    /// Append the URL-encoded strategy query to an endpoint URL.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{endpoint}?strategy={}",
            urlencoding::encode(&self.strategy)
        )
    }
}
