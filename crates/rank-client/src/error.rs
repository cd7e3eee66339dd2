//! Analysis error types.

use thiserror::Error;

/// Errors that can occur while preparing or sending a scoring request.
///
/// The first three variants are pre-flight failures: they are raised before
/// any network traffic and mean the preview text needs fixing.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input text was empty or whitespace-only.
    #[error("No tasks provided")]
    EmptyInput,

    /// The input text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The input is valid JSON but not an array of task objects.
    #[error("Please provide a JSON array of tasks.")]
    InvalidShape,

    /// The service answered with a failure status or an unreadable body.
    #[error("{message}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body text, the status line, or the body parse failure.
        message: String,
    },

    /// HTTP transport error (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AnalysisError {
    /// Whether this failure was detected locally, before any request.
    #[must_use]
    pub const fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::InvalidJson(_) | Self::InvalidShape
        )
    }
}
