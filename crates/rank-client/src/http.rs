//! Shared HTTP response helpers for the scoring endpoints.
//!
//! Centralizes the failure policy (non-success status → body text or status
//! line, unreadable success body → service error) so the endpoint modules
//! stay focused on request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::AnalysisError;

/// Check an HTTP response for a failure status.
///
/// Returns the response unchanged on success. On failure the body text
/// becomes the error message; an empty body falls back to the status line
/// (e.g. `503 Service Unavailable`).
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, AnalysisError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(error) => {
            tracing::debug!(status = status.as_u16(), %error, "failed to read failure body");
            String::new()
        }
    };
    let message = if body.trim().is_empty() {
        status.to_string()
    } else {
        body
    };
    tracing::warn!(status = status.as_u16(), %message, "scoring service returned failure");
    Err(AnalysisError::Service {
        status: status.as_u16(),
        message,
    })
}

/// Decode a successful response body as JSON.
///
/// A body that does not parse is reported as [`AnalysisError::Service`],
/// since the service broke its contract rather than the caller.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AnalysisError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| AnalysisError::Service {
        status,
        message: format!("invalid response body: {e}"),
    })
}
