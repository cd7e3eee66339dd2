//! Analyze endpoint: score every submitted task.

use rank_core::{AnalysisReport, ScoredTask};

use crate::{AnalysisError, AnalysisRequest, ScoringClient};

impl ScoringClient {
    /// Send a prepared request to the analyze endpoint.
    ///
    /// Exactly one attempt is made.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] on transport failure and
    /// [`AnalysisError::Service`] on a failure status or unreadable body.
    pub async fn send_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, AnalysisError> {
        let report: AnalysisReport = self.post(&self.service.analyze_url(), request).await?;
        tracing::debug!(
            scored = report.tasks.len(),
            cycles = report.dependency_cycles.len(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Validate `raw_text`, send it, and return the full report.
    ///
    /// # Errors
    ///
    /// Any pre-flight error from [`ScoringClient::prepare`], or any error
    /// from [`ScoringClient::send_analysis`].
    pub async fn analyze_report(
        &self,
        raw_text: &str,
        strategy: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let request = self.prepare(raw_text, strategy)?;
        self.send_analysis(&request).await
    }

    /// Validate `raw_text`, send it, and return the scored tasks in the
    /// order the service chose. A missing `tasks` field yields an empty list.
    ///
    /// # Errors
    ///
    /// Same as [`ScoringClient::analyze_report`].
    pub async fn analyze(
        &self,
        raw_text: &str,
        strategy: Option<&str>,
    ) -> Result<Vec<ScoredTask>, AnalysisError> {
        Ok(self.analyze_report(raw_text, strategy).await?.tasks)
    }
}
