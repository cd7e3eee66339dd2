//! Suggest endpoint: the service's top three tasks with a reason each.

use rank_core::{Suggestion, SuggestionReport};

use crate::{AnalysisError, AnalysisRequest, ScoringClient};

impl ScoringClient {
    /// Send a prepared request to the suggest endpoint.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`ScoringClient::send_analysis`].
    pub async fn send_suggestion(
        &self,
        request: &AnalysisRequest,
    ) -> Result<SuggestionReport, AnalysisError> {
        self.post(&self.service.suggest_url(), request).await
    }

    /// Validate `raw_text`, send it, and return up to three suggestions.
    ///
    /// # Errors
    ///
    /// Any pre-flight error, transport error, or service error.
    pub async fn suggest(
        &self,
        raw_text: &str,
        strategy: Option<&str>,
    ) -> Result<Vec<Suggestion>, AnalysisError> {
        let request = self.prepare(raw_text, strategy)?;
        Ok(self.send_suggestion(&request).await?.top_3)
    }
}
