use rank_client::{AnalysisError, AnalysisRequest, ScoringClient};
use rank_core::{AnalysisReport, TaskFields, TaskRecord, ValidationError};
use serde::Serialize;

use crate::collection::TaskCollection;
use crate::message::Message;
use crate::preview::render_preview;
use crate::render::{ResultsRegion, render};

/// Extra context from the last successful analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Strategy the service reports having applied.
    pub strategy: Option<String>,
    /// Dependency cycles the service found, as ID paths.
    pub dependency_cycles: Vec<Vec<String>>,
}

/// One user's session: collection, preview text, message line, results.
///
/// Every field is owned here and only mutated through the handler methods,
/// so a single controller drives all state changes.
#[derive(Debug)]
pub struct Session {
    client: ScoringClient,
    collection: TaskCollection,
    preview: String,
    message: Option<Message>,
    results: ResultsRegion,
    summary: Option<AnalysisSummary>,
    in_flight: usize,
}

impl Session {
    #[must_use]
    pub fn new(client: ScoringClient) -> Self {
        Self {
            client,
            collection: TaskCollection::new(),
            preview: String::new(),
            message: None,
            results: ResultsRegion::Empty,
            summary: None,
            in_flight: 0,
        }
    }

    // ── Handlers ───────────────────────────────────────────────────

    /// Add a task from form input and refresh the preview.
    ///
    /// The fields are consumed, so the next add starts from a blank form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the title is blank. Only the message
    /// line changes in that case.
    pub fn add_task(&mut self, fields: TaskFields) -> Result<TaskRecord, ValidationError> {
        match self.collection.add(&fields) {
            Ok(record) => {
                tracing::debug!(id = %record.id, total = self.collection.len(), "task added");
                self.preview = render_preview(self.collection.records());
                self.message = Some(Message::success("Task added to local list"));
                Ok(record)
            }
            Err(error) => {
                self.message = Some(Message::error(capitalize(&error.to_string())));
                Err(error)
            }
        }
    }

    /// Reset collection, preview, and results.
    pub fn clear(&mut self) {
        self.collection.clear();
        self.preview.clear();
        self.results = ResultsRegion::Empty;
        self.summary = None;
        self.message = Some(Message::success("Cleared"));
        tracing::debug!("session cleared");
    }

    /// Replace the preview text with a hand edit.
    ///
    /// The collection is not touched; the edited text is what the next
    /// analysis sends.
    pub fn set_preview(&mut self, text: impl Into<String>) {
        self.preview = text.into();
    }

    /// Validate the preview text and mark an analysis as started.
    ///
    /// On success the returned request should be sent with
    /// [`ScoringClient::send_analysis`] and the outcome passed to
    /// [`Session::finish_analysis`].
    ///
    /// # Errors
    ///
    /// Returns the pre-flight [`AnalysisError`] and shows it on the message
    /// line. Nothing else changes and no request should be sent.
    pub fn begin_analysis(
        &mut self,
        strategy: Option<&str>,
    ) -> Result<AnalysisRequest, AnalysisError> {
        match self.client.prepare(&self.preview, strategy) {
            Ok(request) => {
                self.in_flight += 1;
                self.message = Some(Message::success("Analyzing..."));
                Ok(request)
            }
            Err(error) => {
                self.message = Some(Message::error(error.to_string()));
                Err(error)
            }
        }
    }

    /// Apply the outcome of a request started with [`Session::begin_analysis`].
    ///
    /// Outcomes are applied in the order they arrive, so with several
    /// requests outstanding the last one to complete decides what is shown.
    ///
    /// # Errors
    ///
    /// Passes a failed outcome back after showing `Error: …` on the message
    /// line. The previous results stay visible.
    pub fn finish_analysis(
        &mut self,
        outcome: Result<AnalysisReport, AnalysisError>,
    ) -> Result<&ResultsRegion, AnalysisError> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(report) => {
                self.results = render(&report.tasks);
                self.summary = Some(AnalysisSummary {
                    strategy: report.strategy,
                    dependency_cycles: report.dependency_cycles,
                });
                self.message = Some(Message::success("Analysis complete"));
                Ok(&self.results)
            }
            Err(error) => {
                self.message = Some(Message::error(format!("Error: {error}")));
                Err(error)
            }
        }
    }

    /// Pre-flight, send, and apply one analysis.
    ///
    /// # Errors
    ///
    /// Any pre-flight, transport, or service error; the message line shows it.
    pub async fn analyze(
        &mut self,
        strategy: Option<&str>,
    ) -> Result<&ResultsRegion, AnalysisError> {
        let request = self.begin_analysis(strategy)?;
        let outcome = self.client.send_analysis(&request).await;
        self.finish_analysis(outcome)
    }

    // ── State ──────────────────────────────────────────────────────

    #[must_use]
    pub const fn client(&self) -> &ScoringClient {
        &self.client
    }

    #[must_use]
    pub const fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub const fn results(&self) -> &ResultsRegion {
        &self.results
    }

    #[must_use]
    pub const fn summary(&self) -> Option<&AnalysisSummary> {
        self.summary.as_ref()
    }

    /// Analyses started but not yet finished.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
