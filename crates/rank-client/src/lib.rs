//! # rank-client
//!
//! HTTP client for the external task scoring service.
//!
//! The service is a black box: it accepts a JSON array of task objects plus a
//! `strategy` query parameter and answers with scored tasks. This crate owns
//! everything on the client side of that exchange:
//! - pre-flight validation of the raw JSON text ([`AnalysisRequest`])
//! - the single `POST` per invocation, with no retry and no client timeout
//! - interpretation of failure statuses and response bodies ([`AnalysisError`])
//!
//! Endpoints:
//! - `analyze`: every task scored, in the service's order
//! - `suggest`: the service's top three picks with a short reason each

pub mod analyze;
pub mod suggest;

mod error;
mod http;
mod request;

pub use error::AnalysisError;
pub use request::AnalysisRequest;

use rank_config::{GeneralConfig, RankConfig, ServiceConfig};
use rank_core::KNOWN_STRATEGIES;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the scoring service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    http: reqwest::Client,
    service: ServiceConfig,
    general: GeneralConfig,
}

impl ScoringClient {
    /// Create a client from loaded configuration.
    ///
    /// No request timeout is set; the transport default applies.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &RankConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(config.service.user_agent.clone())
                .build()
                .expect("reqwest client should build"),
            service: config.service.clone(),
            general: config.general.clone(),
        }
    }

    /// Validate raw text and resolve the strategy, without touching the network.
    ///
    /// A blank or missing `strategy` resolves to the configured default.
    ///
    /// # Errors
    ///
    /// Returns a pre-flight [`AnalysisError`] if the text is empty, not JSON,
    /// or not an array of objects.
    pub fn prepare(
        &self,
        raw_text: &str,
        strategy: Option<&str>,
    ) -> Result<AnalysisRequest, AnalysisError> {
        let strategy = self.general.resolve_strategy(strategy);
        if !is_known_strategy(strategy) {
            tracing::debug!(strategy, "strategy not among known names, sending as-is");
        }
        let request = AnalysisRequest::parse(raw_text, strategy)?;
        tracing::debug!(
            tasks = request.task_count(),
            strategy = request.strategy(),
            "prepared scoring request"
        );
        Ok(request)
    }

    /// POST a prepared request body to `endpoint` and decode the JSON reply.
    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        request: &AnalysisRequest,
    ) -> Result<T, AnalysisError> {
        let url = request.url_for(endpoint);
        tracing::debug!(%url, "sending scoring request");
        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request.body())
            .send()
            .await?;
        let resp = http::check_response(resp).await?;
        http::read_json(resp).await
    }
}

fn is_known_strategy(strategy: &str) -> bool {
    KNOWN_STRATEGIES.contains(&strategy)
}
