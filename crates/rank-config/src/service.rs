//! Scoring service endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_analyze_path() -> String {
    "/api/tasks/analyze/".to_string()
}

fn default_suggest_path() -> String {
    "/api/tasks/suggest/".to_string()
}

fn default_user_agent() -> String {
    "taskrank/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Scheme, host, and port of the scoring service (no trailing path).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the analyze endpoint.
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,

    /// Path of the top-3 suggestion endpoint.
    #[serde(default = "default_suggest_path")]
    pub suggest_path: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analyze_path: default_analyze_path(),
            suggest_path: default_suggest_path(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServiceConfig {
    /// Check that URLs are usable before any request is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not an
    /// `http(s)://` URL or an endpoint path does not start with `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        let has_scheme = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme {
            return Err(ConfigError::InvalidValue {
                field: "service.base_url".into(),
                reason: format!("expected an http:// or https:// URL, got '{}'", self.base_url),
            });
        }

        for (field, path) in [
            ("service.analyze_path", &self.analyze_path),
            ("service.suggest_path", &self.suggest_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("path must start with '/', got '{path}'"),
                });
            }
        }
        Ok(())
    }

    /// Full URL of the analyze endpoint, without query string.
    #[must_use]
    pub fn analyze_url(&self) -> String {
        self.join(&self.analyze_path)
    }

    /// Full URL of the suggest endpoint, without query string.
    #[must_use]
    pub fn suggest_url(&self) -> String {
        self.join(&self.suggest_path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.analyze_url(),
            "http://127.0.0.1:8000/api/tasks/analyze/"
        );
        assert_eq!(
            config.suggest_url(),
            "http://127.0.0.1:8000/api/tasks/suggest/"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_collapsed() {
        let config = ServiceConfig {
            base_url: "https://rank.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.analyze_url(),
            "https://rank.example.com/api/tasks/analyze/"
        );
    }

    #[test]
    fn rejects_base_without_scheme() {
        let config = ServiceConfig {
            base_url: "127.0.0.1:8000".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("service.base_url"));
    }

    #[test]
    fn rejects_relative_path() {
        let config = ServiceConfig {
            suggest_path: "api/tasks/suggest/".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("service.suggest_path"));
    }
}
