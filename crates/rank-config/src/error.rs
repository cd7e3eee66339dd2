//! Errors raised while loading or validating taskrank configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or env var could not be merged or deserialized.
    #[error("failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A field parsed but its value is unusable, e.g. a base URL without a scheme.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
