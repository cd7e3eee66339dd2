//! # rank-config
//!
//! Layered configuration loading for taskrank using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKRANK_*` prefix, `__` as separator)
//! 2. Project-level `.taskrank/config.toml`
//! 3. User-level `~/.config/taskrank/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKRANK_SERVICE__BASE_URL` -> `service.base_url`,
//! `TASKRANK_GENERAL__DEFAULT_STRATEGY` -> `general.default_strategy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rank_config::RankConfig;
//!
//! let config = RankConfig::load().expect("config");
//! println!("scoring service: {}", config.service.analyze_url());
//! ```

mod error;
mod general;
mod service;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level config file, relative to the project directory.
const PROJECT_CONFIG: &str = ".taskrank/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RankConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RankConfig {
    /// Load configuration from all sources, reading the project file
    /// relative to the current directory.
    ///
    /// `.env` files are not read here; the binary loads them before calling.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// service section fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.service.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain rooted at the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain with `.taskrank/config.toml` looked
    /// up under `project_dir`.
    #[must_use]
    pub fn figment_for(project_dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_dir.join(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKRANK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskrank").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = RankConfig::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.general.default_strategy, "smart_balance");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = RankConfig::from_figment(&RankConfig::figment())
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.service.analyze_path, "/api/tasks/analyze/");
            Ok(())
        });
    }

    #[test]
    fn project_file_is_found_under_given_dir() {
        figment::Jail::expect_with(|jail| {
            std::fs::create_dir_all("proj/.taskrank")
                .map_err(|e| figment::Error::from(e.to_string()))?;
            jail.create_file(
                "proj/.taskrank/config.toml",
                "[general]\ndefault_strategy = \"high_impact\"\n",
            )?;
            let config = RankConfig::from_figment(&RankConfig::figment_for(Path::new("proj")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.general.default_strategy, "high_impact");
            Ok(())
        });
    }
}
