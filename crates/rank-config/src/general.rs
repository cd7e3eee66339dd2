//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_strategy() -> String {
    rank_core::DEFAULT_STRATEGY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Strategy sent when the user does not pick one.
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
        }
    }
}

impl GeneralConfig {
    /// Resolve the strategy for one request: the caller's choice when it is
    /// non-blank, otherwise the configured default, otherwise `smart_balance`.
    #[must_use]
    pub fn resolve_strategy<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| Some(self.default_strategy.trim()).filter(|s| !s.is_empty()))
            .unwrap_or(rank_core::DEFAULT_STRATEGY)
    }
}
