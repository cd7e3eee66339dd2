use anyhow::Context;
use rank_config::RankConfig;

use crate::cli::GlobalFlags;

/// Load layered config, apply command-line overrides, and validate.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RankConfig> {
    load_dotenv()?;

    let mut config = RankConfig::load().context("failed to load taskrank configuration")?;

    if let Some(base_url) = &flags.base_url {
        config.service.base_url.clone_from(base_url);
        config
            .service
            .validate()
            .context("invalid --base-url")?;
    }

    warn_unconfigured(&config);
    tracing::debug!(
        analyze_url = %config.service.analyze_url(),
        default_strategy = %config.general.default_strategy,
        "configuration loaded"
    );
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
fn warn_unconfigured(config: &RankConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RankConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = RankConfig::default();
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.service.base_url == defaults.service.base_url
        && has_single_underscore_key(&env_keys, "TASKRANK_SERVICE_")
    {
        warnings.push(
            "Service config appears default while TASKRANK_SERVICE_* env vars exist. Use double underscores (example: TASKRANK_SERVICE__BASE_URL)."
                .to_string(),
        );
    }

    if config.general.default_strategy == defaults.general.default_strategy
        && has_single_underscore_key(&env_keys, "TASKRANK_GENERAL_")
    {
        warnings.push(
            "General config appears default while TASKRANK_GENERAL_* env vars exist. Use double underscores (example: TASKRANK_GENERAL__DEFAULT_STRATEGY)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .filter_map(|key| key.strip_prefix(prefix))
        .any(|rest| !rest.starts_with('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_on_single_underscore_service_key() {
        let warnings = collect_unconfigured_warnings(
            &RankConfig::default(),
            env(&[("TASKRANK_SERVICE_BASE_URL", "http://x")]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("TASKRANK_SERVICE__BASE_URL"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &RankConfig::default(),
            env(&[
                ("TASKRANK_SERVICE__BASE_URL", "http://127.0.0.1:8000"),
                ("TASKRANK_GENERAL__DEFAULT_STRATEGY", "smart_balance"),
            ]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn no_warning_when_value_was_applied() {
        let mut config = RankConfig::default();
        config.general.default_strategy = "fastest_wins".into();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("TASKRANK_GENERAL_DEFAULT_STRATEGY", "fastest_wins")]),
        );
        assert!(warnings.is_empty());
    }
}
