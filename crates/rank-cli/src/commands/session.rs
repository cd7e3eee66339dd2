use anyhow::Context;
use rank_client::ScoringClient;
use rank_config::RankConfig;
use rank_session::Session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionArgs;
use crate::{shell, ui};

/// Handle `trk session`: run the interactive shell on stdin.
pub async fn handle(
    args: &SessionArgs,
    config: &RankConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = Session::new(ScoringClient::new(config));

    if let Some(path) = &args.load {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        session.set_preview(text);
    }

    let options = shell::ShellOptions {
        default_strategy: args.strategy.clone(),
        format: flags.format,
        interactive: ui::prefs().prompt,
    };
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let session = shell::run(stdin, session, &options).await?;
    tracing::debug!(tasks = session.collection().len(), "session ended");
    Ok(())
}
