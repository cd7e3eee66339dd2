use rank_client::ScoringClient;
use rank_config::RankConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::input::read_raw_input;
use crate::output::render_suggestions;
use crate::progress::while_waiting;

/// Handle `trk suggest`.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &RankConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = read_raw_input(args.input.as_deref())?;
    let client = ScoringClient::new(config);

    let suggestions = while_waiting(
        "Asking for suggestions...",
        "suggest failed",
        client.suggest(&raw, args.strategy.as_deref()),
    )
    .await?;

    println!("{}", render_suggestions(&suggestions, flags.format)?);
    Ok(())
}
