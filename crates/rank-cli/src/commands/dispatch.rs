use rank_config::RankConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &RankConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, config, flags).await,
        Commands::Suggest(args) => commands::suggest::handle(&args, config, flags).await,
        Commands::Session(args) => commands::session::handle(&args, config, flags).await,
        Commands::New(args) => commands::new::handle(args, flags),
    }
}
