use std::path::PathBuf;

use clap::{Args, Subcommand};
use rank_core::KNOWN_STRATEGIES;

use crate::cli::task_args::TaskArgs;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Score a JSON array of tasks and print the result cards.
    Analyze(AnalyzeArgs),
    /// Ask the service for its top three tasks.
    Suggest(AnalyzeArgs),
    /// Build one task record from form fields and print it as JSON.
    New(TaskArgs),
    /// Interactive session: add tasks, edit the JSON, analyze.
    Session(SessionArgs),
}

/// Input selection shared by `analyze` and `suggest`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// File containing the JSON task array (reads stdin when omitted or `-`)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    #[arg(long, short = 's', help = strategy_help())]
    pub strategy: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SessionArgs {
    /// Strategy used by `analyze` when none is given in the shell
    #[arg(long, short = 's', long_help = strategy_help())]
    pub strategy: Option<String>,

    /// Seed the JSON preview from a file
    #[arg(long)]
    pub load: Option<PathBuf>,
}

/// `--strategy` help listing the names the service is known to accept.
///
/// Any other name is still forwarded unchanged.
#[must_use]
pub fn strategy_help() -> String {
    format!(
        "Scoring strategy, sent as-is [known: {}]",
        KNOWN_STRATEGIES.join(", ")
    )
}
