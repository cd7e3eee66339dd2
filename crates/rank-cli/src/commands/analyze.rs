use rank_client::ScoringClient;
use rank_config::RankConfig;
use rank_session::AnalysisSummary;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::AnalyzeArgs;
use crate::input::read_raw_input;
use crate::output::{render_results, render_summary};
use crate::progress::while_waiting;

/// Handle `trk analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &RankConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = read_raw_input(args.input.as_deref())?;
    let client = ScoringClient::new(config);

    let report = while_waiting(
        "Analyzing...",
        "analysis failed",
        client.analyze_report(&raw, args.strategy.as_deref()),
    )
    .await?;

    let region = rank_session::render(&report.tasks);
    println!("{}", render_results(&region, flags.format)?);

    if flags.format == OutputFormat::Table && !flags.quiet {
        let summary = AnalysisSummary {
            strategy: report.strategy,
            dependency_cycles: report.dependency_cycles,
        };
        if let Some(text) = render_summary(&summary) {
            println!("\n{text}");
        }
    }
    Ok(())
}
