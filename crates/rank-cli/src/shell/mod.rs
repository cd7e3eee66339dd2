//! Line-oriented session shell.
//!
//! Reads commands from an async line source and drives a [`Session`].
//! `analyze` does not block the prompt: each request runs on its own task
//! and reports back through a channel, and outcomes are applied in arrival
//! order so the last one to complete decides what the results show.

use std::io::Write;

use anyhow::Context;
use rank_client::AnalysisError;
use rank_core::AnalysisReport;
use rank_session::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc;

use crate::cli::OutputFormat;
use crate::output::{render_message, render_results, render_summary};

mod parse;

pub use parse::{ParseError, ShellCommand, parse_line};

/// Line that ends an `edit` block.
const EDIT_TERMINATOR: &str = ".";

type Outcome = Result<AnalysisReport, AnalysisError>;

#[derive(Clone, Debug)]
pub struct ShellOptions {
    /// Strategy used by `analyze` when the line gives none.
    pub default_strategy: Option<String>,
    pub format: OutputFormat,
    /// Print the prompt and the banner.
    pub interactive: bool,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input, then return the session.
///
/// On end of input, analyses still in flight are awaited and applied before
/// returning. `quit` leaves immediately.
///
/// # Errors
///
/// Only when reading from `input` fails. Command errors are shown on the
/// message line and the shell keeps going.
pub async fn run<R>(input: R, mut session: Session, options: &ShellOptions) -> anyhow::Result<Session>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    if options.interactive {
        println!("taskrank session. Type 'help' for commands.");
    }
    prompt(options);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read session input")? else {
                    break;
                };
                let flow = handle_line(&line, &mut session, &mut lines, &tx, options).await?;
                if matches!(flow, Flow::Quit) {
                    return Ok(session);
                }
                prompt(options);
            }
            Some(outcome) = rx.recv() => {
                apply_outcome(&mut session, outcome, options)?;
                prompt(options);
            }
        }
    }

    while session.in_flight() > 0 {
        let Some(outcome) = rx.recv().await else {
            break;
        };
        apply_outcome(&mut session, outcome, options)?;
    }
    Ok(session)
}

async fn handle_line<R>(
    line: &str,
    session: &mut Session,
    lines: &mut Lines<R>,
    tx: &mpsc::UnboundedSender<Outcome>,
    options: &ShellOptions,
) -> anyhow::Result<Flow>
where
    R: AsyncBufRead + Unpin,
{
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(Flow::Continue),
        Err(error) => {
            println!("{error}");
            return Ok(Flow::Continue);
        }
    };

    match command {
        ShellCommand::Add(args) => {
            if let Ok(record) = session.add_task(args.into_fields()) {
                tracing::info!(id = %record.id, "task added");
            }
            show_message(session);
        }
        ShellCommand::Clear => {
            session.clear();
            show_message(session);
        }
        ShellCommand::Preview => {
            if session.preview().is_empty() {
                println!("(empty)");
            } else {
                println!("{}", session.preview());
            }
        }
        ShellCommand::Load { path } => match std::fs::read_to_string(&path) {
            Ok(text) => {
                session.set_preview(text);
                println!("Loaded {}", path.display());
            }
            Err(error) => println!("failed to read {}: {error}", path.display()),
        },
        ShellCommand::Save { path } => match std::fs::write(&path, session.preview()) {
            Ok(()) => println!("Saved {}", path.display()),
            Err(error) => println!("failed to write {}: {error}", path.display()),
        },
        ShellCommand::Edit => {
            if options.interactive {
                println!("Enter JSON, then a line with only '{EDIT_TERMINATOR}'.");
            }
            let text = read_block(lines).await?;
            session.set_preview(text);
        }
        ShellCommand::Analyze { strategy } => {
            let strategy = strategy.or_else(|| options.default_strategy.clone());
            start_analysis(session, strategy.as_deref(), tx);
            show_message(session);
        }
        ShellCommand::Results => show_results(session, options)?,
        ShellCommand::Quit => {
            if session.in_flight() > 0 {
                tracing::warn!(in_flight = session.in_flight(), "leaving with analyses outstanding");
            }
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Pre-flight the preview and, if it passes, send it on a background task.
fn start_analysis(
    session: &mut Session,
    strategy: Option<&str>,
    tx: &mpsc::UnboundedSender<Outcome>,
) {
    let Ok(request) = session.begin_analysis(strategy) else {
        return;
    };
    let client = session.client().clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = client.send_analysis(&request).await;
        // The receiver only goes away once the shell has returned.
        let _ = tx.send(outcome);
    });
}

fn apply_outcome(
    session: &mut Session,
    outcome: Outcome,
    options: &ShellOptions,
) -> anyhow::Result<()> {
    let succeeded = session.finish_analysis(outcome).is_ok();
    show_message(session);
    if succeeded {
        show_results(session, options)?;
    }
    Ok(())
}

async fn read_block<R>(lines: &mut Lines<R>) -> anyhow::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut block = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read session input")?
    {
        if line.trim_end() == EDIT_TERMINATOR {
            break;
        }
        block.push(line);
    }
    Ok(block.join("\n"))
}

fn show_message(session: &Session) {
    if let Some(message) = session.message() {
        println!("{}", render_message(message));
    }
}

fn show_results(session: &Session, options: &ShellOptions) -> anyhow::Result<()> {
    println!("{}", render_results(session.results(), options.format)?);
    if options.format == OutputFormat::Table {
        if let Some(text) = session.summary().and_then(render_summary) {
            println!("{text}");
        }
    }
    Ok(())
}

fn prompt(options: &ShellOptions) {
    if options.interactive {
        print!("trk> ");
        let _ = std::io::stdout().flush();
    }
}
