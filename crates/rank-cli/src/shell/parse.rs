use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::cli::root_commands::strategy_help;
use crate::cli::task_args::TaskArgs;

/// One line typed at the session prompt.
#[derive(Debug, Parser)]
#[command(
    name = "trk",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ShellCommand {
    /// Add a task to the local list
    Add(TaskArgs),
    /// Drop every task, the JSON preview, and the results
    Clear,
    /// Show the JSON that `analyze` will send
    Preview,
    /// Replace the JSON preview with a file's contents
    Load { path: PathBuf },
    /// Write the JSON preview to a file
    Save { path: PathBuf },
    /// Type replacement JSON; end with a line holding only `.`
    Edit,
    /// Send the JSON preview for scoring
    Analyze {
        #[arg(long, short = 's', help = strategy_help())]
        strategy: Option<String>,
    },
    /// Show the current result cards
    Results,
    /// Leave the session
    #[command(visible_alias = "exit")]
    Quit,
}

/// Parse one shell line. `Ok(None)` means the line was blank.
///
/// # Errors
///
/// Returns the tokenizer error for unbalanced quotes, or clap's error (which
/// also carries the text for `help`).
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let parsed = ShellLine::try_parse_from(tokens).map_err(ParseError::Clap)?;
    Ok(Some(parsed.command))
}

/// Why a shell line could not be turned into a command.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    /// Unknown command, bad flags, or a `help` request; shown as clap renders it.
    #[error("{}", .0.render())]
    Clap(clap::Error),
}

/// Split a line into words, honouring single quotes, double quotes, and
/// backslash escapes outside single quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(ch);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(ParseError::UnterminatedQuote(q));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
