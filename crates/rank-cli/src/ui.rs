use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminal-dependent presentation choices, decided once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// ANSI color for tier rows and the message line.
    pub color: bool,
    /// Spinner while a request is outstanding.
    pub progress: bool,
    /// Session banner and `trk>` prompt.
    pub prompt: bool,
    pub term_width: Option<usize>,
}

/// What the process is attached to.
#[derive(Clone, Copy, Debug)]
struct Terminal {
    stdout_tty: bool,
    stdin_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let terminal = Terminal {
        stdout_tty: std::io::stdout().is_terminal(),
        stdin_tty: std::io::stdin().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok()),
    };
    let _ = UI_PREFS.set(resolve(flags, terminal));
}

/// Preferences in effect; all off until [`init`] runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, terminal: Terminal) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => terminal.stdout_tty && table && !terminal.no_color,
    };

    UiPrefs {
        color,
        progress: terminal.stdout_tty && !flags.quiet && flags.format != OutputFormat::Json,
        prompt: terminal.stdin_tty && !flags.quiet,
        term_width: terminal.columns.filter(|width| *width >= 40),
    }
}
