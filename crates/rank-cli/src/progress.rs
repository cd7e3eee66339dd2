use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Await `request` behind a spinner labelled `message`.
///
/// The spinner is cleared on success and left showing `failure` on error.
/// Without progress output this is a plain await.
pub async fn while_waiting<T, E, F>(message: &str, failure: &str, request: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let Some(bar) = spinner(message) else {
        return request.await;
    };

    let outcome = request.await;
    match &outcome {
        Ok(_) => bar.finish_and_clear(),
        Err(_) => bar.abandon_with_message(failure.to_string()),
    }
    outcome
}

fn spinner(message: &str) -> Option<ProgressBar> {
    if !ui::prefs().progress {
        return None;
    }

    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    Some(bar)
}
