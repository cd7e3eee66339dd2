use rank_core::Suggestion;
use rank_session::{AnalysisSummary, Message, MessageKind, NO_RESULTS_TEXT, ResultsRegion, TaskCard};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Paint, TableOptions, paint, render_table};

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    }
}

/// Render a serializable value to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable value in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_key_value<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let map = match serde_json::to_value(value)? {
        Value::Object(map) => map,
        other => return Ok(value_to_cell(&other)),
    };
    let rows = map
        .into_iter()
        .map(|(key, value)| vec![key, value_to_cell(&value)])
        .collect::<Vec<_>>();
    Ok(render_table(&["field", "value"], &rows, table_options(), None))
}

/// Render the results region: one row per card in table mode, the card list
/// as JSON otherwise.
pub fn render_results(region: &ResultsRegion, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(region.cards())?),
        OutputFormat::Raw => Ok(serde_json::to_string(region.cards())?),
        OutputFormat::Table => Ok(match region {
            ResultsRegion::Empty => String::from("(no results yet)"),
            ResultsRegion::NoResults => NO_RESULTS_TEXT.to_string(),
            ResultsRegion::Cards(cards) => render_card_table(cards),
        }),
    }
}

fn render_card_table(cards: &[TaskCard]) -> String {
    let headers = ["tier", "title", "due", "importance", "est hrs", "score", "explanation"];
    let rows = cards
        .iter()
        .map(|card| {
            vec![
                card.tier.to_string(),
                card.title.clone(),
                card.due_date.clone(),
                card.importance.clone(),
                card.estimated_hours.clone(),
                card.score.to_string(),
                card.explanation.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows, table_options(), Some(0))
}

/// Strategy and dependency-cycle lines shown under the card table, if any.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(strategy) = &summary.strategy {
        lines.push(format!("Strategy: {strategy}"));
    }
    for cycle in &summary.dependency_cycles {
        lines.push(format!("Dependency cycle: {}", cycle.join(" -> ")));
    }
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Render top-3 suggestions.
pub fn render_suggestions(
    suggestions: &[Suggestion],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(suggestions)?),
        OutputFormat::Raw => Ok(serde_json::to_string(suggestions)?),
        OutputFormat::Table => {
            if suggestions.is_empty() {
                return Ok(String::from("No suggestions returned"));
            }
            let rows = suggestions
                .iter()
                .enumerate()
                .map(|(rank, s)| {
                    vec![
                        (rank + 1).to_string(),
                        s.id.clone().unwrap_or_default(),
                        s.title
                            .clone()
                            .unwrap_or_else(|| rank_session::NO_TITLE_PLACEHOLDER.to_string()),
                        s.score.unwrap_or(0.0).to_string(),
                        s.why.clone().unwrap_or_default(),
                    ]
                })
                .collect::<Vec<_>>();
            Ok(render_table(
                &["rank", "id", "title", "score", "why"],
                &rows,
                table_options(),
                None,
            ))
        }
    }
}

/// Render the message line, green for success and red for errors.
#[must_use]
pub fn render_message(message: &Message) -> String {
    if !ui::prefs().color {
        return message.text.clone();
    }
    let style = match message.kind {
        MessageKind::Success => Paint::Green,
        MessageKind::Error => Paint::Red,
    };
    paint(&message.text, style)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
