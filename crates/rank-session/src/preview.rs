use rank_core::TaskRecord;

/// Render the collection as the pretty-printed JSON shown in the preview.
///
/// An empty collection renders as `[]`; the session shows an empty preview
/// only after an explicit clear.
#[must_use]
pub fn render_preview(records: &[TaskRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|error| {
        tracing::warn!(%error, "failed to render task preview");
        String::new()
    })
}
