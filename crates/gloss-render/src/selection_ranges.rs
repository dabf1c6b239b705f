//! Renders `SelectionRange` annotations as inline tags.

use gloss_document::{Insertion, IntoDocument};
use lsp_types::SelectionRange;
use tracing::debug;

use crate::error::{AnnotationKind, RenderError};
use crate::position::{is_inverted, sorted_by_start};

/// Renders selection ranges into the document as `<SelectionRange>` tags.
///
/// Invalid input folds into the sentinel failure string; see
/// [`try_render_selection_ranges`] for the typed-error surface.
#[must_use]
pub fn render_selection_ranges(
    document: impl IntoDocument,
    selection_ranges: &[SelectionRange],
) -> String {
    try_render_selection_ranges(document, selection_ranges)
        .unwrap_or_else(|error| error.to_string())
}

/// Renders selection ranges, reporting an inverted range as a typed error.
///
/// Selection ranges have no kind and no attributes; every annotation renders
/// as the fixed `<SelectionRange>` pair. Parent ranges are not followed —
/// only the range itself renders. An empty range list returns the document
/// text verbatim.
///
/// # Errors
///
/// Returns [`RenderError::InvertedRange`] when any range's end position
/// precedes its start position; no partial output is produced.
pub fn try_render_selection_ranges(
    document: impl IntoDocument,
    selection_ranges: &[SelectionRange],
) -> Result<String, RenderError> {
    if document.is_empty() {
        return Ok(String::new());
    }
    let buffer = document.into_document();
    if selection_ranges.is_empty() {
        return Ok(buffer.text().to_owned());
    }
    if selection_ranges
        .iter()
        .any(|selection| is_inverted(selection.range))
    {
        return Err(RenderError::inverted(AnnotationKind::SelectionRange));
    }

    debug!(count = selection_ranges.len(), "rendering selection ranges");
    let mut insertions = Vec::with_capacity(selection_ranges.len() * 2);
    for selection in sorted_by_start(selection_ranges, |selection| selection.range.start) {
        insertions.push(Insertion::new(
            buffer.offset_at(selection.range.start),
            "<SelectionRange>",
        ));
        insertions.push(Insertion::new(
            buffer.offset_at(selection.range.end),
            "</SelectionRange>",
        ));
    }
    Ok(buffer.compose(insertions))
}
