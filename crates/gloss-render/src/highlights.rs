//! Renders `DocumentHighlight` annotations as inline tags.

use gloss_document::{Insertion, IntoDocument};
use lsp_types::{DocumentHighlight, DocumentHighlightKind};
use tracing::debug;

use crate::error::{AnnotationKind, RenderError};
use crate::position::{is_inverted, sorted_by_start};

/// Renders document highlights into the document as `<Kind>` tags.
///
/// Invalid input folds into the sentinel failure string; see
/// [`try_render_document_highlights`] for the typed-error surface.
#[must_use]
pub fn render_document_highlights(
    document: impl IntoDocument,
    highlights: &[DocumentHighlight],
) -> String {
    try_render_document_highlights(document, highlights).unwrap_or_else(|error| error.to_string())
}

/// Renders document highlights, reporting an inverted range as a typed
/// error.
///
/// The tag name is the highlight kind (`Text`, `Read`, `Write`, or
/// `Highlight` when unspecified); highlights carry no attributes.
///
/// # Errors
///
/// Returns [`RenderError::InvertedRange`] when any highlight's end position
/// precedes its start position; no partial output is produced.
pub fn try_render_document_highlights(
    document: impl IntoDocument,
    highlights: &[DocumentHighlight],
) -> Result<String, RenderError> {
    if document.is_empty() {
        return Ok(String::new());
    }
    if highlights
        .iter()
        .any(|highlight| is_inverted(highlight.range))
    {
        return Err(RenderError::inverted(AnnotationKind::DocumentHighlight));
    }

    debug!(count = highlights.len(), "rendering document highlights");
    let buffer = document.into_document();
    let mut insertions = Vec::with_capacity(highlights.len() * 2);
    for highlight in sorted_by_start(highlights, |highlight| highlight.range.start) {
        let kind = kind_name(highlight.kind);
        insertions.push(Insertion::new(
            buffer.offset_at(highlight.range.start),
            format!("<{kind}>"),
        ));
        insertions.push(Insertion::new(
            buffer.offset_at(highlight.range.end),
            format!("</{kind}>"),
        ));
    }
    Ok(buffer.compose(insertions))
}

/// Maps a highlight kind to its display name; unspecified kind renders as
/// the plain `Highlight` tag.
fn kind_name(kind: Option<DocumentHighlightKind>) -> &'static str {
    match kind {
        Some(DocumentHighlightKind::TEXT) => "Text",
        Some(DocumentHighlightKind::READ) => "Read",
        Some(DocumentHighlightKind::WRITE) => "Write",
        _ => "Highlight",
    }
}
