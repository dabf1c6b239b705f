//! Renders `InlayHint` annotations as self-closing inline tags.

use gloss_document::{Insertion, IntoDocument};
use lsp_types::{InlayHint, InlayHintKind, InlayHintLabel};
use tracing::debug;

use crate::error::RenderError;
use crate::position::sorted_by_start;

/// Renders inlay hints into the document as `<Kind label="..."/>` tags.
///
/// Provided alongside [`try_render_inlay_hints`] for API symmetry with the
/// range-shaped renderers.
#[must_use]
pub fn render_inlay_hints(document: impl IntoDocument, inlay_hints: &[InlayHint]) -> String {
    try_render_inlay_hints(document, inlay_hints).unwrap_or_else(|error| error.to_string())
}

/// Renders inlay hints at their positions as single self-closing insertions.
///
/// The tag name is the hint kind (`Type`, `Parameter`, or `InlayHint` when
/// unspecified), prefixed with `_` when `padding_left` is set and suffixed
/// with ` _` when `padding_right` is set. The label is either the literal
/// string or the label parts' values joined with a single space; part
/// tooltips and commands are not rendered. Hints are points, not ranges, so
/// no inversion is possible.
///
/// # Errors
///
/// Never fails; the `Result` mirrors the other renderers' signatures.
pub fn try_render_inlay_hints(
    document: impl IntoDocument,
    inlay_hints: &[InlayHint],
) -> Result<String, RenderError> {
    if document.is_empty() {
        return Ok(String::new());
    }

    debug!(count = inlay_hints.len(), "rendering inlay hints");
    let buffer = document.into_document();
    let mut insertions = Vec::with_capacity(inlay_hints.len());
    for inlay_hint in sorted_by_start(inlay_hints, |inlay_hint| inlay_hint.position) {
        let mut markup = String::from("<");
        if inlay_hint.padding_left.unwrap_or(false) {
            markup.push('_');
        }
        markup.push_str(kind_name(inlay_hint.kind));
        markup.push_str(&format!(" label=\"{}\"", label_text(&inlay_hint.label)));
        if inlay_hint.padding_right.unwrap_or(false) {
            markup.push_str(" _");
        }
        markup.push_str("/>");

        insertions.push(Insertion::new(buffer.offset_at(inlay_hint.position), markup));
    }
    Ok(buffer.compose(insertions))
}

/// Maps a hint kind to its display name; unspecified kind renders as the
/// plain `InlayHint` tag.
fn kind_name(kind: Option<InlayHintKind>) -> &'static str {
    match kind {
        Some(InlayHintKind::TYPE) => "Type",
        Some(InlayHintKind::PARAMETER) => "Parameter",
        _ => "InlayHint",
    }
}

/// Flattens a hint label to the text rendered in the `label` attribute.
fn label_text(label: &InlayHintLabel) -> String {
    match label {
        InlayHintLabel::String(text) => text.clone(),
        InlayHintLabel::LabelParts(parts) => parts
            .iter()
            .map(|part| part.value.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
