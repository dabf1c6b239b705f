//! Renders `FoldingRange` annotations as inline tags.

use gloss_document::{Insertion, IntoDocument};
use lsp_types::{FoldingRange, FoldingRangeKind, Position};
use tracing::debug;

use crate::error::{AnnotationKind, RenderError};
use crate::folding;

/// Placeholder shown for a folded region when none is provided.
const DEFAULT_COLLAPSED_TEXT: &str = "...";

/// Identifier alphabet distinguishing multiple folding ranges in one call.
/// Indexing wraps, so the 63rd range reuses `a`.
const RANGE_IDS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Renders folding ranges into the document as `<Kind collapsed="...">`
/// tags.
///
/// Invalid input folds into the sentinel failure string; see
/// [`try_render_folding_ranges`] for the typed-error surface.
#[must_use]
pub fn render_folding_ranges(
    document: impl IntoDocument,
    folding_ranges: &[FoldingRange],
) -> String {
    try_render_folding_ranges(document, folding_ranges).unwrap_or_else(|error| error.to_string())
}

/// Renders folding ranges, reporting an inverted range as a typed error.
///
/// The tag name is the folding kind (`Comment`, `Imports`, `Region`, or
/// `FoldingRange` when unspecified). When more than one range renders in a
/// call, both the opening and closing tags carry a `.<id>` suffix drawn from
/// [`RANGE_IDS`] by sorted position, so equal or crossing ranges stay
/// distinguishable. Unspecified start or end characters resolve to the
/// length of their line. An empty range list returns the document text
/// verbatim.
///
/// # Errors
///
/// Returns [`RenderError::InvertedRange`] when any range's resolved end
/// precedes its resolved start; no partial output is produced.
pub fn try_render_folding_ranges(
    document: impl IntoDocument,
    folding_ranges: &[FoldingRange],
) -> Result<String, RenderError> {
    if document.is_empty() {
        return Ok(String::new());
    }
    let buffer = document.into_document();
    if folding_ranges.is_empty() {
        return Ok(buffer.text().to_owned());
    }
    if folding_ranges
        .iter()
        .any(|range| folding::is_inverted(&buffer, range))
    {
        return Err(RenderError::inverted(AnnotationKind::FoldingRange));
    }

    debug!(count = folding_ranges.len(), "rendering folding ranges");
    let mut ordered: Vec<&FoldingRange> = folding_ranges.iter().collect();
    ordered.sort_by(|left, right| folding::compare_by_start(&buffer, left, right));

    let mut insertions = Vec::with_capacity(ordered.len() * 2);
    for (index, range) in ordered.iter().enumerate() {
        let kind = kind_name(range.kind.as_ref());
        let tag = if folding_ranges.len() > 1 {
            format!("{kind}.{}", range_id(index))
        } else {
            kind.to_owned()
        };
        let collapsed = range
            .collapsed_text
            .as_deref()
            .unwrap_or(DEFAULT_COLLAPSED_TEXT);

        let start_character =
            folding::resolve_character(&buffer, range.start_line, range.start_character);
        let end_character = folding::resolve_character(&buffer, range.end_line, range.end_character);

        insertions.push(Insertion::new(
            buffer.offset_at(Position::new(range.start_line, start_character)),
            format!("<{tag} collapsed=\"{collapsed}\">"),
        ));
        insertions.push(Insertion::new(
            buffer.offset_at(Position::new(range.end_line, end_character)),
            format!("</{tag}>"),
        ));
    }
    Ok(buffer.compose(insertions))
}

/// Maps a folding kind to its display name; unspecified kind renders as the
/// plain `FoldingRange` tag.
fn kind_name(kind: Option<&FoldingRangeKind>) -> &'static str {
    match kind {
        Some(FoldingRangeKind::Comment) => "Comment",
        Some(FoldingRangeKind::Imports) => "Imports",
        Some(FoldingRangeKind::Region) => "Region",
        None => "FoldingRange",
    }
}

/// Returns the identifier for the range at `index` in sorted order.
fn range_id(index: usize) -> char {
    RANGE_IDS.chars().cycle().nth(index).unwrap_or('a')
}
