//! Folding-range coordinate resolution and ordering.
//!
//! Folding ranges carry line numbers with *optional* character offsets; the
//! protocol defines a missing character as "the length of the line". Every
//! comparison over folding ranges therefore has to resolve characters against
//! the document first, which is why these helpers exist separately from the
//! plain position utilities.

use gloss_document::Document;
use lsp_types::{FoldingRange, Position};
use std::cmp::Ordering;

/// Resolves a possibly-unspecified character offset to a concrete column.
///
/// An explicit character wins. Otherwise the result is the length of the
/// line: for the last line there is no following line to measure against, so
/// it is the distance from the line start to the document end; for any other
/// line it is the character component of the position just before the next
/// line's start.
pub(crate) fn resolve_character(document: &Document, line: u32, character: Option<u32>) -> u32 {
    if let Some(character) = character {
        return character;
    }
    if line.saturating_add(1) == document.line_count() {
        let line_start = document.offset_at(Position::new(line, 0));
        u32::try_from(document.len().saturating_sub(line_start)).unwrap_or(u32::MAX)
    } else {
        let line_end = document
            .offset_at(Position::new(line.saturating_add(1), 0))
            .saturating_sub(1);
        document.position_at(line_end).character
    }
}

/// Compares two folding ranges by start line, then by resolved start column.
pub(crate) fn compare_by_start(
    document: &Document,
    left: &FoldingRange,
    right: &FoldingRange,
) -> Ordering {
    left.start_line.cmp(&right.start_line).then_with(|| {
        let left_character = resolve_character(document, left.start_line, left.start_character);
        let right_character = resolve_character(document, right.start_line, right.start_character);
        left_character.cmp(&right_character)
    })
}

/// Returns whether the range's resolved end precedes its resolved start.
pub(crate) fn is_inverted(document: &Document, range: &FoldingRange) -> bool {
    if range.start_line != range.end_line {
        return range.start_line > range.end_line;
    }
    let start = resolve_character(document, range.start_line, range.start_character);
    let end = resolve_character(document, range.end_line, range.end_character);
    start > end
}
