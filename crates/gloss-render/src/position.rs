//! Position comparison and stable ordering over protocol ranges.

use std::cmp::Ordering;

use lsp_types::{Position, Range};

/// Compares two positions line-major, character-minor.
pub(crate) fn compare_positions(left: Position, right: Position) -> Ordering {
    left.line
        .cmp(&right.line)
        .then(left.character.cmp(&right.character))
}

/// Borrows the annotations in ascending order of their start positions.
///
/// The sort is stable: annotations tying on start keep their input order,
/// which is what makes overlap tie-breaking deterministic downstream.
pub(crate) fn sorted_by_start<T>(items: &[T], start: impl Fn(&T) -> Position) -> Vec<&T> {
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by(|left, right| compare_positions(start(left), start(right)));
    ordered
}

/// Returns whether the range's end position precedes its start position.
pub(crate) fn is_inverted(range: Range) -> bool {
    compare_positions(range.start, range.end) == Ordering::Greater
}
