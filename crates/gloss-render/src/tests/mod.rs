//! Unit suites for the annotation renderers.
//!
//! Each suite mirrors the fixture matrix of the behaviour these renderers
//! reproduce: kind and attribute permutations, the overlap layouts
//! (non-intersecting, partially intersecting, containing, equal, unsorted
//! input), clamping at the document boundaries, and the sentinel failure
//! cases. `properties` holds the cross-renderer guarantees.

mod diagnostics;

use lsp_types::{Position, Range};

/// Builds a range from raw line/character coordinates.
pub(crate) fn range(
    start_line: u32,
    start_character: u32,
    end_line: u32,
    end_character: u32,
) -> Range {
    Range::new(
        Position::new(start_line, start_character),
        Position::new(end_line, end_character),
    )
}
