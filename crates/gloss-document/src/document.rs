//! Immutable line-indexed view of a text buffer.
//!
//! Coordinate conversions clamp instead of erroring: out-of-range lines and
//! characters resolve to the nearest valid boundary, so callers can feed
//! protocol positions through without validating them first. The `character`
//! coordinate is a UTF-8 byte column within its line; offsets produced by
//! [`Document::offset_at`] always land on a char boundary.

use lsp_types::Position;

/// An immutable, line-structured view of text.
///
/// Constructed once per render call and discarded afterwards; it carries no
/// URI, version, or language identity because only the text matters for
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    line_starts: Vec<usize>,
}

impl Document {
    /// Builds a document from raw text, scanning line starts eagerly.
    ///
    /// Recognised line terminators are `\n`, `\r\n`, and a lone `\r`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = scan_line_starts(&text);
        Self { text, line_starts }
    }

    /// Returns the full text of the document.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the document in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns whether the document has any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of lines, counting the trailing empty line after a
    /// final terminator.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.line_starts.len()).unwrap_or(u32::MAX)
    }

    /// Converts a position to a byte offset, clamping out-of-range input.
    ///
    /// A line at or beyond the end of the document resolves to the document
    /// end. A character beyond the end of its line is clamped to the next
    /// line's start, so it may address the line terminator. The result is
    /// floored to a char boundary.
    #[must_use]
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(line_start) = self.line_start(position.line) else {
            return self.text.len();
        };
        let next_line_start = self
            .line_start(position.line.saturating_add(1))
            .unwrap_or(self.text.len());
        let character = usize::try_from(position.character).unwrap_or(usize::MAX);
        let offset = line_start.saturating_add(character).min(next_line_start);
        self.floor_char_boundary(offset)
    }

    /// Converts a byte offset to a position, clamping out-of-range input.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> Position {
        let clamped = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&clamped) {
            Ok(line) => line,
            Err(insertion_point) => insertion_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();
        Position::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(clamped.saturating_sub(line_start)).unwrap_or(u32::MAX),
        )
    }

    /// Returns the byte offset of the start of `line`, if the line exists.
    fn line_start(&self, line: u32) -> Option<usize> {
        let index = usize::try_from(line).unwrap_or(usize::MAX);
        self.line_starts.get(index).copied()
    }

    /// Walks `offset` back to the nearest char boundary at or below it.
    pub(crate) fn floor_char_boundary(&self, offset: usize) -> usize {
        let mut boundary = offset.min(self.text.len());
        while boundary > 0 && !self.text.is_char_boundary(boundary) {
            boundary -= 1;
        }
        boundary
    }
}

/// Render-call input that is either raw text or an already-built document.
///
/// Mirrors the two shapes callers naturally hold in tests: a source string
/// literal, or a [`Document`] reused across several render calls. Emptiness
/// is checked before document construction so trivial calls short-circuit
/// without building a line index.
pub trait IntoDocument {
    /// Returns whether the underlying text has zero length.
    fn is_empty(&self) -> bool;

    /// Resolves the input into a [`Document`], building one if needed.
    fn into_document(self) -> Document;
}

impl IntoDocument for &str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn into_document(self) -> Document {
        Document::new(self)
    }
}

impl IntoDocument for String {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn into_document(self) -> Document {
        Document::new(self)
    }
}

impl IntoDocument for Document {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn into_document(self) -> Document {
        self
    }
}

impl IntoDocument for &Document {
    fn is_empty(&self) -> bool {
        Document::is_empty(self)
    }

    fn into_document(self) -> Document {
        self.clone()
    }
}

/// Scans the byte offsets at which each line begins.
fn scan_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut bytes = text.bytes().enumerate().peekable();
    while let Some((index, byte)) = bytes.next() {
        match byte {
            b'\n' => starts.push(index + 1),
            b'\r' if bytes.peek().map(|&(_, next)| next) != Some(b'\n') => {
                starts.push(index + 1);
            }
            _ => {}
        }
    }
    starts
}
