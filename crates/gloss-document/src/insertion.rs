//! Zero-width insertion edits and their composition into final text.
//!
//! Insertions never delete or replace buffer content; they splice markup in
//! front of the byte they target. Composition is where overlap resolution
//! actually happens: a stable sort by offset plus the push-order tie-break
//! reproduces every nesting and crossing outcome without an interval tree.

use tracing::trace;

use crate::document::Document;

/// A zero-width insertion of markup text at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    offset: usize,
    text: String,
}

impl Insertion {
    /// Creates an insertion placing `text` immediately before the existing
    /// content at `offset`.
    #[must_use]
    pub fn new(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            text: text.into(),
        }
    }

    /// Returns the target byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the text to insert.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Document {
    /// Applies a list of insertions, producing the final text.
    ///
    /// Insertions are stable-sorted by offset, so when several target the
    /// identical offset their texts appear in the output in the order they
    /// were pushed, all ahead of the original content at that offset.
    /// Insertions at distinct offsets never reorder. Offsets are clamped to
    /// the document and floored to char boundaries before splicing.
    #[must_use]
    pub fn compose(&self, insertions: Vec<Insertion>) -> String {
        let mut ordered = insertions;
        ordered.sort_by_key(Insertion::offset);
        trace!(insertions = ordered.len(), "composing insertions");

        let inserted_len: usize = ordered.iter().map(|insertion| insertion.text.len()).sum();
        let mut output = String::with_capacity(self.len() + inserted_len);
        let mut cursor = 0;
        for insertion in &ordered {
            let offset = self.floor_char_boundary(insertion.offset);
            if offset > cursor {
                output.push_str(self.text().get(cursor..offset).unwrap_or_default());
                cursor = offset;
            }
            output.push_str(&insertion.text);
        }
        output.push_str(self.text().get(cursor..).unwrap_or_default());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::Insertion;
    use crate::document::Document;

    #[test]
    fn exposes_offset_and_text() {
        let insertion = Insertion::new(7, "<tag>");
        assert_eq!(insertion.offset(), 7);
        assert_eq!(insertion.text(), "<tag>");
    }

    #[test]
    fn composes_nothing_into_unchanged_text() {
        let document = Document::new("plain text");
        assert_eq!(document.compose(Vec::new()), "plain text");
    }

    #[test]
    fn splices_at_distinct_offsets() {
        let document = Document::new("abcdef");
        let insertions = vec![Insertion::new(4, "["), Insertion::new(2, "]")];
        assert_eq!(document.compose(insertions), "ab]cd[ef");
    }

    #[test]
    fn same_offset_keeps_push_order() {
        let document = Document::new("abc");
        let insertions = vec![
            Insertion::new(1, "<first>"),
            Insertion::new(1, "<second>"),
            Insertion::new(1, "<third>"),
        ];
        assert_eq!(document.compose(insertions), "a<first><second><third>bc");
    }

    #[test]
    fn clamps_offsets_beyond_the_document() {
        let document = Document::new("ab");
        let insertions = vec![Insertion::new(100, "!")];
        assert_eq!(document.compose(insertions), "ab!");
    }

    #[test]
    fn inserts_at_document_start_and_end() {
        let document = Document::new("mid");
        let insertions = vec![Insertion::new(0, "<"), Insertion::new(3, ">")];
        assert_eq!(document.compose(insertions), "<mid>");
    }
}
