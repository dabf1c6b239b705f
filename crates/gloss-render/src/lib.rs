//! Inline rendering of LSP annotations for test assertions.
//!
//! Language-server tests usually assert on structured objects: a list of
//! diagnostics here, a list of folding ranges there. This crate turns those
//! assertions into string comparisons instead, by rendering the annotations
//! back into the source they describe as XML-like tags:
//!
//! ```text
//! export function <Error msg="unused">functionName</Error>() {
//! }
//! ```
//!
//! One entry point exists per annotation kind — [`render_diagnostics`],
//! [`render_document_highlights`], [`render_folding_ranges`],
//! [`render_inlay_hints`], and [`render_selection_ranges`] — each taking the
//! document (raw text or a pre-built [`gloss_document::Document`]) and a
//! slice of `lsp_types` annotations, and returning the annotated text.
//! Overlapping and even crossing annotations render faithfully: the output
//! is deliberately not guaranteed to be well-formed markup, because
//! visualising overlap is the point. Ordering is deterministic — a stable
//! sort by start position plus a push-order tie-break for insertions landing
//! on the same offset.
//!
//! Out-of-range positions clamp to the nearest document boundary rather than
//! erroring. The only failure mode is an annotation whose end precedes its
//! start: the `try_render_*` twins report it as a [`RenderError`], and the
//! string-returning entry points fold it into the same sentinel string the
//! error displays. Attribute values are inserted verbatim, with no escaping
//! of embedded quotes; callers that round-trip source snippets through
//! attributes rely on the unescaped form.

mod diagnostics;
mod error;
mod folding;
mod folding_ranges;
mod highlights;
mod inlay_hints;
mod position;
mod selection_ranges;

pub use diagnostics::{render_diagnostics, try_render_diagnostics};
pub use error::{AnnotationKind, RenderError};
pub use folding_ranges::{render_folding_ranges, try_render_folding_ranges};
pub use highlights::{render_document_highlights, try_render_document_highlights};
pub use inlay_hints::{render_inlay_hints, try_render_inlay_hints};
pub use selection_ranges::{render_selection_ranges, try_render_selection_ranges};

#[cfg(test)]
mod tests;
