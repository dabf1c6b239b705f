//! Line-indexed text buffers and zero-width insertion composition.
//!
//! The crate owns the buffer side of annotation rendering: [`Document`] wraps
//! raw text into an immutable line-indexed view with clamping conversions
//! between byte offsets and `(line, character)` positions, [`IntoDocument`]
//! lets callers pass either raw text or an existing document, and
//! [`Insertion`] with [`Document::compose`] merges a list of zero-width
//! markup insertions into a final string. Renderers in `gloss-render` build
//! on these primitives; this crate knows nothing about annotation variants.

mod document;
mod insertion;

pub use document::{Document, IntoDocument};
pub use insertion::Insertion;
