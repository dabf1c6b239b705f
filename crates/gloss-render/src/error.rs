//! Typed render failures and their sentinel string form.
//!
//! Invalid input never panics and never produces partial output: a render
//! either fully succeeds or reports the single annotation kind that violated
//! the start-before-end invariant. The `Display` of [`RenderError`] is the
//! exact sentinel string the string-returning entry points hand back, so
//! existing fixture assertions keep working against either surface.

use std::fmt;

use thiserror::Error;

/// The annotation variant a renderer was processing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// A `Diagnostic` annotation.
    Diagnostic,
    /// A `DocumentHighlight` annotation.
    DocumentHighlight,
    /// A `FoldingRange` annotation.
    FoldingRange,
    /// An `InlayHint` annotation.
    InlayHint,
    /// A `SelectionRange` annotation.
    SelectionRange,
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Diagnostic => "Diagnostic",
            Self::DocumentHighlight => "DocumentHighlight",
            Self::FoldingRange => "FoldingRange",
            Self::InlayHint => "InlayHint",
            Self::SelectionRange => "SelectionRange",
        };
        formatter.write_str(label)
    }
}

/// Errors returned by the `try_render_*` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// An annotation's end position precedes its start position.
    #[error(
        "Found at least one {kind} with its end position being earlier than its start position."
    )]
    InvertedRange {
        /// The annotation kind that carried the inverted range.
        kind: AnnotationKind,
    },
}

impl RenderError {
    /// Builds an `InvertedRange` error for the supplied kind.
    pub(crate) const fn inverted(kind: AnnotationKind) -> Self {
        Self::InvertedRange { kind }
    }
}
