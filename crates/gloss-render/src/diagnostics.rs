//! Renders `Diagnostic` annotations as inline tags.

use gloss_document::{Insertion, IntoDocument};
use lsp_types::{Diagnostic, DiagnosticSeverity, DiagnosticTag, NumberOrString};
use tracing::debug;

use crate::error::{AnnotationKind, RenderError};
use crate::position::{is_inverted, sorted_by_start};

/// Renders diagnostics into the document as `<Severity msg="...">` tags.
///
/// Invalid input folds into the sentinel failure string; see
/// [`try_render_diagnostics`] for the typed-error surface.
///
/// ```
/// use gloss_render::render_diagnostics;
/// use lsp_types::{Diagnostic, Position, Range};
///
/// let diagnostic = Diagnostic {
///     message: "diag message".to_owned(),
///     range: Range::new(Position::new(0, 16), Position::new(0, 28)),
///     ..Diagnostic::default()
/// };
/// assert_eq!(
///     render_diagnostics("export function functionName() {\n}", &[diagnostic]),
///     "export function <Diagnostic msg=\"diag message\">functionName</Diagnostic>() {\n}",
/// );
/// ```
#[must_use]
pub fn render_diagnostics(document: impl IntoDocument, diagnostics: &[Diagnostic]) -> String {
    try_render_diagnostics(document, diagnostics).unwrap_or_else(|error| error.to_string())
}

/// Renders diagnostics, reporting an inverted range as a typed error.
///
/// The tag name is the severity name (`Error`, `Warning`, `Information`,
/// `Hint`, or `Diagnostic` when unspecified), suffixed with `:Tag` for each
/// diagnostic tag in the given order. Attributes follow in a fixed order:
/// `msg`, then `code` (bare for numeric codes, quoted for string codes),
/// then `src`, then `codeDesc`. Attribute values are inserted verbatim,
/// without escaping.
///
/// # Errors
///
/// Returns [`RenderError::InvertedRange`] when any diagnostic's end position
/// precedes its start position; no partial output is produced.
pub fn try_render_diagnostics(
    document: impl IntoDocument,
    diagnostics: &[Diagnostic],
) -> Result<String, RenderError> {
    if document.is_empty() {
        return Ok(String::new());
    }
    if diagnostics
        .iter()
        .any(|diagnostic| is_inverted(diagnostic.range))
    {
        return Err(RenderError::inverted(AnnotationKind::Diagnostic));
    }

    debug!(count = diagnostics.len(), "rendering diagnostics");
    let buffer = document.into_document();
    let mut insertions = Vec::with_capacity(diagnostics.len() * 2);
    for diagnostic in sorted_by_start(diagnostics, |diagnostic| diagnostic.range.start) {
        let severity = severity_name(diagnostic.severity);
        let mut markup = format!("<{severity}");
        if let Some(tags) = &diagnostic.tags {
            for tag in tags {
                markup.push(':');
                markup.push_str(tag_name(tag.clone()));
            }
        }
        markup.push_str(&format!(" msg=\"{}\"", diagnostic.message));
        match &diagnostic.code {
            Some(NumberOrString::Number(number)) => {
                markup.push_str(&format!(" code={number}"));
            }
            Some(NumberOrString::String(text)) => {
                markup.push_str(&format!(" code=\"{text}\""));
            }
            None => {}
        }
        if let Some(source) = &diagnostic.source {
            markup.push_str(&format!(" src=\"{source}\""));
        }
        if let Some(description) = &diagnostic.code_description {
            markup.push_str(&format!(" codeDesc=\"{}\"", description.href.as_str()));
        }
        markup.push('>');

        insertions.push(Insertion::new(
            buffer.offset_at(diagnostic.range.start),
            markup,
        ));
        insertions.push(Insertion::new(
            buffer.offset_at(diagnostic.range.end),
            format!("</{severity}>"),
        ));
    }
    Ok(buffer.compose(insertions))
}

/// Maps a severity to its display name; unspecified severity renders as the
/// plain `Diagnostic` tag.
fn severity_name(severity: Option<DiagnosticSeverity>) -> &'static str {
    match severity {
        Some(DiagnosticSeverity::ERROR) => "Error",
        Some(DiagnosticSeverity::WARNING) => "Warning",
        Some(DiagnosticSeverity::INFORMATION) => "Information",
        Some(DiagnosticSeverity::HINT) => "Hint",
        _ => "Diagnostic",
    }
}

/// Maps a diagnostic tag to its display name.
fn tag_name(tag: DiagnosticTag) -> &'static str {
    if tag == DiagnosticTag::UNNECESSARY {
        "Unnecessary"
    } else {
        "Deprecated"
    }
}
