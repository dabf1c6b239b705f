//! Diagnostic rendering fixtures.

use std::str::FromStr;

use gloss_document::Document;
use lsp_types::{
    CodeDescription, Diagnostic, DiagnosticSeverity, DiagnosticTag, NumberOrString, Range, Uri,
};
use rstest::rstest;

use super::range;
use crate::{AnnotationKind, RenderError, render_diagnostics, try_render_diagnostics};

const SOURCE: &str = "export function functionName() {\n}";

fn diagnostic(message: &str, severity: Option<DiagnosticSeverity>, range: Range) -> Diagnostic {
    Diagnostic {
        message: message.to_owned(),
        severity,
        range,
        ..Diagnostic::default()
    }
}

#[rstest]
#[case(None, "Diagnostic")]
#[case(Some(DiagnosticSeverity::ERROR), "Error")]
#[case(Some(DiagnosticSeverity::WARNING), "Warning")]
#[case(Some(DiagnosticSeverity::INFORMATION), "Information")]
#[case(Some(DiagnosticSeverity::HINT), "Hint")]
fn severity_names_the_tag(#[case] severity: Option<DiagnosticSeverity>, #[case] tag: &str) {
    let rendered = render_diagnostics(
        SOURCE,
        &[diagnostic("diag message", severity, range(0, 16, 0, 28))],
    );
    assert_eq!(
        rendered,
        format!("export function <{tag} msg=\"diag message\">functionName</{tag}>() {{\n}}")
    );
}

#[rstest]
#[case(vec![DiagnosticTag::UNNECESSARY], ":Unnecessary")]
#[case(vec![DiagnosticTag::DEPRECATED], ":Deprecated")]
#[case(vec![DiagnosticTag::UNNECESSARY, DiagnosticTag::DEPRECATED], ":Unnecessary:Deprecated")]
// Duplicates are preserved in the order given.
#[case(
    vec![DiagnosticTag::UNNECESSARY, DiagnosticTag::DEPRECATED, DiagnosticTag::UNNECESSARY],
    ":Unnecessary:Deprecated:Unnecessary"
)]
#[case(vec![], "")]
fn tags_suffix_the_opening_tag(#[case] tags: Vec<DiagnosticTag>, #[case] suffix: &str) {
    let mut subject = diagnostic(
        "diag message",
        Some(DiagnosticSeverity::HINT),
        range(0, 16, 0, 28),
    );
    subject.tags = Some(tags);

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        format!("export function <Hint{suffix} msg=\"diag message\">functionName</Hint>() {{\n}}")
    );
}

#[test]
fn numeric_code_renders_bare() {
    let mut subject = diagnostic(
        "diag message",
        Some(DiagnosticSeverity::HINT),
        range(0, 16, 0, 28),
    );
    subject.code = Some(NumberOrString::Number(200));

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        "export function <Hint msg=\"diag message\" code=200>functionName</Hint>() {\n}"
    );
}

#[test]
fn string_code_renders_quoted() {
    let mut subject = diagnostic(
        "diag message",
        Some(DiagnosticSeverity::WARNING),
        range(0, 16, 0, 28),
    );
    subject.code = Some(NumberOrString::String("string diag code".to_owned()));

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        "export function <Warning msg=\"diag message\" code=\"string diag code\">functionName\
         </Warning>() {\n}"
    );
}

#[test]
fn source_renders_as_src_attribute() {
    let mut subject = diagnostic(
        "diag message",
        Some(DiagnosticSeverity::HINT),
        range(0, 16, 0, 28),
    );
    subject.source = Some("diag source".to_owned());

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        "export function <Hint msg=\"diag message\" src=\"diag source\">functionName</Hint>() {\n}"
    );
}

#[test]
fn code_description_renders_its_href() {
    let mut subject = diagnostic(
        "diag message",
        Some(DiagnosticSeverity::HINT),
        range(0, 16, 0, 28),
    );
    subject.code_description = Some(CodeDescription {
        href: Uri::from_str("https://some.url").expect("valid URI"),
    });

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        "export function <Hint msg=\"diag message\" codeDesc=\"https://some.url\">functionName\
         </Hint>() {\n}"
    );
}

#[test]
fn attributes_keep_their_fixed_order() {
    let mut subject = diagnostic(
        "diag message",
        Some(DiagnosticSeverity::HINT),
        range(0, 16, 0, 28),
    );
    subject.tags = Some(vec![DiagnosticTag::UNNECESSARY, DiagnosticTag::DEPRECATED]);
    subject.code = Some(NumberOrString::String("diag code".to_owned()));
    subject.source = Some("diag source".to_owned());
    subject.code_description = Some(CodeDescription {
        href: Uri::from_str("https://some.url").expect("valid URI"),
    });

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        "export function <Hint:Unnecessary:Deprecated msg=\"diag message\" \
         code=\"diag code\" src=\"diag source\" codeDesc=\"https://some.url\">functionName\
         </Hint>() {\n}"
    );
}

#[test]
fn message_is_not_escaped() {
    let rendered = render_diagnostics(
        SOURCE,
        &[diagnostic(
            "embedded \"quotes\" stay",
            Some(DiagnosticSeverity::ERROR),
            range(0, 16, 0, 28),
        )],
    );
    assert_eq!(
        rendered,
        "export function <Error msg=\"embedded \"quotes\" stay\">functionName</Error>() {\n}"
    );
}

#[rstest]
// |--------|
//                |--------|
#[case(
    range(0, 0, 0, 6),
    range(0, 16, 0, 28),
    "<Error msg=\"diag1\">export</Error> function <Hint msg=\"diag2\">functionName</Hint>() {\n}"
)]
//     |--------|
// |--------|
#[case(
    range(0, 0, 0, 15),
    range(0, 10, 0, 25),
    "<Error msg=\"diag1\">export fun<Hint msg=\"diag2\">ction</Error> functionN</Hint>ame() {\n}"
)]
// |--------|
// |---|
#[case(
    range(0, 0, 0, 15),
    range(0, 0, 0, 6),
    "<Error msg=\"diag1\"><Hint msg=\"diag2\">export</Hint> function</Error> functionName() {\n}"
)]
// |--------|
//      |---|
#[case(
    range(0, 0, 0, 15),
    range(0, 10, 0, 15),
    "<Error msg=\"diag1\">export fun<Hint msg=\"diag2\">ction</Error></Hint> functionName() {\n}"
)]
// |--------|
//   |---|
#[case(
    range(0, 0, 0, 20),
    range(0, 10, 0, 15),
    "<Error msg=\"diag1\">export fun<Hint msg=\"diag2\">ction</Hint> func</Error>tionName() {\n}"
)]
// |--------|
// |--------|
#[case(
    range(0, 7, 0, 15),
    range(0, 7, 0, 15),
    "export <Error msg=\"diag1\"><Hint msg=\"diag2\">function</Error></Hint> functionName() {\n}"
)]
fn overlapping_diagnostics_render_in_input_order(
    #[case] first: Range,
    #[case] second: Range,
    #[case] expected: &str,
) {
    let rendered = render_diagnostics(
        SOURCE,
        &[
            diagnostic("diag1", Some(DiagnosticSeverity::ERROR), first),
            diagnostic("diag2", Some(DiagnosticSeverity::HINT), second),
        ],
    );
    assert_eq!(rendered, expected);
}

#[test]
fn unsorted_input_is_sorted_by_start() {
    let rendered = render_diagnostics(
        SOURCE,
        &[
            diagnostic("diag1", Some(DiagnosticSeverity::ERROR), range(0, 7, 0, 15)),
            diagnostic("diag2", Some(DiagnosticSeverity::HINT), range(0, 0, 0, 5)),
        ],
    );
    assert_eq!(
        rendered,
        "<Hint msg=\"diag2\">expor</Hint>t <Error msg=\"diag1\">function</Error> functionName() {\n}"
    );
}

#[test]
fn multiline_range_spans_lines() {
    let rendered = render_diagnostics(
        "export function functionName() {\n   val number = 6;\n   var string = \"some string\"\n}",
        &[diagnostic(
            "diag1",
            Some(DiagnosticSeverity::ERROR),
            range(0, 7, 2, 5),
        )],
    );
    assert_eq!(
        rendered,
        "export <Error msg=\"diag1\">function functionName() {\n   val number = 6;\n   va</Error>\
         r string = \"some string\"\n}"
    );
}

#[test]
fn empty_text_renders_empty() {
    let subject = diagnostic("diag1", Some(DiagnosticSeverity::ERROR), range(0, 0, 0, 5));
    assert_eq!(render_diagnostics("", &[subject.clone()]), "");
    assert_eq!(render_diagnostics(Document::new(""), &[subject]), "");
}

#[rstest]
// End line before start line.
#[case(range(2, 7, 0, 7))]
// End character before start character.
#[case(range(0, 10, 0, 5))]
fn inverted_range_renders_the_sentinel(#[case] inverted: Range) {
    let subject = diagnostic("diag1", Some(DiagnosticSeverity::ERROR), inverted);

    assert_eq!(
        render_diagnostics(SOURCE, &[subject.clone()]),
        "Found at least one Diagnostic with its end position being earlier than its start \
         position."
    );
    assert_eq!(
        try_render_diagnostics(SOURCE, &[subject]),
        Err(RenderError::InvertedRange {
            kind: AnnotationKind::Diagnostic
        })
    );
}

#[rstest]
// Start line beyond the document end.
#[case(
    range(10, 10, 11, 5),
    "export function functionName() {\n}<Error msg=\"diag1\"></Error>"
)]
// End line beyond the document end.
#[case(
    range(0, 10, 100, 5),
    "export fun<Error msg=\"diag1\">ction functionName() {\n}</Error>"
)]
// Start character beyond the line end.
#[case(
    range(1, 100, 1, 101),
    "export function functionName() {\n}<Error msg=\"diag1\"></Error>"
)]
// End character beyond the line end.
#[case(
    range(0, 10, 1, 100),
    "export fun<Error msg=\"diag1\">ction functionName() {\n}</Error>"
)]
fn out_of_bounds_coordinates_clamp(#[case] out_of_bounds: Range, #[case] expected: &str) {
    let rendered = render_diagnostics(
        SOURCE,
        &[diagnostic(
            "diag1",
            Some(DiagnosticSeverity::ERROR),
            out_of_bounds,
        )],
    );
    assert_eq!(rendered, expected);
}

#[test]
fn protocol_json_payload_renders_directly() {
    let subject: Diagnostic = serde_json::from_value(serde_json::json!({
        "message": "diag message",
        "severity": 1,
        "range": {
            "start": {"line": 0, "character": 16},
            "end": {"line": 0, "character": 28},
        },
    }))
    .expect("valid diagnostic payload");

    let rendered = render_diagnostics(SOURCE, &[subject]);
    assert_eq!(
        rendered,
        "export function <Error msg=\"diag message\">functionName</Error>() {\n}"
    );
}
