//! Shared helpers for parser tests.

use crate::GraphQLParser;
use crate::GraphQLParserOptions;
use crate::OperationReport;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::INVALID_REF;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::SelectionKind;
use crate::parse_document_from_str;

/// Parses `source` and panics with the rendered report if it has errors.
pub fn parse_ok(source: &str) -> Document {
    let (doc, report) = parse_document_from_str(source);
    assert!(!report.has_errors(), "unexpected errors for {source:?}:\n{report}");
    doc
}

/// Parses `source` and returns the report, panicking if it has no errors.
pub fn parse_err(source: &str) -> OperationReport {
    let (_, report) = parse_document_from_str(source);
    assert!(report.has_errors(), "expected an error for {source:?}");
    report
}

/// Parses `source` with internal errors enabled.
pub fn parse_with_internal_errors(source: &str) -> (Document, OperationReport) {
    let mut parser = GraphQLParser::with_options(
        GraphQLParserOptions::default().with_report_internal_errors(true),
    );
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str(source);
    parser.parse(&mut doc, &mut report);
    (doc, report)
}

/// The single external error message of a failed parse.
pub fn first_error_message(source: &str) -> String {
    let report = parse_err(source);
    report.external_errors[0].message.clone()
}

/// The `(line, column)` of the single external error of a failed parse.
pub fn first_error_location(source: &str) -> (u32, u32) {
    let report = parse_err(source);
    let location = report.external_errors[0].locations[0];
    (location.line, location.column)
}

/// The root node at `index`, asserting its kind.
pub fn root_node(doc: &Document, index: usize, kind: NodeKind) -> Node {
    let node = doc.root_nodes[index];
    assert_eq!(node.kind, kind);
    node
}

/// Refs of the fields directly inside selection set `set_ref`, in order.
/// Panics on any non-field selection.
pub fn field_refs(doc: &Document, set_ref: Ref) -> Vec<Ref> {
    assert_ne!(set_ref, INVALID_REF);
    doc.selection_sets[set_ref as usize]
        .selection_refs
        .iter()
        .map(|selection_ref| {
            let selection = doc.selections[selection_ref as usize];
            assert_eq!(selection.kind, SelectionKind::Field);
            selection.reference
        })
        .collect()
}

/// The fields of the first root node, which must be an operation.
pub fn top_level_fields(doc: &Document) -> Vec<&Field> {
    let node = root_node(doc, 0, NodeKind::OperationDefinition);
    let operation = &doc.operation_definitions[node.reference as usize];
    field_refs(doc, operation.selection_set)
        .into_iter()
        .map(|field_ref| &doc.fields[field_ref as usize])
        .collect()
}

/// Resolves a span-backed name to a `&str` for comparisons.
pub fn name_of(doc: &Document, span: crate::ByteSpan) -> String {
    doc.input_str(span).into_owned()
}
