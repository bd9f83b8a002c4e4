//! Tests for `GraphQLParser` entry points and executable definitions.

use crate::DEFAULT_MAX_NESTING_DEPTH;
use crate::GraphQLParser;
use crate::GraphQLParserOptions;
use crate::OperationReport;
use crate::ast::Document;
use crate::ast::INVALID_REF;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::SelectionKind;
use crate::ast::TypeKind;
use crate::ast::ValueKind;
use crate::parse_document_from_bytes;
use crate::parse_document_from_str;
use crate::tests::utils::field_refs;
use crate::tests::utils::name_of;
use crate::tests::utils::parse_ok;
use crate::tests::utils::root_node;
use crate::tests::utils::top_level_fields;

// =============================================================================
// Entry points
// =============================================================================

#[test]
fn shorthand_query_is_an_unnamed_query() {
    let doc = parse_ok("{a}");

    assert_eq!(doc.root_nodes.len(), 1);
    let node = root_node(&doc, 0, NodeKind::OperationDefinition);
    let operation = &doc.operation_definitions[node.reference as usize];
    assert_eq!(operation.operation_type, OperationType::Query);
    assert_eq!(operation.name, None);

    let fields = top_level_fields(&doc);
    assert_eq!(fields.len(), 1);
    assert_eq!(name_of(&doc, fields[0].name), "a");
    assert_eq!(fields[0].alias, None);
    assert_eq!(fields[0].selection_set, INVALID_REF);
}

#[test]
fn bytes_and_str_entry_points_agree() {
    let source = "query Q { a b { c } }";
    let (from_str, str_report) = parse_document_from_str(source);
    let (from_bytes, bytes_report) = parse_document_from_bytes(source.as_bytes());

    assert!(!str_report.has_errors());
    assert!(!bytes_report.has_errors());
    assert_eq!(from_str.root_nodes, from_bytes.root_nodes);
    assert_eq!(from_str.fields, from_bytes.fields);
}

#[test]
fn empty_document_has_no_root_nodes() {
    let doc = parse_ok("");
    assert!(doc.root_nodes.is_empty());

    let doc = parse_ok("  # only a comment\n,,,");
    assert!(doc.root_nodes.is_empty());
}

/// A parser and a document can be reused across parses; every parse sees
/// only its own input.
#[test]
fn parser_and_document_are_reusable() {
    let mut parser = GraphQLParser::new();
    let mut doc = Document::new();
    let mut report = OperationReport::new();

    doc.reset_input_str("type A { a: Int } type B { b: Int }");
    parser.parse(&mut doc, &mut report);
    assert!(!report.has_errors());
    assert_eq!(doc.root_nodes.len(), 2);

    doc.reset_input_str("{ x }");
    report.reset();
    parser.parse(&mut doc, &mut report);
    assert!(!report.has_errors());
    assert_eq!(doc.root_nodes.len(), 1);
    assert_eq!(doc.object_type_definitions.len(), 0);
    assert!(doc.index.first_node_by_name(b"A").is_none());
    assert_eq!(name_of(&doc, doc.fields[0].name), "x");
}

// =============================================================================
// Operations
// =============================================================================

#[test]
fn named_operations_of_each_type() {
    let doc = parse_ok(
        "query Q { a }
         mutation M { b }
         subscription S { c }",
    );

    let expected = [
        (OperationType::Query, "Q"),
        (OperationType::Mutation, "M"),
        (OperationType::Subscription, "S"),
    ];
    for (i, (operation_type, name)) in expected.iter().enumerate() {
        let node = root_node(&doc, i, NodeKind::OperationDefinition);
        let operation = &doc.operation_definitions[node.reference as usize];
        assert_eq!(operation.operation_type, *operation_type);
        assert_eq!(name_of(&doc, operation.name.unwrap()), *name);
    }
}

#[test]
fn anonymous_operation_with_keyword() {
    let doc = parse_ok("mutation { like(id: 1) }");
    let operation = &doc.operation_definitions[0];
    assert_eq!(operation.operation_type, OperationType::Mutation);
    assert_eq!(operation.name, None);
}

#[test]
fn variable_definitions_with_defaults_and_directives() {
    let doc = parse_ok(
        "query Q($id: ID!, $first: Int = 10 @deprecated, $tags: [String!]) { a }",
    );

    let operation = &doc.operation_definitions[0];
    assert_eq!(operation.variable_definitions.len(), 3);

    let refs: Vec<_> = operation.variable_definitions.iter().collect();
    let id = &doc.variable_definitions[refs[0] as usize];
    assert_eq!(id.variable_value.kind, ValueKind::Variable);
    let id_name = doc.variable_values[id.variable_value.reference as usize].name;
    assert_eq!(name_of(&doc, id_name), "id");
    assert_eq!(doc.print_type(id.ty), "ID!");
    assert_eq!(id.default_value, None);

    let first = &doc.variable_definitions[refs[1] as usize];
    assert_eq!(first.default_value.unwrap().kind, ValueKind::Integer);
    assert_eq!(first.directives.len(), 1);

    let tags = &doc.variable_definitions[refs[2] as usize];
    assert_eq!(doc.print_type(tags.ty), "[String!]");
    assert_eq!(doc.types[tags.ty as usize].kind, TypeKind::List);
}

#[test]
fn operation_directives() {
    let doc = parse_ok("query Q @live @cached(ttl: 60) { a }");
    let operation = &doc.operation_definitions[0];
    let names: Vec<_> = operation
        .directives
        .iter()
        .map(|r| name_of(&doc, doc.directives[r as usize].name))
        .collect();
    assert_eq!(names, vec!["live", "cached"]);
}

/// Operations are never indexed, even when named.
#[test]
fn operations_are_not_indexed() {
    let doc = parse_ok("query Q { a } fragment F on T { b }");
    assert!(doc.index.first_node_by_name(b"Q").is_none());
    assert!(doc.index.first_node_by_name(b"F").is_none());
    assert!(doc.index.is_empty());
}

// =============================================================================
// Fragment definitions
// =============================================================================

#[test]
fn fragment_definition() {
    let doc = parse_ok("fragment UserParts on User @skip(if: false) { id name }");

    let node = root_node(&doc, 0, NodeKind::FragmentDefinition);
    let fragment = &doc.fragment_definitions[node.reference as usize];
    assert_eq!(name_of(&doc, fragment.name), "UserParts");
    assert_eq!(doc.type_name(fragment.type_condition), b"User");
    assert_eq!(fragment.directives.len(), 1);
    assert_eq!(field_refs(&doc, fragment.selection_set).len(), 2);
    assert_eq!(fragment.position.line_start, 1);
    assert_eq!(fragment.position.char_start, 1);
}

#[test]
fn mixed_executable_and_type_system_definitions() {
    let doc = parse_ok(
        "type Query { me: User }
         query { me { ...UserParts } }
         fragment UserParts on User { id }",
    );
    let kinds: Vec<_> = doc.root_nodes.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::ObjectTypeDefinition,
            NodeKind::OperationDefinition,
            NodeKind::FragmentDefinition,
        ],
    );
    assert_eq!(
        doc.selections
            .iter()
            .filter(|s| s.kind == SelectionKind::FragmentSpread)
            .count(),
        1,
    );
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn indexing_can_be_disabled() {
    let mut parser = GraphQLParser::with_options(
        GraphQLParserOptions::default().with_should_index(false),
    );
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str("schema { query: Q } type Q { a: Int }");
    parser.parse(&mut doc, &mut report);

    assert!(!report.has_errors());
    assert_eq!(doc.root_nodes.len(), 2);
    assert!(doc.index.is_empty());
    assert_eq!(doc.index.query_type_name(), None);
}

#[test]
fn default_options() {
    let options = GraphQLParserOptions::default();
    assert!(options.should_index);
    assert!(!options.report_internal_errors);
    assert_eq!(options.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    assert_eq!(GraphQLParser::default().options(), options);
}

#[test]
fn max_nesting_depth_is_configurable() {
    let nested = |depth: usize| {
        format!("{}x{}", "{ a ".repeat(depth), "}".repeat(depth))
    };
    let mut parser = GraphQLParser::with_options(
        GraphQLParserOptions::default().with_max_nesting_depth(4),
    );
    let mut doc = Document::new();
    let mut report = OperationReport::new();

    doc.reset_input_str(&nested(4));
    parser.parse(&mut doc, &mut report);
    assert!(!report.has_errors(), "{report}");

    doc.reset();
    report.reset();
    doc.reset_input_str(&nested(5));
    parser.parse(&mut doc, &mut report);
    assert_eq!(
        report.external_errors[0].message,
        "nesting depth limit exceeded: 4",
    );
}

// =============================================================================
// prepare_import
// =============================================================================

#[test]
fn prepare_import_parses_a_lone_type() {
    let mut parser = GraphQLParser::new();
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str("[[String!]!]!");

    let type_ref = parser.prepare_import(&mut doc, &mut report).parse_type();

    assert!(!report.has_errors());
    assert_eq!(doc.print_type(type_ref), "[[String!]!]!");
    assert!(doc.root_nodes.is_empty());
}

#[test]
fn prepare_import_parses_a_lone_value() {
    let mut parser = GraphQLParser::new();
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str(r#"{ name: "x", tags: [A, B] }"#);

    let value = parser.prepare_import(&mut doc, &mut report).parse_value();

    assert!(!report.has_errors());
    assert_eq!(value.kind, ValueKind::Object);
    assert_eq!(doc.object_values[value.reference as usize].refs.len(), 2);
}

#[test]
fn prepare_import_parses_a_lone_selection_set() {
    let mut parser = GraphQLParser::new();
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str("{ a b { c } }");

    let set_ref = parser
        .prepare_import(&mut doc, &mut report)
        .parse_selection_set();

    assert!(!report.has_errors());
    assert_eq!(field_refs(&doc, set_ref).len(), 2);
}

/// A session can run `parse_definitions` after hand-driven rules.
#[test]
fn prepare_import_then_parse_definitions() {
    let mut parser = GraphQLParser::new();
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str("Int type T { a: Int }");

    let mut session = parser.prepare_import(&mut doc, &mut report);
    let type_ref = session.parse_type();
    session.parse_definitions();

    assert!(!report.has_errors());
    assert_eq!(doc.type_name(type_ref), b"Int");
    assert_eq!(doc.root_nodes.len(), 1);
}
