//! Tests for value literals and type annotations.

use crate::ast::Document;
use crate::ast::TypeKind;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::tests::utils::first_error_location;
use crate::tests::utils::first_error_message;
use crate::tests::utils::name_of;
use crate::tests::utils::parse_ok;

/// Parses `{ f(v: <value>) }` and returns the document and the argument
/// value.
fn parse_argument_value(value: &str) -> (Document, Value) {
    let doc = parse_ok(&format!("{{ f(v: {value}) }}"));
    let value = doc.arguments[0].value;
    (doc, value)
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn booleans_use_ref_one_and_zero() {
    let (_, value) = parse_argument_value("true");
    assert_eq!(value.kind, ValueKind::Boolean);
    assert_eq!(value.reference, 1);
    assert_eq!(value.boolean(), Some(true));

    let (_, value) = parse_argument_value("false");
    assert_eq!(value.reference, 0);
    assert_eq!(value.boolean(), Some(false));
}

#[test]
fn null_value() {
    let (_, value) = parse_argument_value("null");
    assert_eq!(value.kind, ValueKind::Null);
    assert_eq!(value.boolean(), None);
}

#[test]
fn enum_value() {
    let (doc, value) = parse_argument_value("NEWHOPE");
    assert_eq!(value.kind, ValueKind::Enum);
    assert_eq!(name_of(&doc, doc.enum_values[value.reference as usize].name), "NEWHOPE");
}

#[test]
fn string_values() {
    let (doc, value) = parse_argument_value(r#""hello world""#);
    assert_eq!(value.kind, ValueKind::String);
    let string = doc.string_values[value.reference as usize];
    assert_eq!(name_of(&doc, string.content), "hello world");
    assert!(!string.block_string);

    let (doc, value) = parse_argument_value(r#""""block""""#);
    let string = doc.string_values[value.reference as usize];
    assert_eq!(name_of(&doc, string.content), "block");
    assert!(string.block_string);
}

#[test]
fn integers_and_floats() {
    let (doc, value) = parse_argument_value("42");
    assert_eq!(value.kind, ValueKind::Integer);
    let int = doc.int_values[value.reference as usize];
    assert!(!int.negative);
    assert_eq!(name_of(&doc, int.raw), "42");

    let (doc, value) = parse_argument_value("6.63E-34");
    assert_eq!(value.kind, ValueKind::Float);
    let float = doc.float_values[value.reference as usize];
    assert!(!float.negative);
    assert_eq!(name_of(&doc, float.raw), "6.63E-34");
}

#[test]
fn negative_numbers() {
    let (doc, value) = parse_argument_value("-13");
    assert_eq!(value.kind, ValueKind::Integer);
    let int = doc.int_values[value.reference as usize];
    assert!(int.negative);
    assert_eq!(name_of(&doc, int.raw), "13");
    // The position covers sign and digits.
    assert_eq!(value.position.char_start, 8);
    assert_eq!(value.position.char_end, 11);

    let (doc, value) = parse_argument_value("-1.5");
    assert_eq!(value.kind, ValueKind::Float);
    assert!(doc.float_values[value.reference as usize].negative);
}

/// `- 1` is two tokens that don't touch, so it isn't a number.
#[test]
fn detached_sign_is_rejected() {
    assert_eq!(
        first_error_message("{ f(v: - 1) }"),
        "unexpected token - got: INTEGER want one of: []",
    );
    assert_eq!(first_error_location("{ f(v: - 1) }"), (1, 10));
}

#[test]
fn sign_without_number_is_rejected() {
    assert_eq!(
        first_error_message("{ f(v: -x) }"),
        "unexpected token - got: IDENT want one of: [INTEGER FLOAT]",
    );
}

#[test]
fn variable_value() {
    let (doc, value) = parse_argument_value("$id");
    assert_eq!(value.kind, ValueKind::Variable);
    assert_eq!(name_of(&doc, doc.variable_values[value.reference as usize].name), "id");
    assert_eq!(value.position.char_start, 8);
    assert_eq!(value.position.char_end, 11);
}

/// `$ id` has a gap between `$` and the name.
#[test]
fn detached_variable_is_rejected() {
    assert_eq!(
        first_error_message("{ f(v: $ id) }"),
        "unexpected token - got: IDENT want one of: [IDENT]",
    );
    assert_eq!(first_error_location("{ f(v: $ id) }"), (1, 10));
}

// =============================================================================
// Lists and objects
// =============================================================================

#[test]
fn list_values() {
    let (doc, value) = parse_argument_value("[1, \"two\", [THREE], []]");
    assert_eq!(value.kind, ValueKind::List);
    let items: Vec<_> = doc.list_values[value.reference as usize]
        .refs
        .iter()
        .map(|r| doc.values[r as usize].kind)
        .collect();
    assert_eq!(
        items,
        vec![ValueKind::Integer, ValueKind::String, ValueKind::List, ValueKind::List],
    );
}

#[test]
fn object_values() {
    let (doc, value) = parse_argument_value("{ name: \"x\", nested: { deep: [$v] } }");
    assert_eq!(value.kind, ValueKind::Object);
    let fields: Vec<_> = doc.object_values[value.reference as usize]
        .refs
        .iter()
        .map(|r| doc.object_fields[r as usize])
        .collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(name_of(&doc, fields[0].name), "name");
    assert_eq!(fields[1].value.kind, ValueKind::Object);
}

#[test]
fn unterminated_list_fails() {
    assert_eq!(
        first_error_message("{ f(v: [1, 2) }"),
        "unexpected token - got: RPAREN want one of: []",
    );
}

#[test]
fn object_value_requires_names() {
    assert_eq!(
        first_error_message("{ f(v: { 1: 2 }) }"),
        "unexpected token - got: INTEGER want one of: [IDENT RBRACE]",
    );
}

#[test]
fn deeply_nested_values_are_rejected() {
    let depth = 300;
    let source = format!("{{ f(v: {}1{}) }}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(
        first_error_message(&source),
        "nesting depth limit exceeded: 256",
    );
}

// =============================================================================
// Type annotations
// =============================================================================

#[test]
fn nested_list_type_chain() {
    let doc = parse_ok("type T { f: [[String!]!]! }");
    let mut type_ref = doc.field_definitions[0].ty;

    let mut kinds = Vec::new();
    while type_ref >= 0 {
        let ty = doc.types[type_ref as usize];
        kinds.push(ty.kind);
        type_ref = ty.of_type;
    }
    assert_eq!(
        kinds,
        vec![
            TypeKind::NonNull,
            TypeKind::List,
            TypeKind::NonNull,
            TypeKind::List,
            TypeKind::NonNull,
            TypeKind::Named,
        ],
    );
    assert_eq!(doc.type_name(doc.field_definitions[0].ty), b"String");
}

#[test]
fn double_bang_is_rejected() {
    assert_eq!(
        first_error_message("type T { f: String!! }"),
        "unexpected token - got: BANG want one of: []",
    );
    assert_eq!(first_error_location("type T { f: String!! }"), (1, 20));
}

#[test]
fn type_positions_span_the_wrappers() {
    let doc = parse_ok("type T { f: [Int]! }");
    let outer = doc.types[doc.field_definitions[0].ty as usize];
    assert_eq!(outer.kind, TypeKind::NonNull);
    assert_eq!(outer.position.char_start, 13);
    assert_eq!(outer.position.char_end, 19);
}

#[test]
fn type_must_start_with_name_or_bracket() {
    assert_eq!(
        first_error_message("type T { f: !Int }"),
        "unexpected token - got: BANG want one of: [IDENT LBRACK]",
    );
}
