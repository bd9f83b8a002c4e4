//! Arena-backed AST for parsed GraphQL documents.
//!
//! Every entity lives in a kind-specific `Vec` owned by [`Document`] and is
//! identified by its index in that `Vec`, a [`Ref`]. Entities point at each
//! other through refs rather than references or boxes, so a whole document
//! is a handful of flat arrays that can be cleared and refilled without
//! freeing anything.
//!
//! Names and literals are [`ByteSpan`](crate::ByteSpan)s into
//! [`Document::input`]; resolve them with [`Document::input_bytes`].
//!
//! Variable-length children (arguments, directives, selections, members)
//! are held in [`RefList`]s whose storage comes from the document's
//! [`RefPool`].
//!
//! # Example
//!
//! ```rust
//! use libgraphql_astparser::ast::NodeKind;
//! use libgraphql_astparser::parse_document_from_str;
//!
//! let (doc, report) = parse_document_from_str("type Query { hello: String }");
//! assert!(!report.has_errors());
//!
//! let node = doc.index.first_node_by_name(b"Query").unwrap();
//! assert_eq!(node.kind, NodeKind::ObjectTypeDefinition);
//! assert_eq!(doc.node_name(node), b"Query");
//! ```

mod description;
mod directive;
mod directive_definition;
mod document;
mod enum_type_definition;
mod field_definition;
mod fragment_definition;
mod index;
mod input_object_type_definition;
mod input_value_definition;
mod interface_type_definition;
mod node;
mod object_type_definition;
mod operation_definition;
mod ref_list;
mod scalar_type_definition;
mod schema_definition;
mod selection;
mod type_ref;
mod union_type_definition;
mod value;

pub use description::Description;
pub use directive::Argument;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use directive_definition::DirectiveLocations;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_type_definition::EnumTypeExtension;
pub use enum_type_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use fragment_definition::FragmentDefinition;
pub use index::Index;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_object_type_definition::InputObjectTypeExtension;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use interface_type_definition::InterfaceTypeExtension;
pub use node::Node;
pub use node::NodeKind;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_type_definition::ObjectTypeExtension;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationType;
pub use operation_definition::VariableDefinition;
pub use ref_list::RefList;
pub use ref_list::RefPool;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use scalar_type_definition::ScalarTypeExtension;
pub use schema_definition::RootOperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use schema_definition::SchemaExtension;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionKind;
pub use selection::SelectionSet;
pub use type_ref::Type;
pub use type_ref::TypeKind;
pub use union_type_definition::UnionTypeDefinition;
pub use union_type_definition::UnionTypeExtension;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::ValueKind;
pub use value::VariableValue;

/// Index of an entity within one of a [`Document`]'s arenas.
///
/// A ref is only meaningful together with the document and the arena it
/// was issued for.
pub type Ref = i32;

/// Sentinel for an absent entity (e.g. a field without a selection set).
pub const INVALID_REF: Ref = -1;

/// Appends `item` to `arena` and returns its ref.
pub(crate) fn append<T>(arena: &mut Vec<T>, item: T) -> Ref {
    arena.push(item);
    (arena.len() - 1) as Ref
}

/// Looks up `reference` in `arena`; `None` for [`INVALID_REF`] or any other
/// out-of-range ref.
pub(crate) fn lookup<T>(arena: &[T], reference: Ref) -> Option<&T> {
    usize::try_from(reference).ok().and_then(|i| arena.get(i))
}

#[cfg(test)]
mod tests;
