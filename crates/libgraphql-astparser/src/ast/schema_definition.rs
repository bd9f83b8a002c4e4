use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::OperationType;
use crate::ast::RefList;

/// `schema @directives { query: Query ... }`
///
/// See
/// [Schema](https://spec.graphql.org/October2021/#sec-Schema) in the spec.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<Description>,
    /// Refs into [`Document::directives`](crate::ast::Document::directives).
    pub directives: RefList,
    /// Refs into
    /// [`Document::root_operation_type_definitions`](crate::ast::Document::root_operation_type_definitions).
    pub root_operation_types: RefList,
    /// Position of the `schema` keyword.
    pub position: SourcePosition,
}

/// `extend schema ...`: a schema definition body behind `extend`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaExtension {
    pub schema_definition: SchemaDefinition,
    /// Position of the `extend` keyword.
    pub position: SourcePosition,
}

/// One `operation: NamedType` entry of a schema definition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootOperationTypeDefinition {
    pub operation_type: OperationType,
    pub named_type: ByteSpan,
    pub position: SourcePosition,
}
