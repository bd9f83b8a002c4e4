use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `type Name implements A & B @directives { fields }`
///
/// See
/// [Objects](https://spec.graphql.org/October2021/#sec-Objects)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    /// Named-type refs into [`Document::types`](crate::ast::Document::types).
    pub implements_interfaces: RefList,
    /// Refs into [`Document::directives`](crate::ast::Document::directives).
    pub directives: RefList,
    /// Refs into
    /// [`Document::field_definitions`](crate::ast::Document::field_definitions).
    pub field_definitions: RefList,
    /// Position of the `type` keyword.
    pub position: SourcePosition,
}

/// `extend type ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectTypeExtension {
    pub object_type_definition: ObjectTypeDefinition,
    /// Position of the `extend` keyword.
    pub position: SourcePosition,
}
