use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `interface Name implements A @directives { fields }`
///
/// Interfaces share the object type grammar, including `implements`.
///
/// See
/// [Interfaces](https://spec.graphql.org/October2021/#sec-Interfaces)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    pub implements_interfaces: RefList,
    pub directives: RefList,
    pub field_definitions: RefList,
    /// Position of the `interface` keyword.
    pub position: SourcePosition,
}

/// `extend interface ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterfaceTypeExtension {
    pub interface_type_definition: InterfaceTypeDefinition,
    pub position: SourcePosition,
}
