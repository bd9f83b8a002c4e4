use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    pub directives: RefList,
    /// Refs into
    /// [`Document::enum_value_definitions`](crate::ast::Document::enum_value_definitions).
    pub enum_values_definition: RefList,
    pub position: SourcePosition,
}

/// `extend enum ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumTypeExtension {
    pub enum_type_definition: EnumTypeDefinition,
    pub position: SourcePosition,
}

/// A single member of an enum, with its own description and directives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<Description>,
    pub enum_value: ByteSpan,
    pub directives: RefList,
    pub position: SourcePosition,
}
