use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `input Name @directives { fields }`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    pub directives: RefList,
    /// Refs into
    /// [`Document::input_value_definitions`](crate::ast::Document::input_value_definitions).
    pub input_fields_definition: RefList,
    pub position: SourcePosition,
}

/// `extend input ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputObjectTypeExtension {
    pub input_object_type_definition: InputObjectTypeDefinition,
    pub position: SourcePosition,
}
