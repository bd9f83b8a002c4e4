use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::Ref;
use crate::ast::RefList;

/// A field of an object or interface type: `name(args): Type @directives`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    /// Refs into
    /// [`Document::input_value_definitions`](crate::ast::Document::input_value_definitions).
    pub arguments_definition: RefList,
    /// Ref into [`Document::types`](crate::ast::Document::types).
    pub ty: Ref,
    pub directives: RefList,
    pub position: SourcePosition,
}
