use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `scalar Name @directives`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    pub directives: RefList,
    pub position: SourcePosition,
}

/// `extend scalar ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarTypeExtension {
    pub scalar_type_definition: ScalarTypeDefinition,
    pub position: SourcePosition,
}
