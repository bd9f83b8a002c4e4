use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::Value;

/// An argument definition or input object field:
/// `name: Type = default @directives`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    pub ty: Ref,
    pub default_value: Option<Value>,
    pub directives: RefList,
    pub position: SourcePosition,
}
