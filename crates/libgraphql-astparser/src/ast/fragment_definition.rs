use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Ref;
use crate::ast::RefList;

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentDefinition {
    pub name: ByteSpan,
    /// Named-type ref into [`Document::types`](crate::ast::Document::types).
    pub type_condition: Ref,
    pub directives: RefList,
    pub selection_set: Ref,
    /// Position of the `fragment` keyword.
    pub position: SourcePosition,
}
