use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `union Name @directives = A | B`
///
/// A union without `=` is valid and has no members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    pub directives: RefList,
    /// Named-type refs into [`Document::types`](crate::ast::Document::types).
    pub union_member_types: RefList,
    pub position: SourcePosition,
}

/// `extend union ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnionTypeExtension {
    pub union_type_definition: UnionTypeDefinition,
    pub position: SourcePosition,
}
