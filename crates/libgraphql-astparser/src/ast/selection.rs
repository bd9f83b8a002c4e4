use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Ref;
use crate::ast::RefList;

/// `{ selection ... }`. Never empty once parsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    /// Refs into [`Document::selections`](crate::ast::Document::selections).
    pub selection_refs: RefList,
    /// Position of the `{`.
    pub position: SourcePosition,
}

/// One entry of a [`SelectionSet`]: which arena the selection lives in and
/// where.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub kind: SelectionKind,
    pub reference: Ref,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelectionKind {
    #[default]
    Unknown,
    Field,
    FragmentSpread,
    InlineFragment,
}

/// `alias: name(args) @directives { ... }`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    pub alias: Option<ByteSpan>,
    pub name: ByteSpan,
    /// Refs into [`Document::arguments`](crate::ast::Document::arguments).
    pub arguments: RefList,
    pub directives: RefList,
    /// [`INVALID_REF`](crate::ast::INVALID_REF) for leaf fields.
    pub selection_set: Ref,
    pub position: SourcePosition,
}

impl Field {
    pub fn has_selections(&self) -> bool {
        self.selection_set >= 0
    }
}

/// `...Name @directives`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: ByteSpan,
    pub directives: RefList,
    /// Position of the `...`.
    pub position: SourcePosition,
}

/// `... on Type @directives { ... }`; the type condition is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineFragment {
    /// Named-type ref into [`Document::types`](crate::ast::Document::types),
    /// or [`INVALID_REF`](crate::ast::INVALID_REF) without a type condition.
    pub type_condition: Ref,
    pub directives: RefList,
    pub selection_set: Ref,
    /// Position of the `...`.
    pub position: SourcePosition,
}
