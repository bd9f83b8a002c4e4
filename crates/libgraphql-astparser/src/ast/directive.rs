use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::RefList;
use crate::ast::Value;

/// A directive annotation such as `@include(if: $flag)`.
///
/// `arguments` refers into [`Document::arguments`](crate::ast::Document::arguments).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directive {
    pub name: ByteSpan,
    pub arguments: RefList,
    /// Position of the `@`.
    pub position: SourcePosition,
}

/// A `name: value` pair in an argument list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Argument {
    pub name: ByteSpan,
    pub value: Value,
    pub position: SourcePosition,
}
