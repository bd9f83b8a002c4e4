use crate::ByteSpan;
use crate::SourcePosition;

/// A string or block string preceding a type-system definition.
///
/// `content` excludes the quotes; `is_block_string` records which quoting
/// was used so the description can be printed back the same way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Description {
    pub content: ByteSpan,
    pub is_block_string: bool,
    pub position: SourcePosition,
}
