use crate::ByteSpan;
use crate::SourcePosition;
use crate::token::Keyword;

/// A single lexed token.
///
/// Tokens are plain `Copy` data: the literal is a [`ByteSpan`] into the
/// document input rather than an owned string, so buffering a whole
/// document's tokens costs one allocation.
///
/// The literal and the position do not always cover the same text. For
/// strings the literal excludes the quotes and surrounding whitespace while
/// the position covers the raw token.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GraphQLToken {
    pub keyword: Keyword,
    pub literal: ByteSpan,
    pub position: SourcePosition,
}

impl GraphQLToken {
    pub fn new(
        keyword: Keyword,
        literal: ByteSpan,
        position: SourcePosition,
    ) -> Self {
        Self {
            keyword,
            literal,
            position,
        }
    }

    /// Resolves this token's literal against the input it was lexed from.
    pub fn literal_bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        self.literal.slice(input)
    }
}
