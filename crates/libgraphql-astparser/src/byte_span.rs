/// Longest input, in bytes, whose offsets fit a [`ByteSpan`].
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Compact byte-offset span. 8 bytes per token.
///
/// Represents a half-open interval `[start, end)` of byte offsets into a
/// [`Document`](crate::ast::Document)'s input. Both offsets are 0-based.
///
/// Tokens and AST entities never copy text out of the input; they keep a
/// `ByteSpan` and resolve it against the owning document on demand.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct ByteSpan {
    /// Byte offset of the first byte (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolves this span against `input`.
    ///
    /// Out-of-range spans (e.g. a span from a different document) resolve to
    /// an empty slice rather than panicking.
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        input
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}
