use std::fmt;

/// Where a token sits in the source text.
///
/// # Indexing Convention
///
/// **All values are 1-based**, matching what editors display and what
/// downstream error consumers expect:
/// - `line_start`/`line_end`: line numbers (first line is 1)
/// - `char_start`: column of the first character of the token
/// - `char_end`: column one past the last character (exclusive)
///
/// Columns count characters, not bytes: a tab advances the column by 1 and
/// so does every multi-byte UTF-8 sequence. `\n`, `\r\n` and a lone `\r`
/// each start a new line.
///
/// A token that spans lines (block strings, merged comments) has
/// `line_end > line_start`, and `char_end` is then relative to `line_end`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    pub line_start: u32,
    pub char_start: u32,
    pub line_end: u32,
    pub char_end: u32,
}

impl SourcePosition {
    pub fn new(
        line_start: u32,
        char_start: u32,
        line_end: u32,
        char_end: u32,
    ) -> Self {
        Self {
            line_start,
            char_start,
            line_end,
            char_end,
        }
    }

    /// The position running from the start of `self` to the end of `end`.
    pub fn join(&self, end: &SourcePosition) -> SourcePosition {
        SourcePosition::new(self.line_start, self.char_start, end.line_end, end.char_end)
    }

    /// Returns `true` if `next` begins exactly where `self` ends, with no
    /// ignored characters between them.
    ///
    /// This is how the parser tells `-1` from `- 1` and `$var` from
    /// `$ var`: the lexer emits separate tokens for both spellings and
    /// adjacency is the only difference.
    pub fn is_adjacent_to(&self, next: &SourcePosition) -> bool {
        self.line_end == next.line_start && self.char_end == next.char_start
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_start, self.char_start)
    }
}
