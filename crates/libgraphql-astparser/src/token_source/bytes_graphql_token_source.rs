//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&[u8]` input.
//!
//! Tokens never copy input: a literal is a [`ByteSpan`] into the source
//! bytes. The input is not required to be valid UTF-8; columns are counted
//! in UTF-8 characters by skipping continuation bytes, so malformed input
//! still produces stable (if odd) positions.
//!
//! Offsets are `u32`: callers keep inputs within
//! [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) bytes, as
//! [`GraphQLParser`](crate::GraphQLParser) does.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_astparser::token::Keyword;
//! use libgraphql_astparser::token_source::BytesGraphQLTokenSource;
//!
//! let keywords: Vec<Keyword> = BytesGraphQLTokenSource::new(b"{ name }")
//!     .map(|token| token.keyword)
//!     .collect();
//! assert_eq!(
//!     keywords,
//!     vec![Keyword::LBrace, Keyword::Ident, Keyword::RBrace, Keyword::Eof],
//! );
//! ```

use crate::ByteSpan;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::Keyword;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// A lexer over a byte slice.
///
/// See module documentation for details.
pub struct BytesGraphQLTokenSource<'src> {
    /// The full input being lexed.
    source: &'src [u8],

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 1-based line number.
    curr_line: u32,

    /// Current 1-based UTF-8 character column.
    curr_col: u32,

    /// Whether the previous byte was `\r`, so that `\r\n` counts as a single
    /// line terminator.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> BytesGraphQLTokenSource<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 1,
            curr_col: 1,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src [u8] {
        self.source.get(self.curr_byte_offset..).unwrap_or_default()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.peek_byte_nth(0)
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.source.get(self.curr_byte_offset + n).copied()
    }

    /// Consumes one byte and updates line/column tracking.
    ///
    /// `\n`, `\r` and `\r\n` each end a line. UTF-8 continuation bytes do not
    /// advance the column.
    fn consume(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        match byte {
            b'\n' => {
                if self.last_char_was_cr {
                    self.last_char_was_cr = false;
                } else {
                    self.curr_line += 1;
                    self.curr_col = 1;
                }
            }
            b'\r' => {
                self.curr_line += 1;
                self.curr_col = 1;
                self.last_char_was_cr = true;
            }
            _ => {
                if !is_utf8_continuation(byte) {
                    self.curr_col += 1;
                }
                self.last_char_was_cr = false;
            }
        }
        self.curr_byte_offset += 1;
        Some(byte)
    }

    fn consume_n(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    /// Consumes the remaining bytes of a multi-byte UTF-8 character.
    fn consume_continuation_bytes(&mut self) {
        while self.peek_byte().is_some_and(is_utf8_continuation) {
            self.consume();
        }
    }

    /// Consumes bytes while `pred` holds.
    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek_byte().is_some_and(&pred) {
            self.consume();
        }
    }

    /// Builds a position from `(line, col)` recorded at the token start to the
    /// current position.
    fn make_position(&self, start: (u32, u32)) -> SourcePosition {
        SourcePosition::new(start.0, start.1, self.curr_line, self.curr_col)
    }

    /// Builds a literal span over `start..end`, trimming bytes matched by
    /// `trim` from both ends.
    fn trimmed_span(
        &self,
        mut start: usize,
        mut end: usize,
        trim: impl Fn(u8) -> bool,
    ) -> ByteSpan {
        while start < end && trim(self.source[start]) {
            start += 1;
        }
        while end > start && trim(self.source[end - 1]) {
            end -= 1;
        }
        ByteSpan::new(start as u32, end as u32)
    }

    fn make_token(
        &self,
        keyword: Keyword,
        literal_start: usize,
        start: (u32, u32),
    ) -> GraphQLToken {
        GraphQLToken::new(
            keyword,
            ByteSpan::new(literal_start as u32, self.curr_byte_offset as u32),
            self.make_position(start),
        )
    }

    /// Consumes a single-byte punctuator and returns its token.
    fn lex_punctuator(&mut self, keyword: Keyword) -> GraphQLToken {
        let start = (self.curr_line, self.curr_col);
        let literal_start = self.curr_byte_offset;
        self.consume();
        self.make_token(keyword, literal_start, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken {
        self.skip_ignored();

        let Some(byte) = self.peek_byte() else {
            let start = (self.curr_line, self.curr_col);
            return self.make_token(Keyword::Eof, self.curr_byte_offset, start);
        };

        match byte {
            b'#' => self.lex_comment(),
            b'!' => self.lex_punctuator(Keyword::Bang),
            b'$' => self.lex_punctuator(Keyword::Dollar),
            b'&' => self.lex_punctuator(Keyword::And),
            b'(' => self.lex_punctuator(Keyword::LParen),
            b')' => self.lex_punctuator(Keyword::RParen),
            b':' => self.lex_punctuator(Keyword::Colon),
            b'=' => self.lex_punctuator(Keyword::Equals),
            b'@' => self.lex_punctuator(Keyword::At),
            b'[' => self.lex_punctuator(Keyword::LBrack),
            b']' => self.lex_punctuator(Keyword::RBrack),
            b'{' => self.lex_punctuator(Keyword::LBrace),
            b'}' => self.lex_punctuator(Keyword::RBrace),
            b'|' => self.lex_punctuator(Keyword::Pipe),
            b'-' => self.lex_punctuator(Keyword::Sub),
            b'.' => self.lex_dot_or_spread(),
            b'"' => self.lex_string(),
            b if is_name_start(b) => self.lex_name(),
            b if b.is_ascii_digit() => self.lex_number(),
            _ => self.lex_undefined(),
        }
    }

    // =========================================================================
    // Ignored input
    // =========================================================================

    /// Skips whitespace, line terminators, commas and the unicode BOM.
    fn skip_ignored(&mut self) {
        loop {
            match self.peek_byte() {
                Some(b' ' | b'\t' | b'\n' | b'\r' | b',') => {
                    self.consume();
                }
                Some(0xEF) if self.remaining().starts_with(BOM) => {
                    self.consume_n(BOM.len());
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comment lexing
    // =========================================================================

    /// Lexes a comment.
    ///
    /// Comments on consecutive lines (separated only by whitespace and line
    /// terminators) merge into a single token whose literal runs from the
    /// first `#` to the end of the last comment line.
    fn lex_comment(&mut self) -> GraphQLToken {
        let start = (self.curr_line, self.curr_col);
        let literal_start = self.curr_byte_offset;

        loop {
            let line_len = memchr::memchr2(b'\n', b'\r', self.remaining())
                .unwrap_or(self.remaining().len());
            self.consume_n(line_len);

            let literal_end = self.curr_byte_offset;
            let position = self.make_position(start);

            let next_non_blank = self
                .remaining()
                .iter()
                .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
            match next_non_blank {
                Some(skip) if self.remaining()[skip] == b'#' => {
                    self.consume_n(skip);
                }
                _ => {
                    return GraphQLToken::new(
                        Keyword::Comment,
                        ByteSpan::new(literal_start as u32, literal_end as u32),
                        position,
                    );
                }
            }
        }
    }

    // =========================================================================
    // Dot / Spread lexing
    // =========================================================================

    /// `...` lexes as [`Keyword::Spread`]; any other `.` is a lone
    /// [`Keyword::Dot`].
    fn lex_dot_or_spread(&mut self) -> GraphQLToken {
        if self.remaining().starts_with(b"...") {
            let start = (self.curr_line, self.curr_col);
            let literal_start = self.curr_byte_offset;
            self.consume_n(3);
            return self.make_token(Keyword::Spread, literal_start, start);
        }
        self.lex_punctuator(Keyword::Dot)
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name matching `[_A-Za-z][_0-9A-Za-z-]*`.
    ///
    /// Reserved words are not distinguished here; see
    /// [`IdentKeyword`](crate::token::IdentKeyword).
    fn lex_name(&mut self) -> GraphQLToken {
        let start = (self.curr_line, self.curr_col);
        let literal_start = self.curr_byte_offset;
        self.consume();
        self.consume_while(is_name_continue);
        self.make_token(Keyword::Ident, literal_start, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// A sign is never part of the number: `-` always lexes as
    /// [`Keyword::Sub`]. A fractional part is `.` followed by zero or more
    /// digits (`13.` is a float) unless the `.` begins a `..` run. An
    /// exponent is only consumed when digits follow it, so `1e` lexes as an
    /// integer followed by a name.
    fn lex_number(&mut self) -> GraphQLToken {
        let start = (self.curr_line, self.curr_col);
        let literal_start = self.curr_byte_offset;
        let mut is_float = false;

        self.consume_while(|b| b.is_ascii_digit());

        if self.peek_byte() == Some(b'.') && self.peek_byte_nth(1) != Some(b'.') {
            is_float = true;
            self.consume();
            self.consume_while(|b| b.is_ascii_digit());
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            let exponent_digits_at = match self.peek_byte_nth(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if self
                .peek_byte_nth(exponent_digits_at)
                .is_some_and(|b| b.is_ascii_digit())
            {
                is_float = true;
                self.consume_n(exponent_digits_at);
                self.consume_while(|b| b.is_ascii_digit());
            }
        }

        let keyword = if is_float { Keyword::Float } else { Keyword::Integer };
        self.make_token(keyword, literal_start, start)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a single-line string.
    ///
    /// The literal excludes the quotes and is trimmed of spaces and tabs.
    /// Escape sequences are kept verbatim. An unescaped line terminator or
    /// EOF ends the string without error; the parser sees whatever was lexed.
    fn lex_string(&mut self) -> GraphQLToken {
        if self.remaining().starts_with(b"\"\"\"") {
            return self.lex_block_string();
        }

        let start = (self.curr_line, self.curr_col);
        self.consume();
        let content_start = self.curr_byte_offset;
        let mut content_end = None;

        while let Some(byte) = self.peek_byte() {
            match byte {
                b'\n' | b'\r' => break,
                b'"' => {
                    content_end = Some(self.curr_byte_offset);
                    self.consume();
                    break;
                }
                b'\\' => {
                    self.consume();
                    if self.peek_byte().is_some_and(|b| b != b'\n' && b != b'\r') {
                        self.consume();
                    }
                }
                _ => {
                    self.consume();
                }
            }
        }

        let content_end = content_end.unwrap_or(self.curr_byte_offset);
        GraphQLToken::new(
            Keyword::String,
            self.trimmed_span(content_start, content_end, |b| matches!(b, b' ' | b'\t')),
            self.make_position(start),
        )
    }

    /// Lexes a block string.
    ///
    /// The literal excludes the triple quotes and is trimmed of whitespace and
    /// line terminators. `\"""` is an escaped delimiter and does not close the
    /// string. Common indentation is not removed.
    fn lex_block_string(&mut self) -> GraphQLToken {
        let start = (self.curr_line, self.curr_col);
        self.consume_n(3);
        let content_start = self.curr_byte_offset;
        let mut content_end = None;

        loop {
            let remaining = self.remaining();
            if remaining.is_empty() {
                break;
            } else if remaining.starts_with(b"\\\"\"\"") {
                self.consume_n(4);
            } else if remaining.starts_with(b"\"\"\"") {
                content_end = Some(self.curr_byte_offset);
                self.consume_n(3);
                break;
            } else {
                self.consume();
            }
        }

        let content_end = content_end.unwrap_or(self.curr_byte_offset);
        GraphQLToken::new(
            Keyword::BlockString,
            self.trimmed_span(content_start, content_end, |b| {
                matches!(b, b' ' | b'\t' | b'\n' | b'\r')
            }),
            self.make_position(start),
        )
    }

    // =========================================================================
    // Undefined characters
    // =========================================================================

    /// Emits a single-character [`Keyword::Undefined`] token for input that
    /// starts no token. Lexing always continues.
    fn lex_undefined(&mut self) -> GraphQLToken {
        let start = (self.curr_line, self.curr_col);
        let literal_start = self.curr_byte_offset;
        self.consume();
        self.consume_continuation_bytes();
        self.make_token(Keyword::Undefined, literal_start, start)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl Iterator for BytesGraphQLTokenSource<'_> {
    type Item = GraphQLToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.keyword == Keyword::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte == b'-' || byte.is_ascii_alphanumeric()
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
