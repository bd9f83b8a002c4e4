//! Random-access token buffer over any
//! [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) with
//! optional complexity limits.

use crate::ByteSpan;
use crate::SourcePosition;
use crate::TokenizerLimitError;
use crate::TokenizerLimits;
use crate::TokenizerStats;
use crate::token::GraphQLToken;
use crate::token::IdentKeyword;
use crate::token::Keyword;
use crate::token_source::BytesGraphQLTokenSource;
use crate::token_source::GraphQLTokenSource;

/// Drains a lexer into a buffer the parser can peek into arbitrarily far.
///
/// Unlike a streaming token stream, the whole input is lexed up front. This
/// lets [`tokenize_with_limits`](Self::tokenize_with_limits) reject
/// oversized documents in one linear pass before the parser allocates any
/// AST nodes, and keeps lookahead a plain index computation.
///
/// Reads and peeks past the last token return a synthetic EOF token forever.
///
/// A tokenizer is reusable: every `tokenize*` call clears the buffer
/// (keeping its capacity) and resets the cursor.
pub struct GraphQLTokenizer {
    tokens: Vec<GraphQLToken>,
    cursor: usize,
    skip_comments: bool,
    stats: TokenizerStats,
    /// Returned once the buffer is exhausted; positioned at the end of the
    /// last real token.
    eof: GraphQLToken,
}

impl GraphQLTokenizer {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            cursor: 0,
            skip_comments: true,
            stats: TokenizerStats::default(),
            eof: GraphQLToken {
                keyword: Keyword::Eof,
                ..GraphQLToken::default()
            },
        }
    }

    /// Whether [`read`](Self::read) and [`peek`](Self::peek) step over
    /// comment tokens. Enabled by default.
    pub fn set_skip_comments(&mut self, skip_comments: bool) {
        self.skip_comments = skip_comments;
    }

    /// Lexes `input` fully into the buffer without computing stats.
    pub fn tokenize(&mut self, input: &[u8]) {
        self.tokenize_from(BytesGraphQLTokenSource::new(input));
    }

    /// Drains `source` fully into the buffer without computing stats.
    pub fn tokenize_from<S: GraphQLTokenSource>(&mut self, source: S) {
        self.clear();
        self.tokens.extend(source);
        self.finish();
        log::trace!("tokenized {} tokens", self.tokens.len());
    }

    /// Lexes `input` while tracking selection-set depth and field count,
    /// aborting as soon as `limits` is exceeded.
    ///
    /// Depth accounting: `{` increments the local depth and raises the local
    /// peak, `}` decrements it. A top-level `query`, `mutation`,
    /// `subscription` or `fragment` folds the local peak into the global
    /// depth and resets both local counters. The reported depth is the
    /// global depth plus the current local peak.
    ///
    /// Field accounting: every identifier inside braces counts, except the
    /// one directly after `...` (a fragment name).
    ///
    /// On error the buffer holds the tokens lexed so far and
    /// [`stats`](Self::stats) holds the partial counters. Inputs longer than
    /// [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) are rejected before lexing.
    pub fn tokenize_with_limits(
        &mut self,
        limits: TokenizerLimits,
        input: &[u8],
    ) -> Result<TokenizerStats, TokenizerLimitError> {
        if let Err(err) = TokenizerLimitError::check_input_len(input.len()) {
            self.clear();
            self.finish();
            return Err(err);
        }
        self.tokenize_from_with_limits(limits, BytesGraphQLTokenSource::new(input), input)
    }

    /// Like [`tokenize_with_limits`](Self::tokenize_with_limits), but drains
    /// `source`. Token literals are resolved against `input` to recognize
    /// top-level definition keywords.
    pub fn tokenize_from_with_limits<S: GraphQLTokenSource>(
        &mut self,
        limits: TokenizerLimits,
        source: S,
        input: &[u8],
    ) -> Result<TokenizerStats, TokenizerLimitError> {
        self.clear();

        let mut global_depth = 0usize;
        let mut local_depth = 0usize;
        let mut local_depth_peak = 0usize;
        let mut fields_count = 0usize;
        let mut prev_keyword = Keyword::Undefined;

        let mut result = Ok(());
        for token in source {
            self.tokens.push(token);

            match token.keyword {
                Keyword::LBrace => {
                    local_depth += 1;
                    local_depth_peak = local_depth_peak.max(local_depth);
                    if limits.max_depth > 0
                        && global_depth + local_depth_peak > limits.max_depth
                    {
                        result = Err(TokenizerLimitError::DepthLimitExceeded {
                            limit: limits.max_depth,
                        });
                        break;
                    }
                },
                Keyword::RBrace => {
                    local_depth = local_depth.saturating_sub(1);
                },
                Keyword::Ident if local_depth == 0 => {
                    let ident_key =
                        IdentKeyword::from_literal(token.literal_bytes(input));
                    if ident_key.starts_executable_definition() {
                        global_depth += local_depth_peak;
                        local_depth_peak = 0;
                    }
                },
                Keyword::Ident if prev_keyword != Keyword::Spread => {
                    fields_count += 1;
                    if limits.max_fields > 0 && fields_count > limits.max_fields {
                        result = Err(TokenizerLimitError::FieldsLimitExceeded {
                            limit: limits.max_fields,
                        });
                        break;
                    }
                },
                _ => (),
            }

            if token.keyword != Keyword::Comment {
                prev_keyword = token.keyword;
            }
        }

        self.stats = TokenizerStats {
            total_depth: global_depth + local_depth_peak,
            total_fields: fields_count,
        };
        self.finish();

        match result {
            Ok(()) => {
                log::trace!(
                    "tokenized {} tokens (depth: {}, fields: {})",
                    self.tokens.len(),
                    self.stats.total_depth,
                    self.stats.total_fields,
                );
                Ok(self.stats)
            },
            Err(err) => {
                log::debug!(
                    "tokenization aborted after {} tokens: {err}",
                    self.tokens.len(),
                );
                Err(err)
            },
        }
    }

    /// Stats from the last [`tokenize_with_limits`](Self::tokenize_with_limits)
    /// call, partial if it aborted. Zeroed by [`tokenize`](Self::tokenize).
    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }

    /// Consumes and returns the next token.
    pub fn read(&mut self) -> GraphQLToken {
        self.skip_comment_tokens();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                *token
            },
            None => self.eof,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> GraphQLToken {
        self.peek_nth(0)
    }

    /// Returns the `n`th upcoming token (0-indexed) without consuming
    /// anything. Skips comments when enabled.
    pub fn peek_nth(&mut self, n: usize) -> GraphQLToken {
        self.skip_comment_tokens();
        let mut remaining = n;
        for token in self.tokens.iter().skip(self.cursor) {
            if self.skip_comments && token.keyword == Keyword::Comment {
                continue;
            }
            if remaining == 0 {
                return *token;
            }
            remaining -= 1;
        }
        self.eof
    }

    /// Rewinds the cursor to before the first token.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Number of buffered tokens, including comments and the final EOF.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All buffered tokens in input order.
    pub fn tokens(&self) -> &[GraphQLToken] {
        &self.tokens
    }

    fn clear(&mut self) {
        self.tokens.clear();
        self.cursor = 0;
        self.stats = TokenizerStats::default();
    }

    /// Positions the synthetic EOF at the end of the last lexed token.
    fn finish(&mut self) {
        let end = self.tokens.last().map(|last| {
            (last.literal.end, last.position.line_end, last.position.char_end)
        });
        let (offset, line, col) = end.unwrap_or((0, 1, 1));
        self.eof = GraphQLToken::new(
            Keyword::Eof,
            ByteSpan::new(offset, offset),
            SourcePosition::new(line, col, line, col),
        );
    }

    fn skip_comment_tokens(&mut self) {
        if !self.skip_comments {
            return;
        }
        while self
            .tokens
            .get(self.cursor)
            .is_some_and(|t| t.keyword == Keyword::Comment)
        {
            self.cursor += 1;
        }
    }
}

impl Default for GraphQLTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
