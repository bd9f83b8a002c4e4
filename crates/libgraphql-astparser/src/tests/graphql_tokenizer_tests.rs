//! Tests for `GraphQLTokenizer` buffering and limit accounting.

use crate::ByteSpan;
use crate::GraphQLTokenizer;
use crate::MAX_INPUT_LEN;
use crate::SourcePosition;
use crate::TokenizerLimitError;
use crate::TokenizerLimits;
use crate::TokenizerStats;
use crate::token::GraphQLToken;
use crate::token::Keyword;
use crate::token_source::BytesGraphQLTokenSource;

fn stats_of(source: &str) -> TokenizerStats {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer
        .tokenize_with_limits(TokenizerLimits::default(), source.as_bytes())
        .unwrap()
}

fn tokenize_limited(
    source: &str,
    max_depth: usize,
    max_fields: usize,
) -> Result<TokenizerStats, TokenizerLimitError> {
    GraphQLTokenizer::new().tokenize_with_limits(
        TokenizerLimits::new(max_depth, max_fields),
        source.as_bytes(),
    )
}

// =============================================================================
// Cursor behaviour
// =============================================================================

#[test]
fn read_and_peek_walk_the_buffer() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.tokenize(b"{ a }");

    assert_eq!(tokenizer.peek().keyword, Keyword::LBrace);
    assert_eq!(tokenizer.peek_nth(1).keyword, Keyword::Ident);
    assert_eq!(tokenizer.peek_nth(2).keyword, Keyword::RBrace);
    assert_eq!(tokenizer.read().keyword, Keyword::LBrace);
    assert_eq!(tokenizer.read().keyword, Keyword::Ident);
    assert_eq!(tokenizer.read().keyword, Keyword::RBrace);
    assert_eq!(tokenizer.read().keyword, Keyword::Eof);
}

/// Reading past the end keeps returning EOF instead of failing.
#[test]
fn eof_repeats_forever() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.tokenize(b"x");
    tokenizer.read();
    for _ in 0..5 {
        assert_eq!(tokenizer.read().keyword, Keyword::Eof);
    }
    assert_eq!(tokenizer.peek_nth(100).keyword, Keyword::Eof);
}

#[test]
fn comments_are_skipped_by_default() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.tokenize(b"# leading\na # trailing\nb");

    assert_eq!(tokenizer.peek_nth(1).keyword, Keyword::Ident);
    assert_eq!(tokenizer.read().keyword, Keyword::Ident);
    assert_eq!(tokenizer.read().keyword, Keyword::Ident);
    assert_eq!(tokenizer.read().keyword, Keyword::Eof);
    assert_eq!(tokenizer.len(), 5);
}

#[test]
fn comments_are_returned_when_not_skipped() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.set_skip_comments(false);
    tokenizer.tokenize(b"# leading\na");

    assert_eq!(tokenizer.read().keyword, Keyword::Comment);
    assert_eq!(tokenizer.read().keyword, Keyword::Ident);
}

#[test]
fn reset_cursor_rewinds() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.tokenize(b"a b");
    tokenizer.read();
    tokenizer.read();
    tokenizer.reset_cursor();
    assert_eq!(tokenizer.read().literal_bytes(b"a b"), b"a");
}

/// Re-tokenizing replaces the previous buffer.
#[test]
fn tokenize_clears_previous_input() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.tokenize(b"a b c d");
    tokenizer.tokenize(b"x");
    assert_eq!(tokenizer.len(), 2);
    assert_eq!(tokenizer.read().keyword, Keyword::Ident);
    assert_eq!(tokenizer.read().keyword, Keyword::Eof);
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn stats_for_nested_selection() {
    assert_eq!(
        stats_of("{ a { b { c } } }"),
        TokenizerStats {
            total_depth: 3,
            total_fields: 3,
        }
    );
}

/// Each operation's peak depth is added to the total rather than maxed.
#[test]
fn depth_is_summed_across_operations() {
    let stats = stats_of("query A { a { b } } query B { c { d } }");
    assert_eq!(stats.total_depth, 4);
    assert_eq!(stats.total_fields, 4);
}

#[test]
fn depth_is_summed_across_fragments() {
    let stats = stats_of("fragment F on T { a } query { b { ...F } }");
    assert_eq!(stats.total_depth, 3);
}

/// The name directly after `...` is a fragment name and is not counted.
/// The type condition of an inline fragment is.
#[test]
fn fragment_names_are_not_counted_as_fields() {
    let stats = stats_of("{ a ...Frag ... on T { b } }");
    assert_eq!(stats.total_fields, 3);
    assert_eq!(stats.total_depth, 2);
}

#[test]
fn comment_between_spread_and_name_keeps_exclusion() {
    let stats = stats_of("{ ... # note\n Frag }");
    assert_eq!(stats.total_fields, 0);
}

/// Identifiers outside braces (keywords, operation names) never count.
#[test]
fn top_level_identifiers_are_not_fields() {
    let stats = stats_of("query Named($v: Int) { a }");
    assert_eq!(stats.total_fields, 1);
}

#[test]
fn plain_tokenize_zeroes_stats() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer
        .tokenize_with_limits(TokenizerLimits::default(), b"{ a }")
        .unwrap();
    tokenizer.tokenize(b"{ a }");
    assert_eq!(tokenizer.stats(), TokenizerStats::default());
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn depth_at_limit_succeeds() {
    assert!(tokenize_limited("{ a { b { c } } }", 3, 0).is_ok());
}

#[test]
fn depth_over_limit_fails() {
    assert_eq!(
        tokenize_limited("{ a { b { c } } }", 2, 0),
        Err(TokenizerLimitError::DepthLimitExceeded { limit: 2 }),
    );
}

#[test]
fn depth_limit_applies_to_cumulative_depth() {
    let source = "query A { a { b } } query B { c { d } }";
    assert!(tokenize_limited(source, 4, 0).is_ok());
    assert_eq!(
        tokenize_limited(source, 3, 0),
        Err(TokenizerLimitError::DepthLimitExceeded { limit: 3 }),
    );
}

#[test]
fn fields_at_limit_succeeds() {
    assert!(tokenize_limited("{ a b c }", 0, 3).is_ok());
}

#[test]
fn fields_over_limit_fails() {
    assert_eq!(
        tokenize_limited("{ a b c d }", 0, 3),
        Err(TokenizerLimitError::FieldsLimitExceeded { limit: 3 }),
    );
}

/// Partial stats stay observable after an abort.
#[test]
fn aborted_tokenization_keeps_partial_stats() {
    let mut tokenizer = GraphQLTokenizer::new();
    let result = tokenizer
        .tokenize_with_limits(TokenizerLimits::new(0, 2), b"{ a { b c d } }");
    assert!(result.is_err());
    assert_eq!(
        tokenizer.stats(),
        TokenizerStats {
            total_depth: 2,
            total_fields: 3,
        }
    );
}

#[test]
fn zero_limits_are_disabled() {
    let deep = format!("{}{}", "{ a ".repeat(200), "}".repeat(200));
    assert!(tokenize_limited(&deep, 0, 0).is_ok());
}

#[test]
fn limit_error_messages() {
    assert_eq!(
        TokenizerLimitError::DepthLimitExceeded { limit: 7 }.to_string(),
        "depth limit exceeded: 7",
    );
    assert_eq!(
        TokenizerLimitError::FieldsLimitExceeded { limit: 9 }.to_string(),
        "fields limit exceeded: 9",
    );
    assert_eq!(
        TokenizerLimitError::InputSizeLimitExceeded { limit: 3 }.to_string(),
        "input size limit exceeded: 3",
    );
}

#[test]
fn input_length_is_bounded_by_byte_span_offsets() {
    assert_eq!(MAX_INPUT_LEN, u32::MAX as usize);
    assert_eq!(TokenizerLimitError::check_input_len(0), Ok(()));
    assert_eq!(TokenizerLimitError::check_input_len(MAX_INPUT_LEN), Ok(()));
    if let Some(too_long) = MAX_INPUT_LEN.checked_add(1) {
        assert_eq!(
            TokenizerLimitError::check_input_len(too_long),
            Err(TokenizerLimitError::InputSizeLimitExceeded {
                limit: MAX_INPUT_LEN,
            }),
        );
    }
}

#[test]
fn limits_deserialize_with_defaults() {
    let limits: TokenizerLimits = serde_json::from_str(r#"{"max_depth": 5}"#).unwrap();
    assert_eq!(limits, TokenizerLimits::new(5, 0));
}

// =============================================================================
// Other token sources
// =============================================================================

/// A single-line token over `start..end`.
fn token_at(keyword: Keyword, start: u32, end: u32) -> GraphQLToken {
    GraphQLToken::new(
        keyword,
        ByteSpan::new(start, end),
        SourcePosition::new(1, start + 1, 1, end + 1),
    )
}

/// Tokens for `{ a { b } }`, without a trailing EOF.
fn hand_built_tokens() -> Vec<GraphQLToken> {
    vec![
        token_at(Keyword::LBrace, 0, 1),
        token_at(Keyword::Ident, 2, 3),
        token_at(Keyword::LBrace, 4, 5),
        token_at(Keyword::Ident, 6, 7),
        token_at(Keyword::RBrace, 8, 9),
        token_at(Keyword::RBrace, 10, 11),
    ]
}

#[test]
fn buffers_tokens_from_any_source() {
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.tokenize_from(hand_built_tokens().into_iter());

    assert_eq!(tokenizer.len(), 6);
    assert_eq!(tokenizer.tokens(), hand_built_tokens().as_slice());
    for expected in hand_built_tokens() {
        assert_eq!(tokenizer.read(), expected);
    }

    // The source never emitted an EOF; one is synthesized after the last
    // token.
    let eof = tokenizer.read();
    assert_eq!(eof.keyword, Keyword::Eof);
    assert_eq!(eof.literal, ByteSpan::new(11, 11));
    assert_eq!(eof.position, SourcePosition::new(1, 12, 1, 12));
}

#[test]
fn limits_apply_to_any_source() {
    let input = b"{ a { b } }";

    let mut tokenizer = GraphQLTokenizer::new();
    let stats = tokenizer.tokenize_from_with_limits(
        TokenizerLimits::new(2, 2),
        hand_built_tokens().into_iter(),
        input,
    );
    assert_eq!(
        stats,
        Ok(TokenizerStats {
            total_depth: 2,
            total_fields: 2,
        }),
    );
    assert_eq!(
        stats,
        GraphQLTokenizer::new().tokenize_with_limits(TokenizerLimits::new(2, 2), input),
    );

    let over = tokenizer.tokenize_from_with_limits(
        TokenizerLimits::new(1, 0),
        hand_built_tokens().into_iter(),
        input,
    );
    assert_eq!(over, Err(TokenizerLimitError::DepthLimitExceeded { limit: 1 }));
    assert_eq!(tokenizer.len(), 3);
}

#[test]
fn source_adapters_can_filter_tokens() {
    let input = b"{ a # note\n b }";
    let mut tokenizer = GraphQLTokenizer::new();
    tokenizer.set_skip_comments(false);
    tokenizer.tokenize_from(
        BytesGraphQLTokenSource::new(input).filter(|token| token.keyword != Keyword::Comment),
    );

    let keywords: Vec<Keyword> = tokenizer.tokens().iter().map(|token| token.keyword).collect();
    assert_eq!(
        keywords,
        vec![
            Keyword::LBrace,
            Keyword::Ident,
            Keyword::Ident,
            Keyword::RBrace,
            Keyword::Eof,
        ],
    );
}
