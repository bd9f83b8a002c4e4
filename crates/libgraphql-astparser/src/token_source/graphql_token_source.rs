use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// Implementors produce tokens one at a time.
/// [`GraphQLTokenizer::tokenize_from`](crate::GraphQLTokenizer::tokenize_from)
/// and
/// [`tokenize_from_with_limits`](crate::GraphQLTokenizer::tokenize_from_with_limits)
/// buffer any implementor, so adapters such as `filter` over a
/// [`BytesGraphQLTokenSource`](crate::token_source::BytesGraphQLTokenSource)
/// work as sources too.
///
/// Lexers are responsible for:
/// - Skipping ignored input (whitespace, line terminators, commas, BOM)
/// - Emitting [`Keyword::Undefined`](crate::token::Keyword::Undefined) for
///   characters that start no token, so lexing never fails
/// - Emitting at most one final [`Keyword::Eof`](crate::token::Keyword::Eof)
///   token (the tokenizer answers reads past the end with its own)
pub trait GraphQLTokenSource: Iterator<Item = GraphQLToken> {}

impl<T> GraphQLTokenSource for T where T: Iterator<Item = GraphQLToken> {}
