//! Token types produced by the lexer and buffered by the tokenizer.

mod graphql_token;
mod ident_keyword;
mod keyword;

pub use graphql_token::GraphQLToken;
pub use ident_keyword::IdentKeyword;
pub use keyword::Keyword;
