//! Token source trait and the byte-slice lexer.

mod bytes_graphql_token_source;
mod graphql_token_source;

pub use bytes_graphql_token_source::BytesGraphQLTokenSource;
pub use graphql_token_source::GraphQLTokenSource;
