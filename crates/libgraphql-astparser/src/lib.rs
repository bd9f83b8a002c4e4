//! A single-pass GraphQL tokenizer and recursive-descent parser that builds
//! an arena-indexed AST.
//!
//! Input is lexed into a token buffer first (optionally rejecting documents
//! that exceed [`TokenizerLimits`] before any AST work happens), then parsed
//! into a reusable [`ast::Document`]. Parsing stops at the first error, which
//! is recorded in an [`OperationReport`].
//!
//! ```rust
//! use libgraphql_astparser::ast::NodeKind;
//! use libgraphql_astparser::parse_document_from_str;
//!
//! let (doc, report) = parse_document_from_str("
//!     type Query { user(id: ID!): User }
//!     type User { id: ID! name: String }
//! ");
//! assert!(!report.has_errors());
//! assert_eq!(doc.root_nodes.len(), 2);
//!
//! let user = doc.index.first_node_by_name(b"User").unwrap();
//! assert_eq!(user.kind, NodeKind::ObjectTypeDefinition);
//! ```

pub mod ast;
mod byte_span;
mod document_printer;
mod error_origin;
mod external_error;
mod graphql_parse_error;
mod graphql_parser;
mod graphql_parser_options;
mod graphql_tokenizer;
mod operation_report;
mod parse_session;
mod source_position;
pub mod token;
pub mod token_source;
mod tokenizer_limit_error;
mod tokenizer_limits;
mod tokenizer_stats;

pub use byte_span::ByteSpan;
pub use byte_span::MAX_INPUT_LEN;
pub use document_printer::DocumentPrinter;
pub use document_printer::print_document;
pub use error_origin::ErrorOrigin;
pub use external_error::ErrorLocation;
pub use external_error::ExternalError;
pub use graphql_parse_error::ErrorOrigins;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse_document_from_bytes;
pub use graphql_parser::parse_document_from_str;
pub use graphql_parser_options::DEFAULT_MAX_NESTING_DEPTH;
pub use graphql_parser_options::GraphQLParserOptions;
pub use graphql_tokenizer::GraphQLTokenizer;
pub use operation_report::OperationReport;
pub use parse_session::ParseSession;
pub use source_position::SourcePosition;
pub use tokenizer_limit_error::TokenizerLimitError;
pub use tokenizer_limits::TokenizerLimits;
pub use tokenizer_stats::TokenizerStats;

#[cfg(test)]
mod tests;
