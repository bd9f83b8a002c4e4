use std::fmt;

use serde::Serialize;

use crate::SourcePosition;
use crate::TokenizerLimitError;
use crate::graphql_parse_error::format_list;
use crate::token::IdentKeyword;
use crate::token::Keyword;

/// A user-facing diagnostic, shaped like a GraphQL response error.
///
/// Serializes as `{"message": ..., "path": [...], "locations": [...]}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ExternalError {
    pub message: String,
    pub path: Vec<String>,
    pub locations: Vec<ErrorLocation>,
}

/// A 1-based line/column pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

impl ExternalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attaches the start of `position` as this error's location.
    pub fn at(mut self, position: SourcePosition) -> Self {
        self.locations.push(ErrorLocation::from(position));
        self
    }

    pub fn unexpected_token(
        got: Keyword,
        expected: &[Keyword],
        position: SourcePosition,
    ) -> Self {
        Self::new(format!(
            "unexpected token - got: {got} want one of: {}",
            format_list(expected),
        ))
        .at(position)
    }

    pub fn unexpected_ident_key(
        got: IdentKeyword,
        expected: &[IdentKeyword],
        position: SourcePosition,
    ) -> Self {
        Self::new(format!(
            "unexpected literal - got: {got} want one of: {}",
            format_list(expected),
        ))
        .at(position)
    }

    pub fn invalid_directive_location(literal: &str, position: SourcePosition) -> Self {
        Self::new(format!("invalid directive location: {literal}")).at(position)
    }

    pub fn nesting_too_deep(limit: usize, position: SourcePosition) -> Self {
        Self::new(format!("nesting depth limit exceeded: {limit}")).at(position)
    }

    /// A limit violation has no location: it describes the whole document.
    pub fn limit_exceeded(err: &TokenizerLimitError) -> Self {
        Self::new(err.to_string())
    }

    /// The error in the single-line report format:
    /// `<message>, locations: [{Line:L Column:C}], path: [a,b]`.
    pub fn format_report_line(&self) -> String {
        format!(
            "{}, locations: {}, path: [{}]",
            self.message,
            format_list(&self.locations),
            self.path.join(","),
        )
    }
}

impl From<SourcePosition> for ErrorLocation {
    fn from(position: SourcePosition) -> Self {
        Self {
            line: position.line_start,
            column: position.char_start,
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Line:{} Column:{}}}", self.line, self.column)
    }
}
