use std::fmt::Write;

use smallvec::SmallVec;

use crate::ErrorOrigin;
use crate::SourcePosition;
use crate::token::IdentKeyword;
use crate::token::Keyword;

/// Call-site frames attached to an internal diagnostic. At most three are
/// kept.
pub type ErrorOrigins = SmallVec<[ErrorOrigin; 3]>;

/// Detailed diagnostic for debugging the parser itself.
///
/// These are only recorded when
/// [`GraphQLParserOptions::report_internal_errors`](crate::GraphQLParserOptions::report_internal_errors)
/// is enabled. Users of the parser see the matching
/// [`ExternalError`](crate::ExternalError) instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseError {
    #[error(
        "unexpected token - keyword: '{keyword}' literal: '{literal}' - expected: '{}' position: '{position}'{}",
        format_list(.expected),
        format_origins(.origins)
    )]
    UnexpectedToken {
        keyword: Keyword,
        literal: String,
        expected: Vec<Keyword>,
        position: SourcePosition,
        origins: ErrorOrigins,
    },

    #[error(
        "unexpected ident - keyword: '{ident_key}' literal: '{literal}' - expected: '{}' position: '{position}'{}",
        format_list(.expected),
        format_origins(.origins)
    )]
    UnexpectedIdentKey {
        ident_key: IdentKeyword,
        literal: String,
        expected: Vec<IdentKeyword>,
        position: SourcePosition,
        origins: ErrorOrigins,
    },

    #[error("invalid directive location: {literal} position: '{position}'")]
    InvalidDirectiveLocation {
        literal: String,
        position: SourcePosition,
    },
}

/// Formats `items` the way diagnostics list expected keywords:
/// `[A B C]`.
pub(crate) fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

fn format_origins(origins: &[ErrorOrigin]) -> String {
    let mut out = String::new();
    for origin in origins {
        let _ = write!(out, "\n\t\t{origin}");
    }
    out
}
