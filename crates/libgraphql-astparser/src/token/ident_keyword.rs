use std::fmt;

/// Classification of an identifier literal.
///
/// GraphQL has no reserved words at the lexical level: `type`, `query` and
/// `on` are all ordinary names in most positions. The parser classifies an
/// identifier only where the grammar branches on it (top-level dispatch,
/// type conditions, `implements`, `repeatable`, boolean/null values).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum IdentKeyword {
    /// Any identifier that is not one of the words below.
    #[default]
    Undefined,
    On,
    True,
    False,
    Null,
    Query,
    Mutation,
    Subscription,
    Fragment,
    Implements,
    Schema,
    Scalar,
    Type,
    Interface,
    Union,
    Enum,
    Input,
    Directive,
    Extend,
    Repeatable,
}

impl IdentKeyword {
    /// Classifies an identifier literal. Matching is case-sensitive.
    pub fn from_literal(literal: &[u8]) -> Self {
        match literal {
            b"on" => IdentKeyword::On,
            b"true" => IdentKeyword::True,
            b"false" => IdentKeyword::False,
            b"null" => IdentKeyword::Null,
            b"query" => IdentKeyword::Query,
            b"mutation" => IdentKeyword::Mutation,
            b"subscription" => IdentKeyword::Subscription,
            b"fragment" => IdentKeyword::Fragment,
            b"implements" => IdentKeyword::Implements,
            b"schema" => IdentKeyword::Schema,
            b"scalar" => IdentKeyword::Scalar,
            b"type" => IdentKeyword::Type,
            b"interface" => IdentKeyword::Interface,
            b"union" => IdentKeyword::Union,
            b"enum" => IdentKeyword::Enum,
            b"input" => IdentKeyword::Input,
            b"directive" => IdentKeyword::Directive,
            b"extend" => IdentKeyword::Extend,
            b"repeatable" => IdentKeyword::Repeatable,
            _ => IdentKeyword::Undefined,
        }
    }

    /// Returns `true` for the words that open an executable definition at the
    /// top level of a document. The tokenizer uses these to delimit the
    /// per-definition depth accounting.
    pub fn starts_executable_definition(&self) -> bool {
        matches!(
            self,
            IdentKeyword::Query
                | IdentKeyword::Mutation
                | IdentKeyword::Subscription
                | IdentKeyword::Fragment
        )
    }

    /// The uppercase diagnostic name of this keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentKeyword::Undefined => "UNDEFINED",
            IdentKeyword::On => "ON",
            IdentKeyword::True => "TRUE",
            IdentKeyword::False => "FALSE",
            IdentKeyword::Null => "NULL",
            IdentKeyword::Query => "QUERY",
            IdentKeyword::Mutation => "MUTATION",
            IdentKeyword::Subscription => "SUBSCRIPTION",
            IdentKeyword::Fragment => "FRAGMENT",
            IdentKeyword::Implements => "IMPLEMENTS",
            IdentKeyword::Schema => "SCHEMA",
            IdentKeyword::Scalar => "SCALAR",
            IdentKeyword::Type => "TYPE",
            IdentKeyword::Interface => "INTERFACE",
            IdentKeyword::Union => "UNION",
            IdentKeyword::Enum => "ENUM",
            IdentKeyword::Input => "INPUT",
            IdentKeyword::Directive => "DIRECTIVE",
            IdentKeyword::Extend => "EXTEND",
            IdentKeyword::Repeatable => "REPEATABLE",
        }
    }
}

impl fmt::Display for IdentKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
