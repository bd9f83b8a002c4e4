use std::fmt;

use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::Value;

/// `query Name($var: Type) @directives { ... }`, or the shorthand `{ ... }`
/// (an unnamed query).
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<ByteSpan>,
    /// Refs into
    /// [`Document::variable_definitions`](crate::ast::Document::variable_definitions).
    pub variable_definitions: RefList,
    pub directives: RefList,
    /// Ref into [`Document::selection_sets`](crate::ast::Document::selection_sets).
    pub selection_set: Ref,
    pub position: SourcePosition,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OperationType {
    #[default]
    Unknown,
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Unknown => "unknown",
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableDefinition {
    /// Always a [`ValueKind::Variable`](crate::ast::ValueKind::Variable).
    pub variable_value: Value,
    pub ty: Ref,
    pub default_value: Option<Value>,
    pub directives: RefList,
    pub position: SourcePosition,
}
