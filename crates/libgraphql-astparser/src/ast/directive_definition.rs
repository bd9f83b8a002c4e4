use std::fmt;

use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Description;
use crate::ast::RefList;

/// `directive @name(args) repeatable on LOCATION | ...`
///
/// See
/// [Type System Directives](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<Description>,
    pub name: ByteSpan,
    /// Refs into [`Document::input_value_definitions`](crate::ast::Document::input_value_definitions).
    pub arguments: RefList,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
    /// Position of the `directive` keyword.
    pub position: SourcePosition,
}

/// Where a directive may be applied. The vocabulary is closed: any other
/// location literal is rejected by the parser.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn from_literal(literal: &[u8]) -> Option<Self> {
        let location = match literal {
            b"QUERY" => DirectiveLocation::Query,
            b"MUTATION" => DirectiveLocation::Mutation,
            b"SUBSCRIPTION" => DirectiveLocation::Subscription,
            b"FIELD" => DirectiveLocation::Field,
            b"FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            b"FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            b"INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            b"VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            b"SCHEMA" => DirectiveLocation::Schema,
            b"SCALAR" => DirectiveLocation::Scalar,
            b"OBJECT" => DirectiveLocation::Object,
            b"FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            b"ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            b"INTERFACE" => DirectiveLocation::Interface,
            b"UNION" => DirectiveLocation::Union,
            b"ENUM" => DirectiveLocation::Enum,
            b"ENUM_VALUE" => DirectiveLocation::EnumValue,
            b"INPUT_OBJECT" => DirectiveLocation::InputObject,
            b"INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        };
        Some(location)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The location set of a [`DirectiveDefinition`], in declaration order with
/// duplicates dropped.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirectiveLocations {
    locations: Vec<DirectiveLocation>,
}

impl DirectiveLocations {
    /// Adds `location` unless it is already present.
    pub fn set(&mut self, location: DirectiveLocation) {
        if !self.contains(location) {
            self.locations.push(location);
        }
    }

    /// Parses `literal` as a location name and adds it. Returns `false`,
    /// leaving the set unchanged, if the name is not a known location.
    pub fn set_from_raw(&mut self, literal: &[u8]) -> bool {
        match DirectiveLocation::from_literal(literal) {
            Some(location) => {
                self.set(location);
                true
            },
            None => false,
        }
    }

    pub fn contains(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn iter(&self) -> impl Iterator<Item = DirectiveLocation> + '_ {
        self.locations.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
