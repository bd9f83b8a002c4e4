use std::fmt;

use crate::ast::INVALID_REF;
use crate::ast::Ref;

/// A top-level definition: which arena it lives in and where.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub reference: Ref,
}

impl Node {
    pub fn new(kind: NodeKind, reference: Ref) -> Self {
        Self { kind, reference }
    }

    /// Returns `true` for the `extend ...` kinds.
    pub fn is_extension_kind(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::SchemaExtension
                | NodeKind::ObjectTypeExtension
                | NodeKind::InterfaceTypeExtension
                | NodeKind::UnionTypeExtension
                | NodeKind::EnumTypeExtension
                | NodeKind::ScalarTypeExtension
                | NodeKind::InputObjectTypeExtension
        )
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(NodeKind::Unknown, INVALID_REF)
    }
}

/// Selects the [`Document`](crate::ast::Document) arena a [`Node`] refers
/// into.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NodeKind {
    #[default]
    Unknown,
    SchemaDefinition,
    SchemaExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
    EnumTypeDefinition,
    EnumTypeExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    DirectiveDefinition,
    OperationDefinition,
    FragmentDefinition,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Unknown => "Unknown",
            NodeKind::SchemaDefinition => "SchemaDefinition",
            NodeKind::SchemaExtension => "SchemaExtension",
            NodeKind::ObjectTypeDefinition => "ObjectTypeDefinition",
            NodeKind::ObjectTypeExtension => "ObjectTypeExtension",
            NodeKind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            NodeKind::InterfaceTypeExtension => "InterfaceTypeExtension",
            NodeKind::UnionTypeDefinition => "UnionTypeDefinition",
            NodeKind::UnionTypeExtension => "UnionTypeExtension",
            NodeKind::EnumTypeDefinition => "EnumTypeDefinition",
            NodeKind::EnumTypeExtension => "EnumTypeExtension",
            NodeKind::ScalarTypeDefinition => "ScalarTypeDefinition",
            NodeKind::ScalarTypeExtension => "ScalarTypeExtension",
            NodeKind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            NodeKind::InputObjectTypeExtension => "InputObjectTypeExtension",
            NodeKind::DirectiveDefinition => "DirectiveDefinition",
            NodeKind::OperationDefinition => "OperationDefinition",
            NodeKind::FragmentDefinition => "FragmentDefinition",
        };
        f.write_str(name)
    }
}
