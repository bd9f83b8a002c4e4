use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Document;
use crate::ast::INVALID_REF;
use crate::ast::Ref;
use crate::ast::append;

/// A type reference such as `String`, `[ID!]` or `Int!`.
///
/// Wrapper types point at their inner type through `of_type`, so
/// `[String!]!` is stored as the chain
/// `NonNull -> List -> NonNull -> Named("String")`. Every chain ends in
/// exactly one [`TypeKind::Named`], whose `of_type` is
/// [`INVALID_REF`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Type {
    pub kind: TypeKind,
    /// Only set for [`TypeKind::Named`].
    pub name: ByteSpan,
    pub of_type: Ref,
    pub position: SourcePosition,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TypeKind {
    #[default]
    Unknown,
    Named,
    List,
    NonNull,
}

// =============================================================================
// Type constructors for programmatic AST building
// =============================================================================

impl Document {
    /// Appends `name` to the input and adds a named type referring to it.
    pub fn add_named_type(&mut self, name: &[u8]) -> Ref {
        let name = self.append_input_bytes(name);
        append(
            &mut self.types,
            Type {
                kind: TypeKind::Named,
                name,
                of_type: INVALID_REF,
                position: SourcePosition::default(),
            },
        )
    }

    /// Adds `[of_type]`.
    pub fn add_list_type(&mut self, of_type: Ref) -> Ref {
        self.add_wrapping_type(TypeKind::List, of_type)
    }

    /// Adds `of_type!`.
    pub fn add_non_null_type(&mut self, of_type: Ref) -> Ref {
        self.add_wrapping_type(TypeKind::NonNull, of_type)
    }

    fn add_wrapping_type(&mut self, kind: TypeKind, of_type: Ref) -> Ref {
        append(
            &mut self.types,
            Type {
                kind,
                name: ByteSpan::default(),
                of_type,
                position: SourcePosition::default(),
            },
        )
    }
}
