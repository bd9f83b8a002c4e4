use std::borrow::Cow;

use crate::ByteSpan;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Index;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListValue;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::Ref;
use crate::ast::RefPool;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeKind;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;
use crate::ast::lookup;

/// A parsed GraphQL document: the input bytes plus one arena per entity
/// kind.
///
/// Entities are only ever appended while parsing. [`Document::reset`]
/// empties every arena (keeping capacity and pooled list buffers), so one
/// document can be reused across many parses without reallocating.
///
/// A document must not be handed to more than one parse at a time; the
/// borrow checker enforces this since parsing takes `&mut Document`.
#[derive(Debug, Default)]
pub struct Document {
    /// The source text. Every [`ByteSpan`] in the arenas points into this.
    pub input: Vec<u8>,

    /// Top-level definitions in source order.
    pub root_nodes: Vec<Node>,

    pub schema_definitions: Vec<SchemaDefinition>,
    pub schema_extensions: Vec<SchemaExtension>,
    pub root_operation_type_definitions: Vec<RootOperationTypeDefinition>,
    pub directives: Vec<Directive>,
    pub arguments: Vec<Argument>,
    pub object_type_definitions: Vec<ObjectTypeDefinition>,
    pub object_type_extensions: Vec<ObjectTypeExtension>,
    pub interface_type_definitions: Vec<InterfaceTypeDefinition>,
    pub interface_type_extensions: Vec<InterfaceTypeExtension>,
    pub union_type_definitions: Vec<UnionTypeDefinition>,
    pub union_type_extensions: Vec<UnionTypeExtension>,
    pub enum_type_definitions: Vec<EnumTypeDefinition>,
    pub enum_type_extensions: Vec<EnumTypeExtension>,
    pub enum_value_definitions: Vec<EnumValueDefinition>,
    pub scalar_type_definitions: Vec<ScalarTypeDefinition>,
    pub scalar_type_extensions: Vec<ScalarTypeExtension>,
    pub input_object_type_definitions: Vec<InputObjectTypeDefinition>,
    pub input_object_type_extensions: Vec<InputObjectTypeExtension>,
    pub field_definitions: Vec<FieldDefinition>,
    pub input_value_definitions: Vec<InputValueDefinition>,
    pub directive_definitions: Vec<DirectiveDefinition>,
    pub types: Vec<Type>,
    /// List items. Other values are stored inline in their parent.
    pub values: Vec<Value>,
    pub string_values: Vec<StringValue>,
    pub int_values: Vec<IntValue>,
    pub float_values: Vec<FloatValue>,
    pub enum_values: Vec<EnumValue>,
    pub variable_values: Vec<VariableValue>,
    pub list_values: Vec<ListValue>,
    pub object_values: Vec<ObjectValue>,
    pub object_fields: Vec<ObjectField>,
    pub selection_sets: Vec<SelectionSet>,
    pub selections: Vec<Selection>,
    pub fields: Vec<Field>,
    pub fragment_spreads: Vec<FragmentSpread>,
    pub inline_fragments: Vec<InlineFragment>,
    pub operation_definitions: Vec<OperationDefinition>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub fragment_definitions: Vec<FragmentDefinition>,

    pub index: Index,
    pub ref_pool: RefPool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the document for reuse.
    ///
    /// Every ref-list buffer goes back to [`Document::ref_pool`]; arenas and
    /// the input keep their capacity.
    pub fn reset(&mut self) {
        let pool = &mut self.ref_pool;
        recycle_all(&mut self.schema_definitions, pool);
        recycle_all(&mut self.schema_extensions, pool);
        recycle_all(&mut self.directives, pool);
        recycle_all(&mut self.object_type_definitions, pool);
        recycle_all(&mut self.object_type_extensions, pool);
        recycle_all(&mut self.interface_type_definitions, pool);
        recycle_all(&mut self.interface_type_extensions, pool);
        recycle_all(&mut self.union_type_definitions, pool);
        recycle_all(&mut self.union_type_extensions, pool);
        recycle_all(&mut self.enum_type_definitions, pool);
        recycle_all(&mut self.enum_type_extensions, pool);
        recycle_all(&mut self.enum_value_definitions, pool);
        recycle_all(&mut self.scalar_type_definitions, pool);
        recycle_all(&mut self.scalar_type_extensions, pool);
        recycle_all(&mut self.input_object_type_definitions, pool);
        recycle_all(&mut self.input_object_type_extensions, pool);
        recycle_all(&mut self.field_definitions, pool);
        recycle_all(&mut self.input_value_definitions, pool);
        recycle_all(&mut self.directive_definitions, pool);
        recycle_all(&mut self.list_values, pool);
        recycle_all(&mut self.object_values, pool);
        recycle_all(&mut self.selection_sets, pool);
        recycle_all(&mut self.fields, pool);
        recycle_all(&mut self.fragment_spreads, pool);
        recycle_all(&mut self.inline_fragments, pool);
        recycle_all(&mut self.operation_definitions, pool);
        recycle_all(&mut self.variable_definitions, pool);
        recycle_all(&mut self.fragment_definitions, pool);

        self.input.clear();
        self.root_nodes.clear();
        self.root_operation_type_definitions.clear();
        self.arguments.clear();
        self.types.clear();
        self.values.clear();
        self.string_values.clear();
        self.int_values.clear();
        self.float_values.clear();
        self.enum_values.clear();
        self.variable_values.clear();
        self.object_fields.clear();
        self.selections.clear();
        self.index.reset();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Resets the document and replaces its input.
    pub fn reset_input_str(&mut self, input: &str) {
        self.reset_input_bytes(input.as_bytes());
    }

    /// Resets the document and replaces its input.
    ///
    /// Byte offsets are stored as `u32`, so the parser only accepts inputs of
    /// up to [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) bytes and reports
    /// anything longer instead of parsing it.
    pub fn reset_input_bytes(&mut self, input: &[u8]) {
        self.reset();
        self.input.extend_from_slice(input);
    }

    /// Appends `bytes` to the input and returns the span they occupy. Used to
    /// give programmatically added entities a name to point at.
    ///
    /// Offsets past [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) saturate at it.
    pub fn append_input_bytes(&mut self, bytes: &[u8]) -> ByteSpan {
        let start = u32::try_from(self.input.len()).unwrap_or(u32::MAX);
        self.input.extend_from_slice(bytes);
        let end = u32::try_from(self.input.len()).unwrap_or(u32::MAX);
        ByteSpan::new(start, end)
    }

    pub fn input_bytes(&self, span: ByteSpan) -> &[u8] {
        span.slice(&self.input)
    }

    /// The text under `span`, with invalid UTF-8 replaced.
    pub fn input_str(&self, span: ByteSpan) -> Cow<'_, str> {
        String::from_utf8_lossy(self.input_bytes(span))
    }

    // =========================================================================
    // Names and types
    // =========================================================================

    /// The name of a top-level definition.
    ///
    /// Schema definitions and extensions are named `schema`, matching how
    /// they are indexed; anonymous operations have an empty name.
    pub fn node_name(&self, node: Node) -> &[u8] {
        let span = match node.kind {
            NodeKind::Unknown => None,
            NodeKind::SchemaDefinition | NodeKind::SchemaExtension => {
                return b"schema";
            },
            NodeKind::ObjectTypeDefinition => {
                lookup(&self.object_type_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::ObjectTypeExtension => {
                lookup(&self.object_type_extensions, node.reference)
                    .map(|e| e.object_type_definition.name)
            },
            NodeKind::InterfaceTypeDefinition => {
                lookup(&self.interface_type_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::InterfaceTypeExtension => {
                lookup(&self.interface_type_extensions, node.reference)
                    .map(|e| e.interface_type_definition.name)
            },
            NodeKind::UnionTypeDefinition => {
                lookup(&self.union_type_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::UnionTypeExtension => {
                lookup(&self.union_type_extensions, node.reference)
                    .map(|e| e.union_type_definition.name)
            },
            NodeKind::EnumTypeDefinition => {
                lookup(&self.enum_type_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::EnumTypeExtension => {
                lookup(&self.enum_type_extensions, node.reference)
                    .map(|e| e.enum_type_definition.name)
            },
            NodeKind::ScalarTypeDefinition => {
                lookup(&self.scalar_type_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::ScalarTypeExtension => {
                lookup(&self.scalar_type_extensions, node.reference)
                    .map(|e| e.scalar_type_definition.name)
            },
            NodeKind::InputObjectTypeDefinition => {
                lookup(&self.input_object_type_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::InputObjectTypeExtension => {
                lookup(&self.input_object_type_extensions, node.reference)
                    .map(|e| e.input_object_type_definition.name)
            },
            NodeKind::DirectiveDefinition => {
                lookup(&self.directive_definitions, node.reference).map(|d| d.name)
            },
            NodeKind::OperationDefinition => {
                lookup(&self.operation_definitions, node.reference).and_then(|d| d.name)
            },
            NodeKind::FragmentDefinition => {
                lookup(&self.fragment_definitions, node.reference).map(|d| d.name)
            },
        };
        span.map(|span| self.input_bytes(span)).unwrap_or_default()
    }

    /// The name at the bottom of a type chain: `String` for `[String!]!`.
    pub fn type_name(&self, type_ref: Ref) -> &[u8] {
        let mut current = type_ref;
        // A chain can't be longer than the arena; the bound keeps a
        // hand-built cycle from looping forever.
        for _ in 0..=self.types.len() {
            let Some(ty) = lookup(&self.types, current) else {
                break;
            };
            if ty.kind == TypeKind::Named {
                return self.input_bytes(ty.name);
            }
            current = ty.of_type;
        }
        &[]
    }

    /// Renders a type chain as GraphQL text, e.g. `[String!]!`.
    pub fn print_type(&self, type_ref: Ref) -> String {
        let mut out = String::new();
        self.write_type(type_ref, &mut out, self.types.len());
        out
    }

    fn write_type(&self, type_ref: Ref, out: &mut String, depth_budget: usize) {
        let Some(ty) = lookup(&self.types, type_ref) else {
            return;
        };
        match ty.kind {
            TypeKind::Named => out.push_str(&self.input_str(ty.name)),
            _ if depth_budget == 0 => (),
            TypeKind::List => {
                out.push('[');
                self.write_type(ty.of_type, out, depth_budget - 1);
                out.push(']');
            },
            TypeKind::NonNull => {
                self.write_type(ty.of_type, out, depth_budget - 1);
                out.push('!');
            },
            TypeKind::Unknown => (),
        }
    }

    /// Records a top-level definition in source order.
    pub(crate) fn add_root_node(&mut self, node: Node) {
        self.root_nodes.push(node);
    }
}

// =============================================================================
// Ref-list recycling
// =============================================================================

/// Entities that own [`RefList`](crate::ast::RefList)s hand their buffers
/// back to the pool on reset.
trait RecycleRefLists {
    fn recycle_ref_lists(self, pool: &mut RefPool);
}

fn recycle_all<T: RecycleRefLists>(arena: &mut Vec<T>, pool: &mut RefPool) {
    for item in arena.drain(..) {
        item.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for SchemaDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
        pool.recycle(self.root_operation_types);
    }
}

impl RecycleRefLists for SchemaExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.schema_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for Directive {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.arguments);
    }
}

impl RecycleRefLists for ObjectTypeDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.implements_interfaces);
        pool.recycle(self.directives);
        pool.recycle(self.field_definitions);
    }
}

impl RecycleRefLists for ObjectTypeExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.object_type_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for InterfaceTypeDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.implements_interfaces);
        pool.recycle(self.directives);
        pool.recycle(self.field_definitions);
    }
}

impl RecycleRefLists for InterfaceTypeExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.interface_type_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for UnionTypeDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
        pool.recycle(self.union_member_types);
    }
}

impl RecycleRefLists for UnionTypeExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.union_type_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for EnumTypeDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
        pool.recycle(self.enum_values_definition);
    }
}

impl RecycleRefLists for EnumTypeExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.enum_type_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for EnumValueDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for ScalarTypeDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for ScalarTypeExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.scalar_type_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for InputObjectTypeDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
        pool.recycle(self.input_fields_definition);
    }
}

impl RecycleRefLists for InputObjectTypeExtension {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        self.input_object_type_definition.recycle_ref_lists(pool);
    }
}

impl RecycleRefLists for FieldDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.arguments_definition);
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for InputValueDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for DirectiveDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.arguments);
    }
}

impl RecycleRefLists for ListValue {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.refs);
    }
}

impl RecycleRefLists for ObjectValue {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.refs);
    }
}

impl RecycleRefLists for SelectionSet {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.selection_refs);
    }
}

impl RecycleRefLists for Field {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.arguments);
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for FragmentSpread {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for InlineFragment {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for OperationDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.variable_definitions);
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for VariableDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}

impl RecycleRefLists for FragmentDefinition {
    fn recycle_ref_lists(self, pool: &mut RefPool) {
        pool.recycle(self.directives);
    }
}
