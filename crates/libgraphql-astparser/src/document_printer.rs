//! Serializes a [`Document`] back to GraphQL source text.
//!
//! Output is compact: single spaces between tokens, `, ` between
//! arguments, variable definitions and list/object items, and one space
//! between root definitions. No space is put between `)` or `...` and a
//! following `{`. Reparsing the output and printing again yields the same
//! text.

use crate::ByteSpan;
use crate::ast::Description;
use crate::ast::DirectiveLocations;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SelectionKind;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::ast::lookup;

/// Prints `doc`'s root nodes in source order.
///
/// ```rust
/// use libgraphql_astparser::parse_document_from_str;
/// use libgraphql_astparser::print_document;
///
/// let (doc, report) = parse_document_from_str("
///     query Hero($episode: Episode = JEDI) {
///         hero(episode: $episode) { name }
///     }
/// ");
/// assert!(!report.has_errors());
/// assert_eq!(
///     print_document(&doc),
///     "query Hero($episode: Episode = JEDI){hero(episode: $episode){name}}",
/// );
/// ```
pub fn print_document(doc: &Document) -> String {
    DocumentPrinter::new(doc).print()
}

/// Walks a [`Document`]'s arenas, writing GraphQL text into a `String`.
///
/// Dangling refs (e.g. left behind by a parse that stopped at an error)
/// are skipped rather than treated as errors.
pub struct DocumentPrinter<'a> {
    doc: &'a Document,
    out: String,
}

impl<'a> DocumentPrinter<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            out: String::with_capacity(doc.input.len()),
        }
    }

    /// Prints every root node and returns the text.
    pub fn print(mut self) -> String {
        for (i, node) in self.doc.root_nodes.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.print_node(*node);
        }
        self.out
    }

    /// Prints a single top-level definition and returns the text.
    pub fn print_node_to_string(mut self, node: Node) -> String {
        self.print_node(node);
        self.out
    }

    /// Returns everything printed so far.
    pub fn finish(self) -> String {
        self.out
    }

    fn print_node(&mut self, node: Node) {
        let doc = self.doc;
        match node.kind {
            NodeKind::Unknown => (),
            NodeKind::OperationDefinition => self.print_operation_definition(node.reference),
            NodeKind::FragmentDefinition => self.print_fragment_definition(node.reference),
            NodeKind::SchemaDefinition => {
                if let Some(definition) = lookup(&doc.schema_definitions, node.reference) {
                    self.print_schema(definition);
                }
            },
            NodeKind::SchemaExtension => {
                if let Some(extension) = lookup(&doc.schema_extensions, node.reference) {
                    self.out.push_str("extend ");
                    self.print_schema(&extension.schema_definition);
                }
            },
            NodeKind::ObjectTypeDefinition => {
                if let Some(definition) = lookup(&doc.object_type_definitions, node.reference) {
                    self.print_object_type(definition);
                }
            },
            NodeKind::ObjectTypeExtension => {
                if let Some(extension) = lookup(&doc.object_type_extensions, node.reference) {
                    self.out.push_str("extend ");
                    self.print_object_type(&extension.object_type_definition);
                }
            },
            NodeKind::InterfaceTypeDefinition => {
                if let Some(definition) = lookup(&doc.interface_type_definitions, node.reference) {
                    self.print_interface_type(definition);
                }
            },
            NodeKind::InterfaceTypeExtension => {
                if let Some(extension) = lookup(&doc.interface_type_extensions, node.reference) {
                    self.out.push_str("extend ");
                    self.print_interface_type(&extension.interface_type_definition);
                }
            },
            NodeKind::UnionTypeDefinition => {
                if let Some(definition) = lookup(&doc.union_type_definitions, node.reference) {
                    self.print_union_type(definition);
                }
            },
            NodeKind::UnionTypeExtension => {
                if let Some(extension) = lookup(&doc.union_type_extensions, node.reference) {
                    self.out.push_str("extend ");
                    self.print_union_type(&extension.union_type_definition);
                }
            },
            NodeKind::EnumTypeDefinition => {
                if let Some(definition) = lookup(&doc.enum_type_definitions, node.reference) {
                    self.print_enum_type(definition);
                }
            },
            NodeKind::EnumTypeExtension => {
                if let Some(extension) = lookup(&doc.enum_type_extensions, node.reference) {
                    self.out.push_str("extend ");
                    self.print_enum_type(&extension.enum_type_definition);
                }
            },
            NodeKind::ScalarTypeDefinition => {
                if let Some(definition) = lookup(&doc.scalar_type_definitions, node.reference) {
                    self.print_scalar_type(definition);
                }
            },
            NodeKind::ScalarTypeExtension => {
                if let Some(extension) = lookup(&doc.scalar_type_extensions, node.reference) {
                    self.out.push_str("extend ");
                    self.print_scalar_type(&extension.scalar_type_definition);
                }
            },
            NodeKind::InputObjectTypeDefinition => {
                if let Some(definition) =
                    lookup(&doc.input_object_type_definitions, node.reference)
                {
                    self.print_input_object_type(definition);
                }
            },
            NodeKind::InputObjectTypeExtension => {
                if let Some(extension) =
                    lookup(&doc.input_object_type_extensions, node.reference)
                {
                    self.out.push_str("extend ");
                    self.print_input_object_type(&extension.input_object_type_definition);
                }
            },
            NodeKind::DirectiveDefinition => self.print_directive_definition(node.reference),
        }
    }

    fn write_span(&mut self, span: ByteSpan) {
        self.out.push_str(&self.doc.input_str(span));
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn print_operation_definition(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(operation) = lookup(&doc.operation_definitions, reference) else {
            return;
        };

        let is_shorthand = operation.operation_type == OperationType::Query
            && operation.name.is_none()
            && operation.variable_definitions.is_empty()
            && operation.directives.is_empty();
        if !is_shorthand {
            self.out.push_str(operation.operation_type.as_str());
            if let Some(name) = operation.name {
                self.out.push(' ');
                self.write_span(name);
            }
        }
        if !operation.variable_definitions.is_empty() {
            if operation.name.is_none() {
                self.out.push(' ');
            }
            self.print_variable_definitions(&operation.variable_definitions);
        }
        self.print_directives(&operation.directives);
        self.print_selection_set(operation.selection_set);
    }

    fn print_variable_definitions(&mut self, definitions: &RefList) {
        let doc = self.doc;
        self.out.push('(');
        for (i, reference) in definitions.iter().enumerate() {
            let Some(definition) = lookup(&doc.variable_definitions, reference) else {
                continue;
            };
            if i > 0 {
                self.out.push_str(", ");
            }
            self.print_value(definition.variable_value);
            self.out.push_str(": ");
            self.out.push_str(&doc.print_type(definition.ty));
            if let Some(default_value) = definition.default_value {
                self.out.push_str(" = ");
                self.print_value(default_value);
            }
            self.print_directives(&definition.directives);
        }
        self.out.push(')');
    }

    fn print_fragment_definition(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(fragment) = lookup(&doc.fragment_definitions, reference) else {
            return;
        };
        self.out.push_str("fragment ");
        self.write_span(fragment.name);
        self.out.push_str(" on ");
        self.out.push_str(&doc.print_type(fragment.type_condition));
        self.print_directives(&fragment.directives);
        self.print_selection_set(fragment.selection_set);
    }

    fn print_selection_set(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(set) = lookup(&doc.selection_sets, reference) else {
            return;
        };

        if !matches!(self.out.chars().last(), None | Some(' ' | ')' | '.')) {
            self.out.push(' ');
        }
        self.out.push('{');
        for (i, selection_ref) in set.selection_refs.iter().enumerate() {
            let Some(selection) = lookup(&doc.selections, selection_ref) else {
                continue;
            };
            if i > 0 {
                self.out.push(' ');
            }
            match selection.kind {
                SelectionKind::Field => self.print_field(selection.reference),
                SelectionKind::FragmentSpread => self.print_fragment_spread(selection.reference),
                SelectionKind::InlineFragment => self.print_inline_fragment(selection.reference),
                SelectionKind::Unknown => (),
            }
        }
        self.out.push('}');
    }

    fn print_field(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(field) = lookup(&doc.fields, reference) else {
            return;
        };
        if let Some(alias) = field.alias {
            self.write_span(alias);
            self.out.push_str(": ");
        }
        self.write_span(field.name);
        self.print_arguments(&field.arguments);
        self.print_directives(&field.directives);
        self.print_selection_set(field.selection_set);
    }

    fn print_fragment_spread(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(spread) = lookup(&doc.fragment_spreads, reference) else {
            return;
        };
        self.out.push_str("...");
        self.write_span(spread.fragment_name);
        self.print_directives(&spread.directives);
    }

    fn print_inline_fragment(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(fragment) = lookup(&doc.inline_fragments, reference) else {
            return;
        };
        self.out.push_str("...");
        if lookup(&doc.types, fragment.type_condition).is_some() {
            self.out.push_str(" on ");
            self.out.push_str(&doc.print_type(fragment.type_condition));
        }
        self.print_directives(&fragment.directives);
        self.print_selection_set(fragment.selection_set);
    }

    // =========================================================================
    // Directives, arguments and values
    // =========================================================================

    /// Prints ` @a @b(x: 1)`, each directive preceded by a space.
    fn print_directives(&mut self, directives: &RefList) {
        let doc = self.doc;
        for reference in directives {
            let Some(directive) = lookup(&doc.directives, *reference) else {
                continue;
            };
            self.out.push_str(" @");
            self.write_span(directive.name);
            self.print_arguments(&directive.arguments);
        }
    }

    fn print_arguments(&mut self, arguments: &RefList) {
        if arguments.is_empty() {
            return;
        }
        let doc = self.doc;
        self.out.push('(');
        for (i, reference) in arguments.iter().enumerate() {
            let Some(argument) = lookup(&doc.arguments, reference) else {
                continue;
            };
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_span(argument.name);
            self.out.push_str(": ");
            self.print_value(argument.value);
        }
        self.out.push(')');
    }

    /// Appends a value literal, e.g. for printing a default value built
    /// with the `Document::add_*_value` constructors.
    pub fn print_value(&mut self, value: Value) {
        let doc = self.doc;
        match value.kind {
            ValueKind::Unknown => (),
            ValueKind::Null => self.out.push_str("null"),
            ValueKind::Boolean => {
                let literal = if value.reference == 1 { "true" } else { "false" };
                self.out.push_str(literal);
            },
            ValueKind::String => {
                if let Some(string) = lookup(&doc.string_values, value.reference) {
                    let quote = if string.block_string { "\"\"\"" } else { "\"" };
                    self.out.push_str(quote);
                    self.write_span(string.content);
                    self.out.push_str(quote);
                }
            },
            ValueKind::Integer => {
                if let Some(int) = lookup(&doc.int_values, value.reference) {
                    if int.negative {
                        self.out.push('-');
                    }
                    self.write_span(int.raw);
                }
            },
            ValueKind::Float => {
                if let Some(float) = lookup(&doc.float_values, value.reference) {
                    if float.negative {
                        self.out.push('-');
                    }
                    self.write_span(float.raw);
                }
            },
            ValueKind::Enum => {
                if let Some(enum_value) = lookup(&doc.enum_values, value.reference) {
                    self.write_span(enum_value.name);
                }
            },
            ValueKind::Variable => {
                if let Some(variable) = lookup(&doc.variable_values, value.reference) {
                    self.out.push('$');
                    self.write_span(variable.name);
                }
            },
            ValueKind::List => {
                let Some(list) = lookup(&doc.list_values, value.reference) else {
                    return;
                };
                self.out.push('[');
                for (i, item_ref) in list.refs.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    if let Some(item) = lookup(&doc.values, item_ref) {
                        self.print_value(*item);
                    }
                }
                self.out.push(']');
            },
            ValueKind::Object => {
                let Some(object) = lookup(&doc.object_values, value.reference) else {
                    return;
                };
                self.out.push('{');
                for (i, field_ref) in object.refs.iter().enumerate() {
                    let Some(field) = lookup(&doc.object_fields, field_ref) else {
                        continue;
                    };
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_span(field.name);
                    self.out.push_str(": ");
                    self.print_value(field.value);
                }
                self.out.push('}');
            },
        }
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn print_description(&mut self, description: Option<Description>) {
        let Some(description) = description else {
            return;
        };
        let quote = if description.is_block_string { "\"\"\"" } else { "\"" };
        self.out.push_str(quote);
        self.write_span(description.content);
        self.out.push_str(quote);
        self.out.push(' ');
    }

    fn print_schema(&mut self, definition: &SchemaDefinition) {
        let doc = self.doc;
        self.print_description(definition.description);
        self.out.push_str("schema");
        self.print_directives(&definition.directives);
        if definition.root_operation_types.is_empty() {
            return;
        }
        self.out.push_str(" {");
        for (i, reference) in definition.root_operation_types.iter().enumerate() {
            let Some(root) = lookup(&doc.root_operation_type_definitions, reference) else {
                continue;
            };
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(root.operation_type.as_str());
            self.out.push_str(": ");
            self.write_span(root.named_type);
        }
        self.out.push('}');
    }

    fn print_object_type(&mut self, definition: &ObjectTypeDefinition) {
        self.print_description(definition.description);
        self.out.push_str("type ");
        self.write_span(definition.name);
        self.print_implements_interfaces(&definition.implements_interfaces);
        self.print_directives(&definition.directives);
        self.print_field_definitions(&definition.field_definitions);
    }

    fn print_interface_type(&mut self, definition: &InterfaceTypeDefinition) {
        self.print_description(definition.description);
        self.out.push_str("interface ");
        self.write_span(definition.name);
        self.print_implements_interfaces(&definition.implements_interfaces);
        self.print_directives(&definition.directives);
        self.print_field_definitions(&definition.field_definitions);
    }

    fn print_implements_interfaces(&mut self, interfaces: &RefList) {
        let doc = self.doc;
        for (i, type_ref) in interfaces.iter().enumerate() {
            self.out.push_str(if i == 0 { " implements " } else { " & " });
            self.out.push_str(&doc.print_type(type_ref));
        }
    }

    fn print_field_definitions(&mut self, definitions: &RefList) {
        if definitions.is_empty() {
            return;
        }
        let doc = self.doc;
        self.out.push_str(" {");
        for (i, reference) in definitions.iter().enumerate() {
            let Some(definition) = lookup(&doc.field_definitions, reference) else {
                continue;
            };
            if i > 0 {
                self.out.push(' ');
            }
            self.print_description(definition.description);
            self.write_span(definition.name);
            if !definition.arguments_definition.is_empty() {
                self.out.push('(');
                self.print_input_value_definitions(&definition.arguments_definition, ", ");
                self.out.push(')');
            }
            self.out.push_str(": ");
            self.out.push_str(&doc.print_type(definition.ty));
            self.print_directives(&definition.directives);
        }
        self.out.push('}');
    }

    fn print_input_value_definitions(&mut self, definitions: &RefList, separator: &str) {
        let doc = self.doc;
        for (i, reference) in definitions.iter().enumerate() {
            let Some(definition) = lookup(&doc.input_value_definitions, reference) else {
                continue;
            };
            if i > 0 {
                self.out.push_str(separator);
            }
            self.print_description(definition.description);
            self.write_span(definition.name);
            self.out.push_str(": ");
            self.out.push_str(&doc.print_type(definition.ty));
            if let Some(default_value) = definition.default_value {
                self.out.push_str(" = ");
                self.print_value(default_value);
            }
            self.print_directives(&definition.directives);
        }
    }

    fn print_union_type(&mut self, definition: &UnionTypeDefinition) {
        let doc = self.doc;
        self.print_description(definition.description);
        self.out.push_str("union ");
        self.write_span(definition.name);
        self.print_directives(&definition.directives);
        for (i, type_ref) in definition.union_member_types.iter().enumerate() {
            self.out.push_str(if i == 0 { " = " } else { " | " });
            self.out.push_str(&doc.print_type(type_ref));
        }
    }

    fn print_enum_type(&mut self, definition: &EnumTypeDefinition) {
        let doc = self.doc;
        self.print_description(definition.description);
        self.out.push_str("enum ");
        self.write_span(definition.name);
        self.print_directives(&definition.directives);
        if definition.enum_values_definition.is_empty() {
            return;
        }
        self.out.push_str(" {");
        for (i, reference) in definition.enum_values_definition.iter().enumerate() {
            let Some(value) = lookup(&doc.enum_value_definitions, reference) else {
                continue;
            };
            if i > 0 {
                self.out.push(' ');
            }
            self.print_description(value.description);
            self.write_span(value.enum_value);
            self.print_directives(&value.directives);
        }
        self.out.push('}');
    }

    fn print_scalar_type(&mut self, definition: &ScalarTypeDefinition) {
        self.print_description(definition.description);
        self.out.push_str("scalar ");
        self.write_span(definition.name);
        self.print_directives(&definition.directives);
    }

    fn print_input_object_type(&mut self, definition: &InputObjectTypeDefinition) {
        self.print_description(definition.description);
        self.out.push_str("input ");
        self.write_span(definition.name);
        self.print_directives(&definition.directives);
        if definition.input_fields_definition.is_empty() {
            return;
        }
        self.out.push_str(" {");
        self.print_input_value_definitions(&definition.input_fields_definition, " ");
        self.out.push('}');
    }

    fn print_directive_definition(&mut self, reference: Ref) {
        let doc = self.doc;
        let Some(definition) = lookup(&doc.directive_definitions, reference) else {
            return;
        };
        self.print_description(definition.description);
        self.out.push_str("directive @");
        self.write_span(definition.name);
        if !definition.arguments.is_empty() {
            self.out.push('(');
            self.print_input_value_definitions(&definition.arguments, ", ");
            self.out.push(')');
        }
        if definition.repeatable {
            self.out.push_str(" repeatable");
        }
        self.out.push_str(" on ");
        self.print_directive_locations(&definition.locations);
    }

    fn print_directive_locations(&mut self, locations: &DirectiveLocations) {
        for (i, location) in locations.iter().enumerate() {
            if i > 0 {
                self.out.push_str(" | ");
            }
            self.out.push_str(location.as_str());
        }
    }
}
