use crate::ByteSpan;
use crate::SourcePosition;
use crate::ast::Document;
use crate::ast::INVALID_REF;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::append;

/// A value literal, tagged with the arena its payload lives in.
///
/// Booleans and `null` carry no payload: `true` is `reference == 1`,
/// `false` is `reference == 0` and `null` is [`INVALID_REF`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub reference: Ref,
    pub position: SourcePosition,
}

impl Value {
    pub fn new(kind: ValueKind, reference: Ref, position: SourcePosition) -> Self {
        Self {
            kind,
            reference,
            position,
        }
    }

    /// The payload of a [`ValueKind::Boolean`] value.
    pub fn boolean(&self) -> Option<bool> {
        (self.kind == ValueKind::Boolean).then_some(self.reference == 1)
    }
}

/// Selects the [`Document`] arena a [`Value`] refers into.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ValueKind {
    #[default]
    Unknown,
    String,
    Boolean,
    Integer,
    Float,
    Null,
    Variable,
    Enum,
    List,
    Object,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StringValue {
    /// Raw content between the quotes; escape sequences are not processed.
    pub content: ByteSpan,
    pub block_string: bool,
}

/// An integer literal. The sign is a separate token in the input, so it is
/// recorded here rather than in `raw`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IntValue {
    pub negative: bool,
    pub raw: ByteSpan,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FloatValue {
    pub negative: bool,
    pub raw: ByteSpan,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EnumValue {
    pub name: ByteSpan,
}

/// `$name`; `name` excludes the `$`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VariableValue {
    pub name: ByteSpan,
}

/// `[a, b]`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListValue {
    /// Refs into [`Document::values`].
    pub refs: RefList,
}

/// `{ name: value }`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectValue {
    /// Refs into [`Document::object_fields`].
    pub refs: RefList,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ObjectField {
    pub name: ByteSpan,
    pub value: Value,
    pub position: SourcePosition,
}

// =============================================================================
// Value constructors for programmatic AST building
// =============================================================================

impl Document {
    pub fn add_string_value(&mut self, content: &[u8], block_string: bool) -> Value {
        let content = self.append_input_bytes(content);
        let reference = append(
            &mut self.string_values,
            StringValue {
                content,
                block_string,
            },
        );
        Value::new(ValueKind::String, reference, SourcePosition::default())
    }

    /// `raw` holds the digits without a sign.
    pub fn add_int_value(&mut self, raw: &[u8], negative: bool) -> Value {
        let raw = self.append_input_bytes(raw);
        let reference = append(&mut self.int_values, IntValue { negative, raw });
        Value::new(ValueKind::Integer, reference, SourcePosition::default())
    }

    /// `raw` holds the number without a sign.
    pub fn add_float_value(&mut self, raw: &[u8], negative: bool) -> Value {
        let raw = self.append_input_bytes(raw);
        let reference = append(&mut self.float_values, FloatValue { negative, raw });
        Value::new(ValueKind::Float, reference, SourcePosition::default())
    }

    pub fn add_boolean_value(&mut self, value: bool) -> Value {
        Value::new(ValueKind::Boolean, Ref::from(value), SourcePosition::default())
    }

    pub fn add_null_value(&mut self) -> Value {
        Value::new(ValueKind::Null, INVALID_REF, SourcePosition::default())
    }

    pub fn add_enum_value(&mut self, name: &[u8]) -> Value {
        let name = self.append_input_bytes(name);
        let reference = append(&mut self.enum_values, EnumValue { name });
        Value::new(ValueKind::Enum, reference, SourcePosition::default())
    }

    /// `name` excludes the `$`.
    pub fn add_variable_value(&mut self, name: &[u8]) -> Value {
        let name = self.append_input_bytes(name);
        let reference = append(&mut self.variable_values, VariableValue { name });
        Value::new(ValueKind::Variable, reference, SourcePosition::default())
    }

    pub fn add_list_value(&mut self, items: &[Value]) -> Value {
        let mut refs = RefList::default();
        for item in items {
            let item_ref = append(&mut self.values, *item);
            refs.push(&mut self.ref_pool, item_ref);
        }
        let reference = append(&mut self.list_values, ListValue { refs });
        Value::new(ValueKind::List, reference, SourcePosition::default())
    }

    pub fn add_object_value(&mut self, fields: &[(&[u8], Value)]) -> Value {
        let mut refs = RefList::default();
        for (name, value) in fields {
            let name = self.append_input_bytes(name);
            let field_ref = append(
                &mut self.object_fields,
                ObjectField {
                    name,
                    value: *value,
                    position: SourcePosition::default(),
                },
            );
            refs.push(&mut self.ref_pool, field_ref);
        }
        let reference = append(&mut self.object_values, ObjectValue { refs });
        Value::new(ValueKind::Object, reference, SourcePosition::default())
    }
}
