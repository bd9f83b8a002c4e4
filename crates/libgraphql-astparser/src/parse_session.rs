//! The recursive-descent grammar.
//!
//! Each grammar rule is a `parse_*` method on [`ParseSession`] that reads
//! tokens from the tokenizer's buffer, appends the entity it recognized to
//! the matching [`Document`] arena and returns its [`Ref`] (or the entity
//! itself, for values and ref lists that are stored inline in a parent).
//!
//! # Error handling
//!
//! There is no recovery. The first rule that sees an unexpected token
//! records it in the [`OperationReport`] and every later error is dropped,
//! so a report never holds cascading follow-up errors. Loops re-check
//! [`OperationReport::has_errors`] after each item and bail out, and the
//! `must_read*` primitives stop consuming input once an error exists.
//!
//! # Ambiguities
//!
//! The grammar is resolved with lookahead and source positions only, never
//! by rewinding:
//! - `alias: name` vs. `name`: a field is aliased iff the token after its
//!   first identifier is `:`.
//! - `... on T`, `... @d` and `... {` are inline fragments; any other
//!   `...Name` is a fragment spread. A spread can therefore never name a
//!   fragment `on`.
//! - `-1` vs. `- 1` and `$v` vs. `$ v`: the sign (or `$`) must end exactly
//!   where the following token begins.

use std::panic::Location;

use smallvec::smallvec;

use crate::ByteSpan;
use crate::ErrorOrigin;
use crate::ExternalError;
use crate::GraphQLParseError;
use crate::GraphQLParserOptions;
use crate::GraphQLTokenizer;
use crate::OperationReport;
use crate::SourcePosition;
use crate::ast::Argument;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocations;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::INVALID_REF;
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
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionKind;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeKind;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;
use crate::ast::append;
use crate::token::GraphQLToken;
use crate::token::IdentKeyword;
use crate::token::Keyword;

/// One pass of the grammar over a tokenized document.
///
/// Created by [`GraphQLParser::parse`](crate::GraphQLParser::parse) (which
/// immediately runs [`parse_definitions`](Self::parse_definitions)) or handed
/// out by [`GraphQLParser::prepare_import`](crate::GraphQLParser::prepare_import)
/// so callers can run single rules against the buffered tokens.
pub struct ParseSession<'a> {
    tokenizer: &'a mut GraphQLTokenizer,
    doc: &'a mut Document,
    report: &'a mut OperationReport,
    options: GraphQLParserOptions,
    nesting_depth: usize,
}

impl<'a> ParseSession<'a> {
    pub(crate) fn new(
        tokenizer: &'a mut GraphQLTokenizer,
        options: GraphQLParserOptions,
        doc: &'a mut Document,
        report: &'a mut OperationReport,
    ) -> Self {
        Self {
            tokenizer,
            doc,
            report,
            options,
            nesting_depth: 0,
        }
    }

    // =========================================================================
    // Document parsing (public API)
    // =========================================================================

    /// Parses top-level definitions until EOF or the first error.
    pub fn parse_definitions(&mut self) {
        loop {
            let next = self.peek();
            match next.keyword {
                Keyword::Eof => {
                    self.read();
                    return;
                },
                Keyword::LBrace => self.parse_operation_definition(),
                Keyword::String | Keyword::BlockString => self.parse_root_description(),
                Keyword::Ident => {
                    let key = self.ident_key(next);
                    match key {
                        IdentKeyword::Enum => self.parse_enum_type_definition(None),
                        IdentKeyword::Type => self.parse_object_type_definition(None),
                        IdentKeyword::Union => self.parse_union_type_definition(None),
                        IdentKeyword::Query
                        | IdentKeyword::Mutation
                        | IdentKeyword::Subscription => self.parse_operation_definition(),
                        IdentKeyword::Input => self.parse_input_object_type_definition(None),
                        IdentKeyword::Extend => self.parse_extension(),
                        IdentKeyword::Schema => self.parse_schema_definition(None),
                        IdentKeyword::Scalar => self.parse_scalar_type_definition(None),
                        IdentKeyword::Fragment => self.parse_fragment_definition(),
                        IdentKeyword::Interface => self.parse_interface_type_definition(None),
                        IdentKeyword::Directive => self.parse_directive_definition(None),
                        _ => {
                            let token = self.read();
                            self.err_unexpected_ident_key(
                                token,
                                key,
                                &[
                                    IdentKeyword::Enum,
                                    IdentKeyword::Type,
                                    IdentKeyword::Union,
                                    IdentKeyword::Query,
                                    IdentKeyword::Input,
                                    IdentKeyword::Extend,
                                    IdentKeyword::Schema,
                                    IdentKeyword::Scalar,
                                    IdentKeyword::Fragment,
                                    IdentKeyword::Interface,
                                    IdentKeyword::Directive,
                                ],
                            );
                        },
                    }
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(
                        token,
                        &[
                            Keyword::Eof,
                            Keyword::LBrace,
                            Keyword::Comment,
                            Keyword::String,
                            Keyword::BlockString,
                            Keyword::Ident,
                        ],
                    );
                },
            }

            if self.report.has_errors() {
                return;
            }
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&mut self) -> GraphQLToken {
        self.tokenizer.peek()
    }

    fn peek_equals(&mut self, keyword: Keyword) -> bool {
        self.peek().keyword == keyword
    }

    fn peek_equals_ident_key(&mut self, key: IdentKeyword) -> bool {
        let next = self.peek();
        next.keyword == Keyword::Ident && self.ident_key(next) == key
    }

    fn read(&mut self) -> GraphQLToken {
        self.tokenizer.read()
    }

    /// Classifies an identifier token. Any other token is
    /// [`IdentKeyword::Undefined`].
    fn ident_key(&self, token: GraphQLToken) -> IdentKeyword {
        if token.keyword != Keyword::Ident {
            return IdentKeyword::Undefined;
        }
        IdentKeyword::from_literal(token.literal_bytes(&self.doc.input))
    }

    /// Reads the next token and records an error unless it is `keyword`.
    ///
    /// Once an error exists this reads nothing and returns a default
    /// token.
    #[track_caller]
    fn must_read(&mut self, keyword: Keyword) -> GraphQLToken {
        if self.report.has_errors() {
            return GraphQLToken::default();
        }
        let next = self.read();
        if next.keyword != keyword {
            self.err_unexpected_token(next, &[keyword]);
        }
        next
    }

    /// Reads the next token and records an error unless it is the
    /// identifier `key`.
    #[track_caller]
    fn must_read_ident_key(&mut self, key: IdentKeyword) -> GraphQLToken {
        if self.report.has_errors() {
            return GraphQLToken::default();
        }
        let next = self.read();
        if next.keyword != Keyword::Ident {
            self.err_unexpected_token(next, &[Keyword::Ident]);
            return next;
        }
        let got = self.ident_key(next);
        if got != key {
            self.err_unexpected_ident_key(next, got, &[key]);
        }
        next
    }

    /// Reads the next token and records an error unless it is an
    /// identifier other than `key`.
    #[track_caller]
    fn must_read_except_ident_key(&mut self, key: IdentKeyword) -> GraphQLToken {
        if self.report.has_errors() {
            return GraphQLToken::default();
        }
        let next = self.read();
        if next.keyword != Keyword::Ident {
            self.err_unexpected_token(next, &[Keyword::Ident]);
            return next;
        }
        let got = self.ident_key(next);
        if got == key {
            self.err_unexpected_ident_key(next, got, &[key]);
        }
        next
    }

    /// Reads the next token and records an error unless it is one of the
    /// identifiers in `keys`.
    #[track_caller]
    fn must_read_one_of(&mut self, keys: &[IdentKeyword]) -> (GraphQLToken, IdentKeyword) {
        let next = self.read();
        let got = self.ident_key(next);
        if !keys.contains(&got) {
            self.err_unexpected_ident_key(next, got, keys);
        }
        (next, got)
    }

    fn literal_string(&self, token: GraphQLToken) -> String {
        String::from_utf8_lossy(token.literal_bytes(&self.doc.input)).into_owned()
    }

    // =========================================================================
    // Error recording
    // =========================================================================

    #[track_caller]
    fn err_unexpected_token(&mut self, unexpected: GraphQLToken, expected: &[Keyword]) {
        if self.report.has_errors() {
            return;
        }

        self.report.add_external_error(ExternalError::unexpected_token(
            unexpected.keyword,
            expected,
            unexpected.position,
        ));

        if self.options.report_internal_errors {
            let origins = smallvec![ErrorOrigin::from_location(Location::caller())];
            self.report.add_internal_error(GraphQLParseError::UnexpectedToken {
                keyword: unexpected.keyword,
                literal: self.literal_string(unexpected),
                expected: expected.to_vec(),
                position: unexpected.position,
                origins,
            });
        }
    }

    #[track_caller]
    fn err_unexpected_ident_key(
        &mut self,
        unexpected: GraphQLToken,
        got: IdentKeyword,
        expected: &[IdentKeyword],
    ) {
        if self.report.has_errors() {
            return;
        }

        self.report.add_external_error(ExternalError::unexpected_ident_key(
            got,
            expected,
            unexpected.position,
        ));

        if self.options.report_internal_errors {
            let origins = smallvec![ErrorOrigin::from_location(Location::caller())];
            self.report.add_internal_error(GraphQLParseError::UnexpectedIdentKey {
                ident_key: got,
                literal: self.literal_string(unexpected),
                expected: expected.to_vec(),
                position: unexpected.position,
                origins,
            });
        }
    }

    fn err_invalid_directive_location(&mut self, location: GraphQLToken) {
        if self.report.has_errors() {
            return;
        }

        let literal = self.literal_string(location);
        self.report.add_external_error(ExternalError::invalid_directive_location(
            &literal,
            location.position,
        ));

        if self.options.report_internal_errors {
            self.report.add_internal_error(GraphQLParseError::InvalidDirectiveLocation {
                literal,
                position: location.position,
            });
        }
    }

    /// Counts one level of nesting, or records an error (at the next
    /// token) and returns `false` if that would exceed
    /// [`GraphQLParserOptions::max_nesting_depth`].
    fn enter_nesting(&mut self) -> bool {
        let max_depth = self.options.max_nesting_depth;
        if self.nesting_depth >= max_depth {
            let next = self.peek();
            if !self.report.has_errors() {
                self.report.add_external_error(ExternalError::nesting_too_deep(
                    max_depth,
                    next.position,
                ));
            }
            return false;
        }
        self.nesting_depth += 1;
        true
    }

    fn exit_nesting(&mut self) {
        self.nesting_depth -= 1;
    }

    // =========================================================================
    // Arena helpers
    // =========================================================================

    /// Indexes `node` under the input text at `name`, unless indexing is
    /// turned off.
    fn index_node(&mut self, name: ByteSpan, node: Node) {
        if !self.options.should_index {
            return;
        }
        let doc = &mut *self.doc;
        doc.index.add_node(name.slice(&doc.input), node);
    }

    /// Records a finished top-level definition, indexing it under `name`
    /// when it has one.
    fn add_definition(&mut self, node: Node, name: Option<ByteSpan>) {
        if let Some(name) = name {
            self.index_node(name, node);
        }
        self.doc.add_root_node(node);
    }

    fn add_named_type(&mut self, name: GraphQLToken) -> Ref {
        append(
            &mut self.doc.types,
            Type {
                kind: TypeKind::Named,
                name: name.literal,
                of_type: INVALID_REF,
                position: name.position,
            },
        )
    }

    fn add_wrapping_type(&mut self, kind: TypeKind, of_type: Ref, position: SourcePosition) -> Ref {
        append(
            &mut self.doc.types,
            Type {
                kind,
                name: ByteSpan::default(),
                of_type,
                position,
            },
        )
    }

    // =========================================================================
    // Descriptions
    // =========================================================================

    fn parse_description(&mut self) -> Description {
        let token = self.read();
        Description {
            content: token.literal,
            is_block_string: token.keyword == Keyword::BlockString,
            position: token.position,
        }
    }

    fn parse_optional_description(&mut self) -> Option<Description> {
        match self.peek().keyword {
            Keyword::String | Keyword::BlockString => Some(self.parse_description()),
            _ => None,
        }
    }

    /// A description at the top level must be followed by a type-system
    /// definition.
    fn parse_root_description(&mut self) {
        let description = Some(self.parse_description());

        let next = self.peek();
        if next.keyword != Keyword::Ident {
            let token = self.read();
            self.err_unexpected_token(token, &[Keyword::Ident]);
            return;
        }

        let key = self.ident_key(next);
        match key {
            IdentKeyword::Type => self.parse_object_type_definition(description),
            IdentKeyword::Input => self.parse_input_object_type_definition(description),
            IdentKeyword::Scalar => self.parse_scalar_type_definition(description),
            IdentKeyword::Interface => self.parse_interface_type_definition(description),
            IdentKeyword::Union => self.parse_union_type_definition(description),
            IdentKeyword::Enum => self.parse_enum_type_definition(description),
            IdentKeyword::Directive => self.parse_directive_definition(description),
            IdentKeyword::Extend => self.parse_extension(),
            IdentKeyword::Schema => self.parse_schema_definition(description),
            _ => {
                let token = self.read();
                self.err_unexpected_ident_key(
                    token,
                    key,
                    &[
                        IdentKeyword::Type,
                        IdentKeyword::Input,
                        IdentKeyword::Scalar,
                        IdentKeyword::Interface,
                        IdentKeyword::Union,
                        IdentKeyword::Enum,
                        IdentKeyword::Directive,
                    ],
                );
            },
        }
    }

    // =========================================================================
    // Value parsing
    // =========================================================================

    /// Parses one value literal (a constant or a `$variable`).
    pub fn parse_value(&mut self) -> Value {
        if !self.enter_nesting() {
            return Value::default();
        }
        let value = self.parse_value_impl();
        self.exit_nesting();
        value
    }

    fn parse_value_impl(&mut self) -> Value {
        let next = self.peek();
        match next.keyword {
            Keyword::String | Keyword::BlockString => self.parse_string_value(),
            Keyword::Ident => match self.ident_key(next) {
                IdentKeyword::True | IdentKeyword::False => self.parse_boolean_value(),
                IdentKeyword::Null => {
                    let token = self.read();
                    Value::new(ValueKind::Null, INVALID_REF, token.position)
                },
                _ => self.parse_enum_value(),
            },
            Keyword::Dollar => self.parse_variable_value(),
            Keyword::Integer | Keyword::Float => {
                let number = self.read();
                self.add_number_value(number, false, number.position)
            },
            Keyword::Sub => self.parse_negative_number_value(),
            Keyword::LBrack => self.parse_list_value(),
            Keyword::LBrace => self.parse_object_value(),
            _ => {
                let token = self.read();
                self.err_unexpected_token(token, &[]);
                Value::default()
            },
        }
    }

    fn parse_string_value(&mut self) -> Value {
        let token = self.read();
        let reference = append(
            &mut self.doc.string_values,
            StringValue {
                content: token.literal,
                block_string: token.keyword == Keyword::BlockString,
            },
        );
        Value::new(ValueKind::String, reference, token.position)
    }

    fn parse_boolean_value(&mut self) -> Value {
        let token = self.read();
        let reference = match self.ident_key(token) {
            IdentKeyword::True => 1,
            IdentKeyword::False => 0,
            got => {
                self.err_unexpected_ident_key(
                    token,
                    got,
                    &[IdentKeyword::True, IdentKeyword::False],
                );
                return Value::default();
            },
        };
        Value::new(ValueKind::Boolean, reference, token.position)
    }

    fn parse_enum_value(&mut self) -> Value {
        let token = self.must_read(Keyword::Ident);
        let reference = append(&mut self.doc.enum_values, EnumValue { name: token.literal });
        Value::new(ValueKind::Enum, reference, token.position)
    }

    /// `$name`, with no gap between `$` and the name.
    fn parse_variable_value(&mut self) -> Value {
        let dollar = self.must_read(Keyword::Dollar);

        if !self.peek_equals(Keyword::Ident) {
            let token = self.read();
            self.err_unexpected_token(token, &[Keyword::Ident]);
            return Value::default();
        }
        let name = self.read();
        if !dollar.position.is_adjacent_to(&name.position) {
            self.err_unexpected_token(name, &[Keyword::Ident]);
            return Value::default();
        }

        let reference = append(
            &mut self.doc.variable_values,
            VariableValue { name: name.literal },
        );
        Value::new(ValueKind::Variable, reference, dollar.position.join(&name.position))
    }

    /// `-` directly followed by an integer or float.
    fn parse_negative_number_value(&mut self) -> Value {
        let sign = self.must_read(Keyword::Sub);

        if !matches!(self.peek().keyword, Keyword::Integer | Keyword::Float) {
            let token = self.read();
            self.err_unexpected_token(token, &[Keyword::Integer, Keyword::Float]);
            return Value::default();
        }
        let number = self.read();
        if !sign.position.is_adjacent_to(&number.position) {
            self.err_unexpected_token(number, &[]);
            return Value::default();
        }

        self.add_number_value(number, true, sign.position.join(&number.position))
    }

    fn add_number_value(
        &mut self,
        number: GraphQLToken,
        negative: bool,
        position: SourcePosition,
    ) -> Value {
        let raw = number.literal;
        if number.keyword == Keyword::Float {
            let reference = append(&mut self.doc.float_values, FloatValue { negative, raw });
            Value::new(ValueKind::Float, reference, position)
        } else {
            let reference = append(&mut self.doc.int_values, IntValue { negative, raw });
            Value::new(ValueKind::Integer, reference, position)
        }
    }

    fn parse_list_value(&mut self) -> Value {
        let lbrack = self.must_read(Keyword::LBrack);
        let mut list = ListValue::default();

        loop {
            if self.peek_equals(Keyword::RBrack) {
                self.read();
                break;
            }

            let item = self.parse_value();
            let item_ref = append(&mut self.doc.values, item);
            list.refs.push(&mut self.doc.ref_pool, item_ref);

            if self.report.has_errors() {
                return Value::default();
            }
        }

        let reference = append(&mut self.doc.list_values, list);
        Value::new(ValueKind::List, reference, lbrack.position)
    }

    fn parse_object_value(&mut self) -> Value {
        let lbrace = self.must_read(Keyword::LBrace);
        let mut object = ObjectValue::default();

        loop {
            match self.peek().keyword {
                Keyword::RBrace => {
                    self.read();
                    break;
                },
                Keyword::Ident => {
                    let field_ref = self.parse_object_field();
                    object.refs.push(&mut self.doc.ref_pool, field_ref);
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[Keyword::Ident, Keyword::RBrace]);
                    return Value::default();
                },
            }

            if self.report.has_errors() {
                return Value::default();
            }
        }

        let reference = append(&mut self.doc.object_values, object);
        Value::new(ValueKind::Object, reference, lbrace.position)
    }

    fn parse_object_field(&mut self) -> Ref {
        let name = self.must_read(Keyword::Ident);
        self.must_read(Keyword::Colon);
        let value = self.parse_value();
        append(
            &mut self.doc.object_fields,
            ObjectField {
                name: name.literal,
                value,
                position: name.position,
            },
        )
    }

    // =========================================================================
    // Type annotation parsing
    // =========================================================================

    /// Parses a type reference such as `[String!]!` and returns the ref of
    /// its outermost wrapper.
    pub fn parse_type(&mut self) -> Ref {
        if !self.enter_nesting() {
            return INVALID_REF;
        }
        let type_ref = self.parse_type_impl();
        self.exit_nesting();
        type_ref
    }

    fn parse_type_impl(&mut self) -> Ref {
        let first = self.peek();
        let (inner, position) = match first.keyword {
            Keyword::Ident => {
                let name = self.read();
                (self.add_named_type(name), name.position)
            },
            Keyword::LBrack => {
                let open = self.read();
                let of_type = self.parse_type();
                let close = self.must_read(Keyword::RBrack);
                let position = open.position.join(&close.position);
                (self.add_wrapping_type(TypeKind::List, of_type, position), position)
            },
            _ => {
                let token = self.read();
                self.err_unexpected_token(token, &[Keyword::Ident, Keyword::LBrack]);
                return INVALID_REF;
            },
        };

        if !self.peek_equals(Keyword::Bang) {
            return inner;
        }
        let bang = self.read();
        if self.peek_equals(Keyword::Bang) {
            let token = self.read();
            self.err_unexpected_token(token, &[]);
            return inner;
        }
        self.add_wrapping_type(TypeKind::NonNull, inner, position.join(&bang.position))
    }

    fn parse_named_type(&mut self) -> Ref {
        let name = self.must_read(Keyword::Ident);
        self.add_named_type(name)
    }

    // =========================================================================
    // Directive and argument parsing
    // =========================================================================

    fn parse_directive_list(&mut self) -> RefList {
        let mut list = RefList::default();

        while self.peek_equals(Keyword::At) {
            let at = self.read();
            let name = self.must_read(Keyword::Ident);
            let mut directive = Directive {
                name: name.literal,
                arguments: RefList::default(),
                position: at.position,
            };
            if self.peek_equals(Keyword::LParen) {
                directive.arguments = self.parse_argument_list();
            }

            let directive_ref = append(&mut self.doc.directives, directive);
            list.push(&mut self.doc.ref_pool, directive_ref);

            if self.report.has_errors() {
                break;
            }
        }

        list
    }

    fn parse_argument_list(&mut self) -> RefList {
        let mut list = RefList::default();
        self.must_read(Keyword::LParen);

        while self.peek_equals(Keyword::Ident) {
            let name = self.read();
            self.must_read(Keyword::Colon);
            let value = self.parse_value();

            let argument_ref = append(
                &mut self.doc.arguments,
                Argument {
                    name: name.literal,
                    value,
                    position: name.position,
                },
            );
            list.push(&mut self.doc.ref_pool, argument_ref);

            if self.report.has_errors() {
                return list;
            }
        }

        self.must_read(Keyword::RParen);
        list
    }

    // =========================================================================
    // Selection set parsing
    // =========================================================================

    /// Parses `{ selection ... }` and returns its ref into
    /// [`Document::selection_sets`], or [`INVALID_REF`] on error. An empty
    /// set is an error.
    pub fn parse_selection_set(&mut self) -> Ref {
        if !self.enter_nesting() {
            return INVALID_REF;
        }
        let set_ref = self.parse_selection_set_impl();
        self.exit_nesting();
        set_ref
    }

    fn parse_selection_set_impl(&mut self) -> Ref {
        let lbrace = self.must_read(Keyword::LBrace);
        if self.report.has_errors() {
            return INVALID_REF;
        }
        let mut set = SelectionSet {
            selection_refs: RefList::default(),
            position: lbrace.position,
        };

        loop {
            match self.peek().keyword {
                Keyword::RBrace => {
                    let rbrace = self.read();
                    if set.selection_refs.is_empty() {
                        self.err_unexpected_token(rbrace, &[Keyword::Ident, Keyword::Spread]);
                        return INVALID_REF;
                    }
                    return append(&mut self.doc.selection_sets, set);
                },
                Keyword::Ident | Keyword::Spread => {
                    let selection_ref = self.parse_selection();
                    set.selection_refs.push(&mut self.doc.ref_pool, selection_ref);
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(
                        token,
                        &[Keyword::RBrace, Keyword::Ident, Keyword::Spread],
                    );
                },
            }

            if self.report.has_errors() {
                return INVALID_REF;
            }
        }
    }

    fn parse_selection(&mut self) -> Ref {
        let selection = match self.peek().keyword {
            Keyword::Ident => Selection {
                kind: SelectionKind::Field,
                reference: self.parse_field(),
            },
            Keyword::Spread => {
                let spread = self.read();
                self.parse_fragment_selection(spread.position)
            },
            _ => {
                let token = self.read();
                self.err_unexpected_token(token, &[Keyword::Ident, Keyword::Spread]);
                return INVALID_REF;
            },
        };
        append(&mut self.doc.selections, selection)
    }

    /// Whatever follows `...`: an inline fragment if the next token is
    /// `on`, `@` or `{`, a fragment spread for any other name.
    fn parse_fragment_selection(&mut self, spread: SourcePosition) -> Selection {
        let next = self.peek();
        match next.keyword {
            Keyword::LBrace | Keyword::At => Selection {
                kind: SelectionKind::InlineFragment,
                reference: self.parse_inline_fragment(spread),
            },
            Keyword::Ident if self.ident_key(next) == IdentKeyword::On => Selection {
                kind: SelectionKind::InlineFragment,
                reference: self.parse_inline_fragment(spread),
            },
            Keyword::Ident => Selection {
                kind: SelectionKind::FragmentSpread,
                reference: self.parse_fragment_spread(spread),
            },
            _ => {
                let token = self.read();
                self.err_unexpected_token(token, &[Keyword::Ident]);
                Selection::default()
            },
        }
    }

    fn parse_field(&mut self) -> Ref {
        let first = self.read();
        if first.keyword != Keyword::Ident {
            self.err_unexpected_token(first, &[Keyword::Ident]);
        }

        let mut field = Field {
            name: first.literal,
            selection_set: INVALID_REF,
            position: first.position,
            ..Field::default()
        };

        // One token of lookahead tells an alias from the field name.
        if self.peek_equals(Keyword::Colon) {
            self.read();
            field.alias = Some(first.literal);
            field.name = self.must_read(Keyword::Ident).literal;
        }
        if self.peek_equals(Keyword::LParen) {
            field.arguments = self.parse_argument_list();
        }
        if self.peek_equals(Keyword::At) {
            field.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) {
            field.selection_set = self.parse_selection_set();
        }

        append(&mut self.doc.fields, field)
    }

    fn parse_fragment_spread(&mut self, spread: SourcePosition) -> Ref {
        let name = self.must_read_except_ident_key(IdentKeyword::On);
        let mut fragment_spread = FragmentSpread {
            fragment_name: name.literal,
            directives: RefList::default(),
            position: spread,
        };
        if self.peek_equals(Keyword::At) {
            fragment_spread.directives = self.parse_directive_list();
        }
        append(&mut self.doc.fragment_spreads, fragment_spread)
    }

    fn parse_inline_fragment(&mut self, spread: SourcePosition) -> Ref {
        let mut fragment = InlineFragment {
            type_condition: INVALID_REF,
            directives: RefList::default(),
            selection_set: INVALID_REF,
            position: spread,
        };
        if self.peek_equals_ident_key(IdentKeyword::On) {
            fragment.type_condition = self.parse_type_condition();
        }
        if self.peek_equals(Keyword::At) {
            fragment.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) {
            fragment.selection_set = self.parse_selection_set();
        }
        append(&mut self.doc.inline_fragments, fragment)
    }

    /// `on TypeName`
    fn parse_type_condition(&mut self) -> Ref {
        self.must_read_ident_key(IdentKeyword::On);
        self.parse_named_type()
    }

    // =========================================================================
    // Operation parsing
    // =========================================================================

    fn parse_operation_definition(&mut self) {
        let next = self.peek();
        let mut operation = OperationDefinition {
            selection_set: INVALID_REF,
            position: next.position,
            ..OperationDefinition::default()
        };

        match next.keyword {
            Keyword::Ident => {
                let key = self.ident_key(next);
                operation.operation_type = match key {
                    IdentKeyword::Query => OperationType::Query,
                    IdentKeyword::Mutation => OperationType::Mutation,
                    IdentKeyword::Subscription => OperationType::Subscription,
                    _ => {
                        let token = self.read();
                        self.err_unexpected_ident_key(
                            token,
                            key,
                            &[
                                IdentKeyword::Query,
                                IdentKeyword::Mutation,
                                IdentKeyword::Subscription,
                            ],
                        );
                        return;
                    },
                };
                self.read();
            },
            // Shorthand `{ ... }`: an unnamed query with nothing but a
            // selection set.
            Keyword::LBrace => {
                operation.operation_type = OperationType::Query;
                operation.selection_set = self.parse_selection_set();
                self.add_operation_definition(operation);
                return;
            },
            _ => {
                let token = self.read();
                self.err_unexpected_token(token, &[Keyword::Ident, Keyword::LBrace]);
                return;
            },
        }

        if self.peek_equals(Keyword::Ident) {
            operation.name = Some(self.read().literal);
        }
        if self.peek_equals(Keyword::LParen) {
            operation.variable_definitions = self.parse_variable_definition_list();
        }
        if self.peek_equals(Keyword::At) {
            operation.directives = self.parse_directive_list();
        }
        operation.selection_set = self.parse_selection_set();

        self.add_operation_definition(operation);
    }

    fn add_operation_definition(&mut self, operation: OperationDefinition) {
        let reference = append(&mut self.doc.operation_definitions, operation);
        // Operations are never indexed: several may share a name, and most
        // are anonymous.
        self.add_definition(Node::new(NodeKind::OperationDefinition, reference), None);
    }

    fn parse_variable_definition_list(&mut self) -> RefList {
        let mut list = RefList::default();
        self.must_read(Keyword::LParen);

        loop {
            match self.peek().keyword {
                Keyword::RParen => {
                    self.read();
                    return list;
                },
                Keyword::Dollar => {
                    let definition_ref = self.parse_variable_definition();
                    list.push(&mut self.doc.ref_pool, definition_ref);
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[Keyword::RParen, Keyword::Dollar]);
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    /// `$name: Type = default @directives`
    fn parse_variable_definition(&mut self) -> Ref {
        let variable_value = self.parse_variable_value();
        self.must_read(Keyword::Colon);
        let ty = self.parse_type();

        let default_value = if self.peek_equals(Keyword::Equals) {
            self.read();
            Some(self.parse_value())
        } else {
            None
        };
        let directives = if self.peek_equals(Keyword::At) {
            self.parse_directive_list()
        } else {
            RefList::default()
        };

        append(
            &mut self.doc.variable_definitions,
            VariableDefinition {
                variable_value,
                ty,
                default_value,
                directives,
                position: variable_value.position,
            },
        )
    }

    // =========================================================================
    // Fragment parsing
    // =========================================================================

    fn parse_fragment_definition(&mut self) {
        let fragment_literal = self.must_read_ident_key(IdentKeyword::Fragment);
        let name = self.must_read(Keyword::Ident);
        let type_condition = self.parse_type_condition();
        let directives = if self.peek_equals(Keyword::At) {
            self.parse_directive_list()
        } else {
            RefList::default()
        };
        let selection_set = self.parse_selection_set();

        let reference = append(
            &mut self.doc.fragment_definitions,
            FragmentDefinition {
                name: name.literal,
                type_condition,
                directives,
                selection_set,
                position: fragment_literal.position,
            },
        );
        self.add_definition(Node::new(NodeKind::FragmentDefinition, reference), None);
    }

    // =========================================================================
    // Schema definition parsing
    // =========================================================================

    fn parse_schema_definition(&mut self, description: Option<Description>) {
        let schema_literal = self.read();
        let mut definition = SchemaDefinition {
            description,
            position: schema_literal.position,
            ..SchemaDefinition::default()
        };
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        definition.root_operation_types = self.parse_root_operation_type_definition_list();

        let reference = append(&mut self.doc.schema_definitions, definition);
        self.add_definition(
            Node::new(NodeKind::SchemaDefinition, reference),
            Some(schema_literal.literal),
        );
    }

    /// `{ query: Query mutation: Mutation ... }`
    fn parse_root_operation_type_definition_list(&mut self) -> RefList {
        let mut list = RefList::default();
        self.must_read(Keyword::LBrace);

        loop {
            match self.peek().keyword {
                Keyword::RBrace => {
                    self.read();
                    return list;
                },
                Keyword::Ident => {
                    let (operation_literal, key) = self.must_read_one_of(&[
                        IdentKeyword::Query,
                        IdentKeyword::Mutation,
                        IdentKeyword::Subscription,
                    ]);
                    self.must_read(Keyword::Colon);
                    let named_type = self.must_read(Keyword::Ident);

                    let definition = RootOperationTypeDefinition {
                        operation_type: operation_type_of(key),
                        named_type: named_type.literal,
                        position: operation_literal.position,
                    };
                    let definition_ref =
                        append(&mut self.doc.root_operation_type_definitions, definition);
                    list.push(&mut self.doc.ref_pool, definition_ref);

                    if self.options.should_index {
                        self.index_root_operation_type(definition);
                    }
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    fn index_root_operation_type(&mut self, definition: RootOperationTypeDefinition) {
        let doc = &mut *self.doc;
        let name = definition.named_type.slice(&doc.input);
        match definition.operation_type {
            OperationType::Query => doc.index.set_query_type_name(name),
            OperationType::Mutation => doc.index.set_mutation_type_name(name),
            OperationType::Subscription => doc.index.set_subscription_type_name(name),
            OperationType::Unknown => (),
        }
    }

    // =========================================================================
    // Type definition parsing
    // =========================================================================
    //
    // Each `parse_*_body` rule parses everything from the keyword onwards and
    // is shared by the definition and its `extend` form.

    fn parse_object_type_definition(&mut self, description: Option<Description>) {
        let definition = self.parse_object_type_body(description);
        let name = definition.name;
        let reference = append(&mut self.doc.object_type_definitions, definition);
        self.add_definition(Node::new(NodeKind::ObjectTypeDefinition, reference), Some(name));
    }

    /// `type Name implements A & B @directives { fields }`
    fn parse_object_type_body(&mut self, description: Option<Description>) -> ObjectTypeDefinition {
        let type_literal = self.must_read_ident_key(IdentKeyword::Type);
        let mut definition = ObjectTypeDefinition {
            description,
            name: self.must_read(Keyword::Ident).literal,
            position: type_literal.position,
            ..ObjectTypeDefinition::default()
        };
        if self.peek_equals_ident_key(IdentKeyword::Implements) {
            definition.implements_interfaces = self.parse_implements_interfaces();
        }
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) {
            definition.field_definitions = self.parse_field_definition_list();
        }
        definition
    }

    fn parse_interface_type_definition(&mut self, description: Option<Description>) {
        let definition = self.parse_interface_type_body(description);
        let name = definition.name;
        let reference = append(&mut self.doc.interface_type_definitions, definition);
        self.add_definition(Node::new(NodeKind::InterfaceTypeDefinition, reference), Some(name));
    }

    fn parse_interface_type_body(
        &mut self,
        description: Option<Description>,
    ) -> InterfaceTypeDefinition {
        let interface_literal = self.must_read_ident_key(IdentKeyword::Interface);
        let mut definition = InterfaceTypeDefinition {
            description,
            name: self.must_read(Keyword::Ident).literal,
            position: interface_literal.position,
            ..InterfaceTypeDefinition::default()
        };
        if self.peek_equals_ident_key(IdentKeyword::Implements) {
            definition.implements_interfaces = self.parse_implements_interfaces();
        }
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) {
            definition.field_definitions = self.parse_field_definition_list();
        }
        definition
    }

    /// `implements A & B`, with an optional leading `&`. A trailing `&`
    /// is an error.
    fn parse_implements_interfaces(&mut self) -> RefList {
        let mut list = RefList::default();
        self.read();

        let mut accept_ident = true;
        let mut accept_and = true;

        loop {
            let next = self.peek();
            match next.keyword {
                Keyword::And if accept_and => {
                    accept_and = false;
                    accept_ident = true;
                    self.read();
                },
                Keyword::Ident if accept_ident => {
                    accept_ident = false;
                    accept_and = true;
                    let name = self.read();
                    let type_ref = self.add_named_type(name);
                    list.push(&mut self.doc.ref_pool, type_ref);
                },
                Keyword::And | Keyword::Ident => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return list;
                },
                _ => {
                    if accept_ident {
                        let token = self.read();
                        self.err_unexpected_token(token, &[]);
                    }
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    fn parse_field_definition_list(&mut self) -> RefList {
        let mut list = RefList::default();
        self.must_read(Keyword::LBrace);

        loop {
            match self.peek().keyword {
                Keyword::RBrace => {
                    self.read();
                    return list;
                },
                Keyword::String | Keyword::BlockString | Keyword::Ident => {
                    let definition_ref = self.parse_field_definition();
                    list.push(&mut self.doc.ref_pool, definition_ref);
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    /// `"description" name(args): Type @directives`
    fn parse_field_definition(&mut self) -> Ref {
        let description = self.parse_optional_description();

        let name = self.read();
        if name.keyword != Keyword::Ident {
            self.err_unexpected_token(name, &[Keyword::Ident]);
            return INVALID_REF;
        }

        let arguments_definition = if self.peek_equals(Keyword::LParen) {
            self.parse_input_value_definition_list(Keyword::RParen)
        } else {
            RefList::default()
        };
        self.must_read(Keyword::Colon);
        let ty = self.parse_type();
        let directives = if self.peek_equals(Keyword::At) {
            self.parse_directive_list()
        } else {
            RefList::default()
        };

        append(
            &mut self.doc.field_definitions,
            FieldDefinition {
                description,
                name: name.literal,
                arguments_definition,
                ty,
                directives,
                position: name.position,
            },
        )
    }

    /// Reads the opening delimiter, then input value definitions up to
    /// `closing_keyword` (`)` for arguments, `}` for input fields).
    fn parse_input_value_definition_list(&mut self, closing_keyword: Keyword) -> RefList {
        let mut list = RefList::default();
        self.read();

        loop {
            let next = self.peek().keyword;
            if next == closing_keyword {
                self.read();
                return list;
            }
            match next {
                Keyword::String | Keyword::BlockString | Keyword::Ident => {
                    let definition_ref = self.parse_input_value_definition();
                    list.push(&mut self.doc.ref_pool, definition_ref);
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    /// `"description" name: Type = default @directives`
    fn parse_input_value_definition(&mut self) -> Ref {
        let description = self.parse_optional_description();
        let name = self.must_read(Keyword::Ident);
        self.must_read(Keyword::Colon);
        let ty = self.parse_type();

        let default_value = if self.peek_equals(Keyword::Equals) {
            self.read();
            Some(self.parse_value())
        } else {
            None
        };
        let directives = if self.peek_equals(Keyword::At) {
            self.parse_directive_list()
        } else {
            RefList::default()
        };

        append(
            &mut self.doc.input_value_definitions,
            InputValueDefinition {
                description,
                name: name.literal,
                ty,
                default_value,
                directives,
                position: name.position,
            },
        )
    }

    fn parse_input_object_type_definition(&mut self, description: Option<Description>) {
        let definition = self.parse_input_object_type_body(description);
        let name = definition.name;
        let reference = append(&mut self.doc.input_object_type_definitions, definition);
        self.add_definition(
            Node::new(NodeKind::InputObjectTypeDefinition, reference),
            Some(name),
        );
    }

    fn parse_input_object_type_body(
        &mut self,
        description: Option<Description>,
    ) -> InputObjectTypeDefinition {
        let input_literal = self.must_read_ident_key(IdentKeyword::Input);
        let mut definition = InputObjectTypeDefinition {
            description,
            name: self.must_read(Keyword::Ident).literal,
            position: input_literal.position,
            ..InputObjectTypeDefinition::default()
        };
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) {
            definition.input_fields_definition =
                self.parse_input_value_definition_list(Keyword::RBrace);
        }
        definition
    }

    fn parse_scalar_type_definition(&mut self, description: Option<Description>) {
        let definition = self.parse_scalar_type_body(description);
        let name = definition.name;
        let reference = append(&mut self.doc.scalar_type_definitions, definition);
        self.add_definition(Node::new(NodeKind::ScalarTypeDefinition, reference), Some(name));
    }

    fn parse_scalar_type_body(&mut self, description: Option<Description>) -> ScalarTypeDefinition {
        let scalar_literal = self.must_read_ident_key(IdentKeyword::Scalar);
        let mut definition = ScalarTypeDefinition {
            description,
            name: self.must_read(Keyword::Ident).literal,
            position: scalar_literal.position,
            ..ScalarTypeDefinition::default()
        };
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        definition
    }

    fn parse_union_type_definition(&mut self, description: Option<Description>) {
        let definition = self.parse_union_type_body(description);
        let name = definition.name;
        let reference = append(&mut self.doc.union_type_definitions, definition);
        self.add_definition(Node::new(NodeKind::UnionTypeDefinition, reference), Some(name));
    }

    /// `union Name @directives = A | B`. Without `=` the union has no
    /// members.
    fn parse_union_type_body(&mut self, description: Option<Description>) -> UnionTypeDefinition {
        let union_literal = self.must_read_ident_key(IdentKeyword::Union);
        let mut definition = UnionTypeDefinition {
            description,
            name: self.must_read(Keyword::Ident).literal,
            position: union_literal.position,
            ..UnionTypeDefinition::default()
        };
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::Equals) {
            self.read();
            definition.union_member_types = self.parse_union_member_types();
        }
        definition
    }

    /// `A | B`, with an optional leading `|`. Stops quietly at the first
    /// token that can't continue the list unless a member is still owed.
    fn parse_union_member_types(&mut self) -> RefList {
        let mut list = RefList::default();

        let mut accept_pipe = true;
        let mut accept_ident = true;
        let mut expect_next = true;

        loop {
            match self.peek().keyword {
                Keyword::Pipe if accept_pipe => {
                    accept_pipe = false;
                    accept_ident = true;
                    expect_next = true;
                    self.read();
                },
                Keyword::Pipe => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return list;
                },
                Keyword::Ident if accept_ident => {
                    accept_pipe = true;
                    accept_ident = false;
                    expect_next = false;
                    let name = self.read();
                    let type_ref = self.add_named_type(name);
                    list.push(&mut self.doc.ref_pool, type_ref);
                },
                Keyword::Ident => return list,
                _ => {
                    if expect_next {
                        let token = self.read();
                        self.err_unexpected_token(token, &[]);
                    }
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    fn parse_enum_type_definition(&mut self, description: Option<Description>) {
        let definition = self.parse_enum_type_body(description);
        let name = definition.name;
        let reference = append(&mut self.doc.enum_type_definitions, definition);
        self.add_definition(Node::new(NodeKind::EnumTypeDefinition, reference), Some(name));
    }

    fn parse_enum_type_body(&mut self, description: Option<Description>) -> EnumTypeDefinition {
        let enum_literal = self.must_read_ident_key(IdentKeyword::Enum);
        let mut definition = EnumTypeDefinition {
            description,
            name: self.must_read(Keyword::Ident).literal,
            position: enum_literal.position,
            ..EnumTypeDefinition::default()
        };
        if self.peek_equals(Keyword::At) {
            definition.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) {
            definition.enum_values_definition = self.parse_enum_value_definition_list();
        }
        definition
    }

    fn parse_enum_value_definition_list(&mut self) -> RefList {
        let mut list = RefList::default();
        self.must_read(Keyword::LBrace);

        loop {
            match self.peek().keyword {
                Keyword::String | Keyword::BlockString | Keyword::Ident => {
                    let definition_ref = self.parse_enum_value_definition();
                    list.push(&mut self.doc.ref_pool, definition_ref);
                },
                Keyword::RBrace => {
                    self.read();
                    return list;
                },
                _ => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return list;
                },
            }

            if self.report.has_errors() {
                return list;
            }
        }
    }

    fn parse_enum_value_definition(&mut self) -> Ref {
        let description = self.parse_optional_description();
        let enum_value = self.must_read(Keyword::Ident);
        let directives = if self.peek_equals(Keyword::At) {
            self.parse_directive_list()
        } else {
            RefList::default()
        };

        append(
            &mut self.doc.enum_value_definitions,
            EnumValueDefinition {
                description,
                enum_value: enum_value.literal,
                directives,
                position: enum_value.position,
            },
        )
    }

    // =========================================================================
    // Directive definition parsing
    // =========================================================================

    /// `directive @name(args) repeatable on LOCATION | ...`
    fn parse_directive_definition(&mut self, description: Option<Description>) {
        let directive_literal = self.must_read_ident_key(IdentKeyword::Directive);
        self.must_read(Keyword::At);
        let name = self.must_read(Keyword::Ident);

        let mut definition = DirectiveDefinition {
            description,
            name: name.literal,
            position: directive_literal.position,
            ..DirectiveDefinition::default()
        };
        if self.peek_equals(Keyword::LParen) {
            definition.arguments = self.parse_input_value_definition_list(Keyword::RParen);
        }
        if self.peek_equals_ident_key(IdentKeyword::Repeatable) {
            self.read();
            definition.repeatable = true;
        }
        self.must_read_ident_key(IdentKeyword::On);
        self.parse_directive_locations(&mut definition.locations);

        let reference = append(&mut self.doc.directive_definitions, definition);
        self.add_definition(
            Node::new(NodeKind::DirectiveDefinition, reference),
            Some(name.literal),
        );
    }

    /// `LOCATION | LOCATION`, with an optional leading `|`.
    fn parse_directive_locations(&mut self, locations: &mut DirectiveLocations) {
        let mut accept_pipe = true;
        let mut accept_ident = true;
        let mut expect_next = true;

        loop {
            match self.peek().keyword {
                Keyword::Ident if accept_ident => {
                    accept_ident = false;
                    accept_pipe = true;
                    expect_next = false;

                    let location = self.read();
                    if !locations.set_from_raw(location.literal_bytes(&self.doc.input)) {
                        self.err_invalid_directive_location(location);
                        return;
                    }
                },
                Keyword::Ident => return,
                Keyword::Pipe if accept_pipe => {
                    accept_pipe = false;
                    accept_ident = true;
                    expect_next = true;
                    self.read();
                },
                Keyword::Pipe => {
                    let token = self.read();
                    self.err_unexpected_token(token, &[]);
                    return;
                },
                _ => {
                    if expect_next {
                        let token = self.read();
                        self.err_unexpected_token(token, &[]);
                    }
                    return;
                },
            }

            if self.report.has_errors() {
                return;
            }
        }
    }

    // =========================================================================
    // Type extension parsing
    // =========================================================================
    //
    // Extensions are indexed under the name of the type they extend, after
    // whatever was indexed under it before.

    fn parse_extension(&mut self) {
        let extend = self.must_read_ident_key(IdentKeyword::Extend).position;

        let next = self.peek();
        if next.keyword != Keyword::Ident {
            let token = self.read();
            self.err_unexpected_token(token, &[Keyword::Ident]);
            return;
        }

        let key = self.ident_key(next);
        match key {
            IdentKeyword::Schema => self.parse_schema_extension(extend),
            IdentKeyword::Type => {
                let object_type_definition = self.parse_object_type_body(None);
                let name = object_type_definition.name;
                let reference = append(
                    &mut self.doc.object_type_extensions,
                    ObjectTypeExtension {
                        object_type_definition,
                        position: extend,
                    },
                );
                self.add_definition(
                    Node::new(NodeKind::ObjectTypeExtension, reference),
                    Some(name),
                );
            },
            IdentKeyword::Interface => {
                let interface_type_definition = self.parse_interface_type_body(None);
                let name = interface_type_definition.name;
                let reference = append(
                    &mut self.doc.interface_type_extensions,
                    InterfaceTypeExtension {
                        interface_type_definition,
                        position: extend,
                    },
                );
                self.add_definition(
                    Node::new(NodeKind::InterfaceTypeExtension, reference),
                    Some(name),
                );
            },
            IdentKeyword::Scalar => {
                let scalar_type_definition = self.parse_scalar_type_body(None);
                let name = scalar_type_definition.name;
                let reference = append(
                    &mut self.doc.scalar_type_extensions,
                    ScalarTypeExtension {
                        scalar_type_definition,
                        position: extend,
                    },
                );
                self.add_definition(
                    Node::new(NodeKind::ScalarTypeExtension, reference),
                    Some(name),
                );
            },
            IdentKeyword::Union => {
                let union_type_definition = self.parse_union_type_body(None);
                let name = union_type_definition.name;
                let reference = append(
                    &mut self.doc.union_type_extensions,
                    UnionTypeExtension {
                        union_type_definition,
                        position: extend,
                    },
                );
                self.add_definition(
                    Node::new(NodeKind::UnionTypeExtension, reference),
                    Some(name),
                );
            },
            IdentKeyword::Enum => {
                let enum_type_definition = self.parse_enum_type_body(None);
                let name = enum_type_definition.name;
                let reference = append(
                    &mut self.doc.enum_type_extensions,
                    EnumTypeExtension {
                        enum_type_definition,
                        position: extend,
                    },
                );
                self.add_definition(
                    Node::new(NodeKind::EnumTypeExtension, reference),
                    Some(name),
                );
            },
            IdentKeyword::Input => {
                let input_object_type_definition = self.parse_input_object_type_body(None);
                let name = input_object_type_definition.name;
                let reference = append(
                    &mut self.doc.input_object_type_extensions,
                    InputObjectTypeExtension {
                        input_object_type_definition,
                        position: extend,
                    },
                );
                self.add_definition(
                    Node::new(NodeKind::InputObjectTypeExtension, reference),
                    Some(name),
                );
            },
            _ => {
                let token = self.read();
                self.err_unexpected_ident_key(
                    token,
                    key,
                    &[
                        IdentKeyword::Schema,
                        IdentKeyword::Type,
                        IdentKeyword::Interface,
                        IdentKeyword::Scalar,
                        IdentKeyword::Union,
                        IdentKeyword::Enum,
                        IdentKeyword::Input,
                        IdentKeyword::Extend,
                    ],
                );
            },
        }
    }

    /// `extend schema @directives { ... }`. The operation type list may
    /// only be left out when directives are present. Schema extensions are
    /// not indexed.
    fn parse_schema_extension(&mut self, extend: SourcePosition) {
        let schema_literal = self.read();
        let mut schema_definition = SchemaDefinition {
            position: schema_literal.position,
            ..SchemaDefinition::default()
        };

        let has_directives = self.peek_equals(Keyword::At);
        if has_directives {
            schema_definition.directives = self.parse_directive_list();
        }
        if self.peek_equals(Keyword::LBrace) || !has_directives {
            schema_definition.root_operation_types =
                self.parse_root_operation_type_definition_list();
        }

        let reference = append(
            &mut self.doc.schema_extensions,
            SchemaExtension {
                schema_definition,
                position: extend,
            },
        );
        self.add_definition(Node::new(NodeKind::SchemaExtension, reference), None);
    }
}

fn operation_type_of(key: IdentKeyword) -> OperationType {
    match key {
        IdentKeyword::Query => OperationType::Query,
        IdentKeyword::Mutation => OperationType::Mutation,
        IdentKeyword::Subscription => OperationType::Subscription,
        _ => OperationType::Unknown,
    }
}
