//! Entry points for parsing GraphQL source into a
//! [`Document`](crate::ast::Document).
//!
//! [`GraphQLParser`] owns a reusable [`GraphQLTokenizer`]. Each parse first
//! lexes the document's whole input into the tokenizer's buffer (optionally
//! enforcing [`TokenizerLimits`]), then runs the recursive-descent grammar in
//! a [`ParseSession`] that appends entities to the document's arenas.
//!
//! Parsing stops at the first error. The error is recorded in the caller's
//! [`OperationReport`]; whatever was appended before it stays in the
//! document.

use crate::ExternalError;
use crate::GraphQLParserOptions;
use crate::GraphQLTokenizer;
use crate::OperationReport;
use crate::ParseSession;
use crate::TokenizerLimitError;
use crate::TokenizerLimits;
use crate::TokenizerStats;
use crate::ast::Document;

/// A reusable recursive-descent parser.
///
/// Reusing one parser (and one [`Document`], via
/// [`Document::reset_input_str`]) across many parses keeps the token buffer
/// and arena allocations alive between calls.
///
/// # Usage
///
/// ```rust
/// use libgraphql_astparser::GraphQLParser;
/// use libgraphql_astparser::OperationReport;
/// use libgraphql_astparser::ast::Document;
///
/// let mut parser = GraphQLParser::new();
/// let mut doc = Document::new();
/// let mut report = OperationReport::new();
///
/// doc.reset_input_str("query Hero { hero { name } }");
/// parser.parse(&mut doc, &mut report);
///
/// assert!(!report.has_errors());
/// assert_eq!(doc.operation_definitions.len(), 1);
/// assert_eq!(doc.fields.len(), 2);
/// ```
pub struct GraphQLParser {
    tokenizer: GraphQLTokenizer,
    options: GraphQLParserOptions,
}

impl GraphQLParser {
    pub fn new() -> Self {
        Self::with_options(GraphQLParserOptions::default())
    }

    pub fn with_options(options: GraphQLParserOptions) -> Self {
        Self {
            tokenizer: GraphQLTokenizer::new(),
            options,
        }
    }

    pub fn options(&self) -> GraphQLParserOptions {
        self.options
    }

    /// Tokenizes and parses all of `doc.input` into `doc`.
    ///
    /// Inputs longer than [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) are
    /// reported (without a location) and not parsed.
    pub fn parse(&mut self, doc: &mut Document, report: &mut OperationReport) {
        log::trace!("parsing document ({} bytes)", doc.input.len());
        if !self.tokenize_checked(doc, report) {
            return;
        }
        self.session(doc, report).parse_definitions();
    }

    /// Like [`parse`](Self::parse), but rejects the document during
    /// tokenization if it exceeds `limits`. The grammar is not run at all in
    /// that case.
    ///
    /// A limit violation is returned as the error and also recorded in
    /// `report` (without a location). The partial stats counted up to the
    /// violation stay available through
    /// [`tokenizer_stats`](Self::tokenizer_stats).
    pub fn parse_with_limits(
        &mut self,
        limits: TokenizerLimits,
        doc: &mut Document,
        report: &mut OperationReport,
    ) -> Result<TokenizerStats, TokenizerLimitError> {
        log::trace!(
            "parsing document ({} bytes) with limits (depth: {}, fields: {})",
            doc.input.len(),
            limits.max_depth,
            limits.max_fields,
        );
        let stats = match self.tokenizer.tokenize_with_limits(limits, &doc.input) {
            Ok(stats) => stats,
            Err(err) => {
                report.add_external_error(ExternalError::limit_exceeded(&err));
                return Err(err);
            },
        };
        // Selection sets nest no deeper than the depth limit just enforced.
        let options = self.options.with_max_nesting_depth(
            self.options.max_nesting_depth.max(limits.max_depth),
        );
        ParseSession::new(&mut self.tokenizer, options, doc, report).parse_definitions();
        Ok(stats)
    }

    /// Stats of the last [`parse_with_limits`](Self::parse_with_limits) call.
    pub fn tokenizer_stats(&self) -> TokenizerStats {
        self.tokenizer.stats()
    }

    /// Tokenizes `doc.input` without parsing it and returns a session for
    /// driving individual grammar rules by hand.
    ///
    /// This is how import tooling adds a type, value or selection set taken
    /// from source text to a document that was built some other way:
    ///
    /// ```rust
    /// use libgraphql_astparser::GraphQLParser;
    /// use libgraphql_astparser::OperationReport;
    /// use libgraphql_astparser::ast::Document;
    ///
    /// let mut parser = GraphQLParser::new();
    /// let mut doc = Document::new();
    /// let mut report = OperationReport::new();
    /// doc.reset_input_str("[String!]!");
    ///
    /// let type_ref = parser.prepare_import(&mut doc, &mut report).parse_type();
    /// assert!(!report.has_errors());
    /// assert_eq!(doc.print_type(type_ref), "[String!]!");
    /// ```
    pub fn prepare_import<'a>(
        &'a mut self,
        doc: &'a mut Document,
        report: &'a mut OperationReport,
    ) -> ParseSession<'a> {
        self.tokenize_checked(doc, report);
        self.session(doc, report)
    }

    /// Tokenizes `doc.input`, or records an error and leaves only an EOF
    /// token behind if the input is too large to address.
    fn tokenize_checked(&mut self, doc: &Document, report: &mut OperationReport) -> bool {
        match TokenizerLimitError::check_input_len(doc.input.len()) {
            Ok(()) => {
                self.tokenizer.tokenize(&doc.input);
                true
            },
            Err(err) => {
                log::debug!("rejecting document of {} bytes: {err}", doc.input.len());
                report.add_external_error(ExternalError::limit_exceeded(&err));
                self.tokenizer.tokenize(&[]);
                false
            },
        }
    }

    fn session<'a>(
        &'a mut self,
        doc: &'a mut Document,
        report: &'a mut OperationReport,
    ) -> ParseSession<'a> {
        ParseSession::new(&mut self.tokenizer, self.options, doc, report)
    }
}

impl Default for GraphQLParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `input` into a fresh [`Document`] with a fresh parser.
///
/// Convenient for one-off parses. In a hot path, keep a [`GraphQLParser`]
/// and a [`Document`] around and reuse them instead.
pub fn parse_document_from_str(input: &str) -> (Document, OperationReport) {
    parse_document_from_bytes(input.as_bytes())
}

/// Byte-slice twin of [`parse_document_from_str`].
pub fn parse_document_from_bytes(input: &[u8]) -> (Document, OperationReport) {
    let mut doc = Document::new();
    doc.reset_input_bytes(input);
    let mut report = OperationReport::new();
    GraphQLParser::new().parse(&mut doc, &mut report);
    (doc, report)
}
