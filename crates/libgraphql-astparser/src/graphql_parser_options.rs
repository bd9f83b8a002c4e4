/// Default for [`GraphQLParserOptions::max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Behavioral switches for a [`GraphQLParser`](crate::GraphQLParser).
///
/// ```rust
/// use libgraphql_astparser::GraphQLParser;
/// use libgraphql_astparser::GraphQLParserOptions;
///
/// let parser = GraphQLParser::with_options(
///     GraphQLParserOptions::default()
///         .with_should_index(false)
///         .with_report_internal_errors(true),
/// );
/// assert!(!parser.options().should_index);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLParserOptions {
    /// Whether named type-system definitions are added to
    /// [`Document::index`](crate::ast::Document::index) as they are parsed.
    ///
    /// Import tooling turns this off to decide for itself when imported
    /// names become visible.
    pub should_index: bool,

    /// Whether every external error is paired with a
    /// [`GraphQLParseError`](crate::GraphQLParseError) carrying the
    /// expected-token set, the offending literal and the grammar-rule call
    /// site that rejected it.
    pub report_internal_errors: bool,

    /// How deep values, type references and selection sets may nest before
    /// the grammar stops descending and reports
    /// `nesting depth limit exceeded: <n>`. Bounds recursion for documents
    /// parsed without [`TokenizerLimits`](crate::TokenizerLimits).
    ///
    /// [`parse_with_limits`](crate::GraphQLParser::parse_with_limits) raises
    /// this to the limits' `max_depth` when that is larger, so a document the
    /// tokenizer accepts is never rejected by the guard.
    pub max_nesting_depth: usize,
}

impl GraphQLParserOptions {
    pub fn with_should_index(mut self, should_index: bool) -> Self {
        self.should_index = should_index;
        self
    }

    pub fn with_report_internal_errors(mut self, report_internal_errors: bool) -> Self {
        self.report_internal_errors = report_internal_errors;
        self
    }

    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}

impl Default for GraphQLParserOptions {
    fn default() -> Self {
        Self {
            should_index: true,
            report_internal_errors: false,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
