use crate::ExternalError;
use crate::GraphQLParseError;

/// Accumulates the diagnostics of a parse.
///
/// Parsing stops at the first recorded error, so a report filled by the
/// parser holds at most one external error (plus, when enabled, its
/// internal twin). Callers may reuse a report across parses with
/// [`reset`](Self::reset).
///
/// `Display` renders every internal error (prefixed `internal: `) followed
/// by every external error (prefixed `external: `), one per line.
#[derive(Clone, Debug, Default, thiserror::Error)]
#[error("{}", self.format_lines())]
pub struct OperationReport {
    pub internal_errors: Vec<GraphQLParseError>,
    pub external_errors: Vec<ExternalError>,
}

impl OperationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.internal_errors.is_empty() || !self.external_errors.is_empty()
    }

    pub fn add_external_error(&mut self, error: ExternalError) {
        if !self.has_errors() {
            log::debug!("{}", error.format_report_line());
        }
        self.external_errors.push(error);
    }

    pub fn add_internal_error(&mut self, error: GraphQLParseError) {
        self.internal_errors.push(error);
    }

    pub fn reset(&mut self) {
        self.internal_errors.clear();
        self.external_errors.clear();
    }

    fn format_lines(&self) -> String {
        let internal = self
            .internal_errors
            .iter()
            .map(|err| format!("internal: {err}"));
        let external = self
            .external_errors
            .iter()
            .map(|err| format!("external: {}", err.format_report_line()));
        internal.chain(external).collect::<Vec<_>>().join("\n")
    }
}
