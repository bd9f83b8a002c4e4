use serde::Deserialize;
use serde::Serialize;

/// Resource limits checked while tokenizing, before any AST is built.
///
/// A limit of `0` disables that check.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TokenizerLimits {
    /// Maximum cumulative selection-set depth.
    pub max_depth: usize,

    /// Maximum number of field identifiers inside selection sets.
    pub max_fields: usize,
}

impl TokenizerLimits {
    pub fn new(max_depth: usize, max_fields: usize) -> Self {
        Self {
            max_depth,
            max_fields,
        }
    }
}
