use serde::Serialize;

/// Complexity counters computed during
/// [`GraphQLTokenizer::tokenize_with_limits`](crate::GraphQLTokenizer::tokenize_with_limits).
///
/// `total_depth` is a deliberate over-approximation of AST depth: the depth
/// peak of every operation and fragment body is summed, not maxed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TokenizerStats {
    pub total_depth: usize,
    pub total_fields: usize,
}
