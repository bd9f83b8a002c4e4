/// A [`TokenizerLimits`](crate::TokenizerLimits) threshold was crossed.
///
/// Each variant carries the configured limit, not the observed value.
/// Callers typically map these to a "query too complex" response rather
/// than a generic syntax failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokenizerLimitError {
    #[error("depth limit exceeded: {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("fields limit exceeded: {limit}")]
    FieldsLimitExceeded { limit: usize },

    /// The input is too long for its byte offsets to fit a
    /// [`ByteSpan`](crate::ByteSpan).
    #[error("input size limit exceeded: {limit}")]
    InputSizeLimitExceeded { limit: usize },
}

impl TokenizerLimitError {
    /// Rejects inputs longer than [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN).
    pub fn check_input_len(len: usize) -> Result<(), Self> {
        if len > crate::MAX_INPUT_LEN {
            return Err(Self::InputSizeLimitExceeded {
                limit: crate::MAX_INPUT_LEN,
            });
        }
        Ok(())
    }
}
