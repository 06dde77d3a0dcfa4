/// Snapshot parse failure.
///
/// `NotJson` and `InvalidShape` are kept apart because callers recover from
/// them differently: the first falls back to the legacy text parser, the
/// second is a hard error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Snapshot is not valid JSON: {0}")]
    NotJson(String),

    #[error("Snapshot JSON has an invalid shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Snapshot input is empty")]
    Empty,
}

impl ParseError {
    pub(crate) fn shape<S: Into<String>>(reason: S) -> Self {
        ParseError::InvalidShape { reason: reason.into() }
    }
}
