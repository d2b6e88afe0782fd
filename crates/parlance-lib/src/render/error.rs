use thiserror::Error;

/// The expression cannot be expressed in the target language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A literal or relation contains characters the language cannot carry.
    #[error("cannot render {value:?}: {reason}")]
    MalformedValue { value: String, reason: &'static str },

    /// No node has an outgoing edge, so a nested query has nothing to hold.
    #[error("expression has no node with outgoing edges to root a nested query")]
    NoRoot,

    #[error("cannot serialize nested query: {0}")]
    Json(String),
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl GenerationError {
    pub(crate) fn malformed(value: &str, reason: &'static str) -> Self {
        Self::MalformedValue {
            value: value.to_owned(),
            reason,
        }
    }
}
