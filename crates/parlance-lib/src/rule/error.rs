use parlance_core::Span;
use thiserror::Error;

/// A capture was read outside the context that declares it.
///
/// Always a bug in a rule pattern or its interpretation, never a property of
/// the input, so it propagates out of the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("`{name}` is not declared in {scope}")]
    Undeclared { name: String, scope: String },

    #[error("`{name}` did not take part in the match")]
    Unresolved { name: String },

    #[error("`{name}` matched more than once and has no single span")]
    Repeated { name: String },

    #[error("`{name}` spans {span}, outside the active span {active}")]
    OutOfScope { name: String, span: Span, active: Span },

    #[error("`{name}` has no interpretation attached")]
    NoInterpretation { name: String },
}

/// Failure of an interpretation function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The words matched but do not form valid semantics.
    /// Handled exactly like a non-match.
    #[error("rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl RuleError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}
