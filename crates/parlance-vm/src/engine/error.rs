//! Errors that can occur during pattern execution.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many interpreter steps).
    #[error("runtime execution limit exceeded ({0} steps)")]
    ExecFuelExhausted(u32),
}
