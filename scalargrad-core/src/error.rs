use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// The value or the derivative of an operation is mathematically undefined
    /// for its operands (e.g. division by a zero-valued node).
    #[error("Domain error in {operation}: {reason}")]
    Domain { operation: String, reason: String },

    #[error("Cycle detected in the computation graph at node {node} during backward pass.")]
    CycleDetected { node: usize },

    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Cannot set the value of node {node}: only leaf nodes can be mutated")]
    NonLeafMutation { node: usize },
}

impl ScalarGradError {
    /// Returns `true` for errors that mean a graph construction invariant was
    /// broken. These are not recoverable by the caller.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ScalarGradError::CycleDetected { .. } | ScalarGradError::InternalConsistency(_)
        )
    }

    pub(crate) fn domain(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::Domain {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
