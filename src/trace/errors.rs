//! Error types for trace generation
//!
//! The generator itself is total over integer input. The only failure class is
//! malformed input that never becomes an integer array in the first place, so
//! [`TraceError`] is raised by the input adapters and no partial trace is ever
//! produced.

use thiserror::Error;

/// Errors raised while turning caller input into a trace
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// An input element is non-numeric, non-finite, or not an integer
    #[error("Invalid input at position {position}: {reason}")]
    InvalidInput { position: usize, reason: String },
}

impl TraceError {
    pub(crate) fn invalid(position: usize, reason: impl Into<String>) -> Self {
        TraceError::InvalidInput {
            position,
            reason: reason.into(),
        }
    }

    /// Index of the offending element in the caller's input
    pub fn position(&self) -> usize {
        match self {
            TraceError::InvalidInput { position, .. } => *position,
        }
    }
}
