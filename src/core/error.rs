// src/core/error.rs

//! Error handling logic

use thiserror::Error;

/// Error types raised while building, combining or rendering a state.
///
/// Every variant is terminal for the current render cycle. The caller surfaces
/// the message; no default state is substituted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WignerError {
    /// The state-kind menu received a selection it does not offer, or the
    /// textual control description could not be parsed.
    #[error("Invalid Selection: {message}")]
    InvalidSelection {
        /// InvalidSelection failure message
        message: String,
    },

    /// A parameter lies outside its declared bound, e.g. a Fock index at or
    /// beyond the truncation dimension or a slider value past its limits.
    #[error("Out Of Range: {message}")]
    OutOfRange {
        /// OutOfRange failure message
        message: String,
    },

    /// Renormalization of a zero-norm ket or zero-trace operator, or a failed
    /// unit norm / unit trace check.
    #[error("Normalization Failure: {message}")]
    Normalization {
        /// Normalization failure message
        message: String,
    },

    /// A coherent superposition was requested for an operator-typed state.
    #[error("Type Mismatch: {message}")]
    TypeMismatch {
        /// TypeMismatch failure message
        message: String,
    },

    /// Two states from different truncated spaces were combined.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the accumulated state
        expected: usize,
        /// Dimension of the offending state
        actual: usize,
    },

    /// An operator failed the Hermitian or positive semi-definite check.
    #[error("Unphysical State: {message}")]
    NotPhysical {
        /// NotPhysical failure message
        message: String,
    },

    /// The plotting backend failed while drawing the figure.
    #[error("Render Failure: {message}")]
    Render {
        /// Render failure message
        message: String,
    },
}

impl WignerError {
    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        WignerError::OutOfRange { message: message.into() }
    }

    pub(crate) fn invalid_selection(message: impl Into<String>) -> Self {
        WignerError::InvalidSelection { message: message.into() }
    }

    pub(crate) fn normalization(message: impl Into<String>) -> Self {
        WignerError::Normalization { message: message.into() }
    }

    pub(crate) fn type_mismatch(message: impl Into<String>) -> Self {
        WignerError::TypeMismatch { message: message.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WignerError>;
