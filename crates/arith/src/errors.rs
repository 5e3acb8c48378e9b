//! Error types for the arithmetic layer

use thiserror::Error;

/// Result type for arithmetic operations
pub type Result<T> = std::result::Result<T, ArithError>;

/// Errors that can occur when driving the arithmetic library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithError {
    /// `init` was called more than once
    #[error("Arithmetic library already initialized")]
    AlreadyInitialized,

    /// An operation needed the library before `init` ran
    #[error("Arithmetic library not initialized")]
    NotInitialized,

    /// Scalar width other than the one the MSM entry point accepts
    #[error("Invalid scalar width: expected {expected} bytes, got {actual}")]
    InvalidScalarWidth { expected: usize, actual: usize },

    /// Bases and scalar bytes disagree on the number of terms
    #[error("Length mismatch: {bases} bases but {scalar_bytes} scalar bytes")]
    LengthMismatch { bases: usize, scalar_bytes: usize },
}
