// src/error.rs
// Error type shared by every fallible vector operation.

use thiserror::Error;

/// Errors returned by checked vector operations.
///
/// Plain arithmetic never returns these; it keeps the scalar type's native
/// semantics (IEEE-754 for floats, panics on integer division by zero).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// A sequence of the wrong length was supplied for a vector of dimension `expected`.
    #[error("expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A component index was outside `0..dimension`.
    #[error("index {index} is out of range for a vector of dimension {dimension}")]
    IndexOutOfBounds { index: usize, dimension: usize },

    /// Normalization was requested for a vector whose norm is zero.
    #[error("cannot normalize a vector whose norm is zero")]
    ZeroNorm,

    /// Normalization was requested for a vector whose norm is NaN or infinite.
    #[error("cannot normalize a vector whose norm is not finite")]
    NonFiniteNorm,

    /// The p-norm order was zero, negative or NaN.
    #[error("p-norm order must be positive, got {order}")]
    InvalidNormOrder { order: f64 },

    /// Vector text was not enclosed in `(` and `)`.
    #[error("vector text must be enclosed in parentheses")]
    MissingParentheses,

    /// A component in vector text could not be parsed as the scalar type.
    #[error("component {index} could not be parsed from {text:?}")]
    InvalidComponent { index: usize, text: String },

    #[cfg(feature = "serde")]
    #[error("failed to encode vector: {0}")]
    Encode(String),

    #[cfg(feature = "serde")]
    #[error("failed to decode vector: {0}")]
    Decode(String),
}
