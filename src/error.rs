//! Crate-level error type.
//!
//! Three kinds reach the process boundary: input errors (a source that cannot be
//! opened or does not parse, or structurally invalid edge labels), memory errors (the
//! recognition engine exhausted its working-storage budget), and usage errors
//! (conflicting or missing command-line arguments). None of them is retried; each
//! maps to a nonzero exit code with a one-line diagnostic. A "not (co)graphic"
//! verdict is a reported outcome, not an error.

use thiserror::Error;

/// Errors reported by conversions and by the command-line layer
#[derive(Debug, Error)]
pub enum GraphmatError {
    /// The input could not be opened or is not a valid instance of its format
    #[error("Input error: {0}")]
    Input(String),

    /// The recognition engine could not allocate the working storage it needs
    #[error("Memory error: {0}")]
    Memory(String),

    /// The invocation itself is invalid, detected before any conversion is attempted
    #[error("Usage error: {0}")]
    Usage(String),
}

impl From<std::io::Error> for GraphmatError {
    fn from(error: std::io::Error) -> Self {
        GraphmatError::Input(error.to_string())
    }
}

/// Crate-wide result shorthand
pub type Result<T> = std::result::Result<T, GraphmatError>;
