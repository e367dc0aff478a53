//! Error types for the maxnumber system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for maxnumber operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an error for a sequence that was present but had no elements.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::new(ErrorKind::EmptySequence)
    }

    /// Creates an error for a sequence that was not provided at all.
    #[must_use]
    pub fn absent_sequence() -> Self {
        Self::new(ErrorKind::AbsentSequence)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The sequence contained no elements.
    #[error("empty sequence has no maximum")]
    EmptySequence,

    /// No sequence was provided.
    #[error("absent sequence has no maximum")]
    AbsentSequence,
}

/// Result type alias using the maxnumber Error.
pub type Result<T> = std::result::Result<T, Error>;
