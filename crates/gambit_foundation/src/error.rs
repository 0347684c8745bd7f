//! Error types for the Gambit pipeline.
//!
//! Uses `thiserror` for ergonomic error definition. Only schema violations on
//! the canonical intent are fatal; every other stage reports problems as
//! [`crate::Diagnostic`] values instead of errors.

use thiserror::Error;

/// The main error type for Gambit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a schema violation error listing every offending path.
    #[must_use]
    pub fn schema_violation(paths: Vec<String>) -> Self {
        Self::new(ErrorKind::SchemaViolation { paths })
    }

    /// Creates an unparseable-square error.
    #[must_use]
    pub fn bad_square(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadSquare(text.into()))
    }

    /// Creates an unrecognized-word error (piece kinds, occupancy, tags).
    #[must_use]
    pub fn bad_word(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadWord {
            expected,
            actual: actual.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this is a schema violation.
    #[must_use]
    pub const fn is_schema_violation(&self) -> bool {
        matches!(self.kind, ErrorKind::SchemaViolation { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Canonical intent failed structural validation. Always fatal.
    #[error("schema violation at {}", .paths.join(", "))]
    SchemaViolation {
        /// Paths of the offending fields (e.g. `affectedPieces`).
        paths: Vec<String>,
    },

    /// A square could not be parsed from algebraic notation.
    #[error("not a square: {0:?}")]
    BadSquare(String),

    /// A word was not a recognized member of an enumeration.
    #[error("expected {expected}, got {actual:?}")]
    BadWord {
        /// What kind of word was expected.
        expected: &'static str,
        /// The actual word encountered.
        actual: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
