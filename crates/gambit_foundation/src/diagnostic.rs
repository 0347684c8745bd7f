//! Severity-tagged diagnostics.
//!
//! Every non-fatal problem in the pipeline travels as a [`Diagnostic`]:
//! extractor warnings, compiler warnings, validator issues, and dry-run
//! mismatches. Stages collect diagnostics instead of short-circuiting, so a
//! caller always receives a complete result with partial problems attached.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Advisory only.
    Warning,
    /// The artifact is unsafe or wrong, but the pipeline still completes.
    Error,
}

/// A single issue reported by a pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Stable machine-readable code (e.g. `no_match`, `missing_king_safety`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// How serious the issue is.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic.
    #[must_use]
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity diagnostic.
    #[must_use]
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Returns true if this diagnostic has error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{tag}] {}: {}", self.code, self.message)
    }
}
