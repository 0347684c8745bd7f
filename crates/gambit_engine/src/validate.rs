//! Rule document validation.
//!
//! Four independent, order-insensitive checks of a compiled document against
//! the intent it was compiled from. The validator never mutates the
//! document; error-severity issues mark it unsafe to execute but do not stop
//! the pipeline.

use serde::{Deserialize, Serialize};

use gambit_document::{Effect, RuleDocument};
use gambit_foundation::Diagnostic;
use gambit_intent::CanonicalIntent;

/// Issue code: the document has no rule name.
pub const MISSING_RULE_NAME: &str = "missing_rule_name";
/// Issue code: the compiled scope dropped pieces the intent governs.
pub const SCOPE_PIECES_MISMATCH: &str = "scope_pieces_mismatch";
/// Issue code: unsafe relocation without a king-safety guard.
pub const MISSING_KING_SAFETY: &str = "missing_king_safety";
/// Issue code: a once-per-match rule never marks its resource used.
pub const MISSING_RESOURCE_CONSUME: &str = "missing_resource_consume";

/// The validator's findings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every issue found, in check order.
    pub issues: Vec<Diagnostic>,
    /// True iff no issue has error severity.
    pub is_valid: bool,
}

/// Validates compiled rule documents.
pub struct RuleValidator;

impl RuleValidator {
    /// Runs every check and collects the findings.
    #[must_use]
    pub fn validate(intent: &CanonicalIntent, document: &RuleDocument) -> ValidationReport {
        let mut issues = Vec::new();

        if document.meta.name.trim().is_empty() {
            issues.push(Diagnostic::error(
                MISSING_RULE_NAME,
                "the compiled document has no rule name",
            ));
        }

        let missing: Vec<_> = intent
            .affected_pieces
            .iter()
            .filter(|piece| !document.scope.pieces.contains(piece))
            .collect();
        if document.scope.pieces.is_empty() || !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|p| p.as_str()).collect();
            issues.push(Diagnostic::error(
                SCOPE_PIECES_MISMATCH,
                format!(
                    "the compiled scope does not cover every governed piece (missing: {})",
                    if names.is_empty() {
                        "all".to_string()
                    } else {
                        names.join(", ")
                    }
                ),
            ));
        }

        // The single most important safety invariant: no compiled rule may
        // create or preserve a self-check position through an uninspected
        // action.
        if intent.has_unsafe_relocation()
            && !document
                .logic
                .effects
                .iter()
                .any(Effect::has_king_safety_guard)
        {
            issues.push(Diagnostic::error(
                MISSING_KING_SAFETY,
                "mechanics imply piece relocation but no effect guards king safety",
            ));
        }

        if intent.limits.once_per_match
            && !document.has_action(gambit_document::ActionKind::ResourceConsume)
        {
            issues.push(Diagnostic::warning(
                MISSING_RESOURCE_CONSUME,
                "once-per-match limit is declared but no action marks the resource used",
            ));
        }

        let is_valid = !issues.iter().any(Diagnostic::is_error);
        ValidationReport { issues, is_valid }
    }
}
