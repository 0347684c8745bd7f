//! Structural validation of canonical intents.
//!
//! The only fatal check in the pipeline: a malformed intent is rejected
//! before compilation, and every compiler template may assume its input
//! passed. The check is pure and total - it never inspects free text, only
//! structure, and it collects every offending path instead of stopping at
//! the first.

use crate::canonical::{CanonicalIntent, TargetingMode};
use gambit_foundation::{Error, Result};

/// Checks the structural invariants of a canonical intent.
///
/// # Errors
/// Returns a single [`Error`] of kind `SchemaViolation` listing every
/// offending field path.
pub fn check_schema(intent: &CanonicalIntent) -> Result<()> {
    let mut paths = Vec::new();

    if intent.rule_name.trim().is_empty() {
        paths.push("ruleName".to_string());
    }
    if intent.template_id.is_blank() {
        paths.push("templateId".to_string());
    }
    if intent.affected_pieces.is_empty() {
        paths.push("affectedPieces".to_string());
    }
    if intent.mechanics.is_empty() {
        paths.push("mechanics".to_string());
    }
    if let Some(targeting) = &intent.targeting {
        if targeting.mode != TargetingMode::None && targeting.provider.trim().is_empty() {
            paths.push("targeting.provider".to_string());
        }
    }

    if paths.is_empty() {
        Ok(())
    } else {
        Err(Error::schema_violation(paths))
    }
}
