//! Shared helpers for template generators.

use gambit_document::{GuardExpr, Meta, RuleDocument, Scope};
use gambit_foundation::Value;
use gambit_intent::CanonicalIntent;

/// Builds document metadata from an intent: derived id, category, and the
/// tag union of hazards, statuses, mechanics, and piece names.
pub fn base_meta(intent: &CanonicalIntent, category: &str) -> Meta {
    let mut meta = Meta::new(intent.rule_name.clone(), category);
    for hazard in &intent.hazards {
        meta.tags.insert(hazard.clone());
    }
    for status in &intent.statuses {
        meta.tags.insert(status.clone());
    }
    for mechanic in &intent.mechanics {
        meta.tags.insert(mechanic.to_string());
    }
    for piece in &intent.affected_pieces {
        meta.tags.insert(piece.as_str().to_string());
    }
    meta
}

/// Builds the document scope from the intent's governed pieces.
pub fn base_scope(intent: &CanonicalIntent) -> Scope {
    Scope::new(intent.affected_pieces.clone())
}

/// Maps the intent's explicit safety requirements to guard expressions.
///
/// King safety is not mapped here; the compiler's post-pass appends it
/// wherever the guard policy demands it.
pub fn requirement_guards(intent: &CanonicalIntent) -> Vec<GuardExpr> {
    let mut guards = Vec::new();
    if intent.requirements.clear_path {
        guards.push(GuardExpr::atom("path.isClear"));
    }
    if intent.requirements.forbid_king_target {
        guards.push(GuardExpr::atom("target.notKing"));
    }
    guards
}

/// The `piece.kindIn` guard over the intent's governed pieces.
pub fn governed_piece_guard(intent: &CanonicalIntent) -> GuardExpr {
    GuardExpr::call(
        "piece.kindIn",
        intent
            .affected_pieces
            .iter()
            .map(|piece| Value::from(piece.as_str()))
            .collect(),
    )
}

/// Applies the king-safety guard policy to a compiled document.
///
/// Any effect whose action list can relocate a piece, and every effect of an
/// intent whose mechanics imply unsafe relocation, gets the king-safety
/// guard appended unless it already carries one.
pub fn enforce_king_safety(mut document: RuleDocument, intent: &CanonicalIntent) -> RuleDocument {
    let intent_unsafe = intent.has_unsafe_relocation();
    for effect in &mut document.logic.effects {
        let needs_guard = intent_unsafe || effect.has_relocating_action();
        if needs_guard && !effect.has_king_safety_guard() {
            effect.guards.push(GuardExpr::king_safety());
        }
    }
    document
}
