//! Validator checks over compiled documents.

use gambit_compiler::RuleCompiler;
use gambit_engine::RuleValidator;
use gambit_foundation::{Mechanic, PieceKind, Severity};
use gambit_intent::{CanonicalIntent, Limits, TemplateId};

fn blink() -> CanonicalIntent {
    CanonicalIntent::new("Bishop Blink", TemplateId::BishopBlink)
        .with_piece(PieceKind::Bishop)
        .with_mechanic(Mechanic::Teleport)
}

// =============================================================================
// Safety Invariant (both directions)
// =============================================================================

#[test]
fn guard_present_implies_no_error() {
    let intent = blink();
    let (document, _) = RuleCompiler::compile(&intent);
    let report = RuleValidator::validate(&intent, &document);
    assert!(report.is_valid);
    assert!(!report
        .issues
        .iter()
        .any(|i| i.code == "missing_king_safety"));
}

#[test]
fn guard_absent_implies_error() {
    let intent = blink();
    let (mut document, _) = RuleCompiler::compile(&intent);
    for effect in &mut document.logic.effects {
        effect.guards.retain(|g| !g.is_king_safety());
    }
    let report = RuleValidator::validate(&intent, &document);
    assert!(!report.is_valid);
    let issue = report
        .issues
        .iter()
        .find(|i| i.code == "missing_king_safety")
        .expect("missing_king_safety must be reported");
    assert_eq!(issue.severity, Severity::Error);
}

#[test]
fn every_unsafe_mechanic_triggers_the_check() {
    for mechanic in [
        Mechanic::Teleport,
        Mechanic::Swap,
        Mechanic::Morph,
        Mechanic::Projectile,
    ] {
        let intent = CanonicalIntent::new("Unsafe", TemplateId::Custom("unchecked".into()))
            .with_piece(PieceKind::Queen)
            .with_mechanic(mechanic.clone());
        // The scaffold has no effects at all, hence no guard anywhere.
        let (document, _) = RuleCompiler::compile(&intent);
        let report = RuleValidator::validate(&intent, &document);
        assert!(
            report.issues.iter().any(|i| i.code == "missing_king_safety"),
            "{mechanic} should demand a king-safety guard"
        );
    }
}

// =============================================================================
// Other Checks
// =============================================================================

#[test]
fn scope_must_cover_the_intent() {
    let wider = blink().with_piece(PieceKind::Queen);
    // Compile from the narrower intent, validate against the wider one.
    let (document, _) = RuleCompiler::compile(&blink());
    let report = RuleValidator::validate(&wider, &document);
    assert!(!report.is_valid);
    assert!(report
        .issues
        .iter()
        .any(|i| i.code == "scope_pieces_mismatch"));
}

#[test]
fn once_per_match_advisory_is_a_warning_only() {
    let mut intent = blink();
    intent.limits = Limits {
        once_per_match: true,
        ..Limits::default()
    };
    let (document, _) = RuleCompiler::compile(&intent);
    let report = RuleValidator::validate(&intent, &document);
    let issue = report
        .issues
        .iter()
        .find(|i| i.code == "missing_resource_consume")
        .unwrap();
    assert_eq!(issue.severity, Severity::Warning);
    assert!(report.is_valid);
}

#[test]
fn validation_never_mutates_the_document() {
    let intent = blink();
    let (document, _) = RuleCompiler::compile(&intent);
    let before = document.clone();
    let _ = RuleValidator::validate(&intent, &document);
    assert_eq!(document, before);
}
