//! Fallback provider determinism.

use gambit_compiler::build_fallback_provider;
use gambit_foundation::{Mechanic, PieceKind};
use gambit_intent::{CanonicalIntent, TemplateId};

fn intent(name: &str, template: &str) -> CanonicalIntent {
    CanonicalIntent::new(name, TemplateId::Custom(template.to_string()))
        .with_piece(PieceKind::Pawn)
        .with_mechanic(Mechanic::Status("charged".into()))
}

#[test]
fn same_intent_same_provider() {
    let a = build_fallback_provider(&intent("Laser Pawns", "laser_pawns"));
    let b = build_fallback_provider(&intent("Laser Pawns", "laser_pawns"));
    assert_eq!(a.identifier, b.identifier);
    assert_eq!(a.hash, b.hash);
    assert_eq!(a.source, b.source);
}

#[test]
fn distinct_intents_distinct_providers() {
    let base = build_fallback_provider(&intent("Laser Pawns", "laser_pawns"));
    let renamed = build_fallback_provider(&intent("Plasma Pawns", "laser_pawns"));
    let retemplated = build_fallback_provider(&intent("Laser Pawns", "plasma_pawns"));
    assert_ne!(base.identifier, renamed.identifier);
    assert_ne!(base.identifier, retemplated.identifier);
}

#[test]
fn pieces_and_mechanics_feed_the_hash() {
    let base = build_fallback_provider(&intent("Laser Pawns", "laser_pawns"));
    let wider = build_fallback_provider(
        &intent("Laser Pawns", "laser_pawns").with_piece(PieceKind::Knight),
    );
    assert_ne!(base.hash, wider.hash);
}

#[test]
fn stub_shape() {
    let provider = build_fallback_provider(&intent("Laser Pawns", "laser_pawns"));
    assert!(provider.identifier.starts_with("provider.custom_"));
    assert!(provider.source.contains("TODO"));
    assert!(provider.source.contains("Laser Pawns"));
    assert!(provider.source.contains(&provider.identifier));
}
