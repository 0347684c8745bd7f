//! Schema validation of canonical intents.

use gambit_foundation::{ErrorKind, Mechanic, PieceKind};
use gambit_intent::{CanonicalIntent, Targeting, TargetingMode, TemplateId, check_schema};

fn valid() -> CanonicalIntent {
    CanonicalIntent::new("Rook Barricade", TemplateId::RookBarricade)
        .with_piece(PieceKind::Rook)
        .with_mechanic(Mechanic::Hazard("wall".into()))
}

#[test]
fn well_formed_intent_passes() {
    assert!(check_schema(&valid()).is_ok());
}

#[test]
fn empty_pieces_is_a_violation() {
    let mut intent = valid();
    intent.affected_pieces.clear();
    let err = check_schema(&intent).unwrap_err();
    assert!(err.is_schema_violation());
    assert!(format!("{err}").contains("affectedPieces"));
}

#[test]
fn empty_mechanics_is_a_violation() {
    let mut intent = valid();
    intent.mechanics.clear();
    let err = check_schema(&intent).unwrap_err();
    assert!(format!("{err}").contains("mechanics"));
}

#[test]
fn all_violations_reported_at_once() {
    let intent = CanonicalIntent::new("", TemplateId::Custom(String::new()));
    let err = check_schema(&intent).unwrap_err();
    let ErrorKind::SchemaViolation { paths } = &err.kind else {
        panic!("expected a schema violation, got {err}");
    };
    assert_eq!(paths.len(), 4);
}

#[test]
fn targeting_provider_must_be_named() {
    let intent = valid().with_targeting(Targeting::new(TargetingMode::Tile, ""));
    assert!(check_schema(&intent).is_err());
}

#[test]
fn schema_check_does_not_mutate() {
    let intent = valid();
    let before = intent.clone();
    let _ = check_schema(&intent);
    assert_eq!(intent, before);
}
