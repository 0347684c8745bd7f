//! Dry-run simulation over compiled documents.

use gambit_compiler::RuleCompiler;
use gambit_engine::DryRunSimulator;
use gambit_foundation::{Mechanic, Occupancy, PieceKind, Square};
use gambit_intent::{CanonicalIntent, TemplateId, TestCase};
use gambit_movement::{MovementOverride, PatternKind, PatternSpec, PieceOverride};

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

fn mine_intent() -> CanonicalIntent {
    CanonicalIntent::new("Pawn Mines", TemplateId::PawnMines)
        .with_piece(PieceKind::Pawn)
        .with_mechanic(Mechanic::Hazard("mine".into()))
}

// =============================================================================
// Hazard Consistency
// =============================================================================

#[test]
fn declared_hazard_with_spawn_passes() {
    let intent = mine_intent();
    let (document, _) = RuleCompiler::compile(&intent);
    let report = DryRunSimulator::run(&intent, &document, &[], &[]);
    assert!(report.passed);
}

#[test]
fn declared_hazard_without_spawn_fails() {
    let intent = mine_intent();
    let (mut document, _) = RuleCompiler::compile(&intent);
    document.logic.effects.clear();
    let report = DryRunSimulator::run(&intent, &document, &[], &[]);
    assert!(!report.passed);
    assert!(report
        .issues
        .iter()
        .any(|i| i.code == "missing_hazard_spawn"));
}

// =============================================================================
// Literal Test Cases
// =============================================================================

#[test]
fn move_and_action_assertions_run_together() {
    let intent = mine_intent();
    let (document, _) = RuleCompiler::compile(&intent);
    let cases = vec![
        TestCase::Move {
            piece: PieceKind::Pawn,
            from: sq("e2"),
            to: sq("e3"),
            occupancy: Occupancy::Empty,
            expect_legal: true,
        },
        TestCase::Move {
            piece: PieceKind::Pawn,
            from: sq("e2"),
            to: sq("d3"),
            occupancy: Occupancy::Enemy,
            expect_legal: true,
        },
        TestCase::Action {
            action: "hazard.spawn".to_string(),
            expect_present: true,
        },
        TestCase::Action {
            action: "piece.swap".to_string(),
            expect_present: false,
        },
    ];
    let report = DryRunSimulator::run(&intent, &document, &cases, &[]);
    assert!(report.passed, "issues: {:?}", report.issues);
}

#[test]
fn every_failing_case_is_reported() {
    let intent = mine_intent();
    let (document, _) = RuleCompiler::compile(&intent);
    let cases = vec![
        TestCase::Move {
            piece: PieceKind::Pawn,
            from: sq("e2"),
            to: sq("e4"),
            occupancy: Occupancy::Empty,
            expect_legal: true, // two-step push is not in the base model
        },
        TestCase::Action {
            action: "hazard.spawn".to_string(),
            expect_present: false, // it is present
        },
        TestCase::Action {
            action: "piece.morph".to_string(),
            expect_present: true, // it is absent
        },
    ];
    let report = DryRunSimulator::run(&intent, &document, &cases, &[]);
    assert_eq!(report.issues.len(), 3);
    assert!(!report.passed);
}

#[test]
fn overrides_apply_only_to_their_piece() {
    let intent = mine_intent();
    let (document, _) = RuleCompiler::compile(&intent);
    let overrides = vec![PieceOverride {
        piece: PieceKind::Pawn,
        delta: MovementOverride::new().add(PatternSpec::new(PatternKind::Knight)),
    }];
    let cases = vec![
        TestCase::Move {
            piece: PieceKind::Pawn,
            from: sq("e2"),
            to: sq("f4"),
            occupancy: Occupancy::Empty,
            expect_legal: true,
        },
        TestCase::Move {
            piece: PieceKind::King,
            from: sq("e1"),
            to: sq("f3"),
            occupancy: Occupancy::Empty,
            expect_legal: false,
        },
    ];
    let report = DryRunSimulator::run(&intent, &document, &cases, &overrides);
    assert!(report.passed, "issues: {:?}", report.issues);
}
