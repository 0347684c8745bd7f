//! Override application: removed-pattern filters and added patterns.

use gambit_foundation::{Occupancy, PieceKind, Square};
use gambit_movement::{
    Geometry, MoveConstraints, MovementOverride, PatternKind, PatternSpec, effective_moveset,
    evaluate_move,
};

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

#[test]
fn removing_diagonal_disarms_pawn_captures() {
    let delta = MovementOverride::new().remove(PatternKind::Diagonal);
    assert!(!evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("f3"),
        Occupancy::Enemy,
        Some(&delta)
    ));
    // The forward push survives.
    assert!(evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("e3"),
        Occupancy::Empty,
        Some(&delta)
    ));
}

#[test]
fn filters_match_shape_not_piece() {
    // Removing Diagonal from a queen leaves her a rook.
    let delta = MovementOverride::new().remove(PatternKind::Diagonal);
    assert!(!evaluate_move(
        PieceKind::Queen,
        sq("d1"),
        sq("h5"),
        Occupancy::Empty,
        Some(&delta)
    ));
    assert!(evaluate_move(
        PieceKind::Queen,
        sq("d1"),
        sq("d5"),
        Occupancy::Empty,
        Some(&delta)
    ));
}

#[test]
fn added_knight_jumps_on_a_pawn() {
    let delta = MovementOverride::new().add(
        PatternSpec::new(PatternKind::Knight).with_constraints(MoveConstraints::non_capture()),
    );
    assert!(evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("f4"),
        Occupancy::Empty,
        Some(&delta)
    ));
    // The added pattern is move-only.
    assert!(!evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("f4"),
        Occupancy::Enemy,
        Some(&delta)
    ));
}

#[test]
fn capped_lines_respect_max_distance() {
    let delta = MovementOverride::new()
        .remove(PatternKind::Line)
        .add(PatternSpec::new(PatternKind::Diagonal).with_max_distance(2));
    assert!(evaluate_move(
        PieceKind::Bishop,
        sq("c1"),
        sq("e3"),
        Occupancy::Empty,
        Some(&delta)
    ));
    assert!(!evaluate_move(
        PieceKind::Bishop,
        sq("c1"),
        sq("g5"),
        Occupancy::Empty,
        Some(&delta)
    ));
}

#[test]
fn teleport_lowers_to_degenerate_entry() {
    let delta = MovementOverride::new().add(PatternSpec::new(PatternKind::Teleport));
    let entries = effective_moveset(PieceKind::King, Some(&delta));
    assert!(entries
        .iter()
        .any(|entry| matches!(entry.geometry, Geometry::Teleport)));
    // Off-grid relocation is resolved elsewhere; no displacement matches it.
    assert!(!evaluate_move(
        PieceKind::King,
        sq("e1"),
        sq("a8"),
        Occupancy::Empty,
        Some(&delta)
    ));
}

#[test]
fn stripping_everything_leaves_an_immobile_piece() {
    let delta = MovementOverride::new()
        .remove(PatternKind::Forward)
        .remove(PatternKind::Diagonal);
    assert!(effective_moveset(PieceKind::Pawn, Some(&delta)).is_empty());
}
