//! Legality evaluation against the base movement model.

use gambit_foundation::{Occupancy, PieceKind, Square};
use gambit_movement::evaluate_move;

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

// =============================================================================
// Sliding Pieces
// =============================================================================

#[test]
fn bishop_moves_diagonally_only() {
    assert!(evaluate_move(
        PieceKind::Bishop,
        sq("c1"),
        sq("a3"),
        Occupancy::Empty,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Bishop,
        sq("c1"),
        sq("c3"),
        Occupancy::Empty,
        None
    ));
}

#[test]
fn rook_moves_orthogonally_only() {
    assert!(evaluate_move(
        PieceKind::Rook,
        sq("a1"),
        sq("a7"),
        Occupancy::Empty,
        None
    ));
    assert!(evaluate_move(
        PieceKind::Rook,
        sq("a1"),
        sq("h1"),
        Occupancy::Enemy,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Rook,
        sq("a1"),
        sq("b2"),
        Occupancy::Empty,
        None
    ));
}

#[test]
fn queen_covers_both_line_families() {
    assert!(evaluate_move(
        PieceKind::Queen,
        sq("d1"),
        sq("d8"),
        Occupancy::Empty,
        None
    ));
    assert!(evaluate_move(
        PieceKind::Queen,
        sq("d1"),
        sq("h5"),
        Occupancy::Empty,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Queen,
        sq("d1"),
        sq("e3"),
        Occupancy::Empty,
        None
    ));
}

// =============================================================================
// Stepping Pieces
// =============================================================================

#[test]
fn king_steps_one_square_any_direction() {
    for to in ["d1", "d2", "e2", "f2", "f1"] {
        assert!(
            evaluate_move(PieceKind::King, sq("e1"), sq(to), Occupancy::Empty, None),
            "king e1->{to} should be legal"
        );
    }
    assert!(!evaluate_move(
        PieceKind::King,
        sq("e1"),
        sq("e3"),
        Occupancy::Empty,
        None
    ));
}

#[test]
fn knight_jumps_are_exact() {
    assert!(evaluate_move(
        PieceKind::Knight,
        sq("b1"),
        sq("c3"),
        Occupancy::Empty,
        None
    ));
    assert!(evaluate_move(
        PieceKind::Knight,
        sq("b1"),
        sq("a3"),
        Occupancy::Enemy,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Knight,
        sq("b1"),
        sq("b3"),
        Occupancy::Empty,
        None
    ));
}

// =============================================================================
// Pawns and Occupancy Constraints
// =============================================================================

#[test]
fn pawn_push_is_move_only() {
    assert!(evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("e3"),
        Occupancy::Empty,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("e3"),
        Occupancy::Enemy,
        None
    ));
}

#[test]
fn pawn_capture_is_capture_only() {
    assert!(evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("f3"),
        Occupancy::Enemy,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Pawn,
        sq("e2"),
        sq("f3"),
        Occupancy::Empty,
        None
    ));
}

#[test]
fn pawn_never_moves_backward() {
    assert!(!evaluate_move(
        PieceKind::Pawn,
        sq("e3"),
        sq("e2"),
        Occupancy::Empty,
        None
    ));
    assert!(!evaluate_move(
        PieceKind::Pawn,
        sq("e3"),
        sq("d2"),
        Occupancy::Enemy,
        None
    ));
}

#[test]
fn ally_occupancy_rejects_everything() {
    for piece in PieceKind::ALL {
        assert!(
            !evaluate_move(piece, sq("d4"), sq("d5"), Occupancy::Ally, None),
            "{piece} onto an ally should be illegal"
        );
    }
}
