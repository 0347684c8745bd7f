//! Move legality evaluation.

use gambit_foundation::{Occupancy, PieceKind, Square};

use crate::moveset::{Geometry, effective_moveset};
use crate::pattern::{MoveConstraints, MovementOverride};

/// Returns true if the displacement `(dx, dy)` lies on the ray `(rx, ry)`
/// within `max` steps.
#[allow(clippy::cast_sign_loss)]
fn on_ray(dx: i8, dy: i8, rx: i8, ry: i8, max: Option<u8>) -> bool {
    // Step count along whichever axis the ray moves.
    let steps = if rx != 0 {
        if dx % rx != 0 {
            return false;
        }
        dx / rx
    } else if ry != 0 {
        if dy % ry != 0 {
            return false;
        }
        dy / ry
    } else {
        return false;
    };

    // Both axes must agree on a positive step count.
    if steps <= 0 || dx != steps * rx || dy != steps * ry {
        return false;
    }

    max.is_none_or(|m| steps as u8 <= m)
}

/// Returns true if the entry's occupancy constraints admit the move.
fn constraints_allow(constraints: MoveConstraints, occupancy: Occupancy) -> bool {
    if constraints.capture_only && occupancy != Occupancy::Enemy {
        return false;
    }
    if constraints.non_capture && occupancy != Occupancy::Empty {
        return false;
    }
    true
}

/// Evaluates whether a move is legal under the effective moveset.
///
/// The verdict considers only the movement pattern and the destination
/// occupancy: ally-occupied destinations are always illegal, `capture_only`
/// entries require an enemy on the destination, `non_capture` entries require
/// it empty. Teleport entries legalize nothing here; off-grid relocation is
/// resolved by the rule's targeting provider at runtime.
#[must_use]
pub fn evaluate_move(
    piece: PieceKind,
    from: Square,
    to: Square,
    occupancy: Occupancy,
    delta: Option<&MovementOverride>,
) -> bool {
    if occupancy == Occupancy::Ally {
        return false;
    }

    let (dx, dy) = from.displacement(to);
    if (dx, dy) == (0, 0) {
        return false;
    }

    effective_moveset(piece, delta).iter().any(|entry| {
        if !constraints_allow(entry.constraints, occupancy) {
            return false;
        }
        match entry.geometry {
            Geometry::Step { dx: ex, dy: ey } => (dx, dy) == (ex, ey),
            Geometry::Ray { dx: rx, dy: ry, max } => on_ray(dx, dy, rx, ry, max),
            Geometry::Teleport => false,
        }
    })
}
