//! Base move-pattern sets and override application.

use gambit_foundation::PieceKind;

use crate::pattern::{MoveConstraints, MovementOverride, PatternKind, PatternSpec};

/// The four orthogonal unit directions.
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal unit directions.
const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jump offsets.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Displacement geometry of one moveset entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// Exactly this displacement, one step.
    Step {
        /// File delta.
        dx: i8,
        /// Rank delta.
        dy: i8,
    },
    /// Any multiple of this unit direction, optionally capped.
    Ray {
        /// File direction (-1, 0, or 1).
        dx: i8,
        /// Rank direction (-1, 0, or 1).
        dy: i8,
        /// Maximum number of steps, unlimited if absent.
        max: Option<u8>,
    },
    /// Off-grid relocation. Matches no displacement; the live engine resolves
    /// the destination through the rule's targeting provider instead.
    Teleport,
}

/// One concrete entry of an effective moveset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    /// Where the entry allows the piece to go.
    pub geometry: Geometry,
    /// Occupancy constraints on the destination.
    pub constraints: MoveConstraints,
}

impl MoveEntry {
    const fn step(dx: i8, dy: i8, constraints: MoveConstraints) -> Self {
        Self {
            geometry: Geometry::Step { dx, dy },
            constraints,
        }
    }

    const fn ray(dx: i8, dy: i8, max: Option<u8>, constraints: MoveConstraints) -> Self {
        Self {
            geometry: Geometry::Ray { dx, dy, max },
            constraints,
        }
    }

    /// Returns true if this entry's shape matches the given filter kind.
    ///
    /// Shape matching is geometric: a forward filter strips a pawn's push and
    /// a rook's north ray alike.
    #[must_use]
    pub fn matches_filter(&self, kind: PatternKind) -> bool {
        let dir = match self.geometry {
            Geometry::Step { dx, dy } => Some((dx, dy)),
            Geometry::Ray { dx, dy, .. } => Some((dx, dy)),
            Geometry::Teleport => None,
        };
        match kind {
            PatternKind::Teleport => matches!(self.geometry, Geometry::Teleport),
            PatternKind::Line => matches!(self.geometry, Geometry::Ray { .. }),
            PatternKind::Knight => match self.geometry {
                Geometry::Step { dx, dy } => {
                    let (ax, ay) = (dx.abs(), dy.abs());
                    (ax, ay) == (1, 2) || (ax, ay) == (2, 1)
                }
                _ => false,
            },
            PatternKind::Forward => dir == Some((0, 1)),
            PatternKind::Diagonal => {
                dir.is_some_and(|(dx, dy)| dx != 0 && dx.abs() == dy.abs())
            }
            PatternKind::Orthogonal => {
                dir.is_some_and(|(dx, dy)| (dx == 0) != (dy == 0))
            }
        }
    }
}

/// Returns the fixed base move-pattern set for a piece kind.
#[must_use]
pub fn base_moveset(piece: PieceKind) -> Vec<MoveEntry> {
    match piece {
        PieceKind::Pawn => vec![
            MoveEntry::step(0, 1, MoveConstraints::non_capture()),
            MoveEntry::step(-1, 1, MoveConstraints::capture_only()),
            MoveEntry::step(1, 1, MoveConstraints::capture_only()),
        ],
        PieceKind::Knight => KNIGHT_JUMPS
            .iter()
            .map(|&(dx, dy)| MoveEntry::step(dx, dy, MoveConstraints::NONE))
            .collect(),
        PieceKind::Bishop => DIAGONAL_DIRS
            .iter()
            .map(|&(dx, dy)| MoveEntry::ray(dx, dy, None, MoveConstraints::NONE))
            .collect(),
        PieceKind::Rook => ORTHOGONAL_DIRS
            .iter()
            .map(|&(dx, dy)| MoveEntry::ray(dx, dy, None, MoveConstraints::NONE))
            .collect(),
        PieceKind::Queen => DIAGONAL_DIRS
            .iter()
            .chain(ORTHOGONAL_DIRS.iter())
            .map(|&(dx, dy)| MoveEntry::ray(dx, dy, None, MoveConstraints::NONE))
            .collect(),
        PieceKind::King => DIAGONAL_DIRS
            .iter()
            .chain(ORTHOGONAL_DIRS.iter())
            .map(|&(dx, dy)| MoveEntry::step(dx, dy, MoveConstraints::NONE))
            .collect(),
    }
}

/// Lowers one added pattern spec into concrete moveset entries.
fn lower_spec(spec: &PatternSpec) -> Vec<MoveEntry> {
    let dirs: &[(i8, i8)] = match spec.kind {
        PatternKind::Forward => &[(0, 1)],
        PatternKind::Diagonal => &DIAGONAL_DIRS,
        PatternKind::Orthogonal => &ORTHOGONAL_DIRS,
        PatternKind::Line => {
            static ALL: [(i8, i8); 8] = [
                (0, 1),
                (0, -1),
                (1, 0),
                (-1, 0),
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
            ];
            &ALL
        }
        PatternKind::Knight => {
            return KNIGHT_JUMPS
                .iter()
                .map(|&(dx, dy)| MoveEntry::step(dx, dy, spec.constraints))
                .collect();
        }
        PatternKind::Teleport => {
            return vec![MoveEntry {
                geometry: Geometry::Teleport,
                constraints: spec.constraints,
            }];
        }
    };

    let single = spec.constraints.single_step || spec.max_distance == Some(1);
    dirs.iter()
        .map(|&(dx, dy)| {
            if single {
                MoveEntry::step(dx, dy, spec.constraints)
            } else {
                MoveEntry::ray(dx, dy, spec.max_distance, spec.constraints)
            }
        })
        .collect()
}

/// Builds the effective moveset for a piece: the base set, minus every entry
/// matching a removed-pattern filter, plus the lowered added patterns.
#[must_use]
pub fn effective_moveset(piece: PieceKind, delta: Option<&MovementOverride>) -> Vec<MoveEntry> {
    let mut entries = base_moveset(piece);

    let Some(delta) = delta else {
        return entries;
    };

    entries.retain(|entry| !delta.removed.iter().any(|&kind| entry.matches_filter(kind)));

    for spec in &delta.added {
        entries.extend(lower_spec(spec));
    }

    entries
}
