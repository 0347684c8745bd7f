//! Pattern kinds, constraint flags, and per-piece movement overrides.

use std::fmt;
use std::str::FromStr;

use im::OrdSet;

use gambit_foundation::{Error, PieceKind};

/// A geometric movement pattern shape.
///
/// Filters match by shape, never by piece: removing `Diagonal` from a queen
/// strips her bishop-like rays, and removing it from a pawn strips its
/// capture steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    /// Straight ahead (rank-increasing).
    Forward,
    /// Any of the four diagonal directions.
    Diagonal,
    /// Any of the four orthogonal directions.
    Orthogonal,
    /// The eight knight jump offsets.
    Knight,
    /// Any of the eight sliding directions.
    Line,
    /// Off-grid relocation (no displacement geometry).
    Teleport,
}

impl PatternKind {
    /// Returns the lowercase name of this pattern kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Diagonal => "diagonal",
            Self::Orthogonal => "orthogonal",
            Self::Knight => "knight",
            Self::Line => "line",
            Self::Teleport => "teleport",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "diagonal" => Ok(Self::Diagonal),
            "orthogonal" => Ok(Self::Orthogonal),
            "knight" => Ok(Self::Knight),
            "line" => Ok(Self::Line),
            "teleport" => Ok(Self::Teleport),
            other => Err(Error::bad_word("pattern kind", other)),
        }
    }
}

/// Constraint flags attached to a movement pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveConstraints {
    /// Only legal when the destination holds an enemy piece.
    pub capture_only: bool,
    /// Only legal when the destination is empty.
    pub non_capture: bool,
    /// The pattern covers exactly one step in its direction.
    pub single_step: bool,
    /// The pattern slides any number of steps in its direction.
    pub multi_step: bool,
}

impl MoveConstraints {
    /// No constraints: any occupancy except ally, any distance the geometry allows.
    pub const NONE: Self = Self {
        capture_only: false,
        non_capture: false,
        single_step: false,
        multi_step: false,
    };

    /// Capture-only constraint.
    #[must_use]
    pub const fn capture_only() -> Self {
        Self {
            capture_only: true,
            ..Self::NONE
        }
    }

    /// Non-capture (move-only) constraint.
    #[must_use]
    pub const fn non_capture() -> Self {
        Self {
            non_capture: true,
            ..Self::NONE
        }
    }

    /// Restricts this constraint set to a single step.
    #[must_use]
    pub const fn single_step(mut self) -> Self {
        self.single_step = true;
        self
    }
}

/// One added movement pattern in an override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSpec {
    /// The geometric shape to add.
    pub kind: PatternKind,
    /// Constraint flags for the added entries.
    pub constraints: MoveConstraints,
    /// Maximum slide distance, if the shape slides.
    pub max_distance: Option<u8>,
}

impl PatternSpec {
    /// Creates an unconstrained spec for the given shape.
    #[must_use]
    pub const fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            constraints: MoveConstraints::NONE,
            max_distance: None,
        }
    }

    /// Sets the constraint flags.
    #[must_use]
    pub const fn with_constraints(mut self, constraints: MoveConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Caps the slide distance.
    #[must_use]
    pub const fn with_max_distance(mut self, max: u8) -> Self {
        self.max_distance = Some(max);
        self
    }
}

/// A per-piece delta over the base movement model.
///
/// Used only by the dry-run simulator; the live engine applies the compiled
/// rule document instead.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementOverride {
    /// Base pattern shapes to remove.
    pub removed: OrdSet<PatternKind>,
    /// Pattern definitions to append.
    pub added: Vec<PatternSpec>,
}

impl MovementOverride {
    /// Creates an empty override (the identity delta).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a base pattern shape.
    #[must_use]
    pub fn remove(mut self, kind: PatternKind) -> Self {
        self.removed.insert(kind);
        self
    }

    /// Appends an added pattern.
    #[must_use]
    pub fn add(mut self, spec: PatternSpec) -> Self {
        self.added.push(spec);
        self
    }

    /// Returns true if the override changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// A movement override bound to the piece kind it modifies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceOverride {
    /// Which piece kind the delta applies to.
    pub piece: PieceKind,
    /// The delta itself.
    pub delta: MovementOverride,
}
