//! The authoring command program.
//!
//! Heuristics that recognize a richer instruction emit an ordered program of
//! authoring commands instead of a flat intent. The program is the only
//! channel for example-driven testing: `ExpectAction`/`ExpectMove` commands
//! travel alongside the intent so the dry-run simulator can check the
//! compiled rule against literal expectations.

use gambit_foundation::{Mechanic, Occupancy, PieceKind, Square};
use gambit_movement::{PatternKind, PatternSpec};

use crate::canonical::{Targeting, TemplateId};

/// One usage-limit assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LimitSetting {
    /// Per-piece cooldown in turns.
    Cooldown(u32),
    /// At most once per match.
    OncePerMatch,
    /// Total charges per match.
    Charges(u32),
    /// Hazard/effect duration in turns.
    Duration(u32),
}

/// One safety-requirement flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequirementKind {
    /// The king must remain safe after application.
    KingSafety,
    /// The path to the target must be clear.
    ClearPath,
    /// Kings may not be targeted.
    ForbidKingTarget,
}

/// One authoring command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthoringCommand {
    /// Names the rule and selects its compiler template.
    DefineRule {
        /// Display name.
        name: String,
        /// Template key.
        template: TemplateId,
    },
    /// Records the original instruction text.
    SetSummary(String),
    /// Declares the governed piece kinds.
    SetPieces(Vec<PieceKind>),
    /// Adds one mechanic tag.
    AddMechanic(Mechanic),
    /// Names a hazard the rule creates.
    AddHazard(String),
    /// Names a status the rule applies.
    AddStatus(String),
    /// Sets the targeting descriptor.
    SetTargeting(Targeting),
    /// Sets one usage limit.
    SetLimit(LimitSetting),
    /// Sets one safety requirement.
    SetRequirement(RequirementKind, bool),
    /// Asserts an action is present in (or absent from) the compiled rule.
    ExpectAction {
        /// Wire name of the action (e.g. `hazard.spawn`).
        action: String,
        /// Whether the action must be present.
        expect_present: bool,
    },
    /// Asserts a move is legal (or illegal) under the movement model.
    ExpectMove {
        /// The moving piece kind.
        piece: PieceKind,
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
        /// Occupancy of the destination.
        occupancy: Occupancy,
        /// Whether the move must be legal.
        expect_legal: bool,
    },
    /// Adds a movement pattern to a piece (simulator override).
    AddMove {
        /// The piece to modify.
        piece: PieceKind,
        /// The pattern to add.
        spec: PatternSpec,
    },
    /// Removes a base movement pattern from a piece (simulator override).
    RemoveMove {
        /// The piece to modify.
        piece: PieceKind,
        /// The pattern shape to strip.
        kind: PatternKind,
    },
}

/// An ordered list of authoring commands.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    /// The commands, in authoring order.
    pub commands: Vec<AuthoringCommand>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    #[must_use]
    pub fn push(mut self, command: AuthoringCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the program has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// One literal test case for the dry-run simulator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestCase {
    /// A movement-legality assertion.
    Move {
        /// The moving piece kind.
        piece: PieceKind,
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
        /// Occupancy of the destination.
        occupancy: Occupancy,
        /// Expected verdict.
        expect_legal: bool,
    },
    /// An action-presence assertion against the compiled rule document.
    Action {
        /// Wire name of the action.
        action: String,
        /// Whether the action must be present.
        expect_present: bool,
    },
}
