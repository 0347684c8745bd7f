//! User-invocable actions.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use gambit_foundation::PieceKind;
use gambit_intent::Targeting;

/// Which phase of the game an action is available in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Any phase.
    #[default]
    Any,
    /// The opening.
    Opening,
    /// The midgame.
    Midgame,
    /// The endgame.
    Endgame,
}

/// When a UI action is offered to the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// The player must have a piece selected.
    pub requires_selection: bool,
    /// Piece kinds the action is offered for.
    pub piece_kinds: OrdSet<PieceKind>,
    /// Game phase gate.
    pub phase: GamePhase,
    /// Whether a running cooldown hides the action.
    pub respects_cooldown: bool,
}

impl Availability {
    /// Availability for a selected piece of the given kinds, any phase.
    #[must_use]
    pub fn for_selection(piece_kinds: OrdSet<PieceKind>) -> Self {
        Self {
            requires_selection: true,
            piece_kinds,
            phase: GamePhase::Any,
            respects_cooldown: false,
        }
    }

    /// Makes a running cooldown hide the action.
    #[must_use]
    pub const fn with_cooldown_gate(mut self) -> Self {
        self.respects_cooldown = true;
        self
    }
}

/// One user-invocable action rendered by the UI layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiAction {
    /// Action id, referenced by `ui.<id>` triggers.
    pub id: String,
    /// When the action is offered.
    pub availability: Availability,
    /// How the action picks its target.
    pub targeting: Targeting,
    /// Whether invoking the action consumes the turn.
    pub consumes_turn: bool,
    /// Cooldown in turns, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
}

impl UiAction {
    /// Creates a turn-consuming action with the given targeting.
    #[must_use]
    pub fn new(id: impl Into<String>, availability: Availability, targeting: Targeting) -> Self {
        Self {
            id: id.into(),
            availability,
            targeting,
            consumes_turn: true,
            cooldown: None,
        }
    }

    /// Sets the cooldown and gates availability on it.
    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = Some(turns);
        self.availability.respects_cooldown = true;
        self
    }

    /// Marks the action as not consuming the turn.
    #[must_use]
    pub const fn free_action(mut self) -> Self {
        self.consumes_turn = false;
        self
    }
}
