//! Triggers, guard expressions, and action steps.

use std::fmt;
use std::str::FromStr;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use gambit_foundation::{Error, Value};

/// The canonical king-safety guard atom.
///
/// Any effect that can relocate, capture, or transform a piece must carry
/// this guard; the compiler appends it automatically and the validator
/// reports `missing_king_safety` when it is absent.
pub const KING_SAFETY_GUARD: &str = "king.safeAfterSimulation";

/// A lifecycle event the engine raises during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifecycleEvent {
    /// A piece finished moving.
    AfterMove,
    /// A piece is about to move.
    BeforeMove,
    /// A turn begins.
    TurnStart,
    /// A turn ends.
    TurnEnd,
    /// A piece was captured.
    AfterCapture,
}

impl LifecycleEvent {
    /// Returns the wire name of this event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AfterMove => "afterMove",
            Self::BeforeMove => "beforeMove",
            Self::TurnStart => "turnStart",
            Self::TurnEnd => "turnEnd",
            Self::AfterCapture => "afterCapture",
        }
    }
}

/// A hazard event the engine raises for spawned hazards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardEvent {
    /// A hazard's duration ran out.
    Expired,
    /// A piece set a hazard off.
    Triggered,
}

impl HazardEvent {
    /// Returns the wire name of this event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Triggered => "triggered",
        }
    }
}

/// What fires an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A user invoked the named UI action.
    Ui(String),
    /// A lifecycle event occurred.
    Lifecycle(LifecycleEvent),
    /// A hazard event occurred.
    Hazard(HazardEvent),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ui(action_id) => write!(f, "ui.{action_id}"),
            Self::Lifecycle(event) => write!(f, "lifecycle.{}", event.as_str()),
            Self::Hazard(event) => write!(f, "hazard.{}", event.as_str()),
        }
    }
}

impl FromStr for Trigger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(action_id) = s.strip_prefix("ui.") {
            if !action_id.is_empty() {
                return Ok(Self::Ui(action_id.to_string()));
            }
        }
        if let Some(event) = s.strip_prefix("lifecycle.") {
            let event = match event {
                "afterMove" => LifecycleEvent::AfterMove,
                "beforeMove" => LifecycleEvent::BeforeMove,
                "turnStart" => LifecycleEvent::TurnStart,
                "turnEnd" => LifecycleEvent::TurnEnd,
                "afterCapture" => LifecycleEvent::AfterCapture,
                _ => return Err(Error::bad_word("trigger", s)),
            };
            return Ok(Self::Lifecycle(event));
        }
        if let Some(event) = s.strip_prefix("hazard.") {
            let event = match event {
                "expired" => HazardEvent::Expired,
                "triggered" => HazardEvent::Triggered,
                _ => return Err(Error::bad_word("trigger", s)),
            };
            return Ok(Self::Hazard(event));
        }
        Err(Error::bad_word("trigger", s))
    }
}

impl Serialize for Trigger {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A boolean-valued guard expression gating an effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardExpr {
    /// A bare named predicate.
    Atom(String),
    /// A named predicate applied to arguments.
    Call {
        /// Predicate name.
        name: String,
        /// Arguments.
        args: Vec<Value>,
    },
    /// A parameter record the engine interprets.
    Params(OrdMap<String, Value>),
}

impl GuardExpr {
    /// Creates a bare named predicate.
    #[must_use]
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Creates a predicate call.
    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Call {
            name: name.into(),
            args,
        }
    }

    /// The canonical king-safety guard.
    #[must_use]
    pub fn king_safety() -> Self {
        Self::Atom(KING_SAFETY_GUARD.to_string())
    }

    /// Returns true if this guard is the king-safety check.
    #[must_use]
    pub fn is_king_safety(&self) -> bool {
        matches!(self, Self::Atom(name) if name == KING_SAFETY_GUARD)
    }
}

/// A concrete engine action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    /// Spawn a hazard on a tile.
    HazardSpawn,
    /// Remove a hazard from a tile.
    HazardClear,
    /// Move a piece along the board graph.
    PieceMove,
    /// Capture a piece.
    PieceCapture,
    /// Relocate a piece off the board graph.
    PieceTeleport,
    /// Exchange two pieces' positions.
    PieceSwap,
    /// Transform a piece into another kind.
    PieceMorph,
    /// Launch a projectile along a path.
    ProjectileLaunch,
    /// Apply a status to a piece.
    StatusApply,
    /// Play a visual/audio cue.
    CuePlay,
    /// End the current turn.
    TurnEnd,
    /// Mark a limited resource as used.
    ResourceConsume,
}

impl ActionKind {
    /// Returns the wire name of this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HazardSpawn => "hazard.spawn",
            Self::HazardClear => "hazard.clear",
            Self::PieceMove => "piece.move",
            Self::PieceCapture => "piece.capture",
            Self::PieceTeleport => "piece.teleport",
            Self::PieceSwap => "piece.swap",
            Self::PieceMorph => "piece.morph",
            Self::ProjectileLaunch => "projectile.launch",
            Self::StatusApply => "status.apply",
            Self::CuePlay => "cue.play",
            Self::TurnEnd => "turn.end",
            Self::ResourceConsume => "resource.consume",
        }
    }

    /// Returns true if this action can move, capture, transform, or relocate
    /// a piece - the set that obliges the king-safety guard.
    #[must_use]
    pub const fn is_relocating(self) -> bool {
        matches!(
            self,
            Self::PieceMove
                | Self::PieceCapture
                | Self::PieceTeleport
                | Self::PieceSwap
                | Self::PieceMorph
                | Self::ProjectileLaunch
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hazard.spawn" => Ok(Self::HazardSpawn),
            "hazard.clear" => Ok(Self::HazardClear),
            "piece.move" => Ok(Self::PieceMove),
            "piece.capture" => Ok(Self::PieceCapture),
            "piece.teleport" => Ok(Self::PieceTeleport),
            "piece.swap" => Ok(Self::PieceSwap),
            "piece.morph" => Ok(Self::PieceMorph),
            "projectile.launch" => Ok(Self::ProjectileLaunch),
            "status.apply" => Ok(Self::StatusApply),
            "cue.play" => Ok(Self::CuePlay),
            "turn.end" => Ok(Self::TurnEnd),
            "resource.consume" => Ok(Self::ResourceConsume),
            other => Err(Error::bad_word("action kind", other)),
        }
    }
}

impl Serialize for ActionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// One step of an effect's action list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    /// Which engine action to run.
    pub action: ActionKind,
    /// Action parameters.
    pub params: OrdMap<String, Value>,
}

impl ActionStep {
    /// Creates a parameterless action step.
    #[must_use]
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            params: OrdMap::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// What the engine should do when an effect's actions fail mid-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole turn.
    Abort,
    /// Skip the remaining actions of this effect.
    Skip,
    /// Roll the board back to before the effect.
    Rollback,
}

/// One trigger → guards → actions binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Stable effect id, unique within the document.
    pub id: String,
    /// What fires the effect.
    pub trigger: Trigger,
    /// Guard expressions; all must hold.
    pub guards: Vec<GuardExpr>,
    /// Ordered actions to run.
    pub actions: Vec<ActionStep>,
    /// Failure policy, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<FailurePolicy>,
    /// User-facing message when the effect fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

impl Effect {
    /// Creates an effect with no guards or actions.
    #[must_use]
    pub fn new(id: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            id: id.into(),
            trigger,
            guards: Vec::new(),
            actions: Vec::new(),
            on_failure: None,
            failure_message: None,
        }
    }

    /// Appends a guard.
    #[must_use]
    pub fn with_guard(mut self, guard: GuardExpr) -> Self {
        self.guards.push(guard);
        self
    }

    /// Appends an action step.
    #[must_use]
    pub fn with_action(mut self, step: ActionStep) -> Self {
        self.actions.push(step);
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure(mut self, policy: FailurePolicy, message: impl Into<String>) -> Self {
        self.on_failure = Some(policy);
        self.failure_message = Some(message.into());
        self
    }

    /// Returns true if any action can relocate a piece.
    #[must_use]
    pub fn has_relocating_action(&self) -> bool {
        self.actions.iter().any(|step| step.action.is_relocating())
    }

    /// Returns true if the guard list contains the king-safety check.
    #[must_use]
    pub fn has_king_safety_guard(&self) -> bool {
        self.guards.iter().any(GuardExpr::is_king_safety)
    }
}
