//! The Rule Document itself, plus assets and persisted state.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use gambit_foundation::Value;

use crate::effect::{ActionKind, Effect};
use crate::meta::{Meta, Scope};
use crate::ui::UiAction;

/// What kind of cosmetic asset a rule references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A sound effect.
    Audio,
    /// A sprite or particle effect.
    Visual,
}

/// A cosmetic asset reference. Not evaluated by the core logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset id referenced by `cue.play` parameters.
    pub id: String,
    /// Audio or visual.
    pub kind: AssetKind,
    /// Free-form hint for the asset pipeline.
    pub hint: String,
}

impl Asset {
    /// Creates an audio asset reference.
    #[must_use]
    pub fn audio(id: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: AssetKind::Audio,
            hint: hint.into(),
        }
    }

    /// Creates a visual asset reference.
    #[must_use]
    pub fn visual(id: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: AssetKind::Visual,
            hint: hint.into(),
        }
    }
}

/// What a persisted state slot is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateScope {
    /// One slot per piece.
    Piece,
    /// One slot per match.
    Match,
}

/// A persisted state declaration (cooldown counters, charge pools).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSlot {
    /// Slot id.
    pub id: String,
    /// Keying scope.
    pub per: StateScope,
    /// Initial value.
    pub initial: Value,
}

impl StateSlot {
    /// Creates a state slot.
    #[must_use]
    pub fn new(id: impl Into<String>, per: StateScope, initial: Value) -> Self {
        Self {
            id: id.into(),
            per,
            initial,
        }
    }
}

/// The logic block: the ordered effect list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Logic {
    /// Effects, in execution-plan order.
    pub effects: Vec<Effect>,
}

/// The compiled artifact consumed by the external game engine and UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Document metadata.
    pub meta: Meta,
    /// Governed pieces and sides.
    pub scope: Scope,
    /// User-invocable actions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ui: Vec<UiAction>,
    /// The trigger → guard → action logic.
    pub logic: Logic,
    /// Cosmetic asset references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,
    /// Persisted state declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state: Vec<StateSlot>,
    /// Custom event names the rule emits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    /// Named engine handlers the rule expects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<String>,
    /// Free-form bookkeeping parameters.
    #[serde(default, skip_serializing_if = "OrdMap::is_empty")]
    pub parameters: OrdMap<String, Value>,
}

impl RuleDocument {
    /// Creates a document with the given meta and scope and nothing else.
    ///
    /// This is also the `missing_compiler` scaffold: meta only, empty logic.
    #[must_use]
    pub fn scaffold(meta: Meta, scope: Scope) -> Self {
        Self {
            meta,
            scope,
            ui: Vec::new(),
            logic: Logic::default(),
            assets: Vec::new(),
            state: Vec::new(),
            events: Vec::new(),
            handlers: Vec::new(),
            parameters: OrdMap::new(),
        }
    }

    /// Appends a UI action.
    #[must_use]
    pub fn with_ui_action(mut self, action: UiAction) -> Self {
        self.ui.push(action);
        self
    }

    /// Appends an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.logic.effects.push(effect);
        self
    }

    /// Appends an asset reference.
    #[must_use]
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Appends a state slot.
    #[must_use]
    pub fn with_state(mut self, slot: StateSlot) -> Self {
        self.state.push(slot);
        self
    }

    /// Returns true if any effect carries an action of the given kind.
    #[must_use]
    pub fn has_action(&self, kind: ActionKind) -> bool {
        self.logic
            .effects
            .iter()
            .any(|effect| effect.actions.iter().any(|step| step.action == kind))
    }
}
