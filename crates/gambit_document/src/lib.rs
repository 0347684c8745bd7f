//! The compiled Rule Document model for Gambit.
//!
//! A [`RuleDocument`] is the artifact the rule compiler emits and the wire
//! contract with the external game engine and UI: everything serializes to a
//! plain structured document (objects, arrays, scalars - no functions, no
//! cycles). Documents are created once by the compiler and never mutated in
//! place; revalidation and re-simulation always operate on the output of the
//! latest compile.
//!
//! - [`meta`] - Document metadata and scope
//! - [`ui`] - User-invocable actions and their availability
//! - [`effect`] - Triggers, guard expressions, and action steps
//! - [`document`] - The document itself plus assets and persisted state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod effect;
pub mod meta;
pub mod ui;

pub use document::{Asset, AssetKind, Logic, RuleDocument, StateScope, StateSlot};
pub use effect::{
    ActionKind, ActionStep, Effect, FailurePolicy, GuardExpr, HazardEvent, KING_SAFETY_GUARD,
    LifecycleEvent, Trigger,
};
pub use meta::{Meta, Scope, Sides, rule_id};
pub use ui::{Availability, GamePhase, UiAction};
