//! `queen_swap` - the governed piece trades places with a friendly piece.

use gambit_document::{
    ActionKind, ActionStep, Asset, Availability, Effect, FailurePolicy, GuardExpr, RuleDocument,
    StateScope, StateSlot, Trigger, UiAction,
};
use gambit_foundation::Value;
use gambit_intent::{CanonicalIntent, Targeting, TargetingMode};

use crate::support::{base_meta, base_scope, requirement_guards};

const ACTION_ID: &str = "royal-swap";
const RESOURCE: &str = "royal-swap.use";

/// Compiles a `queen_swap` intent.
pub fn compile(intent: &CanonicalIntent) -> RuleDocument {
    let targeting = intent
        .targeting
        .clone()
        .unwrap_or_else(|| Targeting::new(TargetingMode::Pair, "provider.friendly_pieces"));

    let ui = UiAction::new(
        ACTION_ID,
        Availability::for_selection(intent.affected_pieces.clone()),
        targeting,
    );

    let mut effect = Effect::new("swap-places", Trigger::Ui(ACTION_ID.to_string()))
        .with_guard(GuardExpr::atom("target.isFriendly"));
    for guard in requirement_guards(intent) {
        effect = effect.with_guard(guard);
    }
    if intent.limits.once_per_match {
        effect = effect.with_guard(GuardExpr::call(
            "resource.available",
            vec![Value::from(RESOURCE)],
        ));
    }
    effect = effect
        .with_action(ActionStep::new(ActionKind::PieceSwap).with_param("with", "target.piece"));
    if intent.limits.once_per_match {
        effect = effect.with_action(
            ActionStep::new(ActionKind::ResourceConsume).with_param("resource", RESOURCE),
        );
    }
    effect = effect
        .with_action(ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.swap"))
        .with_action(ActionStep::new(ActionKind::TurnEnd))
        .with_failure(FailurePolicy::Rollback, "The pieces cannot trade places.");

    let mut document = RuleDocument::scaffold(base_meta(intent, "tactics"), base_scope(intent))
        .with_ui_action(ui)
        .with_effect(effect)
        .with_asset(Asset::audio("audio.swap", "two-tone slide"));
    if intent.limits.once_per_match {
        document = document.with_state(StateSlot::new(
            RESOURCE,
            StateScope::Match,
            Value::Bool(true),
        ));
    }
    document
}
