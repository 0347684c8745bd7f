//! `bishop_blink` - governed pieces may teleport to an empty tile.

use gambit_document::{
    ActionKind, ActionStep, Asset, Availability, Effect, FailurePolicy, GuardExpr, RuleDocument,
    StateScope, StateSlot, Trigger, UiAction,
};
use gambit_foundation::Value;
use gambit_intent::{CanonicalIntent, Targeting, TargetingMode};

use crate::support::{base_meta, base_scope, requirement_guards};

const ACTION_ID: &str = "blink";

/// Compiles a `bishop_blink` intent.
pub fn compile(intent: &CanonicalIntent) -> RuleDocument {
    let targeting = intent
        .targeting
        .clone()
        .unwrap_or_else(|| Targeting::new(TargetingMode::Tile, "provider.empty_tiles"));

    let mut ui = UiAction::new(
        ACTION_ID,
        Availability::for_selection(intent.affected_pieces.clone()),
        targeting,
    );
    if let Some(turns) = intent.limits.cooldown {
        ui = ui.with_cooldown(turns);
    }

    let mut effect = Effect::new("blink-teleport", Trigger::Ui(ACTION_ID.to_string()))
        .with_guard(GuardExpr::atom("target.isEmpty"));
    if intent.limits.cooldown.is_some() {
        effect = effect.with_guard(GuardExpr::call(
            "cooldown.ready",
            vec![Value::from(ACTION_ID)],
        ));
    }
    for guard in requirement_guards(intent) {
        effect = effect.with_guard(guard);
    }
    effect = effect
        .with_action(ActionStep::new(ActionKind::PieceTeleport).with_param("to", "target.tile"))
        .with_action(ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.blink"))
        .with_action(ActionStep::new(ActionKind::TurnEnd))
        .with_failure(FailurePolicy::Skip, "That square cannot be reached.");

    let mut document =
        RuleDocument::scaffold(base_meta(intent, "mobility"), base_scope(intent))
            .with_ui_action(ui)
            .with_effect(effect)
            .with_asset(Asset::audio("audio.blink", "short teleport whoosh"))
            .with_asset(Asset::visual("visual.blink_trail", "particle trail"));
    if let Some(turns) = intent.limits.cooldown {
        document = document.with_state(StateSlot::new(
            format!("{ACTION_ID}.cooldown"),
            StateScope::Piece,
            Value::from(i64::from(turns)),
        ));
    }
    document
}
