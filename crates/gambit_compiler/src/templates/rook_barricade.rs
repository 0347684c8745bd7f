//! `rook_barricade` - governed pieces raise a wall hazard on a nearby tile.

use gambit_document::{
    ActionKind, ActionStep, Asset, Availability, Effect, FailurePolicy, GuardExpr, HazardEvent,
    RuleDocument, StateScope, StateSlot, Trigger, UiAction,
};
use gambit_foundation::Value;
use gambit_intent::{CanonicalIntent, Targeting, TargetingMode};

use crate::support::{base_meta, base_scope, requirement_guards};

const ACTION_ID: &str = "raise-wall";
const RESOURCE: &str = "raise-wall.charges";

/// Default wall lifetime in turns when the intent sets no duration.
const DEFAULT_DURATION: u32 = 5;

/// Compiles a `rook_barricade` intent.
pub fn compile(intent: &CanonicalIntent) -> RuleDocument {
    let targeting = intent
        .targeting
        .clone()
        .unwrap_or_else(|| Targeting::new(TargetingMode::Tile, "provider.adjacent_tiles"));
    let duration = intent.limits.duration.unwrap_or(DEFAULT_DURATION);

    let ui = UiAction::new(
        ACTION_ID,
        Availability::for_selection(intent.affected_pieces.clone()),
        targeting,
    );

    let mut raise = Effect::new("raise-barricade", Trigger::Ui(ACTION_ID.to_string()))
        .with_guard(GuardExpr::atom("target.isEmpty"));
    for guard in requirement_guards(intent) {
        raise = raise.with_guard(guard);
    }
    if intent.limits.charges.is_some() {
        raise = raise.with_guard(GuardExpr::call(
            "resource.available",
            vec![Value::from(RESOURCE)],
        ));
    }
    for hazard in &intent.hazards {
        raise = raise.with_action(
            ActionStep::new(ActionKind::HazardSpawn)
                .with_param("kind", hazard.as_str())
                .with_param("at", "target.tile")
                .with_param("ttl", duration),
        );
    }
    if intent.limits.charges.is_some() {
        raise = raise.with_action(
            ActionStep::new(ActionKind::ResourceConsume).with_param("resource", RESOURCE),
        );
    }
    raise = raise
        .with_action(ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.wall_raised"))
        .with_action(ActionStep::new(ActionKind::TurnEnd))
        .with_failure(FailurePolicy::Skip, "A wall cannot be raised there.");

    let mut crumble = Effect::new("barricade-expired", Trigger::Hazard(HazardEvent::Expired));
    for hazard in &intent.hazards {
        crumble = crumble.with_action(
            ActionStep::new(ActionKind::HazardClear).with_param("kind", hazard.as_str()),
        );
    }
    crumble = crumble.with_action(
        ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.wall_crumbled"),
    );

    let mut document = RuleDocument::scaffold(base_meta(intent, "hazard"), base_scope(intent))
        .with_ui_action(ui)
        .with_effect(raise)
        .with_effect(crumble)
        .with_asset(Asset::audio("audio.wall_raised", "stone grinding"))
        .with_asset(Asset::audio("audio.wall_crumbled", "rubble collapse"))
        .with_asset(Asset::visual("visual.wall_tile", "wall tile overlay"));
    if let Some(charges) = intent.limits.charges {
        document = document.with_state(StateSlot::new(
            RESOURCE,
            StateScope::Match,
            Value::from(i64::from(charges)),
        ));
    }
    document
}
