//! `knight_vault` - governed pieces hurl a projectile along a path.

use gambit_document::{
    ActionKind, ActionStep, Asset, Availability, Effect, FailurePolicy, GuardExpr, RuleDocument,
    StateScope, StateSlot, Trigger, UiAction,
};
use gambit_foundation::Value;
use gambit_intent::{CanonicalIntent, Targeting, TargetingMode};

use crate::support::{base_meta, base_scope, requirement_guards};

const ACTION_ID: &str = "javelin";
const RESOURCE: &str = "javelin.charges";

/// Compiles a `knight_vault` intent.
pub fn compile(intent: &CanonicalIntent) -> RuleDocument {
    let targeting = intent
        .targeting
        .clone()
        .unwrap_or_else(|| Targeting::new(TargetingMode::Path, "provider.projectile_paths"));
    let range = targeting
        .params
        .get("range")
        .and_then(Value::as_int)
        .unwrap_or(4);

    let ui = UiAction::new(
        ACTION_ID,
        Availability::for_selection(intent.affected_pieces.clone()),
        targeting,
    );

    let mut effect = Effect::new("hurl-javelin", Trigger::Ui(ACTION_ID.to_string()));
    for guard in requirement_guards(intent) {
        effect = effect.with_guard(guard);
    }
    if intent.limits.charges.is_some() {
        effect = effect.with_guard(GuardExpr::call(
            "resource.available",
            vec![Value::from(RESOURCE)],
        ));
    }
    effect = effect.with_action(
        ActionStep::new(ActionKind::ProjectileLaunch)
            .with_param("along", "target.path")
            .with_param("range", range),
    );
    if intent.limits.charges.is_some() {
        effect = effect.with_action(
            ActionStep::new(ActionKind::ResourceConsume).with_param("resource", RESOURCE),
        );
    }
    effect = effect
        .with_action(ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.javelin"))
        .with_action(ActionStep::new(ActionKind::TurnEnd))
        .with_failure(FailurePolicy::Skip, "The javelin has no clear path.");

    let mut document = RuleDocument::scaffold(base_meta(intent, "tactics"), base_scope(intent))
        .with_ui_action(ui)
        .with_effect(effect)
        .with_asset(Asset::audio("audio.javelin", "whistling throw"))
        .with_asset(Asset::visual("visual.javelin_arc", "projectile arc"));
    if let Some(charges) = intent.limits.charges {
        document = document.with_state(StateSlot::new(
            RESOURCE,
            StateScope::Match,
            Value::from(i64::from(charges)),
        ));
    }
    document
}
