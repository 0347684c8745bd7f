//! `pawn_mines` - governed pieces arm a mine on their arrival square.
//!
//! A passive rule: no UI action. One effect reacts to move completion and
//! spawns the hazard; a second clears it when it expires.

use gambit_document::{
    ActionKind, ActionStep, Asset, Effect, HazardEvent, LifecycleEvent, RuleDocument, Trigger,
};
use gambit_intent::CanonicalIntent;

use crate::support::{base_meta, base_scope, governed_piece_guard};

/// Default hazard lifetime in turns when the intent sets no duration.
const DEFAULT_DURATION: u32 = 3;

/// Compiles a `pawn_mines` intent.
pub fn compile(intent: &CanonicalIntent) -> RuleDocument {
    let duration = intent.limits.duration.unwrap_or(DEFAULT_DURATION);

    let mut arm = Effect::new("arm-hazard", Trigger::Lifecycle(LifecycleEvent::AfterMove))
        .with_guard(governed_piece_guard(intent));
    for hazard in &intent.hazards {
        arm = arm.with_action(
            ActionStep::new(ActionKind::HazardSpawn)
                .with_param("kind", hazard.as_str())
                .with_param("at", "arrival")
                .with_param("ttl", duration),
        );
    }
    arm = arm.with_action(
        ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.hazard_armed"),
    );

    let mut expire = Effect::new("hazard-expired", Trigger::Hazard(HazardEvent::Expired));
    for hazard in &intent.hazards {
        expire = expire
            .with_action(ActionStep::new(ActionKind::HazardClear).with_param("kind", hazard.as_str()));
    }
    expire = expire.with_action(
        ActionStep::new(ActionKind::CuePlay).with_param("asset", "audio.hazard_faded"),
    );

    RuleDocument::scaffold(base_meta(intent, "hazard"), base_scope(intent))
        .with_effect(arm)
        .with_effect(expire)
        .with_asset(Asset::audio("audio.hazard_armed", "short arming click"))
        .with_asset(Asset::audio("audio.hazard_faded", "soft defuse chime"))
        .with_asset(Asset::visual("visual.hazard_marker", "tile overlay marker"))
}
