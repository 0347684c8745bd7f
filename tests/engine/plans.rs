//! Execution plan flattening.

use gambit_compiler::RuleCompiler;
use gambit_engine::build_plan;
use gambit_foundation::{Mechanic, PieceKind};
use gambit_intent::{CanonicalIntent, Limits, TemplateId};

#[test]
fn plan_rows_mirror_effects_in_order() {
    let intent = CanonicalIntent::new("Rook Barricade", TemplateId::RookBarricade)
        .with_piece(PieceKind::Rook)
        .with_mechanic(Mechanic::Hazard("wall".into()));
    let (document, _) = RuleCompiler::compile(&intent);
    let plan = build_plan(&document);

    assert_eq!(plan.len(), document.logic.effects.len());
    for (row, effect) in plan.iter().zip(&document.logic.effects) {
        assert_eq!(row.effect_id, effect.id);
        assert_eq!(row.trigger, effect.trigger.to_string());
        assert_eq!(row.guards.len(), effect.guards.len());
        assert_eq!(row.actions, effect.actions);
    }
}

#[test]
fn guards_stringify_to_canonical_text() {
    let intent = CanonicalIntent::new("Queen Swap", TemplateId::QueenSwap)
        .with_piece(PieceKind::Queen)
        .with_mechanic(Mechanic::Swap)
        .with_limits(Limits {
            once_per_match: true,
            ..Limits::default()
        });
    let (document, _) = RuleCompiler::compile(&intent);
    let plan = build_plan(&document);

    let guards = &plan[0].guards;
    assert!(guards.contains(&"target.isFriendly".to_string()));
    assert!(guards.contains(&"resource.available(royal-swap.use)".to_string()));
    assert!(guards.contains(&"king.safeAfterSimulation".to_string()));
}

#[test]
fn plan_building_is_pure() {
    let intent = CanonicalIntent::new("Pawn Mines", TemplateId::PawnMines)
        .with_piece(PieceKind::Pawn)
        .with_mechanic(Mechanic::Hazard("mine".into()));
    let (document, _) = RuleCompiler::compile(&intent);
    let before = document.clone();
    let a = build_plan(&document);
    let b = build_plan(&document);
    assert_eq!(a, b);
    assert_eq!(document, before);
}
