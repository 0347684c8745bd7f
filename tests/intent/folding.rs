//! Folding authoring programs into canonical intents.

use gambit_foundation::{Mechanic, Occupancy, PieceKind};
use gambit_intent::{
    AuthoringCommand, IntentFactory, LimitSetting, Program, RequirementKind, TemplateId, TestCase,
    check_schema,
};
use gambit_movement::{PatternKind, PatternSpec};

fn sq(text: &str) -> gambit_foundation::Square {
    text.parse().unwrap()
}

fn blink_program() -> Program {
    Program::new()
        .push(AuthoringCommand::DefineRule {
            name: "Bishop Blink".to_string(),
            template: TemplateId::BishopBlink,
        })
        .push(AuthoringCommand::SetSummary(
            "bishops may teleport".to_string(),
        ))
        .push(AuthoringCommand::SetPieces(vec![PieceKind::Bishop]))
        .push(AuthoringCommand::AddMechanic(Mechanic::Teleport))
        .push(AuthoringCommand::SetLimit(LimitSetting::Cooldown(4)))
        .push(AuthoringCommand::SetRequirement(
            RequirementKind::KingSafety,
            true,
        ))
        .push(AuthoringCommand::ExpectAction {
            action: "piece.teleport".to_string(),
            expect_present: true,
        })
}

#[test]
fn folded_intent_is_schema_valid() {
    let folded = IntentFactory::fold(&blink_program());
    assert!(check_schema(&folded.intent).is_ok());
    assert_eq!(folded.intent.template_id, TemplateId::BishopBlink);
    assert_eq!(folded.intent.limits.cooldown, Some(4));
    assert!(folded.intent.requirements.king_safety);
}

#[test]
fn expectations_become_test_cases_in_order() {
    let program = blink_program().push(AuthoringCommand::ExpectMove {
        piece: PieceKind::Bishop,
        from: sq("c1"),
        to: sq("a3"),
        occupancy: Occupancy::Empty,
        expect_legal: true,
    });
    let folded = IntentFactory::fold(&program);
    assert_eq!(folded.test_cases.len(), 2);
    assert!(matches!(folded.test_cases[0], TestCase::Action { .. }));
    assert!(matches!(folded.test_cases[1], TestCase::Move { .. }));
}

#[test]
fn move_commands_group_into_one_override_per_piece() {
    let program = blink_program()
        .push(AuthoringCommand::AddMove {
            piece: PieceKind::Bishop,
            spec: PatternSpec::new(PatternKind::Orthogonal).with_max_distance(1),
        })
        .push(AuthoringCommand::AddMove {
            piece: PieceKind::Bishop,
            spec: PatternSpec::new(PatternKind::Knight),
        })
        .push(AuthoringCommand::RemoveMove {
            piece: PieceKind::Pawn,
            kind: PatternKind::Diagonal,
        });
    let folded = IntentFactory::fold(&program);
    assert_eq!(folded.overrides.len(), 2);

    let pawn = folded
        .overrides
        .iter()
        .find(|o| o.piece == PieceKind::Pawn)
        .unwrap();
    assert!(pawn.delta.removed.contains(&PatternKind::Diagonal));

    let bishop = folded
        .overrides
        .iter()
        .find(|o| o.piece == PieceKind::Bishop)
        .unwrap();
    assert_eq!(bishop.delta.added.len(), 2);
}

#[test]
fn empty_program_folds_to_invalid_intent() {
    let folded = IntentFactory::fold(&Program::new());
    assert!(check_schema(&folded.intent).is_err());
}

#[test]
fn hazard_mechanic_populates_hazard_set() {
    let program = Program::new()
        .push(AuthoringCommand::DefineRule {
            name: "Mines".to_string(),
            template: TemplateId::PawnMines,
        })
        .push(AuthoringCommand::SetPieces(vec![PieceKind::Pawn]))
        .push(AuthoringCommand::AddMechanic(Mechanic::Hazard(
            "mine".to_string(),
        )));
    let folded = IntentFactory::fold(&program);
    assert!(folded.intent.hazards.contains("mine"));
    assert!(folded
        .intent
        .mechanics
        .contains(&Mechanic::Hazard("mine".to_string())));
}
