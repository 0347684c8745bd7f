//! Folds an authoring program into a canonical intent.

use std::collections::BTreeMap;

use gambit_foundation::PieceKind;
use gambit_movement::{MovementOverride, PieceOverride};

use crate::canonical::{CanonicalIntent, Limits, Requirements, TemplateId};
use crate::program::{AuthoringCommand, LimitSetting, Program, RequirementKind, TestCase};

/// The result of folding a program: the intent plus everything that travels
/// alongside it to the simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct FoldedProgram {
    /// The canonical intent.
    pub intent: CanonicalIntent,
    /// Literal test cases from `ExpectAction`/`ExpectMove` commands.
    pub test_cases: Vec<TestCase>,
    /// One movement override per piece referenced by `AddMove`/`RemoveMove`,
    /// in piece order.
    pub overrides: Vec<PieceOverride>,
}

/// Folds authoring programs into canonical intents.
pub struct IntentFactory;

impl IntentFactory {
    /// Folds a program in command order.
    ///
    /// Scalar commands (`DefineRule`, `SetSummary`, `SetTargeting`) overwrite
    /// earlier occurrences; set-valued commands accumulate.
    #[must_use]
    pub fn fold(program: &Program) -> FoldedProgram {
        let mut intent = CanonicalIntent::new(String::new(), TemplateId::Custom(String::new()));
        let mut test_cases = Vec::new();
        let mut deltas: BTreeMap<PieceKind, MovementOverride> = BTreeMap::new();

        for command in &program.commands {
            match command {
                AuthoringCommand::DefineRule { name, template } => {
                    intent.rule_name = name.clone();
                    intent.template_id = template.clone();
                }
                AuthoringCommand::SetSummary(text) => {
                    intent.source_text = text.clone();
                }
                AuthoringCommand::SetPieces(pieces) => {
                    for &piece in pieces {
                        intent.affected_pieces.insert(piece);
                    }
                }
                AuthoringCommand::AddMechanic(mechanic) => {
                    intent = intent.with_mechanic(mechanic.clone());
                }
                AuthoringCommand::AddHazard(kind) => {
                    intent.hazards.insert(kind.clone());
                }
                AuthoringCommand::AddStatus(kind) => {
                    intent.statuses.insert(kind.clone());
                }
                AuthoringCommand::SetTargeting(targeting) => {
                    intent.targeting = Some(targeting.clone());
                }
                AuthoringCommand::SetLimit(setting) => {
                    apply_limit(&mut intent.limits, *setting);
                }
                AuthoringCommand::SetRequirement(kind, enabled) => {
                    apply_requirement(&mut intent.requirements, *kind, *enabled);
                }
                AuthoringCommand::ExpectAction {
                    action,
                    expect_present,
                } => {
                    test_cases.push(TestCase::Action {
                        action: action.clone(),
                        expect_present: *expect_present,
                    });
                }
                AuthoringCommand::ExpectMove {
                    piece,
                    from,
                    to,
                    occupancy,
                    expect_legal,
                } => {
                    test_cases.push(TestCase::Move {
                        piece: *piece,
                        from: *from,
                        to: *to,
                        occupancy: *occupancy,
                        expect_legal: *expect_legal,
                    });
                }
                AuthoringCommand::AddMove { piece, spec } => {
                    deltas
                        .entry(*piece)
                        .or_default()
                        .added
                        .push(spec.clone());
                }
                AuthoringCommand::RemoveMove { piece, kind } => {
                    deltas.entry(*piece).or_default().removed.insert(*kind);
                }
            }
        }

        let overrides = deltas
            .into_iter()
            .map(|(piece, delta)| PieceOverride { piece, delta })
            .collect();

        FoldedProgram {
            intent,
            test_cases,
            overrides,
        }
    }
}

fn apply_limit(limits: &mut Limits, setting: LimitSetting) {
    match setting {
        LimitSetting::Cooldown(turns) => limits.cooldown = Some(turns),
        LimitSetting::OncePerMatch => limits.once_per_match = true,
        LimitSetting::Charges(count) => limits.charges = Some(count),
        LimitSetting::Duration(turns) => limits.duration = Some(turns),
    }
}

fn apply_requirement(requirements: &mut Requirements, kind: RequirementKind, enabled: bool) {
    match kind {
        RequirementKind::KingSafety => requirements.king_safety = enabled,
        RequirementKind::ClearPath => requirements.clear_path = enabled,
        RequirementKind::ForbidKingTarget => requirements.forbid_king_target = enabled,
    }
}
