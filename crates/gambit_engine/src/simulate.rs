//! Dry-run simulation.
//!
//! Runs the literal test cases that traveled with an intent against the
//! movement model and the compiled document's action set, plus one
//! unconditional cross-cutting check (declared hazards must be spawned).
//! Mismatches are collected, never short-circuited.

use serde::{Deserialize, Serialize};

use gambit_document::{ActionKind, RuleDocument};
use gambit_foundation::{Diagnostic, PieceKind};
use gambit_intent::{CanonicalIntent, TestCase};
use gambit_movement::{MovementOverride, PieceOverride, evaluate_move};

/// Issue code: a move assertion disagreed with the movement model.
pub const MOVE_MISMATCH: &str = "move_mismatch";
/// Issue code: an action assertion disagreed with the document.
pub const ACTION_MISMATCH: &str = "action_mismatch";
/// Issue code: the intent declares hazards but nothing spawns one.
pub const MISSING_HAZARD_SPAWN: &str = "missing_hazard_spawn";

/// The simulator's findings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryRunReport {
    /// Every mismatch, in test-case order.
    pub issues: Vec<Diagnostic>,
    /// True iff no mismatch was found.
    pub passed: bool,
}

/// Runs literal test cases against a compiled rule.
pub struct DryRunSimulator;

impl DryRunSimulator {
    /// Runs every test case and the hazard-consistency check.
    #[must_use]
    pub fn run(
        intent: &CanonicalIntent,
        document: &RuleDocument,
        test_cases: &[TestCase],
        overrides: &[PieceOverride],
    ) -> DryRunReport {
        let mut issues = Vec::new();

        for case in test_cases {
            match case {
                TestCase::Move {
                    piece,
                    from,
                    to,
                    occupancy,
                    expect_legal,
                } => {
                    let delta = override_for(overrides, *piece);
                    let legal = evaluate_move(*piece, *from, *to, *occupancy, delta);
                    if legal != *expect_legal {
                        issues.push(Diagnostic::error(
                            MOVE_MISMATCH,
                            format!(
                                "{piece} {from}->{to} ({occupancy}) was {}, expected {}",
                                verdict(legal),
                                verdict(*expect_legal)
                            ),
                        ));
                    }
                }
                TestCase::Action {
                    action,
                    expect_present,
                } => {
                    let present = document.logic.effects.iter().any(|effect| {
                        effect
                            .actions
                            .iter()
                            .any(|step| step.action.as_str() == action.as_str())
                    });
                    if present != *expect_present {
                        issues.push(Diagnostic::error(
                            ACTION_MISMATCH,
                            format!(
                                "action {action:?} was {}, expected {}",
                                presence(present),
                                presence(*expect_present)
                            ),
                        ));
                    }
                }
            }
        }

        if !intent.hazards.is_empty() && !document.has_action(ActionKind::HazardSpawn) {
            issues.push(Diagnostic::error(
                MISSING_HAZARD_SPAWN,
                "the intent declares hazards but no effect spawns one",
            ));
        }

        let passed = issues.is_empty();
        DryRunReport { issues, passed }
    }
}

fn override_for(overrides: &[PieceOverride], piece: PieceKind) -> Option<&MovementOverride> {
    overrides
        .iter()
        .find(|entry| entry.piece == piece)
        .map(|entry| &entry.delta)
}

const fn verdict(legal: bool) -> &'static str {
    if legal { "legal" } else { "illegal" }
}

const fn presence(present: bool) -> &'static str {
    if present { "present" } else { "absent" }
}
