//! The standard heuristic catalog.
//!
//! Each template has a French and an English keyword set; keyword sets are
//! kept disjoint across templates so registration order rarely matters in
//! practice (the registry does not enforce this).

use gambit_foundation::{Mechanic, Occupancy, PieceKind};
use gambit_intent::{
    AuthoringCommand, CanonicalIntent, LimitSetting, Limits, Program, RequirementKind,
    Requirements, Targeting, TargetingMode, TemplateId,
};

use crate::extractor::ExtractionPayload;
use crate::heuristic::Heuristic;

/// Returns the standard heuristics in registration order.
#[must_use]
pub fn catalog() -> Vec<Heuristic> {
    vec![
        Heuristic {
            name: "pawn-mines-fr",
            keywords: &["pion", "mine"],
            build: pawn_mines,
        },
        Heuristic {
            name: "pawn-mines-en",
            keywords: &["pawn", "mine"],
            build: pawn_mines,
        },
        Heuristic {
            name: "bishop-blink-fr",
            keywords: &["fou", "teleport"],
            build: bishop_blink,
        },
        Heuristic {
            name: "bishop-blink-en",
            keywords: &["bishop", "teleport"],
            build: bishop_blink,
        },
        Heuristic {
            name: "bishop-blink-en-alt",
            keywords: &["bishop", "blink"],
            build: bishop_blink,
        },
        Heuristic {
            name: "queen-swap-fr",
            keywords: &["dame", "echange"],
            build: queen_swap,
        },
        Heuristic {
            name: "queen-swap-en",
            keywords: &["queen", "swap"],
            build: queen_swap,
        },
        Heuristic {
            name: "knight-vault-fr",
            keywords: &["cavalier", "javelot"],
            build: knight_vault,
        },
        Heuristic {
            name: "knight-vault-en",
            keywords: &["knight", "javelin"],
            build: knight_vault,
        },
        Heuristic {
            name: "rook-barricade-fr",
            keywords: &["tour", "barricade"],
            build: rook_barricade,
        },
        Heuristic {
            name: "rook-barricade-en",
            keywords: &["rook", "wall"],
            build: rook_barricade,
        },
    ]
}

/// The fixed default example used when no heuristic matches.
#[must_use]
pub fn default_example(source_text: &str) -> ExtractionPayload {
    pawn_mines(source_text)
}

fn sq(text: &str) -> gambit_foundation::Square {
    text.parse().expect("catalog squares are valid")
}

/// Pawns arm a mine on the square they land on. Program form, so the
/// literal expectations travel with the intent.
fn pawn_mines(source_text: &str) -> ExtractionPayload {
    let program = Program::new()
        .push(AuthoringCommand::DefineRule {
            name: "Pawn Mines".to_string(),
            template: TemplateId::PawnMines,
        })
        .push(AuthoringCommand::SetSummary(source_text.to_string()))
        .push(AuthoringCommand::SetPieces(vec![PieceKind::Pawn]))
        .push(AuthoringCommand::AddMechanic(Mechanic::Hazard(
            "mine".to_string(),
        )))
        .push(AuthoringCommand::AddMechanic(Mechanic::Trigger(
            "afterMove".to_string(),
        )))
        .push(AuthoringCommand::SetLimit(LimitSetting::Duration(3)))
        .push(AuthoringCommand::ExpectAction {
            action: "hazard.spawn".to_string(),
            expect_present: true,
        })
        .push(AuthoringCommand::ExpectMove {
            piece: PieceKind::Pawn,
            from: sq("e2"),
            to: sq("e3"),
            occupancy: Occupancy::Empty,
            expect_legal: true,
        })
        .push(AuthoringCommand::ExpectMove {
            piece: PieceKind::Pawn,
            from: sq("e2"),
            to: sq("e5"),
            occupancy: Occupancy::Empty,
            expect_legal: false,
        });
    ExtractionPayload::Program(program)
}

/// Bishops may teleport to an empty tile, on a cooldown.
fn bishop_blink(source_text: &str) -> ExtractionPayload {
    let program = Program::new()
        .push(AuthoringCommand::DefineRule {
            name: "Bishop Blink".to_string(),
            template: TemplateId::BishopBlink,
        })
        .push(AuthoringCommand::SetSummary(source_text.to_string()))
        .push(AuthoringCommand::SetPieces(vec![PieceKind::Bishop]))
        .push(AuthoringCommand::AddMechanic(Mechanic::Teleport))
        .push(AuthoringCommand::SetTargeting(
            Targeting::new(TargetingMode::Tile, "provider.empty_tiles").with_param("radius", 3i64),
        ))
        .push(AuthoringCommand::SetLimit(LimitSetting::Cooldown(4)))
        .push(AuthoringCommand::SetRequirement(
            RequirementKind::KingSafety,
            true,
        ))
        .push(AuthoringCommand::ExpectAction {
            action: "piece.teleport".to_string(),
            expect_present: true,
        })
        .push(AuthoringCommand::ExpectMove {
            piece: PieceKind::Bishop,
            from: sq("c1"),
            to: sq("a3"),
            occupancy: Occupancy::Empty,
            expect_legal: true,
        })
        .push(AuthoringCommand::ExpectMove {
            piece: PieceKind::Bishop,
            from: sq("c1"),
            to: sq("c3"),
            occupancy: Occupancy::Empty,
            expect_legal: false,
        });
    ExtractionPayload::Program(program)
}

/// The queen may trade places with a friendly piece, once per match.
fn queen_swap(source_text: &str) -> ExtractionPayload {
    let intent = CanonicalIntent::new("Queen Swap", TemplateId::QueenSwap)
        .with_source_text(source_text)
        .with_piece(PieceKind::Queen)
        .with_mechanic(Mechanic::Swap)
        .with_targeting(Targeting::new(TargetingMode::Pair, "provider.friendly_pieces"))
        .with_limits(Limits {
            once_per_match: true,
            ..Limits::default()
        })
        .with_requirements(Requirements {
            king_safety: true,
            forbid_king_target: true,
            ..Requirements::default()
        });
    ExtractionPayload::Intent(intent)
}

/// Knights hurl a javelin along a path, capturing the first piece hit.
fn knight_vault(source_text: &str) -> ExtractionPayload {
    let intent = CanonicalIntent::new("Knight Javelin", TemplateId::KnightVault)
        .with_source_text(source_text)
        .with_piece(PieceKind::Knight)
        .with_mechanic(Mechanic::Projectile)
        .with_targeting(
            Targeting::new(TargetingMode::Path, "provider.projectile_paths")
                .with_param("range", 4i64),
        )
        .with_limits(Limits {
            charges: Some(2),
            ..Limits::default()
        })
        .with_requirements(Requirements {
            clear_path: true,
            forbid_king_target: true,
            ..Requirements::default()
        });
    ExtractionPayload::Intent(intent)
}

/// Rooks raise a wall hazard on an adjacent tile.
fn rook_barricade(source_text: &str) -> ExtractionPayload {
    let intent = CanonicalIntent::new("Rook Barricade", TemplateId::RookBarricade)
        .with_source_text(source_text)
        .with_piece(PieceKind::Rook)
        .with_mechanic(Mechanic::Hazard("wall".to_string()))
        .with_targeting(Targeting::new(TargetingMode::Tile, "provider.adjacent_tiles"))
        .with_limits(Limits {
            duration: Some(5),
            charges: Some(3),
            ..Limits::default()
        });
    ExtractionPayload::Intent(intent)
}
