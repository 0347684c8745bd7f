//! Piece movement model for Gambit.
//!
//! A pure, board-free model of piece movement patterns, used by the dry-run
//! simulator as its legality oracle:
//!
//! - [`pattern`] - Pattern kinds, constraint flags, and per-piece overrides
//! - [`moveset`] - Base move-pattern sets and override application
//! - [`evaluate`] - Move legality against an effective moveset
//!
//! The model sees no board state. A candidate move is a piece kind, an origin
//! square, a destination square, and the occupancy of the destination square;
//! path obstruction and check detection live in the (external) game engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod evaluate;
pub mod moveset;
pub mod pattern;

pub use evaluate::evaluate_move;
pub use moveset::{Geometry, MoveEntry, base_moveset, effective_moveset};
pub use pattern::{MoveConstraints, MovementOverride, PatternKind, PatternSpec, PieceOverride};
