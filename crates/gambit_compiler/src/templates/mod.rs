//! Template code generators.
//!
//! One module per template id. Each generator is a pure, total mapping from
//! a schema-valid intent to a rule document; the compiler's king-safety
//! post-pass runs after the generator, so generators only add guards their
//! template specifically needs.

pub mod bishop_blink;
pub mod knight_vault;
pub mod pawn_mines;
pub mod queen_swap;
pub mod rook_barricade;
