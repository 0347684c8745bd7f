//! Gambit - chess-variant rule authoring pipeline
//!
//! This crate re-exports all layers of the Gambit system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: gambit_runtime    — Pipeline entry point, REPL, CLI, serialization
//! Layer 3: gambit_engine     — Validator, dry-run simulator, execution plans
//!          gambit_compiler   — Template code generators, fallback provider
//! Layer 2: gambit_extract    — Keyword-heuristic intent extraction
//!          gambit_document   — The compiled Rule Document (wire contract)
//! Layer 1: gambit_intent     — Canonical intent IR, authoring programs
//!          gambit_movement   — Piece movement model (legality oracle)
//! Layer 0: gambit_foundation — Core types (Value, PieceKind, Diagnostic)
//! ```

pub use gambit_compiler as compiler;
pub use gambit_document as document;
pub use gambit_engine as engine;
pub use gambit_extract as extract;
pub use gambit_foundation as foundation;
pub use gambit_intent as intent;
pub use gambit_movement as movement;
pub use gambit_runtime as runtime;
