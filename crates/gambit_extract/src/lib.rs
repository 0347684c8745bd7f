//! Keyword-heuristic intent extraction for Gambit.
//!
//! This crate turns a free-text rule instruction into something the compiler
//! can consume:
//!
//! ```text
//! "Quand un pion se déplace, il laisse une mine sur sa case d'arrivée."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  NORMALIZE      │  → "quand un pion se deplace, il laisse une mine ..."
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HEURISTICS     │  → first heuristic whose every keyword is a substring
//! │  (ordered)      │    ("pion" + "mine" → pawn_mines)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  PAYLOAD        │  → authoring program (with literal expectations)
//! │                 │    or flat canonical intent
//! └─────────────────┘
//! ```
//!
//! There is no parsing beyond fixed keyword sets. If nothing matches, the
//! extractor emits a `no_match` warning and the fixed default example - it
//! always produces something compilable.
//!
//! # Modules
//!
//! - [`normalize`] - Unicode folding and lower-casing
//! - [`heuristic`] - The ordered heuristic registry (first match wins)
//! - [`stdlib`] - The standard heuristic catalog
//! - [`extractor`] - The extraction entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extractor;
pub mod heuristic;
pub mod normalize;
pub mod stdlib;

pub use extractor::{Extraction, ExtractionPayload, IntentExtractor};
pub use heuristic::{Heuristic, HeuristicRegistry};
pub use normalize::normalize;
