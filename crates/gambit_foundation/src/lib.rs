//! Core types, values, and diagnostics for Gambit.
//!
//! This crate provides:
//! - [`Value`] - Plain structured parameter values (the wire-contract scalar type)
//! - [`PieceKind`], [`Side`], [`Square`], [`Occupancy`] - Board vocabulary
//! - [`Mechanic`] - Semantic tags describing what a rule does
//! - [`Diagnostic`] - Severity-tagged issues collected by every pipeline stage
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;
pub mod mechanic;
pub mod piece;
pub mod square;
pub mod value;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, ErrorKind};
pub use mechanic::Mechanic;
pub use piece::{PieceKind, Side};
pub use square::{Occupancy, Square};
pub use value::Value;

/// Result type alias for Gambit operations.
pub type Result<T> = std::result::Result<T, Error>;
