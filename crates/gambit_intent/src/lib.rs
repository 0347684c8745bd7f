//! Canonical intent IR and the authoring command program for Gambit.
//!
//! The canonical intent is the validated intermediate representation between
//! the free-text front-end and the rule compiler:
//!
//! - [`canonical`] - The [`CanonicalIntent`] record and its parts
//! - [`schema`] - Structural validation (the only fatal check in the pipeline)
//! - [`program`] - Ordered authoring commands and literal test cases
//! - [`factory`] - Folds a command program into an intent plus its test
//!   cases and movement overrides

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod factory;
pub mod program;
pub mod schema;

pub use canonical::{CanonicalIntent, Limits, Requirements, Targeting, TargetingMode, TemplateId};
pub use factory::{FoldedProgram, IntentFactory};
pub use program::{AuthoringCommand, LimitSetting, Program, RequirementKind, TestCase};
pub use schema::check_schema;
