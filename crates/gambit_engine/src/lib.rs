//! Rule validation, dry-run simulation, and execution planning for Gambit.
//!
//! Three independent consumers of a compiled rule document:
//!
//! - [`validate`] - Structural/semantic checks against the originating intent
//! - [`simulate`] - Runs literal test cases against the movement model and
//!   the document's action set
//! - [`plan`] - Flattens the document's effects into the ordered reaction
//!   table the runtime engine dispatches on
//!
//! All three are read-only over the document and collect their findings
//! instead of short-circuiting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod plan;
pub mod simulate;
pub mod validate;

pub use plan::{PlanStep, build_plan};
pub use simulate::{DryRunReport, DryRunSimulator};
pub use validate::{RuleValidator, ValidationReport};
