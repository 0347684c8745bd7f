//! Rule compilation for Gambit.
//!
//! Transforms a schema-valid [`CanonicalIntent`] into a [`RuleDocument`].
//! The registry is an exhaustive match over [`TemplateId`]: every known
//! template has a generator function, and the `Custom` arm returns a
//! meta-only scaffold with a `missing_compiler` warning instead of failing -
//! absence of a template is a signal for fallback generation, not an error.
//!
//! - [`compile`] - The template registry and the king-safety guard policy
//! - [`templates`] - One generator module per template
//! - [`fallback`] - Deterministic placeholder provider for unmatched intents
//!
//! [`CanonicalIntent`]: gambit_intent::CanonicalIntent
//! [`RuleDocument`]: gambit_document::RuleDocument
//! [`TemplateId`]: gambit_intent::TemplateId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod fallback;
pub mod templates;

mod support;

pub use compile::{MISSING_COMPILER, RuleCompiler};
pub use fallback::{FallbackProvider, build_fallback_provider};
