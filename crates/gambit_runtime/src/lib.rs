//! Pipeline entry point, authoring REPL, CLI, and serialization for Gambit.
//!
//! - [`pipeline`] - `generate_rule_pipeline`, the single entry point callers
//!   compose: extract, compile, validate, simulate, plan, fall back
//! - [`config`] - Runtime configuration for the REPL and CLI
//! - [`serialize`] - Rule-document JSON (the wire contract) and rulebook
//!   snapshots (MessagePack)
//! - [`editor`] - Line editor abstraction over rustyline
//! - [`repl`] - The interactive authoring shell

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod pipeline;
pub mod repl;
pub mod serialize;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use pipeline::{PipelineOptions, PipelineResult, generate_rule_pipeline};
pub use repl::Repl;
pub use serialize::{Rulebook, document_to_json, load_rulebook, result_to_json, save_rulebook};
