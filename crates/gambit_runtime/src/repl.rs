//! The interactive authoring shell.
//!
//! Each non-command line is run through the full pipeline; rules that
//! validate and pass their dry run are collected into the session rulebook,
//! which `:save` snapshots to disk.

use std::io::{self, Write};
use std::path::PathBuf;

use gambit_foundation::{Diagnostic, Error, Result};

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::pipeline::{PipelineOptions, PipelineResult, generate_rule_pipeline};
use crate::serialize::{Rulebook, document_to_json, load_rulebook, save_rulebook};

/// What a handled line asks the loop to do next.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Continue,
    Exit,
}

/// The interactive authoring REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    config: RuntimeConfig,
    options: PipelineOptions,
    rulebook: Rulebook,
    last_result: Option<PipelineResult>,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_limit)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, config: RuntimeConfig) -> Self {
        Self {
            editor,
            config,
            options: PipelineOptions::default(),
            rulebook: Rulebook::new(),
            last_result: None,
        }
    }

    /// Returns the session rulebook.
    #[must_use]
    pub const fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        loop {
            let prompt = self.config.prompt.clone();
            match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim().to_string();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&trimmed);
                    match self.handle_line(&trimmed) {
                        Ok(Outcome::Continue) => {}
                        Ok(Outcome::Exit) => break,
                        Err(e) => print_error(&e),
                    }
                }
                ReadResult::Interrupted => {
                    println!("^C");
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one input line: a `:command` or a rule instruction.
    fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command);
        }

        let result = generate_rule_pipeline(line, &self.options)?;
        self.print_summary(&result);
        if result.is_accepted() {
            self.rulebook.accept(result.document.clone());
            println!(
                "Accepted into the rulebook ({} rule{}).",
                self.rulebook.len(),
                if self.rulebook.len() == 1 { "" } else { "s" }
            );
        }
        self.last_result = Some(result);
        Ok(Outcome::Continue)
    }

    fn handle_command(&mut self, command: &str) -> Result<Outcome> {
        let mut parts = command.splitn(2, ' ');
        let head = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim);

        match head {
            "q" | "quit" | "exit" => Ok(Outcome::Exit),
            "help" => {
                print_help();
                Ok(Outcome::Continue)
            }
            "json" => {
                let result = self.require_last()?;
                println!(
                    "{}",
                    document_to_json(&result.document, self.config.pretty_json)?
                );
                Ok(Outcome::Continue)
            }
            "plan" => {
                let result = self.require_last()?;
                for step in &result.plan {
                    println!(
                        "{} <- {} [{}] ({} actions)",
                        step.effect_id,
                        step.trigger,
                        step.guards.join(" && "),
                        step.actions.len()
                    );
                }
                Ok(Outcome::Continue)
            }
            "fallback" => {
                self.options.force_fallback = !self.options.force_fallback;
                println!(
                    "Forced fallback generation is now {}.",
                    if self.options.force_fallback {
                        "on"
                    } else {
                        "off"
                    }
                );
                Ok(Outcome::Continue)
            }
            "save" => {
                let path = arg.ok_or_else(|| Error::internal(":save requires a path"))?;
                save_rulebook(&PathBuf::from(path), &self.rulebook)?;
                println!("Saved {} rule(s) to {path}.", self.rulebook.len());
                Ok(Outcome::Continue)
            }
            "load" => {
                let path = arg.ok_or_else(|| Error::internal(":load requires a path"))?;
                self.rulebook = load_rulebook(&PathBuf::from(path))?;
                println!("Loaded {} rule(s) from {path}.", self.rulebook.len());
                Ok(Outcome::Continue)
            }
            other => Err(Error::internal(format!(
                "unknown command :{other} (try :help)"
            ))),
        }
    }

    fn require_last(&self) -> Result<&PipelineResult> {
        self.last_result
            .as_ref()
            .ok_or_else(|| Error::internal("no rule compiled yet"))
    }

    #[allow(clippy::unused_self)]
    fn print_summary(&self, result: &PipelineResult) {
        println!(
            "\x1b[1m{}\x1b[0m ({}) - {} effect(s), {} plan step(s)",
            result.document.meta.name,
            result.intent.template_id,
            result.document.logic.effects.len(),
            result.plan.len()
        );
        for warning in result
            .extractor_warnings
            .iter()
            .chain(&result.compiler_warnings)
        {
            print_diagnostic(warning);
        }
        for issue in &result.validation.issues {
            print_diagnostic(issue);
        }
        for issue in &result.dry_run.issues {
            print_diagnostic(issue);
        }
        println!(
            "validation: {} | dry run: {}",
            if result.validation.is_valid {
                "\x1b[32mok\x1b[0m"
            } else {
                "\x1b[31minvalid\x1b[0m"
            },
            if result.dry_run.passed {
                "\x1b[32mpassed\x1b[0m"
            } else {
                "\x1b[31mfailed\x1b[0m"
            }
        );
        if let Some(fallback) = &result.fallback {
            println!("fallback provider: {}", fallback.identifier);
        }
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Gambit authoring shell v{}", env!("CARGO_PKG_VERSION"));
        println!("Describe a rule in plain French or English, or type :help.\n");
        let _ = io::stdout().flush();
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    if diagnostic.is_error() {
        println!("  \x1b[31m{diagnostic}\x1b[0m");
    } else {
        println!("  \x1b[33m{diagnostic}\x1b[0m");
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_help() {
    println!(
        "Type a rule instruction to compile it, or one of:
    :json           Print the last compiled rule document as JSON
    :plan           Print the last execution plan
    :fallback       Toggle forced fallback generation
    :save <path>    Snapshot the rulebook (MessagePack)
    :load <path>    Restore a rulebook snapshot
    :help           Show this help
    :quit           Exit"
    );
}
