//! The extraction entry point.

use gambit_foundation::Diagnostic;
use gambit_intent::{CanonicalIntent, Program};

use crate::heuristic::HeuristicRegistry;
use crate::normalize::normalize;
use crate::stdlib::default_example;

/// Diagnostic code emitted when no heuristic matches.
pub const NO_MATCH: &str = "no_match";

/// What a heuristic produced: a flat intent, or an authoring program whose
/// fold yields the intent plus literal test cases and movement overrides.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtractionPayload {
    /// An ordered authoring program.
    Program(Program),
    /// A flat canonical intent.
    Intent(CanonicalIntent),
}

/// The result of extracting one instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    /// The extracted payload.
    pub payload: ExtractionPayload,
    /// Name of the heuristic that matched, absent on fallback.
    pub heuristic: Option<&'static str>,
    /// Extraction warnings (`no_match` on fallback).
    pub warnings: Vec<Diagnostic>,
}

/// Extracts canonical intents from free-text instructions.
#[derive(Clone, Debug)]
pub struct IntentExtractor {
    registry: HeuristicRegistry,
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentExtractor {
    /// Creates an extractor over the standard heuristic catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: HeuristicRegistry::standard(),
        }
    }

    /// Creates an extractor over a custom registry.
    #[must_use]
    pub const fn with_registry(registry: HeuristicRegistry) -> Self {
        Self { registry }
    }

    /// Extracts a payload from the instruction text.
    ///
    /// Total: when no heuristic matches, returns the fixed default example
    /// with a `no_match` warning instead of failing.
    #[must_use]
    pub fn extract(&self, text: &str) -> Extraction {
        let normalized = normalize(text);

        if let Some(heuristic) = self.registry.first_match(&normalized) {
            return Extraction {
                payload: (heuristic.build)(text),
                heuristic: Some(heuristic.name),
                warnings: Vec::new(),
            };
        }

        Extraction {
            payload: default_example(text),
            heuristic: None,
            warnings: vec![Diagnostic::warning(
                NO_MATCH,
                format!("no heuristic matched {text:?}; using the default example"),
            )],
        }
    }

    /// Returns the heuristic registry.
    #[must_use]
    pub const fn registry(&self) -> &HeuristicRegistry {
        &self.registry
    }
}
