//! The ordered heuristic registry.
//!
//! Extraction is an ordered decision list: each heuristic pairs a keyword
//! predicate with a payload builder, and the first heuristic whose every
//! keyword is a substring of the normalized text wins. Registration order is
//! the tie-break; the registry does not police keyword-set overlap, so an
//! earlier heuristic silently shadows a later one whose keywords also match.

use crate::extractor::ExtractionPayload;

/// Builds a heuristic's payload from the raw (un-normalized) instruction.
pub type PayloadBuilder = fn(&str) -> ExtractionPayload;

/// One (predicate, builder) entry of the decision list.
#[derive(Clone)]
pub struct Heuristic {
    /// Registry name, reported in extraction results.
    pub name: &'static str,
    /// Keywords that must all be substrings of the normalized text.
    pub keywords: &'static [&'static str],
    /// Builds the payload when the keywords match.
    pub build: PayloadBuilder,
}

impl Heuristic {
    /// Returns true if every keyword occurs in the normalized text.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().all(|kw| normalized.contains(kw))
    }
}

impl std::fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heuristic")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

/// The ordered heuristic list.
#[derive(Clone, Debug, Default)]
pub struct HeuristicRegistry {
    heuristics: Vec<Heuristic>,
}

impl HeuristicRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry with the standard catalog, in catalog order.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for heuristic in crate::stdlib::catalog() {
            registry.register(heuristic);
        }
        registry
    }

    /// Appends a heuristic. Order is significant: first match wins.
    pub fn register(&mut self, heuristic: Heuristic) {
        self.heuristics.push(heuristic);
    }

    /// Returns the first heuristic matching the normalized text.
    #[must_use]
    pub fn first_match(&self, normalized: &str) -> Option<&Heuristic> {
        self.heuristics.iter().find(|h| h.matches(normalized))
    }

    /// Returns the registered heuristics in order.
    #[must_use]
    pub fn heuristics(&self) -> &[Heuristic] {
        &self.heuristics
    }
}
