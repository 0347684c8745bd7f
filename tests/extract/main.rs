//! Integration tests for the intent extractor.
//!
//! Heuristic matching, normalization, and the no-match fallback.

mod heuristics;
