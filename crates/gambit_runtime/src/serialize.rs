//! Serialization for the wire contract and rulebook snapshots.
//!
//! Rule documents cross the boundary to the external engine and UI as JSON;
//! the authoring shell's accepted-rule collection is snapshotted to disk as
//! MessagePack.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gambit_document::RuleDocument;
use gambit_foundation::{Error, ErrorKind, Result};

use crate::pipeline::PipelineResult;

/// The accepted rules of an authoring session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rulebook {
    /// Accepted rule documents, in acceptance order.
    pub rules: Vec<RuleDocument>,
}

impl Rulebook {
    /// Creates an empty rulebook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted rule.
    pub fn accept(&mut self, document: RuleDocument) {
        self.rules.push(document);
    }

    /// Returns the number of accepted rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Renders a rule document as wire-contract JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn document_to_json(document: &RuleDocument, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.map_err(|e| Error::new(ErrorKind::Serialize(e.to_string())))
}

/// Renders a full pipeline result as JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn result_to_json(result: &PipelineResult, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    rendered.map_err(|e| Error::new(ErrorKind::Serialize(e.to_string())))
}

/// Saves a rulebook snapshot as MessagePack.
///
/// Uses the named (map) representation: documents skip empty optional
/// fields, which the positional representation cannot survive.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn save_rulebook(path: &Path, rulebook: &Rulebook) -> Result<()> {
    let bytes = rmp_serde::to_vec_named(rulebook)
        .map_err(|e| Error::new(ErrorKind::Serialize(e.to_string())))?;
    fs::write(path, bytes)
        .map_err(|e| Error::internal(format!("failed to write {}: {e}", path.display())))
}

/// Loads a rulebook snapshot.
///
/// # Errors
/// Returns an error if the read or deserialization fails.
pub fn load_rulebook(path: &Path) -> Result<Rulebook> {
    let bytes = fs::read(path)
        .map_err(|e| Error::internal(format!("failed to read {}: {e}", path.display())))?;
    rmp_serde::from_slice(&bytes).map_err(|e| Error::new(ErrorKind::Serialize(e.to_string())))
}
