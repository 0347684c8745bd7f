//! Document metadata and scope.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use gambit_foundation::PieceKind;

/// Derives the stable document id from a rule name.
///
/// Lower-cases, maps every non-alphanumeric run to a single dash, and
/// prefixes `rule.` - the same name always yields the same id.
#[must_use]
pub fn rule_id(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    format!("rule.{slug}")
}

/// Document metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Stable id derived from the rule name.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Coarse category (e.g. `hazard`, `mobility`).
    pub category: String,
    /// Whether the rule starts active.
    pub active: bool,
    /// Union of hazards, statuses, mechanics, and piece names.
    pub tags: OrdSet<String>,
}

impl Meta {
    /// Creates metadata for a named rule, deriving the id.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: rule_id(&name),
            name,
            category: category.into(),
            active: true,
            tags: OrdSet::new(),
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}

/// Which sides a rule applies to. Rules always bind both sides; the variant
/// exists so the wire shape carries an explicit field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sides {
    /// Both sides.
    #[default]
    Both,
}

/// Which pieces and sides a rule governs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Governed piece kinds.
    pub pieces: OrdSet<PieceKind>,
    /// Governed sides (always both).
    pub sides: Sides,
}

impl Scope {
    /// Creates a scope over the given pieces.
    #[must_use]
    pub fn new(pieces: OrdSet<PieceKind>) -> Self {
        Self {
            pieces,
            sides: Sides::Both,
        }
    }
}
