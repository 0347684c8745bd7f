//! Semantic mechanic tags.
//!
//! Mechanics describe what a rule *does* (`teleport`, `hazard:mine`, ...).
//! The validator reads them to decide which safety guards a compiled rule
//! must carry.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A semantic tag describing one thing a rule does.
///
/// Parameterized variants carry the entity kind or event name after a colon
/// in textual form: `hazard:mine`, `status:frozen`, `trigger:afterMove`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mechanic {
    /// Relocates a piece off its normal movement graph.
    Teleport,
    /// Exchanges the positions of two pieces.
    Swap,
    /// Transforms a piece into another kind.
    Morph,
    /// Launches something along a path.
    Projectile,
    /// Creates a battlefield hazard of the named kind.
    Hazard(String),
    /// Applies a named status to a piece.
    Status(String),
    /// Reacts to the named lifecycle event.
    Trigger(String),
}

impl Mechanic {
    /// Returns true if this mechanic can relocate, capture, or transform a
    /// piece - the set that obliges a king-safety guard.
    #[must_use]
    pub const fn is_unsafe_relocation(&self) -> bool {
        matches!(
            self,
            Self::Teleport | Self::Swap | Self::Morph | Self::Projectile
        )
    }
}

impl fmt::Display for Mechanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teleport => f.write_str("teleport"),
            Self::Swap => f.write_str("swap"),
            Self::Morph => f.write_str("morph"),
            Self::Projectile => f.write_str("projectile"),
            Self::Hazard(kind) => write!(f, "hazard:{kind}"),
            Self::Status(kind) => write!(f, "status:{kind}"),
            Self::Trigger(event) => write!(f, "trigger:{event}"),
        }
    }
}

impl FromStr for Mechanic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teleport" => return Ok(Self::Teleport),
            "swap" => return Ok(Self::Swap),
            "morph" => return Ok(Self::Morph),
            "projectile" => return Ok(Self::Projectile),
            _ => {}
        }
        if let Some((prefix, rest)) = s.split_once(':') {
            if !rest.is_empty() {
                match prefix {
                    "hazard" => return Ok(Self::Hazard(rest.to_string())),
                    "status" => return Ok(Self::Status(rest.to_string())),
                    "trigger" => return Ok(Self::Trigger(rest.to_string())),
                    _ => {}
                }
            }
        }
        Err(Error::bad_word("mechanic", s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mechanic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mechanic {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
