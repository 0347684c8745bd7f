//! The canonical intent record.
//!
//! One [`CanonicalIntent`] describes one rule: which compiler template
//! handles it, which pieces it governs, what it does, how it targets, and
//! which limits and safety requirements apply.

use std::fmt;
use std::str::FromStr;

use im::{OrdMap, OrdSet};

use gambit_foundation::{Mechanic, PieceKind, Value};

/// Selects which compiler template handles an intent.
///
/// The compiler registry is an exhaustive match over this enum; [`Custom`]
/// is the checked fallback arm for template ids no generator knows.
///
/// [`Custom`]: TemplateId::Custom
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateId {
    /// Pawns arm a mine on their arrival square.
    PawnMines,
    /// Bishops may teleport to an empty tile.
    BishopBlink,
    /// The queen may trade places with a friendly piece.
    QueenSwap,
    /// Knights hurl a projectile along a path.
    KnightVault,
    /// Rooks raise a wall hazard.
    RookBarricade,
    /// Any other template id; no registered generator.
    Custom(String),
}

impl TemplateId {
    /// Returns the template key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PawnMines => "pawn_mines",
            Self::BishopBlink => "bishop_blink",
            Self::QueenSwap => "queen_swap",
            Self::KnightVault => "knight_vault",
            Self::RookBarricade => "rook_barricade",
            Self::Custom(key) => key,
        }
    }

    /// Returns true if the key is blank (rejected by schema validation).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = std::convert::Infallible;

    /// Total: unknown keys become [`TemplateId::Custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pawn_mines" => Self::PawnMines,
            "bishop_blink" => Self::BishopBlink,
            "queen_swap" => Self::QueenSwap,
            "knight_vault" => Self::KnightVault,
            "rook_barricade" => Self::RookBarricade,
            other => Self::Custom(other.to_string()),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TemplateId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TemplateId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(text.parse().expect("TemplateId::from_str is total"))
    }
}

/// How a rule's user action picks its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetingMode {
    /// No target; the rule fires from context alone.
    None,
    /// A single board tile.
    Tile,
    /// A single piece.
    Piece,
    /// An area of tiles.
    Area,
    /// A pair of pieces.
    Pair,
    /// A path of tiles.
    Path,
}

/// Target resolution for a rule's user-invocable action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Targeting {
    /// How the target is shaped.
    pub mode: TargetingMode,
    /// Named target-resolution provider the engine should call.
    pub provider: String,
    /// Provider parameters.
    pub params: OrdMap<String, Value>,
}

impl Targeting {
    /// Creates a targeting descriptor with no parameters.
    #[must_use]
    pub fn new(mode: TargetingMode, provider: impl Into<String>) -> Self {
        Self {
            mode,
            provider: provider.into(),
            params: OrdMap::new(),
        }
    }

    /// Adds a provider parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Usage limits on a rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Per-piece cooldown in turns.
    pub cooldown: Option<u32>,
    /// The rule may fire at most once per match.
    pub once_per_match: bool,
    /// Total charges per match.
    pub charges: Option<u32>,
    /// How long a spawned hazard or effect persists, in turns.
    pub duration: Option<u32>,
}

/// Safety requirements a rule must respect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Requirements {
    /// The king must remain safe after the rule applies.
    pub king_safety: bool,
    /// The path to the target must be clear.
    pub clear_path: bool,
    /// The rule must not target a king.
    pub forbid_king_target: bool,
}

/// The validated intermediate representation of one rule.
///
/// Invariant (enforced by [`crate::schema::check_schema`], assumed by every
/// compiler template): `affected_pieces` and `mechanics` are non-empty and
/// `template_id` and `rule_name` are non-blank.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalIntent {
    /// Display name of the rule.
    pub rule_name: String,
    /// The original instruction text.
    pub source_text: String,
    /// Which compiler template handles this intent.
    pub template_id: TemplateId,
    /// Piece kinds the rule governs.
    pub affected_pieces: OrdSet<PieceKind>,
    /// Semantic tags describing what the rule does.
    pub mechanics: OrdSet<Mechanic>,
    /// Hazard kinds the rule creates.
    pub hazards: OrdSet<String>,
    /// Status kinds the rule applies.
    pub statuses: OrdSet<String>,
    /// Target resolution, if the rule has a user action.
    pub targeting: Option<Targeting>,
    /// Usage limits.
    pub limits: Limits,
    /// Safety requirements.
    pub requirements: Requirements,
}

impl CanonicalIntent {
    /// Creates an intent with the given name and template, everything else
    /// empty.
    #[must_use]
    pub fn new(rule_name: impl Into<String>, template_id: TemplateId) -> Self {
        Self {
            rule_name: rule_name.into(),
            source_text: String::new(),
            template_id,
            affected_pieces: OrdSet::new(),
            mechanics: OrdSet::new(),
            hazards: OrdSet::new(),
            statuses: OrdSet::new(),
            targeting: None,
            limits: Limits::default(),
            requirements: Requirements::default(),
        }
    }

    /// Sets the original instruction text.
    #[must_use]
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = text.into();
        self
    }

    /// Adds a governed piece kind.
    #[must_use]
    pub fn with_piece(mut self, piece: PieceKind) -> Self {
        self.affected_pieces.insert(piece);
        self
    }

    /// Adds a mechanic tag. Parameterized hazard/status mechanics also
    /// register the named entity.
    #[must_use]
    pub fn with_mechanic(mut self, mechanic: Mechanic) -> Self {
        match &mechanic {
            Mechanic::Hazard(kind) => {
                self.hazards.insert(kind.clone());
            }
            Mechanic::Status(kind) => {
                self.statuses.insert(kind.clone());
            }
            _ => {}
        }
        self.mechanics.insert(mechanic);
        self
    }

    /// Sets the targeting descriptor.
    #[must_use]
    pub fn with_targeting(mut self, targeting: Targeting) -> Self {
        self.targeting = Some(targeting);
        self
    }

    /// Sets the usage limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the safety requirements.
    #[must_use]
    pub const fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Returns true if any mechanic implies unsafe piece relocation.
    #[must_use]
    pub fn has_unsafe_relocation(&self) -> bool {
        self.mechanics.iter().any(Mechanic::is_unsafe_relocation)
    }
}
