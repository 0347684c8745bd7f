//! Deterministic fallback provider generation.
//!
//! When no template matches an intent (or a caller forces it), the pipeline
//! emits a placeholder target-resolution provider stub keyed by a content
//! hash of the intent, so identical intents always land on the identical
//! stub and distinct intents get distinct identifiers.

use serde::{Deserialize, Serialize};

use gambit_intent::CanonicalIntent;

/// A deterministic placeholder provider stub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackProvider {
    /// Derived identifier, `provider.custom_<hash8>`.
    pub identifier: String,
    /// The placeholder source text, containing a `TODO` marker.
    pub source: String,
    /// The full 64-bit content hash.
    pub hash: u64,
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over a byte slice. Stable across processes and platforms, which a
/// keyed std hasher is not.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Renders the canonical byte form of an intent for hashing.
///
/// Field order is fixed and every set iterates sorted, so two equal intents
/// always render identically.
fn canonical_repr(intent: &CanonicalIntent) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = write!(out, "ruleName={};", intent.rule_name);
    let _ = write!(out, "sourceText={};", intent.source_text);
    let _ = write!(out, "templateId={};", intent.template_id);

    let _ = write!(out, "pieces=");
    for piece in &intent.affected_pieces {
        let _ = write!(out, "{piece},");
    }
    let _ = write!(out, ";mechanics=");
    for mechanic in &intent.mechanics {
        let _ = write!(out, "{mechanic},");
    }
    let _ = write!(out, ";hazards=");
    for hazard in &intent.hazards {
        let _ = write!(out, "{hazard},");
    }
    let _ = write!(out, ";statuses=");
    for status in &intent.statuses {
        let _ = write!(out, "{status},");
    }

    if let Some(targeting) = &intent.targeting {
        let _ = write!(out, ";targeting={:?}:{}", targeting.mode, targeting.provider);
        for (key, value) in &targeting.params {
            let _ = write!(out, ":{key}={value}");
        }
    }
    let _ = write!(
        out,
        ";limits={:?},{},{:?},{:?}",
        intent.limits.cooldown,
        intent.limits.once_per_match,
        intent.limits.charges,
        intent.limits.duration
    );
    let _ = write!(
        out,
        ";requirements={},{},{}",
        intent.requirements.king_safety,
        intent.requirements.clear_path,
        intent.requirements.forbid_king_target
    );
    out
}

/// Builds the fallback provider stub for an intent.
#[must_use]
pub fn build_fallback_provider(intent: &CanonicalIntent) -> FallbackProvider {
    let hash = fnv1a(canonical_repr(intent).as_bytes());
    let hex = format!("{hash:016x}");
    let identifier = format!("provider.custom_{}", &hex[..8]);

    let source = format!(
        "// Auto-generated fallback provider for rule '{name}'.\n\
         // TODO: implement target resolution for this rule; until then it\n\
         // offers no candidate targets.\n\
         provider \"{identifier}\" (context) {{\n\
         \x20\x20return [];\n\
         }}\n",
        name = intent.rule_name,
    );

    FallbackProvider {
        identifier,
        source,
        hash,
    }
}
