//! The template registry.
//!
//! Compilation is an exhaustive match over [`TemplateId`] - adding a template
//! variant without a generator arm is a compile error, which turns "missing
//! compiler" from a runtime lookup miss into the single checked `Custom`
//! fallback arm.

use gambit_document::RuleDocument;
use gambit_foundation::Diagnostic;
use gambit_intent::{CanonicalIntent, TemplateId};

use crate::support::{base_meta, base_scope, enforce_king_safety};
use crate::templates;

/// Diagnostic code emitted when no generator exists for a template id.
pub const MISSING_COMPILER: &str = "missing_compiler";

/// Compiles canonical intents into rule documents.
pub struct RuleCompiler;

impl RuleCompiler {
    /// Compiles an intent.
    ///
    /// Never fails: unknown template ids yield a meta-only scaffold plus a
    /// `missing_compiler` warning, which downstream stages treat as the
    /// signal to generate a fallback provider. The king-safety guard policy
    /// is applied to every generator's output.
    #[must_use]
    pub fn compile(intent: &CanonicalIntent) -> (RuleDocument, Vec<Diagnostic>) {
        let mut warnings = Vec::new();

        let document = match &intent.template_id {
            TemplateId::PawnMines => templates::pawn_mines::compile(intent),
            TemplateId::BishopBlink => templates::bishop_blink::compile(intent),
            TemplateId::QueenSwap => templates::queen_swap::compile(intent),
            TemplateId::KnightVault => templates::knight_vault::compile(intent),
            TemplateId::RookBarricade => templates::rook_barricade::compile(intent),
            TemplateId::Custom(key) => {
                warnings.push(Diagnostic::warning(
                    MISSING_COMPILER,
                    format!("no compiler registered for template {key:?}"),
                ));
                RuleDocument::scaffold(base_meta(intent, "custom"), base_scope(intent))
            }
        };

        (enforce_king_safety(document, intent), warnings)
    }
}
