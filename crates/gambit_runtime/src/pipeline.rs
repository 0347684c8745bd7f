//! The rule-authoring pipeline.
//!
//! A straight-line sequential composition of pure stages over immutable
//! inputs: extract, fold, schema-check, compile, validate, simulate, plan,
//! and optionally generate a fallback provider. Only a schema violation on
//! the intent aborts; every later stage degrades gracefully so callers
//! always receive a complete result with partial diagnostics attached.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use gambit_compiler::{
    FallbackProvider, MISSING_COMPILER, RuleCompiler, build_fallback_provider,
};
use gambit_document::RuleDocument;
use gambit_engine::{
    DryRunReport, DryRunSimulator, PlanStep, RuleValidator, ValidationReport, build_plan,
};
use gambit_extract::{ExtractionPayload, IntentExtractor};
use gambit_foundation::{Diagnostic, Result};
use gambit_intent::{CanonicalIntent, IntentFactory, TestCase, check_schema};
use gambit_movement::PieceOverride;

/// The heuristic registry is fixed at build time; one extractor serves the
/// whole process.
static EXTRACTOR: LazyLock<IntentExtractor> = LazyLock::new(IntentExtractor::new);

/// Options for one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Generate a fallback provider even when a template matched.
    pub force_fallback: bool,
}

/// Everything one pipeline run produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The original instruction text.
    pub source_text: String,
    /// Name of the heuristic that matched, absent on the no-match fallback.
    pub heuristic: Option<String>,
    /// Extractor warnings (`no_match`).
    pub extractor_warnings: Vec<Diagnostic>,
    /// The canonical intent.
    pub intent: CanonicalIntent,
    /// Literal test cases that traveled with the intent.
    pub test_cases: Vec<TestCase>,
    /// Movement overrides that traveled with the intent.
    pub overrides: Vec<PieceOverride>,
    /// The compiled rule document.
    pub document: RuleDocument,
    /// Compiler warnings (`missing_compiler`).
    pub compiler_warnings: Vec<Diagnostic>,
    /// The validator's findings.
    pub validation: ValidationReport,
    /// The dry-run simulator's findings.
    pub dry_run: DryRunReport,
    /// The flattened execution plan.
    pub plan: Vec<PlanStep>,
    /// The fallback provider, present when no compiler matched the template
    /// or the caller forced it.
    pub fallback: Option<FallbackProvider>,
}

impl PipelineResult {
    /// True iff validation found no errors and the dry run passed.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.validation.is_valid && self.dry_run.passed
    }
}

/// Runs the full rule-authoring pipeline on one instruction.
///
/// Deterministic: identical input and options always yield an identical
/// result.
///
/// # Errors
/// Returns an error only when the extracted intent violates the canonical
/// intent schema.
pub fn generate_rule_pipeline(
    instruction_text: &str,
    options: &PipelineOptions,
) -> Result<PipelineResult> {
    let extraction = EXTRACTOR.extract(instruction_text);
    tracing::debug!(
        heuristic = ?extraction.heuristic,
        warnings = extraction.warnings.len(),
        "extracted instruction"
    );

    let (intent, test_cases, overrides) = match extraction.payload {
        ExtractionPayload::Intent(intent) => (intent, Vec::new(), Vec::new()),
        ExtractionPayload::Program(program) => {
            let folded = IntentFactory::fold(&program);
            (folded.intent, folded.test_cases, folded.overrides)
        }
    };

    check_schema(&intent)?;

    let (document, compiler_warnings) = RuleCompiler::compile(&intent);
    tracing::debug!(
        rule = %document.meta.id,
        effects = document.logic.effects.len(),
        "compiled rule document"
    );

    let validation = RuleValidator::validate(&intent, &document);
    let dry_run = DryRunSimulator::run(&intent, &document, &test_cases, &overrides);
    let plan = build_plan(&document);

    let missing_compiler = compiler_warnings
        .iter()
        .any(|warning| warning.code == MISSING_COMPILER);
    let fallback = (missing_compiler || options.force_fallback)
        .then(|| build_fallback_provider(&intent));

    tracing::debug!(
        valid = validation.is_valid,
        passed = dry_run.passed,
        fallback = fallback.is_some(),
        "pipeline complete"
    );

    Ok(PipelineResult {
        source_text: instruction_text.to_string(),
        heuristic: extraction.heuristic.map(str::to_string),
        extractor_warnings: extraction.warnings,
        intent,
        test_cases,
        overrides,
        document,
        compiler_warnings,
        validation,
        dry_run,
        plan,
        fallback,
    })
}
