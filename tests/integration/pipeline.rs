//! Full pipeline scenarios: text in, complete result out.

use gambit_document::ActionKind;
use gambit_intent::TemplateId;
use gambit_runtime::{PipelineOptions, generate_rule_pipeline};

const FRENCH_MINE: &str = "Quand un pion se déplace, il laisse une mine sur sa case d'arrivée.";

// =============================================================================
// Happy Path
// =============================================================================

#[test]
fn french_mine_instruction_compiles_validates_and_passes() {
    let result = generate_rule_pipeline(FRENCH_MINE, &PipelineOptions::default()).unwrap();

    assert_eq!(result.heuristic.as_deref(), Some("pawn-mines-fr"));
    assert_eq!(result.intent.template_id, TemplateId::PawnMines);
    assert_eq!(result.source_text, FRENCH_MINE);

    // The compiled document spawns a mine hazard.
    let spawn = result
        .document
        .logic
        .effects
        .iter()
        .flat_map(|e| &e.actions)
        .find(|step| step.action == ActionKind::HazardSpawn)
        .expect("a hazard-spawn action");
    assert_eq!(spawn.params.get("kind").unwrap().as_str(), Some("mine"));

    assert!(result.validation.is_valid, "{:?}", result.validation.issues);
    assert!(result.dry_run.passed, "{:?}", result.dry_run.issues);
    assert!(result.fallback.is_none());
    assert!(!result.plan.is_empty());
}

#[test]
fn flat_intent_templates_flow_through_too() {
    let result =
        generate_rule_pipeline("The queen may swap with an ally.", &PipelineOptions::default())
            .unwrap();
    assert_eq!(result.intent.template_id, TemplateId::QueenSwap);
    assert!(result.test_cases.is_empty());
    assert!(result.validation.is_valid);
    assert!(result.dry_run.passed);
}

// =============================================================================
// Fallback Paths
// =============================================================================

#[test]
fn unmatched_instruction_with_force_fallback_gets_a_provider() {
    let options = PipelineOptions {
        force_fallback: true,
    };
    let result = generate_rule_pipeline("Une règle inconnue", &options).unwrap();

    assert_eq!(result.extractor_warnings.len(), 1);
    assert_eq!(result.extractor_warnings[0].code, "no_match");
    let provider = result.fallback.expect("a fallback provider");
    assert!(provider.identifier.starts_with("provider.custom_"));
    assert!(provider.source.contains("TODO"));
}

#[test]
fn force_fallback_applies_even_to_matched_templates() {
    let options = PipelineOptions {
        force_fallback: true,
    };
    let result = generate_rule_pipeline(FRENCH_MINE, &options).unwrap();
    assert!(result.fallback.is_some());
    // The rest of the result is unchanged by the extra provider.
    assert!(result.validation.is_valid);
    assert!(result.dry_run.passed);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_runs_are_byte_identical() {
    let options = PipelineOptions::default();
    for text in [FRENCH_MINE, "rook wall", "Une règle inconnue", ""] {
        let a = generate_rule_pipeline(text, &options).unwrap();
        let b = generate_rule_pipeline(text, &options).unwrap();
        assert_eq!(a, b, "pipeline diverged on {text:?}");
    }
}

#[test]
fn fallback_identifiers_are_stable_across_runs() {
    let options = PipelineOptions {
        force_fallback: true,
    };
    let a = generate_rule_pipeline("Une règle inconnue", &options).unwrap();
    let b = generate_rule_pipeline("Une règle inconnue", &options).unwrap();
    assert_eq!(
        a.fallback.unwrap().identifier,
        b.fallback.unwrap().identifier
    );
}

mod properties {
    use super::*;
    use gambit_runtime::result_to_json;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Repeated runs yield byte-identical serialized output.
        #[test]
        fn output_is_byte_identical(text in ".{0,100}", force in any::<bool>()) {
            let options = PipelineOptions { force_fallback: force };
            let a = generate_rule_pipeline(&text, &options).unwrap();
            let b = generate_rule_pipeline(&text, &options).unwrap();
            prop_assert_eq!(
                result_to_json(&a, false).unwrap(),
                result_to_json(&b, false).unwrap()
            );
        }
    }
}
