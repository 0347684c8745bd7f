//! The Rule Document JSON wire contract.
//!
//! The external engine and UI consume the document as a plain structured
//! JSON value: objects, arrays, strings, numbers, and booleans only.

use gambit_document::RuleDocument;
use gambit_runtime::{PipelineOptions, generate_rule_pipeline, document_to_json};

fn compiled(text: &str) -> RuleDocument {
    generate_rule_pipeline(text, &PipelineOptions::default())
        .unwrap()
        .document
}

#[test]
fn document_serializes_to_a_plain_object_tree() {
    let json = document_to_json(&compiled("pawn mine"), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.is_object());
    assert_eq!(value["meta"]["id"], "rule.pawn-mines");
    assert_eq!(value["meta"]["active"], true);
    assert_eq!(value["scope"]["sides"], "both");
    assert!(value["scope"]["pieces"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("pawn")));

    let effects = value["logic"]["effects"].as_array().unwrap();
    assert_eq!(effects[0]["trigger"], "lifecycle.afterMove");
    assert_eq!(effects[0]["actions"][0]["action"], "hazard.spawn");
}

#[test]
fn json_round_trip_preserves_the_document() {
    for text in ["pawn mine", "bishop teleport", "queen swap", "rook wall"] {
        let document = compiled(text);
        let json = document_to_json(&document, true).unwrap();
        let back: RuleDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(document, back, "round trip changed the document for {text:?}");
    }
}

#[test]
fn guard_variants_serialize_as_plain_data() {
    let json = document_to_json(&compiled("bishop teleport"), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let guards = value["logic"]["effects"][0]["guards"].as_array().unwrap();
    // Atoms and calls appear as tagged plain objects, never functions.
    assert!(guards.iter().all(|g| g.is_object()));
    assert!(guards
        .iter()
        .any(|g| g["atom"] == "king.safeAfterSimulation"));
}

#[test]
fn ui_actions_expose_their_availability() {
    let json = document_to_json(&compiled("rook wall"), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let action = &value["ui"][0];
    assert_eq!(action["id"], "raise-wall");
    assert_eq!(action["availability"]["requires_selection"], true);
    assert_eq!(action["consumes_turn"], true);
    assert_eq!(action["targeting"]["provider"], "provider.adjacent_tiles");
}
