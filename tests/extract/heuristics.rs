//! Heuristic matching over real instructions.

use gambit_extract::{ExtractionPayload, IntentExtractor, normalize};
use gambit_intent::{CanonicalIntent, IntentFactory, TemplateId};

fn intent_of(payload: ExtractionPayload) -> CanonicalIntent {
    match payload {
        ExtractionPayload::Intent(intent) => intent,
        ExtractionPayload::Program(program) => IntentFactory::fold(&program).intent,
    }
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn french_and_english_select_the_same_template() {
    let extractor = IntentExtractor::new();
    let fr = extractor.extract("Quand un pion se déplace, il laisse une mine.");
    let en = extractor.extract("A pawn arms a mine on the square it lands on.");
    assert_eq!(
        intent_of(fr.payload).template_id,
        intent_of(en.payload).template_id
    );
}

#[test]
fn every_template_is_reachable() {
    let extractor = IntentExtractor::new();
    let cases = [
        ("pawn mine", TemplateId::PawnMines),
        ("bishop teleport", TemplateId::BishopBlink),
        ("queen swap", TemplateId::QueenSwap),
        ("knight javelin", TemplateId::KnightVault),
        ("rook wall", TemplateId::RookBarricade),
        ("La dame échange sa place", TemplateId::QueenSwap),
        ("Le cavalier lance un javelot", TemplateId::KnightVault),
        ("La tour construit une barricade", TemplateId::RookBarricade),
    ];
    for (text, expected) in cases {
        let extraction = extractor.extract(text);
        assert_eq!(
            intent_of(extraction.payload).template_id,
            expected,
            "wrong template for {text:?}"
        );
    }
}

#[test]
fn matching_is_case_and_accent_insensitive() {
    let extractor = IntentExtractor::new();
    let a = extractor.extract("LE FOU SE TÉLÉPORTE");
    assert_eq!(a.heuristic, Some("bishop-blink-fr"));
}

#[test]
fn keywords_must_all_be_present() {
    let extractor = IntentExtractor::new();
    // "mine" without any piece word does not match a template.
    let extraction = extractor.extract("something about a mine");
    assert_eq!(extraction.heuristic, None);
}

// =============================================================================
// Fallback
// =============================================================================

#[test]
fn no_match_warns_and_returns_default_example() {
    let extractor = IntentExtractor::new();
    let extraction = extractor.extract("Une règle inconnue");
    assert_eq!(extraction.warnings.len(), 1);
    assert_eq!(extraction.warnings[0].code, "no_match");
    let intent = intent_of(extraction.payload);
    assert_eq!(intent.template_id, TemplateId::PawnMines);
    // The original instruction still travels on the default example.
    assert_eq!(intent.source_text, "Une règle inconnue");
}

#[test]
fn source_text_is_preserved_verbatim() {
    let extractor = IntentExtractor::new();
    let text = "Quand un pion se déplace, il laisse une mine sur sa case d'arrivée.";
    let intent = intent_of(extractor.extract(text).payload);
    assert_eq!(intent.source_text, text);
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn normalize_is_idempotent() {
    let text = "Le FOU se téléporte à côté";
    assert_eq!(normalize(&normalize(text)), normalize(text));
}
