//! Import, export and validation through the public API

use ptcg_decklist::{
    export_json, export_text,
    loader::{DeckLoader, ImportWarning},
    validate_deck, CardCategory, DeckCardEntry, DeckDraft, Result,
};
use similar_asserts::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_decks").join(name)
}

#[test]
fn test_json_round_trip_without_set_info() -> Result<()> {
    let deck = DeckDraft::new(
        "Lost Box",
        "Standard",
        vec![
            DeckCardEntry::new("Comfey", 4),
            DeckCardEntry::new("Colress's Experiment", 4),
            DeckCardEntry::new("Water Energy", 5),
        ],
    );

    let imported = DeckLoader::parse_json(&export_json(&deck)?)?;
    assert_eq!(imported.cards, deck.cards);
    assert_eq!(imported.name, "Lost Box");
    assert_eq!(imported.format, "Standard");
    Ok(())
}

#[test]
fn test_json_round_trip_drops_set_info() -> Result<()> {
    let deck = DeckLoader::parse_text("3 Charcadet PAR 26");
    let imported = DeckLoader::parse_json(&export_json(&deck)?)?;

    assert_eq!(imported.cards, vec![DeckCardEntry::new("Charcadet", 3)]);
    Ok(())
}

#[test]
fn test_duplicate_lines_merge() {
    let deck = DeckLoader::parse_text("2 Iono PAL 185\n4 Arven SVI 166\n1 Iono PAL 185");
    assert_eq!(deck.cards.len(), 2);
    assert_eq!(deck.cards[0].name, "Iono");
    assert_eq!(deck.cards[0].quantity, 3);
}

#[test]
fn test_charcadet_scenario() {
    let report = DeckLoader::parse_text_with_report("Pokémon: 1\n3 Charcadet PAR 26\nTrainer: 0\nEnergy: 0\n");

    assert_eq!(report.draft.cards.len(), 1);
    let card = &report.draft.cards[0];
    assert_eq!(card.name, "Charcadet");
    assert_eq!(card.set_code.as_deref(), Some("PAR"));
    assert_eq!(card.code, "26");
    assert_eq!(card.quantity, 3);
    assert_eq!(report.draft.total_cards(), 3);
    assert_eq!(report.draft.format, "Unknown");

    assert!(report.warnings.contains(&ImportWarning::SectionMismatch {
        section: CardCategory::Pokemon,
        declared: 1,
        found: 3,
    }));
    assert_eq!(
        report.warnings[0].to_string(),
        "Section Pokémon declared 1 but found 3"
    );
}

#[test]
fn test_export_classification_scenario() {
    let deck = DeckDraft::new(
        "Charizard",
        "Standard",
        vec![
            DeckCardEntry::new("Fire Energy", 7),
            DeckCardEntry::new("Ultra Ball", 4),
            DeckCardEntry::new("Charizard ex", 2),
        ],
    );

    let text = export_text(&deck);
    let headers: Vec<&str> = text.lines().filter(|l| l.contains(':')).collect();
    assert_eq!(headers, vec!["Pokémon: 2", "Trainer: 4", "Energy: 7"]);
    assert_eq!(text.lines().count(), 8);
}

#[test]
fn test_validator_scenarios() {
    let short = DeckDraft::new(
        "short",
        "Standard",
        vec![DeckCardEntry::new("Pikachu", 4), DeckCardEntry::new("Lightning Energy", 55)],
    );
    let result = validate_deck(&short);
    assert!(!result.is_valid);
    assert!(result.errors[0].contains("59") && result.errors[0].contains("60"));

    let energy_only = DeckDraft::new("fire", "Standard", vec![DeckCardEntry::new("Fire Energy", 20)]);
    let result = validate_deck(&energy_only);
    assert_eq!(result.errors.len(), 1);
    assert!(!result.errors[0].contains("copies"));
}

#[test]
fn test_full_lists_validate() -> Result<()> {
    for name in ["charizard_pidgeot.txt", "gardevoir_pt.txt"] {
        let deck = DeckLoader::load_from_file(&fixture(name))?;
        assert_eq!(deck.total_cards(), 60, "{name}");
        assert_eq!(deck.format, "Standard", "{name}");

        let result = validate_deck(&deck);
        assert!(result.is_valid, "{name}: {:?}", result.errors);
    }
    Ok(())
}

#[test]
fn test_portuguese_headers() -> Result<()> {
    let report = DeckLoader::parse_text_with_report(&std::fs::read_to_string(fixture("gardevoir_pt.txt"))?);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(report
        .draft
        .cards
        .iter()
        .any(|c| c.name == "Energia Psíquica" && c.quantity == 8));
    Ok(())
}

#[test]
fn test_loose_list() -> Result<()> {
    let deck = DeckLoader::load_from_file(&fixture("loose_list.txt"))?;
    assert_eq!(deck.format, "Unknown");
    assert_eq!(deck.cards.len(), 4);
    assert_eq!(deck.cards[0].quantity, 7);

    // Unknown format: only the copy limit applies
    let result = validate_deck(&deck);
    assert_eq!(
        result.errors,
        vec!["Card \"Pikachu ex\" appears 7 times (maximum 4 copies per card)".to_string()]
    );
    Ok(())
}

#[test]
fn test_invalid_json_message() {
    let err = DeckLoader::parse_json("{\"name\": \"broken\"").unwrap_err();
    assert!(err.to_string().starts_with("Invalid deck format"));
}

#[test]
fn test_oversized_quantities_never_pass_as_standard() {
    let mut deck = DeckLoader::parse_text("4294967295 Pikachu\n61 Raichu");
    assert_eq!(deck.format, "Unknown");
    assert_eq!(deck.total_cards(), 61);

    deck.format = "Standard".to_string();
    let result = validate_deck(&deck);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0], "Deck must have exactly 60 cards (current: 61)");

    let json = r#"{"name":"Huge","format":"Standard","cards":[{"name":"A","count":4294967295},{"name":"B","count":61}]}"#;
    assert!(DeckLoader::parse_json(json).is_err());
}
