//! Categorized text deck lists
//!
//! ```text
//! Pokémon: 2
//! 2 Charizard ex OBF 125
//!
//! Trainer: 4
//! 4 Ultra Ball SVI 196
//!
//! Energy: 7
//! 7 Fire Energy SVE 2
//! ```

use crate::core::{sum_quantities, CardCategory, CategoryRules, DeckCardEntry, DeckDraft};

/// Export with the default categorization rules
pub fn export_text(deck: &DeckDraft) -> String {
    export_text_with(deck, &CategoryRules::default())
}

/// Export, grouping cards into sections by name using `rules`
///
/// Empty sections are omitted. Sections appear in Pokémon, Trainer, Energy
/// order and cards keep their deck order within a section.
pub fn export_text_with(deck: &DeckDraft, rules: &CategoryRules) -> String {
    let mut buckets: [Vec<&DeckCardEntry>; 3] = Default::default();
    for card in &deck.cards {
        let slot = match rules.categorize(card) {
            CardCategory::Pokemon => 0,
            CardCategory::Trainer => 1,
            CardCategory::Energy => 2,
        };
        buckets[slot].push(card);
    }

    CardCategory::ALL
        .iter()
        .zip(buckets.iter())
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(category, cards)| section_block(*category, cards))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Header line followed by one line per card
fn section_block(category: CardCategory, cards: &[&DeckCardEntry]) -> String {
    let total = sum_quantities(cards.iter().map(|c| c.quantity));
    let mut lines = vec![format!("{}: {}", category.label(), total)];
    lines.extend(cards.iter().map(|card| card_line(card)));
    lines.join("\n")
}

/// "<qty> <name> <set> <number>", falling back to the number's prefix
/// ("sv3-26" -> "sv3") when the set code is unknown
fn card_line(card: &DeckCardEntry) -> String {
    let set = match &card.set_code {
        Some(set) => set.as_str(),
        None => card.code.split('-').next().unwrap_or_default(),
    };
    format!("{} {} {} {}", card.quantity, card.name, set, card.code)
        .trim()
        .to_string()
}
