//! Format legality checks
//!
//! Importing never enforces legality; callers that save or submit a deck run
//! [`validate_deck`] and refuse the action when it reports errors.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CategoryRules, DeckDraft};
use crate::loader::deck::CONSTRUCTED_DECK_SIZE;

/// Copies allowed per card name, basic energy excepted
pub const MAX_COPIES: u32 = 4;

/// Minimum deck size for limited play
pub const LIMITED_MIN_SIZE: u32 = 40;

/// Deck-size rule selected by a format name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Standard,
    Expanded,
    Limited,
    /// Any other format name; no size rule applies
    Unconstrained,
}

impl DeckFormat {
    /// Look up a format by name, ignoring case
    ///
    /// Surrounding whitespace is significant: "Standard " has no size rule.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "standard" => DeckFormat::Standard,
            "expanded" => DeckFormat::Expanded,
            "limited" => DeckFormat::Limited,
            _ => DeckFormat::Unconstrained,
        }
    }

    /// Size error for a deck of `total` cards, if any
    fn size_error(self, total: u32) -> Option<String> {
        match self {
            DeckFormat::Standard | DeckFormat::Expanded if total != CONSTRUCTED_DECK_SIZE => Some(format!(
                "Deck must have exactly {CONSTRUCTED_DECK_SIZE} cards (current: {total})"
            )),
            DeckFormat::Limited if total < LIMITED_MIN_SIZE => Some(format!(
                "Limited deck must have at least {LIMITED_MIN_SIZE} cards (current: {total})"
            )),
            _ => None,
        }
    }
}

/// Outcome of [`validate_deck`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate with the default basic energy list
pub fn validate_deck(deck: &DeckDraft) -> ValidationResult {
    validate_deck_with(deck, &CategoryRules::default())
}

/// Check the size rule for the deck's format and the copy limit
///
/// Copies are counted per name across all printings. Every violation is
/// reported, in deck order.
pub fn validate_deck_with(deck: &DeckDraft, rules: &CategoryRules) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(err) = DeckFormat::from_name(&deck.format).size_error(deck.total_cards()) {
        errors.push(err);
    }

    let mut order: Vec<&str> = Vec::new();
    let mut copies: FxHashMap<&str, u32> = FxHashMap::default();
    for card in &deck.cards {
        let count = copies.entry(card.name.as_str()).or_insert_with(|| {
            order.push(card.name.as_str());
            0
        });
        *count = count.saturating_add(card.quantity);
    }

    for name in order {
        let count = copies[name];
        if count > MAX_COPIES && !rules.is_basic_energy(name) {
            errors.push(format!(
                "Card \"{name}\" appears {count} times (maximum {MAX_COPIES} copies per card)"
            ));
        }
    }

    ValidationResult::from_errors(errors)
}
