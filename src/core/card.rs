//! Deck card entries and deck drafts

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Name given to decks imported from text, which carries no deck name
pub const IMPORTED_DECK_NAME: &str = "Imported Deck";

/// Largest quantity accepted for a single card line or JSON entry
pub const MAX_CARD_QUANTITY: u32 = 9_999;

/// Sum card quantities, saturating at `u32::MAX` instead of wrapping
pub fn sum_quantities<I: IntoIterator<Item = u32>>(quantities: I) -> u32 {
    quantities.into_iter().fold(0, u32::saturating_add)
}

/// One distinct card line within a deck
///
/// Within a deck no two entries share the same `(name, set_code, code)` key;
/// the importer sums quantities to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCardEntry {
    /// Card name as printed (e.g., "N's Zorua", "Charizard ex")
    pub name: String,

    /// Image URL, empty until the card is resolved against a card database
    #[serde(default)]
    pub image_url: String,

    /// Collector number within the set (e.g., "26"), empty if unknown
    #[serde(default)]
    pub code: String,

    /// Set code such as "PAR" or "SSP"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_code: Option<String>,

    /// Energy types, filled in by resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<SmallVec<[String; 2]>>,

    /// Subtypes (e.g., "Basic", "Energy"), filled in by resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtypes: Option<SmallVec<[String; 2]>>,

    /// Number of physical copies
    pub quantity: u32,
}

impl DeckCardEntry {
    /// Create an unresolved entry with no set information
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        DeckCardEntry {
            name: name.into(),
            image_url: String::new(),
            code: String::new(),
            set_code: None,
            types: None,
            subtypes: None,
            quantity,
        }
    }

    /// Attach a set code and collector number
    pub fn with_set(mut self, set_code: impl Into<String>, code: impl Into<String>) -> Self {
        self.set_code = Some(set_code.into());
        self.code = code.into();
        self
    }

    /// Attach resolved subtypes
    pub fn with_subtypes<I, S>(mut self, subtypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subtypes = Some(subtypes.into_iter().map(Into::into).collect());
        self
    }

    /// Whether resolved subtypes include `subtype` (exact, case-sensitive)
    pub fn has_subtype(&self, subtype: &str) -> bool {
        self.subtypes
            .as_ref()
            .is_some_and(|subs| subs.iter().any(|s| s == subtype))
    }
}

/// A partial deck record: what the importer produces and what the
/// exporters and validator consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDraft {
    pub name: String,
    pub format: String,
    pub cards: Vec<DeckCardEntry>,
}

impl DeckDraft {
    pub fn new(name: impl Into<String>, format: impl Into<String>, cards: Vec<DeckCardEntry>) -> Self {
        DeckDraft {
            name: name.into(),
            format: format.into(),
            cards,
        }
    }

    /// Total number of physical cards
    pub fn total_cards(&self) -> u32 {
        sum_quantities(self.cards.iter().map(|c| c.quantity))
    }

    /// Number of distinct entries
    pub fn unique_cards(&self) -> usize {
        self.cards.len()
    }
}
