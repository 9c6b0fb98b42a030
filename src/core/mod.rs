//! Core deck types and card classification

pub mod card;
pub mod category;

pub use card::{sum_quantities, DeckCardEntry, DeckDraft, IMPORTED_DECK_NAME, MAX_CARD_QUANTITY};
pub use category::{CardCategory, CategoryRules, EnergyMatch};
