//! Deck list loaders
//!
//! Parsers for pasted text deck lists and the JSON interchange format

pub mod deck;
pub mod deck_async;
pub mod line;
pub mod merge;
pub mod section;

pub use deck::{DeckLoader, ImportReport, ImportWarning};
pub use deck_async::{load_deck_async, load_decks};
