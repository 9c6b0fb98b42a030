//! Pokémon TCG deck-list toolkit
//!
//! Converts pasted free-text deck lists into structured deck drafts and back,
//! round-trips the JSON interchange format, and checks format legality.

pub mod analysis;
pub mod batch;
pub mod core;
pub mod error;
pub mod export;
pub mod loader;
pub mod validate;

pub use crate::core::{CardCategory, CategoryRules, DeckCardEntry, DeckDraft};
pub use error::{DeckError, Result};
pub use export::{export_json, export_text};
pub use loader::{DeckLoader, ImportReport};
pub use validate::{validate_deck, DeckFormat, ValidationResult};
