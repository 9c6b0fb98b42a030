//! JSON interchange format
//!
//! `{ "name": ..., "format": ..., "cards": [{ "name": ..., "count": n }] }`.
//! Set codes and collector numbers are not part of this format and are lost.

use serde::{Deserialize, Serialize};

use crate::core::DeckDraft;
use crate::{DeckError, Result};

/// One card in the interchange format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCard {
    pub name: String,
    pub count: u32,
}

/// The JSON interchange document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcgExport {
    pub name: String,
    pub format: String,
    pub cards: Vec<ExportCard>,
}

impl TcgExport {
    pub fn from_deck(deck: &DeckDraft) -> Self {
        TcgExport {
            name: deck.name.clone(),
            format: deck.format.clone(),
            cards: deck
                .cards
                .iter()
                .map(|c| ExportCard {
                    name: c.name.clone(),
                    count: c.quantity,
                })
                .collect(),
        }
    }
}

/// Serialize a deck as pretty-printed interchange JSON
pub fn export_json(deck: &DeckDraft) -> Result<String> {
    serde_json::to_string_pretty(&TcgExport::from_deck(deck))
        .map_err(|e| DeckError::SerializationError(e.to_string()))
}
