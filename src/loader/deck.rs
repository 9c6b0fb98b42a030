//! Deck importer
//!
//! Reads pasted text deck lists and the JSON interchange format into a
//! [`DeckDraft`].

use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::{sum_quantities, CardCategory, DeckCardEntry, DeckDraft, IMPORTED_DECK_NAME, MAX_CARD_QUANTITY};
use crate::export::TcgExport;
use crate::loader::line::parse_card_line;
use crate::loader::merge::merge_entries;
use crate::loader::section::{parse_section_header, SectionTally};
use crate::{DeckError, Result};

/// Cards in a constructed deck
pub const CONSTRUCTED_DECK_SIZE: u32 = 60;

/// Format assigned to text imports totalling exactly 60 cards
pub const INFERRED_STANDARD: &str = "Standard";
/// Format assigned to every other text import
pub const INFERRED_UNKNOWN: &str = "Unknown";

/// Non-fatal problem noticed while importing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportWarning {
    /// A header declared a count that differs from the cards listed under it
    SectionMismatch {
        section: CardCategory,
        declared: u32,
        found: u32,
    },
    /// The deck does not contain exactly 60 cards
    TotalMismatch { total: u32 },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportWarning::SectionMismatch {
                section,
                declared,
                found,
            } => write!(f, "Section {section} declared {declared} but found {found}"),
            ImportWarning::TotalMismatch { total } => {
                write!(f, "Total of {total} cards differs from {CONSTRUCTED_DECK_SIZE}")
            }
        }
    }
}

/// A text import together with its diagnostics
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub draft: DeckDraft,
    pub warnings: Vec<ImportWarning>,
}

/// Deck loader for text and JSON deck lists
pub struct DeckLoader;

impl DeckLoader {
    /// Load a deck from a file, detecting JSON by a leading `{`
    pub fn load_from_file(path: &Path) -> Result<DeckDraft> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse either format, detecting JSON by a leading `{`
    pub fn parse(content: &str) -> Result<DeckDraft> {
        if content.trim_start().starts_with('{') {
            Self::parse_json(content)
        } else {
            Ok(Self::parse_text(content))
        }
    }

    /// Parse a text deck list
    ///
    /// Never fails: unrecognized lines are skipped and count mismatches are
    /// only logged.
    pub fn parse_text(text: &str) -> DeckDraft {
        Self::parse_text_with_report(text).draft
    }

    /// Parse a text deck list, returning the diagnostics alongside the draft
    pub fn parse_text_with_report(text: &str) -> ImportReport {
        let mut current: Option<CardCategory> = None;
        let mut tally = SectionTally::new();
        let mut collected = Vec::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(header) = parse_section_header(line) {
                current = Some(header.section);
                tally.open(header);
                continue;
            }

            match parse_card_line(line) {
                Some(card) => {
                    if let Some(section) = current {
                        tally.add(section, card.quantity);
                    }
                    collected.push(card);
                }
                None => log::debug!(target: "ptcg_decklist::import", "skipping line: {line:?}"),
            }
        }

        let cards = merge_entries(&collected);
        let total = sum_quantities(cards.iter().map(|c| c.quantity));
        let format = if total == CONSTRUCTED_DECK_SIZE {
            INFERRED_STANDARD
        } else {
            INFERRED_UNKNOWN
        };

        let mut warnings: Vec<ImportWarning> = tally
            .mismatches()
            .into_iter()
            .map(|(section, declared, found)| ImportWarning::SectionMismatch {
                section,
                declared,
                found,
            })
            .collect();
        if total != CONSTRUCTED_DECK_SIZE {
            warnings.push(ImportWarning::TotalMismatch { total });
        }
        for warning in &warnings {
            log::warn!(target: "ptcg_decklist::import", "{warning}");
        }

        ImportReport {
            draft: DeckDraft::new(IMPORTED_DECK_NAME, format, cards),
            warnings,
        }
    }

    /// Parse the JSON interchange format
    ///
    /// Entries come back unresolved: no set code, number or image.
    pub fn parse_json(json: &str) -> Result<DeckDraft> {
        let export: TcgExport =
            serde_json::from_str(json).map_err(|e| DeckError::InvalidFormat(e.to_string()))?;

        if let Some(card) = export.cards.iter().find(|c| c.count == 0) {
            return Err(DeckError::InvalidFormat(format!(
                "card '{}' has a count of zero",
                card.name
            )));
        }
        if let Some(card) = export.cards.iter().find(|c| c.count > MAX_CARD_QUANTITY) {
            return Err(DeckError::InvalidFormat(format!(
                "card '{}' has a count of {}, above {MAX_CARD_QUANTITY}",
                card.name, card.count
            )));
        }

        let cards = export
            .cards
            .into_iter()
            .map(|c| DeckCardEntry::new(c.name, c.count))
            .collect();

        Ok(DeckDraft::new(export.name, export.format, cards))
    }
}
