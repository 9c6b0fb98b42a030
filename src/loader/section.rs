//! Section header classifier
//!
//! Recognizes "Pokémon: 19", "Trainer: 31", "Energia: 10" and friends.

use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::core::CardCategory;

lazy_static! {
    static ref HEADER: Regex =
        Regex::new(r"(?i)^(pok[eé]mon|pokemon|trainer|treinador|energy|energia)\s*:\s*([0-9]+)?").unwrap();
}

/// A parsed section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub section: CardCategory,
    /// Count written after the colon, if any
    pub declared: Option<u32>,
}

/// Parse a header line, or `None` if the line is not a header
pub fn parse_section_header(line: &str) -> Option<SectionHeader> {
    let caps = HEADER.captures(line)?;
    let label = caps[1].to_lowercase();

    let section = if label.starts_with("pok") {
        CardCategory::Pokemon
    } else if label.starts_with("tr") {
        CardCategory::Trainer
    } else {
        CardCategory::Energy
    };

    let declared = caps.get(2).and_then(|m| m.as_str().parse().ok());
    Some(SectionHeader { section, declared })
}

/// Declared and actual per-section totals collected during an import
#[derive(Debug, Default, Clone)]
pub struct SectionTally {
    declared: FxHashMap<CardCategory, u32>,
    found: FxHashMap<CardCategory, u32>,
}

impl SectionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a header; a header without a count clears an earlier declaration
    pub fn open(&mut self, header: SectionHeader) {
        match header.declared {
            Some(n) => {
                self.declared.insert(header.section, n);
            }
            None => {
                self.declared.remove(&header.section);
            }
        }
    }

    pub fn add(&mut self, section: CardCategory, quantity: u32) {
        let found = self.found.entry(section).or_insert(0);
        *found = found.saturating_add(quantity);
    }

    pub fn found(&self, section: CardCategory) -> u32 {
        self.found.get(&section).copied().unwrap_or(0)
    }

    pub fn declared(&self, section: CardCategory) -> Option<u32> {
        self.declared.get(&section).copied()
    }

    /// Sections whose declared count differs from what was found,
    /// as `(section, declared, found)` in export order
    pub fn mismatches(&self) -> Vec<(CardCategory, u32, u32)> {
        CardCategory::ALL
            .iter()
            .filter_map(|&section| {
                let declared = self.declared(section)?;
                let found = self.found(section);
                (declared != found).then_some((section, declared, found))
            })
            .collect()
    }
}
