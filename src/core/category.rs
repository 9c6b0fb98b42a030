//! Name-based card categorization
//!
//! Exported text lists group cards under Pokémon, Trainer and Energy headers.
//! Decks assembled outside the importer carry no section tag, so the category
//! is guessed from the card name using keyword lists held in [`CategoryRules`].
//!
//! Known limitation: keywords are plain substrings, so a Pokémon whose name
//! happens to contain "item" or "stadium" lands in the Trainer group.

use crate::core::DeckCardEntry;
use serde::{Deserialize, Serialize};

/// Deck-list section a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardCategory {
    Pokemon,
    Trainer,
    Energy,
}

impl CardCategory {
    /// Export order
    pub const ALL: [CardCategory; 3] = [CardCategory::Pokemon, CardCategory::Trainer, CardCategory::Energy];

    /// Header label used in text deck lists
    pub fn label(self) -> &'static str {
        match self {
            CardCategory::Pokemon => "Pokémon",
            CardCategory::Trainer => "Trainer",
            CardCategory::Energy => "Energy",
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How card names are compared against the basic energy list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyMatch {
    /// Whole name equals a listed name, ignoring case
    #[default]
    Exact,
    /// Name contains a listed name, ignoring case ("Basic Fire Energy")
    Contains,
}

/// Keyword configuration for the name heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryRules {
    /// Basic energy names (exempt from the copy limit)
    pub basic_energy_names: Vec<String>,
    pub basic_energy_match: EnergyMatch,
    /// Lowercase substrings marking an energy card
    pub energy_keywords: Vec<String>,
    /// Lowercase substrings marking a trainer card
    pub trainer_keywords: Vec<String>,
    /// Resolved subtypes marking a trainer card
    pub trainer_subtypes: Vec<String>,
}

const BASIC_ENERGY_NAMES: &[&str] = &[
    "Grass Energy",
    "Fire Energy",
    "Water Energy",
    "Lightning Energy",
    "Psychic Energy",
    "Fighting Energy",
    "Darkness Energy",
    "Metal Energy",
    "Fairy Energy",
    "Dragon Energy",
    "Energia Grama",
    "Energia Fogo",
    "Energia Água",
    "Energia Elétrica",
    "Energia Psíquica",
    "Energia Luta",
    "Energia Escuridão",
    "Energia Metal",
    "Energia Fada",
    "Energia Dragão",
];

const ENERGY_KEYWORDS: &[&str] = &["energy"];

const TRAINER_KEYWORDS: &[&str] = &["trainer", "supporter", "item", "stadium", "ball"];

const TRAINER_SUBTYPES: &[&str] = &["Item", "Supporter", "Stadium", "Pokémon Tool"];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for CategoryRules {
    fn default() -> Self {
        CategoryRules {
            basic_energy_names: owned(BASIC_ENERGY_NAMES),
            basic_energy_match: EnergyMatch::default(),
            energy_keywords: owned(ENERGY_KEYWORDS),
            trainer_keywords: owned(TRAINER_KEYWORDS),
            trainer_subtypes: owned(TRAINER_SUBTYPES),
        }
    }
}

impl CategoryRules {
    /// Load a replacement rule set from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::DeckError::SerializationError(e.to_string()))
    }

    /// Whether `name` is a basic energy card
    pub fn is_basic_energy(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.basic_energy_names.iter().any(|energy| {
            let energy = energy.to_lowercase();
            match self.basic_energy_match {
                EnergyMatch::Exact => lower == energy,
                EnergyMatch::Contains => lower.contains(&energy),
            }
        })
    }

    fn has_keyword(lower_name: &str, keywords: &[String]) -> bool {
        keywords.iter().any(|k| lower_name.contains(k.as_str()))
    }

    /// Guess the section for a card
    ///
    /// Energy wins over Trainer, and anything unmatched is a Pokémon.
    pub fn categorize(&self, card: &DeckCardEntry) -> CardCategory {
        let lower = card.name.to_lowercase();

        if self.is_basic_energy(&card.name)
            || Self::has_keyword(&lower, &self.energy_keywords)
            || card.has_subtype("Energy")
        {
            CardCategory::Energy
        } else if Self::has_keyword(&lower, &self.trainer_keywords)
            || self.trainer_subtypes.iter().any(|s| card.has_subtype(s))
        {
            CardCategory::Trainer
        } else {
            CardCategory::Pokemon
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(name: &str) -> CardCategory {
        CategoryRules::default().categorize(&DeckCardEntry::new(name, 1))
    }

    #[test]
    fn test_basic_energy_exact() {
        let rules = CategoryRules::default();
        assert!(rules.is_basic_energy("Fire Energy"));
        assert!(rules.is_basic_energy("fire energy"));
        assert!(rules.is_basic_energy("Energia Água"));
        assert!(!rules.is_basic_energy("Basic Fire Energy"));
        assert!(!rules.is_basic_energy("Double Turbo Energy"));
    }

    #[test]
    fn test_basic_energy_contains() {
        let rules = CategoryRules {
            basic_energy_match: EnergyMatch::Contains,
            ..CategoryRules::default()
        };
        assert!(rules.is_basic_energy("Basic Fire Energy"));
        assert!(!rules.is_basic_energy("Double Turbo Energy"));
    }

    #[test]
    fn test_categorize() {
        assert_eq!(categorize("Fire Energy"), CardCategory::Energy);
        assert_eq!(categorize("Double Turbo Energy"), CardCategory::Energy);
        assert_eq!(categorize("Energia Fogo"), CardCategory::Energy);
        assert_eq!(categorize("Pokémon Trainer Post"), CardCategory::Trainer);
        assert_eq!(categorize("Ultra Ball"), CardCategory::Trainer);
        assert_eq!(categorize("Charizard ex"), CardCategory::Pokemon);
        assert_eq!(categorize("Iono"), CardCategory::Pokemon);
    }

    #[test]
    fn test_resolved_subtypes_categorize() {
        let rules = CategoryRules::default();
        let jet = DeckCardEntry::new("Jet", 2).with_subtypes(["Special", "Energy"]);
        assert_eq!(rules.categorize(&jet), CardCategory::Energy);

        let iono = DeckCardEntry::new("Iono", 4).with_subtypes(["Supporter"]);
        assert_eq!(rules.categorize(&iono), CardCategory::Trainer);
    }

    #[test]
    fn test_keyword_substring_misclassifies() {
        // Substring matching is naive: "Itemon" contains "item"
        assert_eq!(categorize("Itemon"), CardCategory::Trainer);
    }

    #[test]
    fn test_rules_from_json_keeps_defaults() {
        let rules = CategoryRules::from_json(r#"{ "trainerKeywords": ["rod"] }"#).unwrap();
        assert_eq!(rules.trainer_keywords, vec!["rod".to_string()]);
        assert_eq!(rules.energy_keywords, vec!["energy".to_string()]);
        assert!(rules.is_basic_energy("Water Energy"));
        assert_eq!(
            rules.categorize(&DeckCardEntry::new("Super Rod", 2)),
            CardCategory::Trainer
        );
        assert_eq!(
            rules.categorize(&DeckCardEntry::new("Ultra Ball", 4)),
            CardCategory::Pokemon
        );
    }
}
