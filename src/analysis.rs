//! Deck statistics and heuristic analysis
//!
//! Everything here is guessed from card names alone, so results are rough:
//! any name containing a "v" counts as a V Pokémon, for example.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{sum_quantities, CardCategory, CategoryRules, DeckCardEntry, DeckDraft};
use crate::loader::deck::CONSTRUCTED_DECK_SIZE;
use crate::validate::MAX_COPIES;

/// Card counts for a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total_cards: u32,
    pub unique_cards: usize,
    /// Count per section in Pokémon, Trainer, Energy order
    pub category_counts: Vec<(CardCategory, u32)>,
}

/// Count cards, grouping by the same rules the text exporter uses
pub fn deck_stats(deck: &DeckDraft, rules: &CategoryRules) -> DeckStats {
    let category_counts = CardCategory::ALL
        .iter()
        .map(|&category| {
            let count = sum_quantities(
                deck.cards
                    .iter()
                    .filter(|c| rules.categorize(c) == category)
                    .map(|c| c.quantity),
            );
            (category, count)
        })
        .collect();

    DeckStats {
        total_cards: deck.total_cards(),
        unique_cards: deck.unique_cards(),
        category_counts,
    }
}

/// Coarse card kind guessed from a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardKind {
    #[serde(rename = "Energy")]
    Energy,
    #[serde(rename = "Special Energy")]
    SpecialEnergy,
    #[serde(rename = "Pokémon EX/GX/V")]
    RulePokemon,
    #[serde(rename = "Trainer")]
    Trainer,
    #[serde(rename = "Pokémon")]
    Pokemon,
}

impl CardKind {
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Energy => "Energy",
            CardKind::SpecialEnergy => "Special Energy",
            CardKind::RulePokemon => "Pokémon EX/GX/V",
            CardKind::Trainer => "Trainer",
            CardKind::Pokemon => "Pokémon",
        }
    }
}

/// Rarity guessed from a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rarity {
    #[serde(rename = "Rare Holo EX/GX/V")]
    RareHoloRule,
    #[serde(rename = "Rare Holo V")]
    RareHoloV,
    #[serde(rename = "Uncommon")]
    Uncommon,
    #[serde(rename = "Common")]
    Common,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::RareHoloRule => "Rare Holo EX/GX/V",
            Rarity::RareHoloV => "Rare Holo V",
            Rarity::Uncommon => "Uncommon",
            Rarity::Common => "Common",
        }
    }

    fn is_rare(self) -> bool {
        matches!(self, Rarity::RareHoloRule | Rarity::RareHoloV)
    }
}

const TRAINER_HINTS: &[&str] = &[
    "professor",
    "research",
    "ball",
    "switch",
    "escape",
    "nest",
    "ultra",
    "great",
    "poke",
    "supporter",
    "item",
    "stadium",
];

const SPECIAL_ENERGY_HINTS: &[&str] = &["special", "double", "rainbow"];

const RULE_BOX_HINTS: &[&str] = &["ex", "gx", "vmax", "vstar"];

fn contains_any(name: &str, hints: &[&str]) -> bool {
    hints.iter().any(|h| name.contains(h))
}

fn is_basic_energy_name(name: &str) -> bool {
    name.contains("energy") && !name.contains("special")
}

/// Guess the kind of card from its name
pub fn card_kind(name: &str) -> CardKind {
    let name = name.to_lowercase();
    if is_basic_energy_name(&name) {
        CardKind::Energy
    } else if contains_any(&name, SPECIAL_ENERGY_HINTS) {
        CardKind::SpecialEnergy
    } else if contains_any(&name, RULE_BOX_HINTS) || name.contains('v') {
        CardKind::RulePokemon
    } else if contains_any(&name, TRAINER_HINTS) {
        CardKind::Trainer
    } else {
        CardKind::Pokemon
    }
}

/// Guess rarity from a name
pub fn card_rarity(name: &str) -> Rarity {
    let name = name.to_lowercase();
    if contains_any(&name, RULE_BOX_HINTS) {
        Rarity::RareHoloRule
    } else if name.contains('v') {
        Rarity::RareHoloV
    } else if name.contains("energy") {
        Rarity::Common
    } else if contains_any(&name, &["professor", "research", "ball"]) {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Rough attack cost for a card, by name
pub fn estimate_energy_cost(name: &str) -> u32 {
    let name = name.to_lowercase();
    if is_basic_energy_name(&name) {
        0
    } else if contains_any(&name, SPECIAL_ENERGY_HINTS) {
        1
    } else if contains_any(&name, TRAINER_HINTS) {
        0
    } else if contains_any(&name, RULE_BOX_HINTS) {
        3
    } else if name.contains('v') {
        2
    } else {
        1
    }
}

fn percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (f64::from(count) / f64::from(total) * 100.0).round() as u32
    }
}

/// Share of `count` in `total` as a percentage, or `None` for an empty deck
fn share(count: u32, total: u32) -> Option<f64> {
    (total > 0).then(|| f64::from(count) / f64::from(total) * 100.0)
}

/// Group quantities by key, keeping first-seen order
fn tally_by<K: PartialEq + Copy>(cards: &[DeckCardEntry], key: impl Fn(&DeckCardEntry) -> K) -> Vec<(K, u32)> {
    let mut counts: Vec<(K, u32)> = Vec::new();
    for card in cards {
        let k = key(card);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, n)) => *n = n.saturating_add(card.quantity),
            None => counts.push((k, card.quantity)),
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBucket {
    pub cost: u32,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCurveAnalysis {
    pub total_energy: u32,
    pub energy_distribution: Vec<CostBucket>,
    pub average_energy_cost: f64,
    pub recommendation: String,
}

impl EnergyCurveAnalysis {
    fn low_cost_share(&self) -> Option<f64> {
        let low = sum_quantities(
            self.energy_distribution
                .iter()
                .filter(|b| b.cost <= 1)
                .map(|b| b.count),
        );
        share(low, self.total_energy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindCount {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDistributionAnalysis {
    pub total_types: usize,
    pub type_counts: Vec<KindCount>,
    /// Most common kind, or "Unknown" for an empty deck
    pub dominant_type: String,
    pub recommendation: String,
}

impl TypeDistributionAnalysis {
    pub fn count_of(&self, kind: CardKind) -> u32 {
        self.type_counts
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityCount {
    pub rarity: Rarity,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityDistributionAnalysis {
    pub total_rarities: usize,
    pub rarity_counts: Vec<RarityCount>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl DeckSuggestion {
    fn new(kind: SuggestionKind, priority: Priority, title: &str, description: String) -> Self {
        DeckSuggestion {
            kind,
            title: title.to_string(),
            description,
            priority,
        }
    }
}

/// Full heuristic report for a deck
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckAnalysis {
    pub energy_curve: EnergyCurveAnalysis,
    pub type_distribution: TypeDistributionAnalysis,
    pub rarity_distribution: RarityDistributionAnalysis,
    pub suggestions: Vec<DeckSuggestion>,
    /// 0 to 100
    pub overall_score: u32,
}

/// Analyze a deck's cost curve, card mix and rarity
pub fn analyze_deck(deck: &DeckDraft) -> DeckAnalysis {
    let energy_curve = analyze_energy_curve(&deck.cards);
    let type_distribution = analyze_type_distribution(&deck.cards);
    let rarity_distribution = analyze_rarity_distribution(&deck.cards);
    let suggestions = suggestions(deck, &type_distribution);
    let overall_score = overall_score(&energy_curve, &type_distribution);

    DeckAnalysis {
        energy_curve,
        type_distribution,
        rarity_distribution,
        suggestions,
        overall_score,
    }
}

fn analyze_energy_curve(cards: &[DeckCardEntry]) -> EnergyCurveAnalysis {
    let mut by_cost: BTreeMap<u32, u32> = BTreeMap::new();
    for card in cards {
        let count = by_cost.entry(estimate_energy_cost(&card.name)).or_insert(0);
        *count = count.saturating_add(card.quantity);
    }
    let total_energy = sum_quantities(by_cost.values().copied());

    let energy_distribution: Vec<CostBucket> = by_cost
        .into_iter()
        .map(|(cost, count)| CostBucket {
            cost,
            count,
            percentage: percentage(count, total_energy),
        })
        .collect();

    let weighted = sum_quantities(energy_distribution.iter().map(|b| b.cost.saturating_mul(b.count)));
    let average_energy_cost = match share(weighted, total_energy) {
        // share() scales by 100, which is what rounding to two places needs
        Some(scaled) => scaled.round() / 100.0,
        None => 0.0,
    };

    let mut curve = EnergyCurveAnalysis {
        total_energy,
        energy_distribution,
        average_energy_cost,
        recommendation: String::new(),
    };
    curve.recommendation = match curve.low_cost_share() {
        Some(low) if low < 30.0 => "Consider adding more low-cost cards to smooth the energy curve",
        Some(low) if low > 70.0 => "Too many low-cost cards. Consider adding a few more powerful ones",
        _ => "Good spread of energy costs",
    }
    .to_string();
    curve
}

fn analyze_type_distribution(cards: &[DeckCardEntry]) -> TypeDistributionAnalysis {
    let total = sum_quantities(cards.iter().map(|c| c.quantity));

    let mut type_counts: Vec<KindCount> = tally_by(cards, |c| card_kind(&c.name))
        .into_iter()
        .map(|(kind, count)| KindCount {
            kind,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    type_counts.sort_by(|a, b| b.count.cmp(&a.count));

    let dominant_type = type_counts
        .first()
        .map(|t| t.kind.label().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut analysis = TypeDistributionAnalysis {
        total_types: type_counts.len(),
        type_counts,
        dominant_type,
        recommendation: String::new(),
    };

    let pokemon = share(analysis.count_of(CardKind::Pokemon), total);
    let energy = share(analysis.count_of(CardKind::Energy), total);
    let trainer = share(analysis.count_of(CardKind::Trainer), total);
    analysis.recommendation = match (pokemon, energy, trainer) {
        (Some(p), _, _) if p < 20.0 => "Few Pokémon in the deck. Consider adding more",
        (_, Some(e), _) if e < 15.0 => "Little energy in the deck. Consider adding more energy cards",
        (_, _, Some(t)) if t < 10.0 => "Few trainers in the deck. Consider adding more supporters and items",
        _ => "Good mix of card types",
    }
    .to_string();
    analysis
}

fn analyze_rarity_distribution(cards: &[DeckCardEntry]) -> RarityDistributionAnalysis {
    let total = sum_quantities(cards.iter().map(|c| c.quantity));

    let mut rarity_counts: Vec<RarityCount> = tally_by(cards, |c| card_rarity(&c.name))
        .into_iter()
        .map(|(rarity, count)| RarityCount {
            rarity,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    rarity_counts.sort_by(|a, b| b.count.cmp(&a.count));

    let rare = sum_quantities(rarity_counts.iter().filter(|r| r.rarity.is_rare()).map(|r| r.count));
    let recommendation = match share(rare, total) {
        Some(r) if r > 50.0 => "Many rare cards. Consider adding more basic cards for consistency",
        Some(r) if r < 10.0 => "Few rare cards. Consider adding a few more powerful cards",
        _ => "Good rarity spread",
    }
    .to_string();

    RarityDistributionAnalysis {
        total_rarities: rarity_counts.len(),
        rarity_counts,
        recommendation,
    }
}

fn suggestions(deck: &DeckDraft, types: &TypeDistributionAnalysis) -> Vec<DeckSuggestion> {
    use Priority::*;
    use SuggestionKind::*;

    let mut out = Vec::new();

    let total = deck.total_cards();
    if total != CONSTRUCTED_DECK_SIZE {
        out.push(DeckSuggestion::new(
            Warning,
            High,
            "Wrong number of cards",
            format!("The deck has {total} cards but must have exactly {CONSTRUCTED_DECK_SIZE}"),
        ));
    }

    let energy = types.count_of(CardKind::Energy);
    if energy < 8 {
        out.push(DeckSuggestion::new(
            Warning,
            High,
            "Too little energy",
            format!("Only {energy} energy cards. Consider adding more (recommended: 10-15)"),
        ));
    } else if energy > 20 {
        out.push(DeckSuggestion::new(
            Info,
            Medium,
            "Too much energy",
            format!("{energy} energy cards may be excessive. Consider cutting down to 10-15"),
        ));
    }

    let trainers = types.count_of(CardKind::Trainer);
    if trainers < 10 {
        out.push(DeckSuggestion::new(
            Info,
            Medium,
            "Few trainers",
            format!("Only {trainers} trainers. Consider adding more supporters and items"),
        ));
    }

    let pokemon = types.count_of(CardKind::Pokemon);
    if pokemon < 10 {
        out.push(DeckSuggestion::new(
            Warning,
            High,
            "Few Pokémon",
            format!("Only {pokemon} Pokémon. A deck needs more Pokémon to function"),
        ));
    }

    let over_limit: Vec<&str> = deck
        .cards
        .iter()
        .filter(|c| c.quantity > MAX_COPIES)
        .map(|c| c.name.as_str())
        .collect();
    if !over_limit.is_empty() {
        out.push(DeckSuggestion::new(
            Warning,
            High,
            "Too many copies",
            format!("Some cards have more than {MAX_COPIES} copies: {}", over_limit.join(", ")),
        ));
    }

    out
}

fn overall_score(curve: &EnergyCurveAnalysis, types: &TypeDistributionAnalysis) -> u32 {
    let mut score: i32 = 100;

    match curve.low_cost_share() {
        Some(low) if low < 30.0 => score -= 20,
        Some(low) if low > 70.0 => score -= 10,
        _ => {}
    }

    // Measured against a full constructed deck, not the actual size
    let full = f64::from(CONSTRUCTED_DECK_SIZE);
    let energy = f64::from(types.count_of(CardKind::Energy)) / full * 100.0;
    if energy < 15.0 {
        score -= 15;
    } else if energy > 25.0 {
        score -= 10;
    }

    let trainers = f64::from(types.count_of(CardKind::Trainer)) / full * 100.0;
    if trainers < 15.0 {
        score -= 10;
    }

    score.clamp(0, 100) as u32
}
