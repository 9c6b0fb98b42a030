//! Duplicate card merging

use rustc_hash::FxHashMap;

use crate::core::DeckCardEntry;
use crate::loader::line::CardLine;

/// Identity of a card within a deck: lowercased name, set code, number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey(String, String, String);

impl MergeKey {
    pub fn new(name: &str, set_code: Option<&str>, code: &str) -> Self {
        MergeKey(name.to_lowercase(), set_code.unwrap_or_default().to_string(), code.to_string())
    }

    pub fn of_line(line: &CardLine) -> Self {
        Self::new(&line.name, line.set_code.as_deref(), &line.code)
    }
}

/// Merge lines sharing a [`MergeKey`], summing their quantities
///
/// The first occurrence keeps its spelling and position.
pub fn merge_entries(lines: &[CardLine]) -> Vec<DeckCardEntry> {
    let mut merged: Vec<DeckCardEntry> = Vec::with_capacity(lines.len());
    let mut index: FxHashMap<MergeKey, usize> = FxHashMap::default();

    for line in lines {
        let key = MergeKey::of_line(line);
        match index.get(&key) {
            Some(&i) => {
                merged[i].quantity = merged[i].quantity.saturating_add(line.quantity);
            }
            None => {
                index.insert(key, merged.len());
                let mut entry = DeckCardEntry::new(line.name.clone(), line.quantity);
                entry.set_code = line.set_code.clone();
                entry.code = line.code.clone();
                merged.push(entry);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::line::parse_card_line;

    fn lines(raw: &[&str]) -> Vec<CardLine> {
        raw.iter().map(|l| parse_card_line(l).unwrap()).collect()
    }

    #[test]
    fn test_merge_sums_quantities() {
        let merged = merge_entries(&lines(&["2 Iono PAL 185", "1 Arven SVI 166", "2 iono PAL 185"]));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "Iono");
        assert_eq!(merged[0].quantity, 4);
        assert_eq!(merged[1].name, "Arven");
    }

    #[test]
    fn test_different_prints_stay_separate() {
        let merged = merge_entries(&lines(&["2 Iono PAL 185", "2 Iono PAL 254", "1 Iono"]));
        assert_eq!(merged.len(), 3);
        assert!(merged.iter().all(|e| e.quantity != 4));
        assert_eq!(merged[2].set_code, None);
    }
}
