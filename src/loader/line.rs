//! Card line tokenizer
//!
//! Parses lines such as "4 N's Zorua JTG 97" or "10 Fire Energy".

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::MAX_CARD_QUANTITY;

lazy_static! {
    // <quantity> <name> <SETCODE> <number>
    static ref FULL_LINE: Regex =
        Regex::new(r"^([0-9]+)\s+(.+?)\s+([A-Z]{2,5})\s+([0-9]{1,4})$").unwrap();
    // <quantity> <name>
    static ref SIMPLE_LINE: Regex = Regex::new(r"^([0-9]+)\s+(.+)$").unwrap();
}

/// A single tokenized card line, before merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub quantity: u32,
    pub name: String,
    pub set_code: Option<String>,
    /// Collector number, empty when the line has none
    pub code: String,
}

/// Parse one trimmed, non-empty line into a card line
///
/// Returns `None` for lines that are not card lines (comments, stray text).
/// A quantity of zero, or one above [`MAX_CARD_QUANTITY`], is also treated
/// as noise.
/// The name is kept exactly as written.
pub fn parse_card_line(line: &str) -> Option<CardLine> {
    if let Some(caps) = FULL_LINE.captures(line) {
        let quantity = parse_quantity(&caps[1])?;
        return Some(CardLine {
            quantity,
            name: caps[2].trim().to_string(),
            set_code: Some(caps[3].to_string()),
            code: caps[4].to_string(),
        });
    }

    let caps = SIMPLE_LINE.captures(line)?;
    let quantity = parse_quantity(&caps[1])?;
    Some(CardLine {
        quantity,
        name: caps[2].trim().to_string(),
        set_code: None,
        code: String::new(),
    })
}

fn parse_quantity(digits: &str) -> Option<u32> {
    digits
        .parse::<u32>()
        .ok()
        .filter(|&q| (1..=MAX_CARD_QUANTITY).contains(&q))
}
