//! Deck exporters
//!
//! Writers for the JSON interchange format and the categorized text format.

pub mod json;
pub mod text;

pub use json::{export_json, ExportCard, TcgExport};
pub use text::{export_text, export_text_with};
