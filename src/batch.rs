//! Batch validation of a directory of deck files
//!
//! Files are discovered with jwalk and imported and validated in parallel
//! with rayon. One bad file does not stop the batch.

use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::CategoryRules;
use crate::loader::DeckLoader;
use crate::validate::{validate_deck_with, ValidationResult};
use crate::{DeckError, Result};

/// Result for one deck file
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub total_cards: u32,
    /// Validation outcome, or the import error for files that failed to load
    pub result: std::result::Result<ValidationResult, String>,
}

impl BatchEntry {
    pub fn is_valid(&self) -> bool {
        matches!(&self.result, Ok(r) if r.is_valid)
    }
}

fn is_deck_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("txt") | Some("json")
    )
}

/// Collect deck files under `dir`, sorted by path
///
/// jwalk sorts each directory's children by name, so the depth-first walk
/// already yields paths in order.
pub fn find_deck_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in jwalk::WalkDir::new(dir).sort(true) {
        let entry = entry.map_err(|e| DeckError::IoError(io::Error::other(e.to_string())))?;
        if entry.file_type().is_file() && is_deck_file(&entry.path()) {
            paths.push(entry.path());
        }
    }
    Ok(paths)
}

fn check_file(path: PathBuf, rules: &CategoryRules) -> BatchEntry {
    let loaded = DeckLoader::load_from_file(&path).and_then(|deck| {
        if deck.cards.is_empty() {
            Err(DeckError::EmptyDeck(path.display().to_string()))
        } else {
            Ok(deck)
        }
    });

    match loaded {
        Ok(deck) => BatchEntry {
            total_cards: deck.total_cards(),
            result: Ok(validate_deck_with(&deck, rules)),
            path,
        },
        Err(e) => {
            log::warn!("{}: {e}", path.display());
            BatchEntry {
                path,
                total_cards: 0,
                result: Err(e.to_string()),
            }
        }
    }
}

/// Import and validate every `.txt` and `.json` file under `dir`
pub fn validate_directory(dir: &Path, rules: &CategoryRules) -> Result<Vec<BatchEntry>> {
    let paths = find_deck_files(dir)?;
    log::debug!("validating {} deck files under {}", paths.len(), dir.display());

    // par_iter + collect keeps input order
    Ok(paths.into_par_iter().map(|path| check_file(path, rules)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_deck_files_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/inner")).unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        for file in ["z.txt", "b/inner/x.json", "b/y.txt", "a/w.txt", "a/skip.md", "c.json"] {
            fs::write(dir.path().join(file), "4 Pikachu").unwrap();
        }

        let paths = find_deck_files(dir.path()).unwrap();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), 5);
        assert!(paths.iter().all(|p| is_deck_file(p)));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_deck_files(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, DeckError::IoError(_)));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_short.txt"), "4 Pikachu\n50 Lightning Energy").unwrap();
        fs::write(dir.path().join("a_good.txt"), "4 Pikachu\n56 Lightning Energy").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c_bad.json"), "{ not json").unwrap();
        fs::write(dir.path().join("d_empty.txt"), "just a note").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let entries = validate_directory(dir.path(), &CategoryRules::default()).unwrap();
        let names: Vec<String> = entries
            .iter()
            .map(|e| e.path.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a_good.txt", "b_short.txt", "d_empty.txt", "nested/c_bad.json"]);

        assert!(entries[0].is_valid());
        assert_eq!(entries[0].total_cards, 60);

        // "Imported Deck" has format Unknown, so only the copy limit applies
        assert!(entries[1].is_valid());
        assert_eq!(entries[1].total_cards, 54);

        assert!(entries[2].result.as_ref().unwrap_err().contains("no cards"));
        assert!(entries[3].result.as_ref().unwrap_err().starts_with("Invalid deck format"));
    }
}
