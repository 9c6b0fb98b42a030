//! Async deck loading

use std::path::{Path, PathBuf};

use crate::core::DeckDraft;
use crate::loader::DeckLoader;
use crate::Result;

/// Read and import a deck file without blocking the runtime
pub async fn load_deck_async(path: &Path) -> Result<DeckDraft> {
    let content = tokio::fs::read_to_string(path).await?;
    DeckLoader::parse(&content)
}

/// Load several deck files concurrently, preserving input order
///
/// Fails on the first file that cannot be read or parsed.
pub async fn load_decks(paths: &[PathBuf]) -> Result<Vec<DeckDraft>> {
    let tasks: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { load_deck_async(&path).await }))
        .collect();

    let mut decks = Vec::with_capacity(tasks.len());
    for task in tasks {
        decks.push(task.await??);
    }
    Ok(decks)
}
