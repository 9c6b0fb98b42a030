//! Error types for deck-list import and export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Invalid deck format: {0}")]
    InvalidFormat(String),

    #[error("Deck contains no cards: {0}")]
    EmptyDeck(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DeckError>;
