//! Error type for the fallible edges of the engine.
//!
//! Turn resolution itself is total and never returns an error. Errors only
//! arise when building cards from raw values or loading configuration.

use thiserror::Error;

/// Errors raised while constructing cards, decks, or games.
#[derive(Debug, Error)]
pub enum WarError {
    #[error("Card value {0} is outside 2..=14")]
    InvalidRankValue(u8),

    #[error("max_turns must be at least 1")]
    ZeroMaxTurns,

    #[error("cards_per_player must be between 1 and {max}, got {requested}")]
    InvalidDealSize { requested: usize, max: usize },

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type WarResult<T> = Result<T, WarError>;
