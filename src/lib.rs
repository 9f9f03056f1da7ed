//! # war-engine
//!
//! Turn-resolution engine for the two-player card game War.
//!
//! ## Design Principles
//!
//! 1. **Total operations**: every deck and turn operation is defined for
//!    empty and short decks. Nothing in turn resolution returns an error.
//!
//! 2. **No sentinel winners**: a turn that nobody wins is
//!    `TurnWinner::NoWinner`, so callers have to handle it.
//!
//! 3. **Read before mutate**: `Turn::pile_cards` classifies and picks the
//!    winner before any card moves, and returns both.
//!
//! ## Modules
//!
//! - `cards`: Suits, cards, and decks
//! - `core`: Players, RNG, configuration, errors
//! - `rules`: Turn classification, winner selection, piling and awarding
//! - `games`: The War game loop built on top of `rules`

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Suit};

pub use crate::core::{GameRng, GameRngState, Player, PlayerId, WarConfig, WarError, WarResult};

pub use crate::rules::{GameResult, Turn, TurnOutcome, TurnType, TurnWinner};

pub use crate::games::war::{GameSummary, WarGame, WarGameBuilder};
