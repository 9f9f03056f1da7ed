//! Two-player War.
//!
//! - A standard 52-card deck is shuffled with a seeded `GameRng` and dealt
//!   alternately to two players
//! - Each turn builds a fresh `Turn` over both players and resolves it
//! - A player with an empty deck loses; both empty, or the turn limit, is a
//!   draw

mod game;

pub use game::{GameSummary, WarGame, WarGameBuilder};
