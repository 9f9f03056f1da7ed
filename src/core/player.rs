//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat identifier for the two players of a War game. `PlayerId::FIRST` is
//! the player passed first to a `Turn`.
//!
//! ## Player
//!
//! A name owning exactly one deck. A player has lost when the deck is
//! empty; there is no other mutable state.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;

/// Seat identifier. Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first seat.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a two-player game.
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == 0 {
            Self::SECOND
        } else {
            Self::FIRST
        }
    }

    /// Both seats, in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player: name and deck. Seats are assigned by whoever holds the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// The player's cards. Front is the top of the deck.
    pub deck: Deck,
}

impl Player {
    /// Create a player holding `deck`.
    #[must_use]
    pub fn new(name: impl Into<String>, deck: Deck) -> Self {
        Self {
            name: name.into(),
            deck,
        }
    }

    /// A player with no cards left has lost.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.deck.is_empty()
    }

    /// Number of cards the player holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.size()
    }
}
