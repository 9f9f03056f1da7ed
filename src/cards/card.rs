//! Playing cards.
//!
//! A `Card` is an immutable (suit, label, value) triple. Only the numeric
//! value takes part in comparisons: the Jack of Hearts equals the Jack of
//! Diamonds as far as a turn is concerned.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::error::{WarError, WarResult};

/// Card suit. Informational only; suits never break ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    /// All suits, in standard-deck order.
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
            Suit::Spade => "Spades",
        };
        f.write_str(name)
    }
}

/// Lowest rank value (Two).
pub const MIN_RANK_VALUE: u8 = 2;

/// Highest rank value (Ace).
pub const MAX_RANK_VALUE: u8 = 14;

/// Label for a rank value, or `None` outside 2..=14.
#[must_use]
pub fn rank_label(value: u8) -> Option<&'static str> {
    const LABELS: [&str; 13] = [
        "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace",
    ];
    if (MIN_RANK_VALUE..=MAX_RANK_VALUE).contains(&value) {
        Some(LABELS[(value - MIN_RANK_VALUE) as usize])
    } else {
        None
    }
}

/// A single playing card.
///
/// ```
/// use war_engine::cards::{Card, Suit};
///
/// let jack_h = Card::new(Suit::Heart, "Jack", 11);
/// let jack_d = Card::from_value(Suit::Diamond, 11).unwrap();
///
/// assert_eq!(jack_h, jack_d);
/// assert_eq!(jack_d.label(), "Jack");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    label: String,
    value: u8,
}

impl Card {
    /// Create a card with a caller-supplied label.
    ///
    /// `value` must lie in `MIN_RANK_VALUE..=MAX_RANK_VALUE`; debug builds
    /// assert it. Deserialized cards are not range-checked, so untrusted
    /// input should go through [`Card::from_value`].
    #[must_use]
    pub fn new(suit: Suit, label: impl Into<String>, value: u8) -> Self {
        debug_assert!(
            (MIN_RANK_VALUE..=MAX_RANK_VALUE).contains(&value),
            "card value {} is outside {}..={}",
            value,
            MIN_RANK_VALUE,
            MAX_RANK_VALUE
        );
        Self {
            suit,
            label: label.into(),
            value,
        }
    }

    /// Create a card from its rank value, deriving the standard label.
    pub fn from_value(suit: Suit, value: u8) -> WarResult<Self> {
        let label = rank_label(value).ok_or(WarError::InvalidRankValue(value))?;
        Ok(Self::new(suit, label, value))
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rank value used for every comparison.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.label, self.suit)
    }
}
