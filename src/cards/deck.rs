//! Ordered decks.
//!
//! The front of a `Deck` is the top of the pile. Turns read from the front,
//! remove from the front, and append awarded cards to the back.
//!
//! Backed by `im::Vector`, so cloning a deck (e.g. to snapshot a game) is
//! O(1) and front removal is O(log n).
//!
//! Every operation is total: asking an empty or short deck for more cards
//! than it holds returns what is there.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{rank_label, Card, Suit, MAX_RANK_VALUE, MIN_RANK_VALUE};

/// A player's ordered stack of cards.
///
/// ```
/// use war_engine::cards::{Card, Deck, Suit};
///
/// let mut deck = Deck::new(vec![
///     Card::new(Suit::Heart, "Jack", 11),
///     Card::new(Suit::Heart, "10", 10),
/// ]);
///
/// assert_eq!(deck.rank_at(0), Some(11));
/// let taken = deck.remove_front(5);
/// assert_eq!(taken.len(), 2);
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck; the first card yielded becomes the top.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// A deck with no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The 52-card French deck, suit by suit in ascending value.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vector::new();
        for suit in Suit::ALL {
            for value in MIN_RANK_VALUE..=MAX_RANK_VALUE {
                if let Some(label) = rank_label(value) {
                    cards.push_back(Card::new(suit, label, value));
                }
            }
        }
        Self { cards }
    }

    /// Up to `n` cards from the top, without removing them.
    #[must_use]
    pub fn top(&self, n: usize) -> Vector<Card> {
        self.cards.take(n.min(self.cards.len()))
    }

    /// Remove and return up to `n` cards from the top.
    pub fn remove_front(&mut self, n: usize) -> Vector<Card> {
        let count = n.min(self.cards.len());
        let rest = self.cards.split_off(count);
        std::mem::replace(&mut self.cards, rest)
    }

    /// Put cards on the bottom, preserving their order.
    pub fn append(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Rank value of the card at `index`, if the deck is that deep.
    #[must_use]
    pub fn rank_at(&self, index: usize) -> Option<u8> {
        self.card_at(index).map(Card::value)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Consume the deck into a `Vec`, top first.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards.into_iter().collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter)
    }
}
