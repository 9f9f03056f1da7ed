//! Card and deck model.
//!
//! ## Key Types
//!
//! - `Suit`: the four French suits
//! - `Card`: immutable suit/label/value triple, compared by value only
//! - `Deck`: ordered cards, top at the front

pub mod card;
pub mod deck;

pub use card::{rank_label, Card, Suit, MAX_RANK_VALUE, MIN_RANK_VALUE};
pub use deck::Deck;
