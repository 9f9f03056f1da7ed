//! War rules: turn classification, winner selection, and card movement.
//!
//! `Turn` holds the only real decision logic in the crate. The game loop in
//! `games::war` builds one `Turn` per comparison and never interprets card
//! ranks itself.

pub mod result;
pub mod turn;

pub use result::GameResult;
pub use turn::{Turn, TurnOutcome, TurnType, TurnWinner, TIE_BREAK_INDEX, WAR_DEPTH};
