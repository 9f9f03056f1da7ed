//! Turn resolution.
//!
//! A `Turn` compares the top of two decks, classifies the comparison, picks a
//! winner, and moves cards into (or out of) play:
//!
//! | Type | Condition | Piling |
//! |------|-----------|--------|
//! | `Basic` | top cards differ | 1 card each into spoils |
//! | `War` | top cards tie, third cards differ or a deck is short | up to 3 each into spoils |
//! | `MutuallyAssuredDestruction` | top and third cards both tie | 3 each discarded |
//!
//! `turn_type` and `winner` are recomputed from the decks on every call.
//! `pile_cards` reads both before touching the decks and hands them back in a
//! `TurnOutcome`, so the result of a turn is never computed from
//! already-piled decks.
//!
//! ## Usage
//!
//! ```
//! use war_engine::cards::{Card, Deck, Suit};
//! use war_engine::core::{Player, PlayerId};
//! use war_engine::rules::{Turn, TurnType, TurnWinner};
//!
//! let mut megan = Player::new("Megan", Deck::new(vec![
//!     Card::new(Suit::Heart, "Jack", 11),
//!     Card::new(Suit::Heart, "10", 10),
//! ]));
//! let mut aurora = Player::new("Aurora", Deck::new(vec![
//!     Card::new(Suit::Heart, "9", 9),
//!     Card::new(Suit::Diamond, "Jack", 11),
//! ]));
//!
//! let mut turn = Turn::new(&mut megan, &mut aurora);
//! assert_eq!(turn.turn_type(), TurnType::Basic);
//!
//! let outcome = turn.resolve();
//! assert_eq!(outcome.winner, TurnWinner::Winner(PlayerId::FIRST));
//! assert_eq!(megan.deck.size(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::player::{Player, PlayerId};

/// Cards each player commits to a war (two face down, the third compared).
pub const WAR_DEPTH: usize = 3;

/// Deck position compared to break a tie at the top.
pub const TIE_BREAK_INDEX: usize = WAR_DEPTH - 1;

/// Classification of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnType {
    /// Top cards differ; the higher one takes both.
    Basic,
    /// Top cards tie; the third card (or a short deck) decides.
    War,
    /// Top and third cards both tie; three cards each leave the game.
    MutuallyAssuredDestruction,
}

impl std::fmt::Display for TurnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnType::Basic => "basic",
            TurnType::War => "war",
            TurnType::MutuallyAssuredDestruction => "mutually_assured_destruction",
        };
        f.write_str(name)
    }
}

/// Who takes a turn.
///
/// Seats are relative to the turn: `PlayerId::FIRST` is the player passed
/// first to `Turn::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnWinner {
    Winner(PlayerId),
    NoWinner,
}

impl TurnWinner {
    /// The winning seat, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            TurnWinner::Winner(p) => Some(p),
            TurnWinner::NoWinner => None,
        }
    }

    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self.player() == Some(player)
    }
}

/// What `pile_cards` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Classification before any card moved.
    pub turn_type: TurnType,
    /// Winner before any card moved.
    pub winner: TurnWinner,
    /// Cards moved into spoils.
    pub piled: usize,
    /// Cards removed from the game.
    pub discarded: usize,
}

/// A single comparison between two players.
///
/// Borrows both players for its lifetime. Build a fresh `Turn` for each
/// comparison; calling `pile_cards` twice on one turn piles from decks that
/// have already moved on.
#[derive(Debug)]
pub struct Turn<'a> {
    player1: &'a mut Player,
    player2: &'a mut Player,
    /// Cards waiting to be awarded. At most 6 in a single turn.
    spoils_of_war: SmallVec<[Card; 6]>,
}

impl<'a> Turn<'a> {
    /// Start a turn. Either deck may be empty.
    pub fn new(player1: &'a mut Player, player2: &'a mut Player) -> Self {
        Self {
            player1,
            player2,
            spoils_of_war: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn player1(&self) -> &Player {
        &*self.player1
    }

    #[must_use]
    pub fn player2(&self) -> &Player {
        &*self.player2
    }

    /// The player in a seat, or `None` for a seat this turn does not have.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        match seat {
            PlayerId::FIRST => Some(&*self.player1),
            PlayerId::SECOND => Some(&*self.player2),
            _ => None,
        }
    }


    #[must_use]
    pub fn spoils_of_war(&self) -> &[Card] {
        &self.spoils_of_war
    }

    // === Classification ===

    /// Classify the turn from the current decks.
    #[must_use]
    pub fn turn_type(&self) -> TurnType {
        if self.basic_turn() {
            TurnType::Basic
        } else if self.m_a_d_turn() {
            TurnType::MutuallyAssuredDestruction
        } else {
            TurnType::War
        }
    }

    /// Both top cards exist and differ in rank.
    ///
    /// A missing top card is never "different": a turn against an empty
    /// deck is a war, which the empty deck forfeits.
    #[must_use]
    pub fn basic_turn(&self) -> bool {
        matches!(self.ranks_at(0), (Some(a), Some(b)) if a != b)
    }

    /// Top cards tie (or one is missing) and either a deck is too short to
    /// reach the tie-break card or the tie-break cards differ.
    #[must_use]
    pub fn war_turn(&self) -> bool {
        if self.basic_turn() {
            return false;
        }
        if self.card_count_under_three() {
            return true;
        }
        let (a, b) = self.ranks_at(TIE_BREAK_INDEX);
        a != b
    }

    /// Both decks reach the tie-break card, and the top and tie-break cards
    /// both tie.
    #[must_use]
    pub fn m_a_d_turn(&self) -> bool {
        if !self.card_count_over_three() {
            return false;
        }
        let (top1, top2) = self.ranks_at(0);
        let (third1, third2) = self.ranks_at(TIE_BREAK_INDEX);
        top1 == top2 && third1 == third2
    }

    /// Both decks hold enough cards to fight a war.
    #[must_use]
    pub fn card_count_over_three(&self) -> bool {
        self.player1.deck.size() >= WAR_DEPTH && self.player2.deck.size() >= WAR_DEPTH
    }

    /// At least one deck is too short to fight a war.
    #[must_use]
    pub fn card_count_under_three(&self) -> bool {
        !self.card_count_over_three()
    }

    // === Winner ===

    /// Winner of the turn as the decks stand now.
    #[must_use]
    pub fn winner(&self) -> TurnWinner {
        self.winner_for(self.turn_type())
    }

    fn winner_for(&self, turn_type: TurnType) -> TurnWinner {
        match turn_type {
            TurnType::Basic => self.basic_turn_winner(),
            TurnType::War => self.war_turn_winner(),
            TurnType::MutuallyAssuredDestruction => TurnWinner::NoWinner,
        }
    }

    /// Higher top card wins.
    #[must_use]
    pub fn basic_turn_winner(&self) -> TurnWinner {
        self.compare_at(0)
    }

    /// A player who cannot commit three cards forfeits. Otherwise the
    /// tie-break card decides.
    ///
    /// The first player's depth is checked first, so when both decks are
    /// short the second player takes the turn. A war always has a winner.
    #[must_use]
    pub fn war_turn_winner(&self) -> TurnWinner {
        if self.player1.deck.size() < WAR_DEPTH {
            TurnWinner::Winner(PlayerId::SECOND)
        } else if self.player2.deck.size() < WAR_DEPTH {
            TurnWinner::Winner(PlayerId::FIRST)
        } else {
            self.compare_card_at_second_position()
        }
    }

    /// Higher tie-break card (index 2) wins.
    #[must_use]
    pub fn compare_card_at_second_position(&self) -> TurnWinner {
        self.compare_at(TIE_BREAK_INDEX)
    }

    fn ranks_at(&self, index: usize) -> (Option<u8>, Option<u8>) {
        (
            self.player1.deck.rank_at(index),
            self.player2.deck.rank_at(index),
        )
    }

    /// A present card beats a missing one; equal ranks are `NoWinner`.
    fn compare_at(&self, index: usize) -> TurnWinner {
        match self.ranks_at(index) {
            (Some(a), Some(b)) if a > b => TurnWinner::Winner(PlayerId::FIRST),
            (Some(a), Some(b)) if a < b => TurnWinner::Winner(PlayerId::SECOND),
            (Some(_), None) => TurnWinner::Winner(PlayerId::FIRST),
            (None, Some(_)) => TurnWinner::Winner(PlayerId::SECOND),
            _ => TurnWinner::NoWinner,
        }
    }

    // === Piling ===

    /// Move cards out of both decks according to the turn type.
    ///
    /// Classification and winner are taken before any card moves and
    /// returned, so callers can award from the outcome directly.
    pub fn pile_cards(&mut self) -> TurnOutcome {
        let turn_type = self.turn_type();
        let winner = self.winner_for(turn_type);

        let (piled, discarded) = match turn_type {
            TurnType::Basic => (self.send_two_to_spoils(), 0),
            TurnType::War => (self.send_six_to_spoils(), 0),
            TurnType::MutuallyAssuredDestruction => (0, self.remove_six_cards()),
        };

        tracing::debug!(
            "Piled {} turn: {} to spoils, {} discarded, winner {:?}",
            turn_type,
            piled,
            discarded,
            winner
        );

        TurnOutcome {
            turn_type,
            winner,
            piled,
            discarded,
        }
    }

    /// Top card of each deck into spoils. Returns cards moved.
    pub fn send_two_to_spoils(&mut self) -> usize {
        self.pile_from_each(1)
    }

    /// Up to three cards of each deck into spoils. Returns cards moved.
    pub fn send_six_to_spoils(&mut self) -> usize {
        self.pile_from_each(WAR_DEPTH)
    }

    /// Up to three cards of each deck out of the game. Spoils are untouched.
    /// Returns cards removed.
    pub fn remove_six_cards(&mut self) -> usize {
        let first = self.player1.deck.remove_front(WAR_DEPTH);
        let second = self.player2.deck.remove_front(WAR_DEPTH);
        first.len() + second.len()
    }

    fn pile_from_each(&mut self, count: usize) -> usize {
        let before = self.spoils_of_war.len();
        self.spoils_of_war.extend(self.player1.deck.remove_front(count));
        self.spoils_of_war.extend(self.player2.deck.remove_front(count));
        self.spoils_of_war.len() - before
    }

    // === Awarding ===

    /// Append all spoils to the winner's deck and empty the spoils.
    ///
    /// `NoWinner`, or a seat outside this turn, leaves everything as it is.
    /// Returns cards awarded.
    pub fn award_spoils(&mut self, winner: TurnWinner) -> usize {
        let TurnWinner::Winner(seat) = winner else {
            tracing::trace!("No winner, {} spoils left in place", self.spoils_of_war.len());
            return 0;
        };

        let recipient = match seat {
            PlayerId::FIRST => &mut *self.player1,
            PlayerId::SECOND => &mut *self.player2,
            _ => {
                tracing::warn!("{} is not seated in this turn, spoils kept", seat);
                return 0;
            }
        };

        let count = self.spoils_of_war.len();
        recipient.deck.append(self.spoils_of_war.drain(..));

        tracing::debug!("{} takes {} cards", recipient.name, count);
        count
    }

    /// Pile, then award to the winner computed before piling.
    pub fn resolve(&mut self) -> TurnOutcome {
        let outcome = self.pile_cards();
        self.award_spoils(outcome.winner);
        outcome
    }
}
