//! Property tests for turn resolution over arbitrary decks.

use proptest::prelude::*;

use war_engine::cards::{Card, Deck, Suit};
use war_engine::core::{Player, PlayerId};
use war_engine::rules::{Turn, TurnType, TurnWinner, TIE_BREAK_INDEX, WAR_DEPTH};

fn player(values: &[u8]) -> Player {
    Player::new(
        "p",
        values
            .iter()
            .map(|&v| Card::from_value(Suit::Heart, v).unwrap())
            .collect::<Deck>(),
    )
}

fn deck_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(2u8..=14, 0..8)
}

/// Decks that tie at the top and are deep enough for a war.
fn tied_deep_decks() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (2u8..=14, deck_values(), deck_values()).prop_map(|(top, a, b)| {
        let mut first = vec![top, 2, 2];
        let mut second = vec![top, 2, 2];
        first.extend(a);
        second.extend(b);
        (first, second)
    })
}

proptest! {
    #[test]
    fn classification_matches_top_cards(a in deck_values(), b in deck_values()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let turn = Turn::new(&mut p1, &mut p2);

        let expected = match (a.first(), b.first()) {
            (Some(x), Some(y)) if x != y => TurnType::Basic,
            _ if a.len() >= WAR_DEPTH
                && b.len() >= WAR_DEPTH
                && a[TIE_BREAK_INDEX] == b[TIE_BREAK_INDEX] =>
            {
                TurnType::MutuallyAssuredDestruction
            }
            _ => TurnType::War,
        };
        prop_assert_eq!(turn.turn_type(), expected);
    }

    #[test]
    fn basic_winner_has_higher_top(a in deck_values(), b in deck_values()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let turn = Turn::new(&mut p1, &mut p2);

        if turn.turn_type() == TurnType::Basic {
            let expected = if a[0] > b[0] { PlayerId::FIRST } else { PlayerId::SECOND };
            prop_assert_eq!(turn.winner(), TurnWinner::Winner(expected));
        }
    }

    #[test]
    fn resolve_conserves_cards(a in deck_values(), b in deck_values()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let mut turn = Turn::new(&mut p1, &mut p2);

        let outcome = turn.pile_cards();
        let spoils = turn.spoils_of_war().len();
        prop_assert_eq!(spoils, outcome.piled);
        turn.award_spoils(outcome.winner);

        prop_assert!(turn.spoils_of_war().is_empty());
        drop(turn);

        // Only mutually assured destruction takes cards out of play.
        let remaining = p1.deck.size() + p2.deck.size();
        prop_assert_eq!(remaining + outcome.discarded, a.len() + b.len());
        if outcome.turn_type != TurnType::MutuallyAssuredDestruction {
            prop_assert_eq!(outcome.discarded, 0);
        }
    }

    #[test]
    fn only_mad_has_no_winner(a in deck_values(), b in deck_values()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let turn = Turn::new(&mut p1, &mut p2);

        let no_winner = turn.winner() == TurnWinner::NoWinner;
        prop_assert_eq!(no_winner, turn.turn_type() == TurnType::MutuallyAssuredDestruction);
    }

    #[test]
    fn basic_pile_moves_one_each(a in deck_values(), b in deck_values()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let mut turn = Turn::new(&mut p1, &mut p2);
        prop_assume!(turn.turn_type() == TurnType::Basic);

        let outcome = turn.pile_cards();
        prop_assert_eq!(turn.spoils_of_war().len(), 2);
        prop_assert_eq!(outcome.discarded, 0);
        drop(turn);
        prop_assert_eq!(p1.deck.size(), a.len() - 1);
        prop_assert_eq!(p2.deck.size(), b.len() - 1);
    }

    #[test]
    fn deep_war_piles_six((a, mut b) in tied_deep_decks()) {
        b[TIE_BREAK_INDEX] = if a[TIE_BREAK_INDEX] == 14 { 13 } else { a[TIE_BREAK_INDEX] + 1 };
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let mut turn = Turn::new(&mut p1, &mut p2);

        prop_assert_eq!(turn.turn_type(), TurnType::War);
        let outcome = turn.pile_cards();
        prop_assert_eq!(outcome.piled, 6);
        prop_assert_eq!(turn.spoils_of_war().len(), 6);
    }

    #[test]
    fn mad_discards_three_each((a, b) in tied_deep_decks()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let mut turn = Turn::new(&mut p1, &mut p2);

        prop_assert_eq!(turn.turn_type(), TurnType::MutuallyAssuredDestruction);
        prop_assert_eq!(turn.winner(), TurnWinner::NoWinner);

        let outcome = turn.pile_cards();
        prop_assert!(turn.spoils_of_war().is_empty());
        prop_assert_eq!(turn.award_spoils(outcome.winner), 0);
        drop(turn);
        prop_assert_eq!(p1.deck.size(), a.len() - 3);
        prop_assert_eq!(p2.deck.size(), b.len() - 3);
    }

    #[test]
    fn award_moves_all_spoils(a in deck_values(), b in deck_values()) {
        let mut p1 = player(&a);
        let mut p2 = player(&b);
        let mut turn = Turn::new(&mut p1, &mut p2);

        let outcome = turn.pile_cards();
        let Some(seat) = outcome.winner.player() else {
            return Ok(());
        };
        let before = turn.player(seat).map_or(0, |p| p.deck.size());
        let spoils = turn.spoils_of_war().len();

        prop_assert_eq!(turn.award_spoils(outcome.winner), spoils);
        prop_assert!(turn.spoils_of_war().is_empty());
        prop_assert_eq!(turn.player(seat).map_or(0, |p| p.deck.size()), before + spoils);
    }

    #[test]
    fn short_deck_forfeits_war(
        top in 2u8..=14,
        short in prop::collection::vec(2u8..=14, 0..2),
        long in prop::collection::vec(2u8..=14, 2..8),
    ) {
        let mut short_deck = vec![top];
        short_deck.extend(short);
        let mut long_deck = vec![top];
        long_deck.extend(long);

        let mut p1 = player(&short_deck);
        let mut p2 = player(&long_deck);
        let turn = Turn::new(&mut p1, &mut p2);
        prop_assert_eq!(turn.turn_type(), TurnType::War);
        prop_assert_eq!(turn.winner(), TurnWinner::Winner(PlayerId::SECOND));

        let turn = Turn::new(&mut p2, &mut p1);
        prop_assert_eq!(turn.winner(), TurnWinner::Winner(PlayerId::FIRST));
    }
}
