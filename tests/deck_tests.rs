//! Deck and pile property tests.

use std::collections::HashSet;

use proptest::prelude::*;

use snap_engine::core::{Card, Deck, GameRng, Rank, Suit};
use snap_engine::zones::{Pile, PileVisibility};

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| (c.suit, c.rank));
    cards
}

proptest! {
    /// Deck size is four cards per rank, all distinct, and shuffling keeps
    /// the same cards.
    #[test]
    fn prop_deck_is_permuted_not_changed(ranks in 1usize..=13, seed in any::<u64>()) {
        let deck = Deck::new(ranks);
        prop_assert_eq!(deck.len(), ranks * 4);

        let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(distinct.len(), deck.len());
        prop_assert!(distinct.iter().all(|c| Rank::ALL[..ranks].contains(&c.rank)));

        let shuffled = deck.shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(sorted(shuffled), sorted(deck.cards().to_vec()));
    }

    /// Moving cards between piles never creates or loses one and keeps the
    /// moved cards in order.
    #[test]
    fn prop_pile_moves_conserve(
        moves in prop::collection::vec(0u8..4, 0..60),
        seed in any::<u64>(),
    ) {
        let cards = Deck::new(3).shuffled(&mut GameRng::new(seed));
        let mut a = Pile::new("a", PileVisibility::PlayerPrivate);
        let mut b = Pile::new("b", PileVisibility::PublicShared);
        for &card in &cards {
            a.push(card);
        }

        for step in moves {
            match step {
                0 => { let _ = a.move_first_to(&mut b); }
                1 => { let _ = b.move_first_to(&mut a); }
                2 => {
                    let expected: Vec<Card> = a.iter().chain(b.iter()).copied().collect();
                    b.move_all_to(&mut a);
                    prop_assert!(b.is_empty());
                    prop_assert_eq!(a.iter().copied().collect::<Vec<_>>(), expected);
                }
                _ => { a.move_all_to(&mut b); }
            }
            prop_assert_eq!(a.len() + b.len(), cards.len());
        }

        let all: Vec<Card> = a.iter().chain(b.iter()).copied().collect();
        prop_assert_eq!(sorted(all), sorted(cards));
    }
}

/// Test that an empty pile refuses to give up a card and stays empty.
#[test]
fn test_empty_move_first() {
    let mut empty = Pile::new("empty", PileVisibility::PlayerPrivate);
    let mut target = Pile::new("target", PileVisibility::PublicShared);
    target.push(Card::new(Rank::King, Suit::Spade));

    assert!(empty.move_first_to(&mut target).is_err());
    assert!(empty.is_empty());
    assert_eq!(target.len(), 1);
}
