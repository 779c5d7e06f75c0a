//! Deck construction and shuffling.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// A fully enumerated deck: every suit crossed with the ranks in use.
///
/// The deck is immutable after construction. [`Deck::shuffled`] returns a
/// fresh permutation rather than reordering the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from the first `ranks_in_use` ranks across all four suits.
    ///
    /// ```
    /// use snap_engine::core::Deck;
    ///
    /// let deck = Deck::new(13);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(ranks_in_use: usize) -> Self {
        assert!(
            (1..=Rank::ALL.len()).contains(&ranks_in_use),
            "ranks_in_use must be between 1 and 13"
        );

        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| {
                Rank::ALL[..ranks_in_use]
                    .iter()
                    .map(move |&rank| Card::new(rank, suit))
            })
            .collect();

        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Return a uniformly random permutation of the deck.
    #[must_use]
    pub fn shuffled(&self, rng: &mut GameRng) -> Vec<Card> {
        let mut cards = self.cards.clone();
        rng.shuffle(&mut cards);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_deck() {
        let deck = Deck::new(13);
        let unique: HashSet<_> = deck.cards().iter().collect();

        assert_eq!(deck.len(), 52);
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_reduced_deck_uses_leading_ranks() {
        let deck = Deck::new(2);

        assert_eq!(deck.len(), 8);
        assert!(deck
            .cards()
            .iter()
            .all(|c| c.rank == Rank::Ace || c.rank == Rank::Two));
    }

    #[test]
    fn test_shuffled_leaves_deck_untouched() {
        let deck = Deck::new(13);
        let before = deck.clone();
        let mut rng = GameRng::new(42);

        let shuffled = deck.shuffled(&mut rng);

        assert_eq!(deck, before);
        assert_ne!(shuffled, deck.cards());
    }

    #[test]
    #[should_panic(expected = "ranks_in_use must be between 1 and 13")]
    fn test_zero_ranks() {
        let _ = Deck::new(0);
    }
}
