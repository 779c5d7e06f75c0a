//! Ordered card piles and the two composite moves the authority relies on.
//!
//! A pile is front-to-back: cards are added at the back, `move_first_to`
//! takes from the front. Piles do no locking of their own; the authority
//! owns every pile and serializes access to them.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Card;

/// Who may see the cards in a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileVisibility {
    /// A player's own face-down stack.
    PlayerPrivate,
    /// The face-up pile in the middle of the table.
    PublicShared,
}

/// Errors from pile moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PileError {
    #[error("Cannot move a card out of empty pile '{pile}'")]
    EmptySource { pile: String },
}

/// A named, ordered sequence of cards.
///
/// ## Usage
///
/// ```
/// use snap_engine::core::{Card, Rank, Suit};
/// use snap_engine::zones::{Pile, PileVisibility};
///
/// let mut hand = Pile::new("hand", PileVisibility::PlayerPrivate);
/// let mut table = Pile::new("table", PileVisibility::PublicShared);
/// hand.push(Card::new(Rank::Ace, Suit::Club));
///
/// hand.move_first_to(&mut table).unwrap();
/// assert_eq!(table.len(), 1);
/// assert!(hand.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    name: String,
    visibility: PileVisibility,
    cards: VecDeque<Card>,
}

impl Pile {
    pub fn new(name: impl Into<String>, visibility: PileVisibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            cards: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn visibility(&self) -> PileVisibility {
        self.visibility
    }

    /// Append a card at the back.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Move the front card to the back of `target`.
    pub fn move_first_to(&mut self, target: &mut Pile) -> Result<Card, PileError> {
        let card = self.cards.pop_front().ok_or_else(|| PileError::EmptySource {
            pile: self.name.clone(),
        })?;
        target.cards.push_back(card);
        Ok(card)
    }

    /// Move every card to the back of `target`, keeping their order.
    ///
    /// Returns how many cards moved. An empty source moves nothing.
    pub fn move_all_to(&mut self, target: &mut Pile) -> usize {
        let moved = self.cards.len();
        target.cards.append(&mut self.cards);
        moved
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Front-to-back view.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The two most recently added cards, older first.
    #[must_use]
    pub fn last_two(&self) -> Option<(Card, Card)> {
        let n = self.cards.len();
        if n < 2 {
            return None;
        }
        Some((self.cards[n - 2], self.cards[n - 1]))
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}):", self.name, self.cards.len())?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
