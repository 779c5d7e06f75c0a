//! Playing cards: rank, suit and the card pair itself.
//!
//! Cards are plain `Copy` values. Equality is by `(rank, suit)`, so a deck
//! built by [`Deck::new`](super::Deck::new) never holds duplicates.

use serde::{Deserialize, Serialize};

/// Card rank.
///
/// Declaration order is the order ranks are taken in when a game uses fewer
/// than the full thirteen (Ace first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in declaration order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Short display name: pip value for Two..Ten, initial letter otherwise.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Spade,
    Heart,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Spade, Suit::Heart];

    /// Unicode suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Club => '\u{2663}',
            Suit::Diamond => '\u{2666}',
            Suit::Spade => '\u{2660}',
            Suit::Heart => '\u{2665}',
        }
    }
}

/// An immutable (rank, suit) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// True if both cards share a rank (a snap).
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.glyph(), self.rank.short_name())
    }
}
