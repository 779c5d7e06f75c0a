//! Seats, per-seat storage and player identities.
//!
//! ## PlayerId
//!
//! Seat index handed out in join order. Snap is a two-seat game, so the
//! other player is always found by exclusion via [`PlayerId::opponent`].
//!
//! ## PlayerMap
//!
//! Exactly one value per seat, stored inline. There is no way to build a
//! map for any other number of players.
//!
//! ## PlayerProfile
//!
//! The identity a caller joins a table with: a display name and a
//! reaction-speed classification that the agent loop turns into think delay.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::time::Duration;

/// Number of seats at a Snap table.
pub const SEATS: usize = 2;

/// Seat identifier. The first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// # Panics
    ///
    /// Panics for an id outside the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        assert!(self.0 < SEATS as u8, "only seats 0 and 1 have an opponent");
        Self(1 - self.0)
    }

    /// Both seats in join order.
    pub fn seats() -> impl Iterator<Item = PlayerId> {
        (0..SEATS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// One value per seat.
///
/// Indexing with a seat outside the table panics; [`PlayerMap::get`] is
/// the checked form.
///
/// ```
/// use snap_engine::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::splat(0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins.values().copied().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Build each seat's value from its id.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            seats: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Same value in both seats.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.seats.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.seats.get_mut(player.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::seats().zip(self.seats.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    /// Map each seat's value, keeping seat order.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(p, &self.seats[p.index()]))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

/// Reaction-speed classification of a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reactions {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Reactions {
    /// Scale a base think delay by this reaction speed.
    #[must_use]
    pub fn scale(self, base: Duration) -> Duration {
        match self {
            Reactions::Slow => base * 2,
            Reactions::Medium => base,
            Reactions::Fast => base / 2,
        }
    }
}

/// The identity a caller joins a table with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub reactions: Reactions,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reactions: Reactions::default(),
        }
    }

    #[must_use]
    pub fn with_reactions(mut self, reactions: Reactions) -> Self {
        self.reactions = reactions;
        self
    }
}

impl std::fmt::Display for PlayerProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
