//! Core types: cards, deck, players, actions, RNG, configuration, errors.
//!
//! These are the plain data building blocks. State lives in
//! [`game::GameAuthority`](crate::game::GameAuthority); nothing here mutates
//! a table.

pub mod card;
pub mod deck;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod status;
pub mod error;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use player::{PlayerId, PlayerMap, PlayerProfile, Reactions, SEATS};
pub use rng::GameRng;
pub use config::{AgentConfig, SnapOptions};
pub use action::{ActionKind, ActionSet, LastAction, PlayerAction};
pub use status::GameStatus;
pub use error::{ErrorKind, SnapError};
