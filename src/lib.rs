//! # snap-engine
//!
//! An authoritative engine for two-player Snap, driven by automated player
//! agents running on their own threads.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: Only the `GameAuthority` mutates piles, turns and
//!    counters. Everyone else sees published snapshots.
//!
//! 2. **Versioned Snapshots**: Every state change publishes an immutable,
//!    numbered `Snapshot`. An action must echo the version it was decided
//!    against, so decisions made on stale state are rejected instead of
//!    applied.
//!
//! 3. **Validate Then Mutate**: A rejected action leaves the table exactly
//!    as it was.
//!
//! ## Architecture
//!
//! - `GameTable` puts the authority behind a `parking_lot` mutex. One action
//!   is checked, applied and published inside one critical section.
//!
//! - Snapshots are pushed into per-seat `Mailbox`es. Agents poll their own
//!   mailbox and never hold the table lock while deciding.
//!
//! - **Persistent Data Structures**: the snapshot log is an `im::Vector`, so
//!   handing out the whole history is an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, players, actions, RNG, configuration, errors
//! - `zones`: Card piles
//! - `game`: Authority, snapshots, mailboxes and the shared table
//! - `agent`: Strategies and the threaded agent loop
//! - `wire`: bincode message shapes for the table boundary
//! - `tournament`: Repeated games between two contenders

pub mod core;
pub mod zones;
pub mod game;
pub mod agent;
pub mod wire;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Suit, Deck,
    PlayerId, PlayerMap, PlayerProfile, Reactions,
    GameRng,
    SnapOptions, AgentConfig,
    ActionKind, ActionSet, LastAction, PlayerAction,
    GameStatus,
    ErrorKind, SnapError,
};

pub use crate::zones::{Pile, PileError, PileVisibility};

pub use crate::game::{GameAuthority, GameOutcome, GameTable, Mailbox, Seat, Snapshot};

pub use crate::agent::{AgentHandle, AgentSummary, PlayerAgent, ReactiveStrategy, SnapStrategy};

pub use crate::tournament::{run_tournament, GameRecord, Standing, TournamentConfig, TournamentReport};
