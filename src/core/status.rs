//! Table lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle of a table.
///
/// `Uninitialized -> ReadyToStart -> Playing -> Finished`. `AwaitingPlayers`
/// also admits joins; a two-seat table moves straight to `ReadyToStart` on
/// initialization, so it is never entered by this ruleset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Uninitialized,
    AwaitingPlayers,
    ReadyToStart,
    Playing,
    Finished,
}

impl GameStatus {
    /// Joins are accepted in this status.
    #[must_use]
    pub const fn accepts_players(self) -> bool {
        matches!(self, GameStatus::AwaitingPlayers | GameStatus::ReadyToStart)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Uninitialized => "Uninitialized",
            GameStatus::AwaitingPlayers => "AwaitingPlayers",
            GameStatus::ReadyToStart => "ReadyToStart",
            GameStatus::Playing => "Playing",
            GameStatus::Finished => "Finished",
        };
        f.write_str(name)
    }
}
