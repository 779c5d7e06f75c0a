//! Result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One winner, one loser. Every round moves cards, so a two-player game
/// that finishes never ends in a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub winner_name: String,
    pub loser_name: String,
    /// Snapshots published over the whole game.
    pub snapshots_published: usize,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}
