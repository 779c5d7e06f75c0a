//! Versioned, immutable views of a table.
//!
//! The authority publishes a new `Snapshot` after every state change and
//! never touches it again. Agents hold them as `Arc<Snapshot>` and read
//! without taking the authority lock.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionKind, ActionSet, Card, GameStatus, LastAction, PlayerId, PlayerMap};
use crate::zones::Pile;

/// Actor name used for the opening deal.
pub const DEALER: &str = "Dealer";

/// A published view of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Position in the snapshot log; the staleness token actions must echo.
    pub version: u64,

    pub status: GameStatus,

    /// What produced this snapshot.
    pub last_action: LastAction,

    /// Player name, or [`DEALER`] for the opening deal.
    pub last_action_by: String,

    pub player_names: PlayerMap<String>,

    /// Cards in each player's private pile.
    pub hand_counts: PlayerMap<usize>,

    /// Rounds each player has won.
    pub win_counts: PlayerMap<u32>,

    /// Shared pile, front to back. The last card is the most recently laid.
    pub shared_pile: Vec<Card>,

    /// `None` once the game is over.
    pub turn_holder: Option<PlayerId>,

    pub available_actions: PlayerMap<ActionSet>,
}

impl Snapshot {
    /// Action kinds `player` may submit against this snapshot.
    #[must_use]
    pub fn available_for(&self, player: PlayerId) -> &[ActionKind] {
        self.available_actions
            .get(player)
            .map_or(&[], |set| set.as_slice())
    }

    #[must_use]
    pub fn can(&self, player: PlayerId, kind: ActionKind) -> bool {
        self.available_for(player).contains(&kind)
    }

    /// The two most recently laid shared cards, older first.
    #[must_use]
    pub fn top_two(&self) -> Option<(Card, Card)> {
        match self.shared_pile.as_slice() {
            [.., older, newer] => Some((*older, *newer)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    #[must_use]
    pub fn is_turn_of(&self, player: PlayerId) -> bool {
        self.turn_holder == Some(player)
    }

    /// Cards accounted for by this snapshot: every hand plus the shared pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand_counts.values().sum::<usize>() + self.shared_pile.len()
    }

    /// Shared pile rendered as card labels (`♣Q`, `♦10`, ...).
    #[must_use]
    pub fn shared_pile_labels(&self) -> Vec<String> {
        self.shared_pile.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Snapshot {}: {} by {}", self.version, self.last_action, self.last_action_by)?;
        match self.turn_holder {
            Some(player) => writeln!(f, "  Turn: {}", self.player_names[player])?,
            None => writeln!(f, "  Turn: none ({})", self.status)?,
        }
        for (player, name) in self.player_names.iter() {
            writeln!(
                f,
                "  {name}: {} cards, {} rounds won",
                self.hand_counts[player], self.win_counts[player]
            )?;
        }
        write!(f, "  Shared: {}", self.shared_pile_labels().join(", "))
    }
}

/// Per-player action availability for a table in `status`.
///
/// Everyone may call snap once two cards are showing; the turn holder may
/// also lay a card, or skip when their pile is empty.
pub(crate) fn available_actions(
    status: GameStatus,
    hands: &PlayerMap<Pile>,
    shared_len: usize,
    turn_holder: Option<PlayerId>,
) -> PlayerMap<ActionSet> {
    hands.map(|player, hand| {
        let mut set: ActionSet = SmallVec::new();
        if status != GameStatus::Playing {
            return set;
        }
        if shared_len >= 2 {
            set.push(ActionKind::CallSnap);
        }
        if turn_holder == Some(player) {
            if hand.is_empty() {
                set.push(ActionKind::SkipGo);
            } else {
                set.push(ActionKind::LayCard);
            }
        }
        set
    })
}
