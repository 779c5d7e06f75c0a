//! Request and response shapes exchanged across the table boundary.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, ActionSet, LastAction, PlayerAction, PlayerId, PlayerMap, SnapError};
use crate::game::{GameOutcome, Seat, Snapshot};

/// An action as it travels: the kind is a raw code so foreign values survive
/// decoding and can be rejected explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMessage {
    pub kind: u8,
    pub player: u8,
    pub last_seen_version: u64,
}

impl ActionMessage {
    /// Resolve the kind code. Unknown codes are `UnsupportedAction`.
    pub fn into_action(self) -> Result<PlayerAction, SnapError> {
        let kind = ActionKind::from_code(self.kind)
            .ok_or(SnapError::UnsupportedAction { code: self.kind })?;
        Ok(PlayerAction::new(
            kind,
            PlayerId::new(self.player),
            self.last_seen_version,
        ))
    }
}

impl From<PlayerAction> for ActionMessage {
    fn from(action: PlayerAction) -> Self {
        Self {
            kind: action.kind.code(),
            player: action.player.0,
            last_seen_version: action.last_seen_version,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResponse {
    pub success: bool,
    pub failure_reason: Option<String>,
    pub player: Option<PlayerId>,
}

impl From<&Result<Seat, SnapError>> for JoinResponse {
    fn from(result: &Result<Seat, SnapError>) -> Self {
        match result {
            Ok(seat) => Self {
                success: true,
                failure_reason: None,
                player: Some(seat.id),
            },
            Err(err) => Self {
                success: false,
                failure_reason: Some(err.to_string()),
                player: None,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub failure_reason: Option<String>,
}

impl ActionResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            success: true,
            failure_reason: None,
        }
    }

    #[must_use]
    pub fn rejected(err: &SnapError) -> Self {
        Self {
            success: false,
            failure_reason: Some(err.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseResponse {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl From<&GameOutcome> for CloseResponse {
    fn from(outcome: &GameOutcome) -> Self {
        Self {
            winner: outcome.winner,
            loser: outcome.loser,
        }
    }
}

/// Snapshot push as seen by a remote seat. Cards travel as labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMessage {
    pub version: u64,
    pub last_action: LastAction,
    pub last_action_by: String,
    pub hand_counts: PlayerMap<usize>,
    pub win_counts: PlayerMap<u32>,
    pub shared_pile_cards: Vec<String>,
    pub turn_holder: Option<PlayerId>,
    pub available_actions: PlayerMap<ActionSet>,
}

impl From<&Snapshot> for SnapshotMessage {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            version: snapshot.version,
            last_action: snapshot.last_action,
            last_action_by: snapshot.last_action_by.clone(),
            hand_counts: snapshot.hand_counts.clone(),
            win_counts: snapshot.win_counts.clone(),
            shared_pile_cards: snapshot.shared_pile_labels(),
            turn_holder: snapshot.turn_holder,
            available_actions: snapshot.available_actions.clone(),
        }
    }
}
