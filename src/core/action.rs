//! Player actions and the tags snapshots carry for them.
//!
//! Every action carries the submitting seat and the snapshot version the
//! submitter last observed. The version is the staleness token: the
//! authority rejects any action built against an older snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// The kinds of action a player may submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Move the first card of your pile onto the shared pile.
    LayCard,
    /// Pass your turn because your pile is empty.
    SkipGo,
    /// Claim the top two shared cards share a rank. Allowed out of turn.
    CallSnap,
}

impl ActionKind {
    /// Stable numeric code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            ActionKind::LayCard => 0,
            ActionKind::SkipGo => 1,
            ActionKind::CallSnap => 2,
        }
    }

    /// Inverse of [`ActionKind::code`]. `None` for codes this build does not know.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ActionKind::LayCard),
            1 => Some(ActionKind::SkipGo),
            2 => Some(ActionKind::CallSnap),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::LayCard => "LayCard",
            ActionKind::SkipGo => "SkipGo",
            ActionKind::CallSnap => "CallSnap",
        };
        f.write_str(name)
    }
}

/// Action kinds a player may currently submit. Never more than two.
pub type ActionSet = SmallVec<[ActionKind; 2]>;

/// A submitted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAction {
    pub kind: ActionKind,
    pub player: PlayerId,
    /// Version of the latest snapshot the submitter had seen.
    pub last_seen_version: u64,
}

impl PlayerAction {
    #[must_use]
    pub fn new(kind: ActionKind, player: PlayerId, last_seen_version: u64) -> Self {
        Self {
            kind,
            player,
            last_seen_version,
        }
    }

    #[must_use]
    pub fn lay_card(player: PlayerId, last_seen_version: u64) -> Self {
        Self::new(ActionKind::LayCard, player, last_seen_version)
    }

    #[must_use]
    pub fn skip_go(player: PlayerId, last_seen_version: u64) -> Self {
        Self::new(ActionKind::SkipGo, player, last_seen_version)
    }

    #[must_use]
    pub fn call_snap(player: PlayerId, last_seen_version: u64) -> Self {
        Self::new(ActionKind::CallSnap, player, last_seen_version)
    }
}

/// What produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LastAction {
    CardLaid,
    SnapSuccess,
    SnapFail,
    SkippedGo,
}

impl std::fmt::Display for LastAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LastAction::CardLaid => "CardLaid",
            LastAction::SnapSuccess => "SnapSuccess",
            LastAction::SnapFail => "SnapFail",
            LastAction::SkippedGo => "SkippedGo",
        };
        f.write_str(name)
    }
}
