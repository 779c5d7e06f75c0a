//! Error taxonomy for table operations.
//!
//! Structured failures (wrong status, stale snapshot, out of turn, rule
//! breaches) leave the table untouched and can be reported back to the
//! caller. Fatal errors mean the caller and the authority disagree about
//! the protocol; see [`SnapError::is_fatal`].

use thiserror::Error;

use super::player::PlayerId;
use super::status::GameStatus;
use crate::zones::PileError;

/// Taxonomy class of a [`SnapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PreconditionViolation,
    Synchronization,
    TurnViolation,
    RuleViolation,
    UnsupportedAction,
    EmptySource,
    Protocol,
}

/// Errors returned by the authority, the table and the agents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapError {
    /// Operation invoked in the wrong lifecycle state or with bad options.
    #[error("Precondition violated: {reason}")]
    PreconditionViolation { reason: String },

    /// Operation not allowed in the current status.
    #[error("Cannot {operation} while game status is {status}")]
    InvalidStatus {
        operation: &'static str,
        status: GameStatus,
    },

    /// Both seats are taken.
    #[error("Game already has the maximum number of players ({max})")]
    TableFull { max: usize },

    /// No player sits in this seat.
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Action built against an older snapshot.
    #[error("{player} acted on snapshot {seen} but the latest is {current}")]
    Synchronization {
        player: PlayerId,
        seen: u64,
        current: u64,
    },

    /// Turn-only action from a player who does not hold the turn.
    #[error("{player} acted out of turn (turn holder: {turn_holder:?})")]
    TurnViolation {
        player: PlayerId,
        turn_holder: Option<PlayerId>,
    },

    /// Action that the rules forbid in the current state.
    #[error("Rule violated: {reason}")]
    RuleViolation { reason: String },

    /// CallSnap with fewer than two shared cards; never advertised as available.
    #[error("CallSnap needs two shared cards, found {found}")]
    NothingToSnap { found: usize },

    /// Action kind code this authority does not understand.
    #[error("Unsupported action kind {code}")]
    UnsupportedAction { code: u8 },

    /// Card moved out of an empty pile.
    #[error(transparent)]
    EmptySource(#[from] PileError),

    /// Message could not be encoded or decoded.
    #[error("Wire error: {0}")]
    Wire(String),

    /// An agent thread panicked.
    #[error("Agent for {player} panicked")]
    AgentPanicked { player: PlayerId },
}

impl SnapError {
    /// Taxonomy class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SnapError::PreconditionViolation { .. }
            | SnapError::InvalidStatus { .. }
            | SnapError::TableFull { .. }
            | SnapError::UnknownPlayer(_) => ErrorKind::PreconditionViolation,
            SnapError::Synchronization { .. } => ErrorKind::Synchronization,
            SnapError::TurnViolation { .. } => ErrorKind::TurnViolation,
            SnapError::RuleViolation { .. } => ErrorKind::RuleViolation,
            SnapError::UnsupportedAction { .. } => ErrorKind::UnsupportedAction,
            SnapError::EmptySource(_) => ErrorKind::EmptySource,
            SnapError::NothingToSnap { .. }
            | SnapError::Wire(_)
            | SnapError::AgentPanicked { .. } => ErrorKind::Protocol,
        }
    }

    /// True if this error signals a protocol desynchronization rather than
    /// a mistake the caller can recover from.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnsupportedAction | ErrorKind::EmptySource | ErrorKind::Protocol
        )
    }
}

impl From<bincode::Error> for SnapError {
    fn from(err: bincode::Error) -> Self {
        SnapError::Wire(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronization_message() {
        let err = SnapError::Synchronization {
            player: PlayerId::new(1),
            seen: 3,
            current: 5,
        };
        let msg = err.to_string();

        assert!(msg.contains("seat 1"), "should name the player: {msg}");
        assert!(msg.contains('3') && msg.contains('5'), "should carry versions: {msg}");
        assert_eq!(err.kind(), ErrorKind::Synchronization);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_structured_errors_are_recoverable() {
        let errors = [
            SnapError::TableFull { max: 2 },
            SnapError::InvalidStatus {
                operation: "join",
                status: GameStatus::Playing,
            },
            SnapError::TurnViolation {
                player: PlayerId::new(0),
                turn_holder: Some(PlayerId::new(1)),
            },
            SnapError::RuleViolation {
                reason: "skip with cards".to_string(),
            },
        ];

        for err in errors {
            assert!(!err.is_fatal(), "{err} should not be fatal");
        }
    }

    #[test]
    fn test_fatal_errors() {
        assert!(SnapError::UnsupportedAction { code: 9 }.is_fatal());
        assert!(SnapError::NothingToSnap { found: 1 }.is_fatal());
        assert!(SnapError::from(PileError::EmptySource {
            pile: "hand".to_string()
        })
        .is_fatal());
    }

    #[test]
    fn test_invalid_status_message() {
        let err = SnapError::InvalidStatus {
            operation: "join",
            status: GameStatus::Finished,
        };

        assert_eq!(err.to_string(), "Cannot join while game status is Finished");
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    }
}
