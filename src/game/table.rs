//! Thread-safe table handle.
//!
//! `GameTable` is what agents share: an [`GameAuthority`] behind a mutex.
//! Each call holds the lock for its whole duration, so the staleness check,
//! validation, mutation and publication of one action cannot interleave
//! with another agent's.

use std::sync::Arc;

use im::Vector;
use parking_lot::Mutex;

use crate::core::{GameStatus, PlayerAction, PlayerId, PlayerProfile, SnapError, SnapOptions};
use crate::wire::{self, ActionResponse};

use super::authority::{GameAuthority, Seat};
use super::outcome::GameOutcome;
use super::snapshot::Snapshot;

#[derive(Debug, Default)]
pub struct GameTable {
    authority: Mutex<GameAuthority>,
}

impl GameTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and initialize a table in one step.
    pub fn with_options(options: SnapOptions) -> Result<Self, SnapError> {
        let table = Self::new();
        table.initialize(options)?;
        Ok(table)
    }

    pub fn initialize(&self, options: SnapOptions) -> Result<(), SnapError> {
        self.authority.lock().initialize(options)
    }

    pub fn join(&self, profile: PlayerProfile) -> Result<Seat, SnapError> {
        self.authority.lock().join(profile)
    }

    /// See [`GameAuthority::start`]; panics under the same conditions.
    pub fn start(&self) {
        self.authority.lock().start();
    }

    pub fn submit(&self, action: PlayerAction) -> Result<(), SnapError> {
        self.authority.lock().apply(action)
    }

    /// Decode and apply a wire action.
    ///
    /// Structured rejections come back as an unsuccessful response. Fatal
    /// errors (undecodable bytes, unknown kinds, contract breaches) are `Err`.
    pub fn submit_encoded(&self, bytes: &[u8]) -> Result<ActionResponse, SnapError> {
        let action = wire::decode_action(bytes)?;
        match self.submit(action) {
            Ok(()) => Ok(ActionResponse::accepted()),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => Ok(ActionResponse::rejected(&err)),
        }
    }

    pub fn close(&self) -> Result<GameOutcome, SnapError> {
        self.authority.lock().close()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.authority.lock().status()
    }

    #[must_use]
    pub fn latest_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.authority.lock().latest_snapshot()
    }

    #[must_use]
    pub fn current_version(&self) -> Option<u64> {
        self.authority.lock().current_version()
    }

    #[must_use]
    pub fn history(&self) -> Vector<Arc<Snapshot>> {
        self.authority.lock().history()
    }

    #[must_use]
    pub fn deck_size(&self) -> Option<usize> {
        self.authority.lock().deck_size()
    }

    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> Option<usize> {
        self.authority.lock().hand_size(player)
    }
}
