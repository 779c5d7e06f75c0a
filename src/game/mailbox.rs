//! Latest-snapshot slot for one seat.

use std::sync::Arc;

use parking_lot::RwLock;

use super::snapshot::Snapshot;

/// Holds the most recent snapshot pushed to a seat.
///
/// The authority writes while holding its own lock; the seat's agent reads
/// without touching the authority.
#[derive(Debug, Default)]
pub struct Mailbox {
    latest: RwLock<Option<Arc<Snapshot>>>,
}

impl Mailbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn deliver(&self, snapshot: Arc<Snapshot>) {
        *self.latest.write() = Some(snapshot);
    }

    #[must_use]
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.latest.read().clone()
    }

    #[must_use]
    pub fn latest_version(&self) -> Option<u64> {
        self.latest.read().as_ref().map(|s| s.version)
    }
}
