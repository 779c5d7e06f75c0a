//! The table: authority, snapshots and the concurrency boundary.
//!
//! ## Key Types
//!
//! - `GameAuthority`: owns every pile and counter, validates and applies actions
//! - `GameTable`: the authority behind a lock, shared between agents
//! - `Snapshot`: immutable versioned view the authority publishes
//! - `Mailbox`: per-seat slot holding the latest snapshot
//! - `Seat`: a joined player and its mailbox
//! - `GameOutcome`: winner and loser of a finished game
//!
//! ## Example
//!
//! ```
//! use snap_engine::core::{GameStatus, PlayerAction, PlayerProfile, SnapOptions};
//! use snap_engine::game::GameTable;
//!
//! let table = GameTable::with_options(SnapOptions::new().with_seed(7)).unwrap();
//! let alice = table.join(PlayerProfile::new("alice")).unwrap();
//! table.join(PlayerProfile::new("bob")).unwrap();
//! assert_eq!(table.status(), GameStatus::Playing);
//!
//! let seen = alice.mailbox.latest_version().unwrap();
//! table.submit(PlayerAction::lay_card(alice.id, seen)).unwrap();
//! assert_eq!(table.current_version(), Some(seen + 1));
//! ```

pub mod authority;
pub mod mailbox;
pub mod outcome;
pub mod snapshot;
pub mod table;

pub use authority::{GameAuthority, Seat};
pub use mailbox::Mailbox;
pub use outcome::GameOutcome;
pub use snapshot::{Snapshot, DEALER};
pub use table::GameTable;
