//! Binary encoding for table messages.
//!
//! The table and its agents run in one process, but everything that crosses
//! between them has a message shape here, encoded with `bincode`. A remote
//! transport only has to move the bytes.
//!
//! ## Key Types
//!
//! - `ActionMessage`: submitted action with a raw kind code
//! - `ActionResponse`, `JoinResponse`, `CloseResponse`: replies
//! - `SnapshotMessage`: pushed view with cards as labels
//!
//! ## Example
//!
//! ```
//! use snap_engine::core::{PlayerAction, PlayerId};
//! use snap_engine::wire;
//!
//! let action = PlayerAction::lay_card(PlayerId::new(0), 4);
//! let bytes = wire::encode_action(action).unwrap();
//! assert_eq!(wire::decode_action(&bytes).unwrap(), action);
//! ```

pub mod messages;

pub use messages::{ActionMessage, ActionResponse, CloseResponse, JoinResponse, SnapshotMessage};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{PlayerAction, SnapError};
use crate::game::Snapshot;

pub fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>, SnapError> {
    Ok(bincode::serialize(message)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapError> {
    Ok(bincode::deserialize(bytes)?)
}

pub fn encode_action(action: PlayerAction) -> Result<Vec<u8>, SnapError> {
    encode(&ActionMessage::from(action))
}

/// Decode an action. Garbage is `Wire`, an unknown kind code is
/// `UnsupportedAction`; both are fatal.
pub fn decode_action(bytes: &[u8]) -> Result<PlayerAction, SnapError> {
    decode::<ActionMessage>(bytes)?.into_action()
}

pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, SnapError> {
    encode(&SnapshotMessage::from(snapshot))
}

pub fn decode_snapshot_message(bytes: &[u8]) -> Result<SnapshotMessage, SnapError> {
    decode(bytes)
}
