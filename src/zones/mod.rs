//! Card piles.
//!
//! Each player owns one private pile and the table has one shared pile.
//! Cards only ever move between piles (remove then add), so a card is in
//! exactly one pile at a time.
//!
//! ## Key Types
//!
//! - `Pile`: ordered card sequence with a visibility tag
//! - `PileVisibility`: private to a player or shared face up
//! - `PileError`: failed moves

pub mod pile;

pub use pile::{Pile, PileError, PileVisibility};
