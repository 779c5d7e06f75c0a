//! Automated players.
//!
//! ## Key Types
//!
//! - `SnapStrategy`: trait deciding an action from a snapshot
//! - `ReactiveStrategy`: snaps on pairs, otherwise plays its turn
//! - `PlayerAgent`: polling loop driving one seat, on its own thread
//! - `AgentHandle`: stop and join a spawned agent
//! - `AgentSummary`: per-agent counters for one game

pub mod player;
pub mod strategy;

pub use player::{AgentHandle, AgentSummary, PlayerAgent};
pub use strategy::{ReactiveStrategy, SnapStrategy};
