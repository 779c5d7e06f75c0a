//! Game and agent configuration.
//!
//! - `SnapOptions`: how a table deals and whether it starts itself
//! - `AgentConfig`: how often an agent polls and how long it "thinks"

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::card::Rank;
use super::error::SnapError;

/// Options passed to `initialize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapOptions {
    /// Number of ranks dealt (13 = full deck). Fewer ranks make snaps likelier.
    pub ranks_in_use: usize,

    /// Start dealing as soon as the second player joins.
    pub auto_start_when_ready: bool,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            ranks_in_use: Rank::ALL.len(),
            auto_start_when_ready: true,
            seed: None,
        }
    }
}

impl SnapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ranks_in_use(mut self, ranks: usize) -> Self {
        self.ranks_in_use = ranks;
        self
    }

    #[must_use]
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start_when_ready = auto_start;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deck size these options produce.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks_in_use * 4
    }

    pub fn validate(&self) -> Result<(), SnapError> {
        if !(1..=Rank::ALL.len()).contains(&self.ranks_in_use) {
            return Err(SnapError::PreconditionViolation {
                reason: format!(
                    "ranks_in_use must be between 1 and {}, got {}",
                    Rank::ALL.len(),
                    self.ranks_in_use
                ),
            });
        }
        Ok(())
    }
}

/// Timing of a player agent loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Sleep between wakes when no new snapshot has arrived.
    pub poll_interval: Duration,

    /// Delay between seeing a snapshot and acting on it, before the
    /// player's reaction speed is applied.
    pub think_delay: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(200),
            think_delay: Duration::from_millis(100),
        }
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SnapOptions::default();

        assert_eq!(options.ranks_in_use, 13);
        assert!(options.auto_start_when_ready);
        assert_eq!(options.seed, None);
        assert_eq!(options.deck_size(), 52);
    }

    #[test]
    fn test_builder() {
        let options = SnapOptions::new()
            .with_ranks_in_use(3)
            .with_auto_start(false)
            .with_seed(7);

        assert_eq!(options.ranks_in_use, 3);
        assert!(!options.auto_start_when_ready);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.deck_size(), 12);
    }

    #[test]
    fn test_validate() {
        assert!(SnapOptions::new().validate().is_ok());
        assert!(SnapOptions::new().with_ranks_in_use(1).validate().is_ok());

        let err = SnapOptions::new().with_ranks_in_use(0).validate().unwrap_err();
        assert!(err.to_string().contains("ranks_in_use"));
        assert!(SnapOptions::new().with_ranks_in_use(14).validate().is_err());
    }

    #[test]
    fn test_options_partial_json() {
        let options: SnapOptions = serde_json::from_str(r#"{"ranks_in_use": 4}"#).unwrap();

        assert_eq!(options.ranks_in_use, 4);
        assert!(options.auto_start_when_ready);
    }

    #[test]
    fn test_agent_config_builder() {
        let config = AgentConfig::new()
            .with_poll_interval(Duration::from_millis(5))
            .with_think_delay(Duration::ZERO);

        assert_eq!(config.poll_interval, Duration::from_millis(5));
        assert_eq!(config.think_delay, Duration::ZERO);
    }
}
