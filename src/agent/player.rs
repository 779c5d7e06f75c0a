//! Player agent loop.
//!
//! An agent owns one seat. It polls the seat's mailbox, and each time a new
//! snapshot shows up with something it may do, it waits its think delay,
//! asks its strategy and submits at most one action through the table.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{AgentConfig, PlayerAction, PlayerId, SnapError};
use crate::game::{GameTable, Seat};

use super::strategy::SnapStrategy;

/// What an agent did over one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub player: PlayerId,
    pub actions_submitted: u32,
    /// Submissions that lost the race to another agent's action.
    pub stale_rejections: u32,
    pub snapshots_seen: u32,
}

impl AgentSummary {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            actions_submitted: 0,
            stale_rejections: 0,
            snapshots_seen: 0,
        }
    }
}

pub struct PlayerAgent {
    table: Arc<GameTable>,
    seat: Seat,
    strategy: Box<dyn SnapStrategy>,
    config: AgentConfig,
    stop: Arc<AtomicBool>,
}

impl PlayerAgent {
    pub fn new(
        table: Arc<GameTable>,
        seat: Seat,
        strategy: Box<dyn SnapStrategy>,
        config: AgentConfig,
    ) -> Self {
        Self {
            table,
            seat,
            strategy,
            config,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.seat.id
    }

    /// Think delay after scaling by the seat's reaction speed.
    #[must_use]
    pub fn think_delay(&self) -> Duration {
        self.seat.profile.reactions.scale(self.config.think_delay)
    }

    /// Run on a dedicated thread.
    #[must_use]
    pub fn spawn(self) -> AgentHandle {
        let player = self.seat.id;
        let stop = Arc::clone(&self.stop);
        let thread = thread::spawn(move || self.run());
        AgentHandle {
            player,
            stop,
            thread,
        }
    }

    /// Run on the calling thread until the game finishes, the stop flag is
    /// raised, or a submission fails with anything but a stale snapshot.
    pub fn run(mut self) -> Result<AgentSummary, SnapError> {
        let me = self.seat.id;
        let think = self.think_delay();
        let mut summary = AgentSummary::new(me);
        let mut last_seen = None;

        info!(
            "{} playing {} with {} strategy",
            self.seat.name(),
            me,
            self.strategy.name()
        );

        while !self.stop.load(Ordering::Relaxed) {
            let snapshot = match self.seat.mailbox.latest() {
                Some(s) if last_seen != Some(s.version) => s,
                _ => {
                    thread::sleep(self.config.poll_interval);
                    continue;
                }
            };
            last_seen = Some(snapshot.version);
            summary.snapshots_seen += 1;

            if snapshot.is_finished() {
                break;
            }
            if snapshot.available_for(me).is_empty() {
                continue;
            }

            if !think.is_zero() {
                thread::sleep(think);
            }
            let Some(kind) = self.strategy.decide(&snapshot, me) else {
                continue;
            };

            match self.table.submit(PlayerAction::new(kind, me, snapshot.version)) {
                Ok(()) => {
                    summary.actions_submitted += 1;
                    debug!("{} played {kind} on snapshot {}", self.seat.name(), snapshot.version);
                }
                Err(SnapError::Synchronization { current, .. }) => {
                    summary.stale_rejections += 1;
                    debug!(
                        "{} was beaten to snapshot {}, table is at {current}",
                        self.seat.name(),
                        snapshot.version
                    );
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "{} done: {} actions, {} stale",
            self.seat.name(),
            summary.actions_submitted,
            summary.stale_rejections
        );
        Ok(summary)
    }
}

/// Handle to a running agent thread.
pub struct AgentHandle {
    player: PlayerId,
    stop: Arc<AtomicBool>,
    thread: JoinHandle<Result<AgentSummary, SnapError>>,
}

impl AgentHandle {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Ask the agent to exit at its next wake-up.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the agent to exit.
    pub fn join(self) -> Result<AgentSummary, SnapError> {
        let player = self.player;
        self.thread
            .join()
            .map_err(|_| SnapError::AgentPanicked { player })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ReactiveStrategy;
    use crate::core::{ActionKind, GameStatus, PlayerProfile, Reactions, SnapOptions};
    use crate::game::Snapshot;
    use std::time::Instant;

    struct AlwaysSkip;

    impl SnapStrategy for AlwaysSkip {
        fn name(&self) -> &str {
            "always-skip"
        }

        fn decide(&mut self, _snapshot: &Snapshot, _me: PlayerId) -> Option<ActionKind> {
            Some(ActionKind::SkipGo)
        }
    }

    fn fast() -> AgentConfig {
        AgentConfig::new()
            .with_poll_interval(Duration::from_millis(1))
            .with_think_delay(Duration::ZERO)
    }

    fn table(options: SnapOptions) -> Arc<GameTable> {
        Arc::new(GameTable::with_options(options).unwrap())
    }

    #[test]
    fn test_think_delay_scaled_by_reactions() {
        let table = table(SnapOptions::new().with_auto_start(false));
        let seat = table
            .join(PlayerProfile::new("slow").with_reactions(Reactions::Slow))
            .unwrap();
        let agent = PlayerAgent::new(
            table,
            seat,
            Box::new(ReactiveStrategy::new()),
            AgentConfig::new().with_think_delay(Duration::from_millis(40)),
        );

        assert_eq!(agent.think_delay(), Duration::from_millis(80));
    }

    #[test]
    fn test_stop_before_deal() {
        let table = table(SnapOptions::new().with_auto_start(false));
        let seat = table.join(PlayerProfile::new("alice")).unwrap();
        let handle =
            PlayerAgent::new(table, seat, Box::new(ReactiveStrategy::new()), fast()).spawn();

        handle.stop();
        let summary = handle.join().unwrap();

        assert_eq!(summary.snapshots_seen, 0);
        assert_eq!(summary.actions_submitted, 0);
    }

    #[test]
    fn test_rule_breach_ends_agent() {
        let table = table(SnapOptions::new().with_seed(4));
        let seat = table.join(PlayerProfile::new("alice")).unwrap();
        table.join(PlayerProfile::new("bob")).unwrap();

        let err = PlayerAgent::new(Arc::clone(&table), seat, Box::new(AlwaysSkip), fast())
            .run()
            .unwrap_err();

        assert!(matches!(err, SnapError::RuleViolation { .. }));
        assert_eq!(table.current_version(), Some(0));
    }

    #[test]
    fn test_two_agents_share_a_table() {
        let table = table(SnapOptions::new().with_ranks_in_use(1).with_auto_start(false));
        let seats = [
            table.join(PlayerProfile::new("alice")).unwrap(),
            table.join(PlayerProfile::new("bob")).unwrap(),
        ];
        let handles: Vec<_> = seats
            .into_iter()
            .map(|seat| {
                PlayerAgent::new(Arc::clone(&table), seat, Box::new(ReactiveStrategy::new()), fast())
                    .spawn()
            })
            .collect();
        table.start();

        // Racing agents need not finish; stop them after a short while either way.
        let deadline = Instant::now() + Duration::from_millis(300);
        while table.status() != GameStatus::Finished && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        for handle in &handles {
            handle.stop();
        }
        let summaries: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let applied: u32 = summaries.iter().map(|s| s.actions_submitted).sum();
        assert!(applied > 0);
        // Every applied action publishes at least one snapshot after the deal.
        assert!(applied as usize <= table.history().len() - 1);
        let deck_size = table.deck_size().unwrap();
        assert!(table.history().iter().all(|s| s.total_cards() == deck_size));
        assert_eq!(table.close().is_ok(), table.status() == GameStatus::Finished);
    }
}
