//! Repeated games between two automated contenders.
//!
//! Each game gets a fresh table. Both contenders join, their agents are
//! spawned, the deal happens, and the harness watches the table until it
//! finishes or runs out of time. A game that runs out of time is stopped and
//! counted as a draw for both contenders.
//!
//! Seats alternate between games so neither contender always lays first.

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::agent::{AgentHandle, AgentSummary, PlayerAgent, ReactiveStrategy};
use crate::core::{AgentConfig, GameRng, GameStatus, PlayerProfile, Reactions, SnapError, SnapOptions};
use crate::game::{GameOutcome, GameTable};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games: usize,
    /// Table options for every game. A seed here seeds the whole tournament;
    /// each game's deal seed is drawn from it.
    pub options: SnapOptions,
    pub agent: AgentConfig,
    pub contenders: [PlayerProfile; 2],
    pub max_game_time: Duration,
    pub monitor_interval: Duration,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 10,
            options: SnapOptions::default(),
            agent: AgentConfig::default(),
            contenders: [
                PlayerProfile::new("Medium reactions").with_reactions(Reactions::Medium),
                PlayerProfile::new("Fast reactions").with_reactions(Reactions::Fast),
            ],
            max_game_time: Duration::from_secs(120),
            monitor_interval: Duration::from_millis(100),
        }
    }
}

impl TournamentConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: SnapOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_agent(mut self, agent: AgentConfig) -> Self {
        self.agent = agent;
        self
    }

    #[must_use]
    pub fn with_contenders(mut self, first: PlayerProfile, second: PlayerProfile) -> Self {
        self.contenders = [first, second];
        self
    }

    #[must_use]
    pub fn with_max_game_time(mut self, limit: Duration) -> Self {
        self.max_game_time = limit;
        self
    }

    #[must_use]
    pub fn with_monitor_interval(mut self, interval: Duration) -> Self {
        self.monitor_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), SnapError> {
        self.options.validate()?;
        if self.contenders[0].name == self.contenders[1].name {
            return Err(SnapError::PreconditionViolation {
                reason: format!("contenders share the name {:?}", self.contenders[0].name),
            });
        }
        Ok(())
    }
}

/// One played game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: usize,
    /// `None` if the game ran out of time.
    pub outcome: Option<GameOutcome>,
    pub agents: Vec<AgentSummary>,
}

impl GameRecord {
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.outcome.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Standing {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    /// In contender order.
    pub standings: Vec<Standing>,
    pub games: Vec<GameRecord>,
}

impl TournamentReport {
    #[must_use]
    pub fn standing(&self, name: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.name == name)
    }
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Player                    | Wins | Draws | Losses |")?;
        writeln!(f, "|---------------------------|------|-------|--------|")?;
        for s in &self.standings {
            writeln!(
                f,
                "| {:>25} | {:>4} | {:>5} | {:>6} |",
                s.name, s.wins, s.draws, s.losses
            )?;
        }
        Ok(())
    }
}

/// Play `config.games` games and tabulate the results.
pub fn run_tournament(config: &TournamentConfig) -> Result<TournamentReport, SnapError> {
    config.validate()?;

    let mut seeds = config.options.seed.map(GameRng::new);
    let mut tally: FxHashMap<String, Standing> = config
        .contenders
        .iter()
        .map(|p| (p.name.clone(), Standing::new(p.name.clone())))
        .collect();
    let mut games = Vec::with_capacity(config.games);

    for game in 0..config.games {
        let mut options = config.options.clone().with_auto_start(false);
        if let Some(rng) = seeds.as_mut() {
            options = options.with_seed(rng.next_deal_seed());
        }
        let [first, second] = &config.contenders;
        let seating = if game % 2 == 0 { [first, second] } else { [second, first] };

        info!("Starting game {}", game + 1);
        let record = play_game(config, game, options, seating)?;
        info!("Closing game {}", game + 1);

        match &record.outcome {
            Some(outcome) => {
                if let Some(s) = tally.get_mut(&outcome.winner_name) {
                    s.wins += 1;
                }
                if let Some(s) = tally.get_mut(&outcome.loser_name) {
                    s.losses += 1;
                }
            }
            None => tally.values_mut().for_each(|s| s.draws += 1),
        }
        games.push(record);
    }

    let standings = config
        .contenders
        .iter()
        .filter_map(|p| tally.remove(&p.name))
        .collect();
    Ok(TournamentReport { standings, games })
}

fn play_game(
    config: &TournamentConfig,
    game: usize,
    options: SnapOptions,
    seating: [&PlayerProfile; 2],
) -> Result<GameRecord, SnapError> {
    let table = Arc::new(GameTable::with_options(options)?);
    let mut handles = Vec::with_capacity(seating.len());
    for profile in seating {
        let seat = table.join(profile.clone())?;
        let agent = PlayerAgent::new(
            Arc::clone(&table),
            seat,
            Box::new(ReactiveStrategy::new()),
            config.agent.clone(),
        );
        handles.push(agent.spawn());
    }
    table.start();

    // An agent only exits before the finish on an error; joining it surfaces the error.
    let deadline = Instant::now() + config.max_game_time;
    while table.status() == GameStatus::Playing
        && Instant::now() < deadline
        && !handles.iter().any(AgentHandle::is_finished)
    {
        thread::sleep(config.monitor_interval);
    }

    for handle in &handles {
        handle.stop();
    }
    let agents = handles
        .into_iter()
        .map(AgentHandle::join)
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = if table.status() == GameStatus::Finished {
        let outcome = table.close()?;
        info!("{} beat {}", outcome.winner_name, outcome.loser_name);
        Some(outcome)
    } else {
        warn!(
            "Game {} still playing after {:?}, counting a draw",
            game + 1,
            config.max_game_time
        );
        None
    };

    Ok(GameRecord {
        game,
        outcome,
        agents,
    })
}
