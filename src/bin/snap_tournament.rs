use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use snap_engine::{run_tournament, AgentConfig, SnapOptions, TournamentConfig};

#[derive(Parser)]
#[command(name = "snap-tournament")]
#[command(about = "Play automated games of Snap between two agents and tabulate the results")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,
    /// Ranks in the deck, Ace first (deck size is four times this)
    #[arg(long, default_value_t = 13)]
    ranks: usize,
    /// Seed for reproducible deals (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// How often agents check for a new snapshot, in milliseconds
    #[arg(long, default_value_t = 200)]
    poll_ms: u64,
    /// Base think delay before acting, in milliseconds
    #[arg(long, default_value_t = 100)]
    think_ms: u64,
    /// Stop a game and count a draw after this many seconds
    #[arg(long, default_value_t = 120)]
    max_game_secs: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut options = SnapOptions::new().with_ranks_in_use(cli.ranks);
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }
    let config = TournamentConfig::new()
        .with_games(cli.games)
        .with_options(options)
        .with_agent(
            AgentConfig::new()
                .with_poll_interval(Duration::from_millis(cli.poll_ms))
                .with_think_delay(Duration::from_millis(cli.think_ms)),
        )
        .with_max_game_time(Duration::from_secs(cli.max_game_secs));

    match run_tournament(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Tournament failed: {err}");
            ExitCode::FAILURE
        }
    }
}
