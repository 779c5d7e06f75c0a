//! Agent tests.
//!
//! Several tables run at once, each with two agents racing on it. Nothing
//! forces a racing game to end, so those tables are checked for logs that
//! look like a sequential game. Termination is checked by replaying the
//! same strategy in strict turn order on one thread.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use snap_engine::agent::{PlayerAgent, ReactiveStrategy, SnapStrategy};
use snap_engine::core::{
    AgentConfig, GameStatus, LastAction, PlayerAction, PlayerId, PlayerProfile, Reactions,
    SnapOptions,
};
use snap_engine::game::{GameAuthority, GameTable};

fn fast_agents() -> AgentConfig {
    AgentConfig::new()
        .with_poll_interval(Duration::from_millis(1))
        .with_think_delay(Duration::ZERO)
}

/// Race two agents on a fresh table until the game finishes or time runs out.
fn race(options: SnapOptions, limit: Duration) -> Arc<GameTable> {
    let table = Arc::new(GameTable::with_options(options.with_auto_start(false)).unwrap());
    let profiles = [
        PlayerProfile::new("steady"),
        PlayerProfile::new("twitchy").with_reactions(Reactions::Fast),
    ];

    let handles: Vec<_> = profiles
        .into_iter()
        .map(|profile| {
            let seat = table.join(profile).unwrap();
            PlayerAgent::new(
                Arc::clone(&table),
                seat,
                Box::new(ReactiveStrategy::new()),
                fast_agents(),
            )
            .spawn()
        })
        .collect();
    table.start();

    let deadline = Instant::now() + limit;
    while table.status() != GameStatus::Finished && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(1));
    }
    for handle in &handles {
        handle.stop();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    table
}

/// Drive a game on one thread. After each action the player who did not
/// make it is asked first, so a pair laid by one seat goes to the other.
fn play_in_turn(authority: &mut GameAuthority, max_actions: usize) -> usize {
    let mut strategies = [ReactiveStrategy::new(), ReactiveStrategy::new()];
    let mut last_actor: Option<PlayerId> = None;

    for applied in 0..max_actions {
        let snapshot = authority.latest_snapshot().unwrap();
        if snapshot.is_finished() {
            return applied;
        }
        let order = match last_actor {
            Some(actor) => [actor.opponent(), actor],
            None => [PlayerId::new(0), PlayerId::new(1)],
        };
        let (player, kind) = order
            .into_iter()
            .find_map(|p| strategies[p.index()].decide(&snapshot, p).map(|kind| (p, kind)))
            .expect("someone can always act while playing");

        authority
            .apply(PlayerAction::new(kind, player, snapshot.version))
            .unwrap();
        last_actor = Some(player);
    }
    max_actions
}

/// Test that tables raced in parallel leave consistent logs.
#[test]
fn test_parallel_tables_keep_consistent_logs() {
    let games: Vec<_> = (0..4u64)
        .map(|seed| {
            thread::spawn(move || {
                race(
                    SnapOptions::new().with_ranks_in_use(1).with_seed(seed),
                    Duration::from_millis(500),
                )
            })
        })
        .collect();

    for game in games {
        let table = game.join().unwrap();
        let history = table.history();
        let deck_size = table.deck_size().unwrap();
        let finished = table.status() == GameStatus::Finished;
        for (index, snapshot) in history.iter().enumerate() {
            assert_eq!(snapshot.version, index as u64);
            assert_eq!(snapshot.total_cards(), deck_size);
            assert_eq!(snapshot.is_finished(), finished && index == history.len() - 1);
        }

        if finished {
            let outcome = table.close().unwrap();
            assert_eq!(table.hand_size(outcome.winner), Some(deck_size));
            assert_eq!(table.hand_size(outcome.loser), Some(0));
        } else {
            assert!(table.close().is_err());
        }
    }
}

/// Test that every snap in an agent-driven game is a correct one when all
/// cards share a rank.
#[test]
fn test_one_rank_game_has_no_failed_snaps() {
    let table = race(
        SnapOptions::new().with_ranks_in_use(1).with_seed(31),
        Duration::from_millis(300),
    );
    let history = table.history();

    assert!(history.iter().all(|s| s.last_action != LastAction::SnapFail));
    assert!(history.iter().any(|s| s.last_action == LastAction::SnapSuccess));
}

/// Test that win counts never decrease across the log.
#[test]
fn test_win_counts_monotonic() {
    let table = race(
        SnapOptions::new().with_ranks_in_use(1).with_seed(8),
        Duration::from_millis(300),
    );
    let history = table.history();

    for pair in history.iter().collect::<Vec<_>>().windows(2) {
        for (player, &wins) in pair[1].win_counts.iter() {
            assert!(wins >= pair[0].win_counts[player]);
        }
    }
}

/// Test that the reactive strategy finishes a one-rank game when snaps go
/// to the player who did not lay the pair.
#[test]
fn test_turn_order_game_finishes() {
    for seed in 0..4 {
        let mut authority = GameAuthority::new();
        authority
            .initialize(SnapOptions::new().with_ranks_in_use(1).with_seed(seed))
            .unwrap();
        authority.join(PlayerProfile::new("alice")).unwrap();
        authority.join(PlayerProfile::new("bob")).unwrap();

        let applied = play_in_turn(&mut authority, 100);

        // Lay, snap (with re-lay), lay, winning snap.
        assert_eq!(applied, 4);
        assert_eq!(authority.status(), GameStatus::Finished);
        let outcome = authority.close().unwrap();
        assert_eq!(outcome.winner, PlayerId::new(1));
        assert_eq!(authority.hand_size(outcome.winner), Some(4));
    }
}
