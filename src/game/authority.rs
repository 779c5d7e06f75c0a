//! The game authority: sole owner and mutator of a Snap table.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --initialize--> ReadyToStart --start--> Playing --last card won--> Finished
//! ```
//!
//! ## Actions
//!
//! [`GameAuthority::apply`] is the single entry point for player actions.
//! It checks the staleness token first, then dispatches on the action kind.
//! Every check runs before any pile moves, so a rejected action leaves the
//! table and the snapshot version exactly as they were.
//!
//! The authority itself is single-threaded; [`GameTable`](super::GameTable)
//! puts it behind a lock for concurrent agents.

use std::sync::Arc;

use im::Vector;
use log::{debug, info, log, Level};

use crate::core::{
    ActionKind, Card, Deck, GameRng, GameStatus, LastAction, PlayerAction, PlayerId, PlayerMap,
    PlayerProfile, SnapError, SnapOptions, SEATS,
};
use crate::zones::{Pile, PileVisibility};

use super::mailbox::Mailbox;
use super::outcome::GameOutcome;
use super::snapshot::{available_actions, Snapshot, DEALER};

/// A joined player: seat, identity and the mailbox snapshots arrive in.
#[derive(Clone, Debug)]
pub struct Seat {
    pub id: PlayerId,
    pub profile: PlayerProfile,
    pub mailbox: Arc<Mailbox>,
}

impl Seat {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.profile.name
    }
}

/// Piles and counters of a dealt game.
#[derive(Clone, Debug)]
struct PlayState {
    deck_size: usize,
    hands: PlayerMap<Pile>,
    wins: PlayerMap<u32>,
    shared: Pile,
    turn: Option<PlayerId>,
}

impl PlayState {
    fn require_turn(&self, player: PlayerId) -> Result<(), SnapError> {
        if self.turn == Some(player) {
            Ok(())
        } else {
            Err(SnapError::TurnViolation {
                player,
                turn_holder: self.turn,
            })
        }
    }

    fn advance_turn(&mut self) {
        self.turn = self.turn.map(PlayerId::opponent);
    }

    fn lay_first(&mut self, player: PlayerId) -> Result<Card, SnapError> {
        Ok(self.hands[player].move_first_to(&mut self.shared)?)
    }
}

/// Authoritative state machine for one game of Snap.
#[derive(Debug, Default)]
pub struct GameAuthority {
    status: GameStatus,
    options: SnapOptions,
    seats: Vec<Seat>,
    play: Option<PlayState>,
    history: Vector<Arc<Snapshot>>,
}

impl GameAuthority {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Lifecycle ===

    /// Accept options. Only valid once, from `Uninitialized`.
    pub fn initialize(&mut self, options: SnapOptions) -> Result<(), SnapError> {
        if self.status != GameStatus::Uninitialized {
            return Err(SnapError::InvalidStatus {
                operation: "initialize",
                status: self.status,
            });
        }
        options.validate()?;

        info!(
            "Initialized Snap table: {} ranks, auto start {}",
            options.ranks_in_use, options.auto_start_when_ready
        );
        self.options = options;
        self.status = GameStatus::ReadyToStart;
        Ok(())
    }

    /// Seat a player. Starts the game when the second seat fills and
    /// `auto_start_when_ready` is set.
    pub fn join(&mut self, profile: PlayerProfile) -> Result<Seat, SnapError> {
        if !self.status.accepts_players() {
            return Err(SnapError::InvalidStatus {
                operation: "join",
                status: self.status,
            });
        }
        if self.seats.len() >= SEATS {
            return Err(SnapError::TableFull { max: SEATS });
        }

        let seat = Seat {
            id: PlayerId::new(self.seats.len() as u8),
            profile,
            mailbox: Arc::new(Mailbox::new()),
        };
        info!("{} joined as {}", seat.name(), seat.id);
        self.seats.push(seat.clone());

        if self.seats.len() == SEATS {
            self.status = GameStatus::ReadyToStart;
            if self.options.auto_start_when_ready {
                self.start();
            }
        }

        Ok(seat)
    }

    /// Shuffle and deal.
    ///
    /// Panics unless the table is `ReadyToStart` with both seats filled;
    /// starting early is a sequencing bug in the caller.
    pub fn start(&mut self) {
        let mut rng = self.options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let order = Deck::new(self.options.ranks_in_use).shuffled(&mut rng);
        self.start_with_order(order);
    }

    /// Deal a known card order instead of a random one (replays and tests).
    ///
    /// All but the last card go alternately to each seat starting with the
    /// first to join; the last card opens the shared pile.
    ///
    /// Panics if `order` is not a permutation of the configured deck, or
    /// under the same conditions as [`GameAuthority::start`].
    pub fn start_with_order(&mut self, order: Vec<Card>) {
        assert!(
            self.status == GameStatus::ReadyToStart,
            "Cannot start because game status is {}",
            self.status
        );
        assert_eq!(
            self.seats.len(),
            SEATS,
            "Cannot start because number of players is {}",
            self.seats.len()
        );

        let deck = Deck::new(self.options.ranks_in_use);
        assert!(
            is_permutation(deck.cards(), &order),
            "Deal order must be a permutation of the deck"
        );

        let mut hands = PlayerMap::new(|p| {
            Pile::new(
                format!("{} hidden cards", self.seats[p.index()].name()),
                PileVisibility::PlayerPrivate,
            )
        });
        let mut shared = Pile::new("In play stack", PileVisibility::PublicShared);

        let (rest, opener) = order.split_at(order.len() - 1);
        for (i, &card) in rest.iter().enumerate() {
            hands[PlayerId::new((i % SEATS) as u8)].push(card);
        }
        for &card in opener {
            shared.push(card);
        }

        self.play = Some(PlayState {
            deck_size: deck.len(),
            hands,
            wins: PlayerMap::splat(0),
            shared,
            turn: Some(PlayerId::new(0)),
        });
        self.status = GameStatus::Playing;
        info!("Dealt {} cards, {} to play first", deck.len(), self.seats[0].name());

        self.publish(LastAction::CardLaid, DEALER);
    }

    /// Apply a player action.
    ///
    /// Holds no lock of its own; callers sharing an authority between
    /// threads must serialize calls (see [`GameTable`](super::GameTable)).
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), SnapError> {
        let result = self.try_apply(action);
        if let Err(err) = &result {
            log!(
                rejection_level(err),
                "Rejected {} from {}: {err}",
                action.kind,
                action.player
            );
        }
        result
    }

    /// Report the outcome. Only valid once `Finished`.
    pub fn close(&self) -> Result<GameOutcome, SnapError> {
        let not_finished = || SnapError::InvalidStatus {
            operation: "close",
            status: self.status,
        };
        if self.status != GameStatus::Finished {
            return Err(not_finished());
        }
        let play = self.play.as_ref().ok_or_else(not_finished)?;

        let winner = PlayerId::seats()
            .find(|&p| play.hands[p].len() == play.deck_size)
            .ok_or_else(|| SnapError::PreconditionViolation {
                reason: "game finished without a player holding the deck".to_string(),
            })?;
        let loser = winner.opponent();

        Ok(GameOutcome {
            winner,
            loser,
            winner_name: self.seats[winner.index()].name().to_string(),
            loser_name: self.seats[loser.index()].name().to_string(),
            snapshots_published: self.history.len(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, player: PlayerId) -> Result<&Seat, SnapError> {
        self.seats
            .get(player.index())
            .ok_or(SnapError::UnknownPlayer(player))
    }

    /// Version of the latest snapshot, `None` before the deal.
    #[must_use]
    pub fn current_version(&self) -> Option<u64> {
        self.history.last().map(|s| s.version)
    }

    #[must_use]
    pub fn latest_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.history.last().cloned()
    }

    /// Every snapshot published so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vector<Arc<Snapshot>> {
        self.history.clone()
    }

    /// Size of the dealt deck, `None` before the deal.
    #[must_use]
    pub fn deck_size(&self) -> Option<usize> {
        self.play.as_ref().map(|p| p.deck_size)
    }

    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> Option<usize> {
        self.play.as_ref()?.hands.get(player).map(Pile::len)
    }

    #[must_use]
    pub fn turn_holder(&self) -> Option<PlayerId> {
        self.play.as_ref()?.turn
    }

    // === Action handling ===

    fn try_apply(&mut self, action: PlayerAction) -> Result<(), SnapError> {
        if self.status != GameStatus::Playing {
            return Err(SnapError::InvalidStatus {
                operation: "apply an action",
                status: self.status,
            });
        }
        let name = self.seat(action.player)?.name().to_string();

        let current = self.current_version().unwrap_or_default();
        if action.last_seen_version != current {
            return Err(SnapError::Synchronization {
                player: action.player,
                seen: action.last_seen_version,
                current,
            });
        }

        match action.kind {
            ActionKind::LayCard => self.lay_card(action.player, &name),
            ActionKind::SkipGo => self.skip_go(action.player, &name),
            ActionKind::CallSnap => self.call_snap(action.player, &name),
        }
    }

    fn lay_card(&mut self, player: PlayerId, name: &str) -> Result<(), SnapError> {
        let play = self.play_mut()?;
        play.require_turn(player)?;
        play.lay_first(player)?;
        play.advance_turn();

        self.publish(LastAction::CardLaid, name);
        Ok(())
    }

    fn skip_go(&mut self, player: PlayerId, name: &str) -> Result<(), SnapError> {
        let play = self.play_mut()?;
        play.require_turn(player)?;

        let held = play.hands[player].len();
        if held > 0 {
            return Err(SnapError::RuleViolation {
                reason: format!("{name} tried to skip go but has {held} cards in their pile"),
            });
        }
        play.advance_turn();

        self.publish(LastAction::SkippedGo, name);
        Ok(())
    }

    fn call_snap(&mut self, caller: PlayerId, name: &str) -> Result<(), SnapError> {
        let play = self.play_mut()?;
        let (older, newer) = play
            .shared
            .last_two()
            .ok_or_else(|| SnapError::NothingToSnap {
                found: play.shared.len(),
            })?;

        // A correct call wins the pile for the caller, a wrong one for the opponent.
        let (receiver, tag) = if older.matches(&newer) {
            (caller, LastAction::SnapSuccess)
        } else {
            (caller.opponent(), LastAction::SnapFail)
        };

        let won = play.shared.move_all_to(&mut play.hands[receiver]);
        play.wins[receiver] += 1;
        play.turn = Some(receiver);
        let holds_deck = play.hands[receiver].len() == play.deck_size;

        info!(
            "{name} called snap {}: {won} cards to {}",
            if tag == LastAction::SnapSuccess { "correctly" } else { "incorrectly" },
            self.seats[receiver.index()].name()
        );

        if holds_deck {
            self.finish(receiver, tag, name);
            return Ok(());
        }
        self.publish(tag, name);

        // The caller restarts the shared pile. With two seats their pile is never
        // empty here: a correct call refills it, and a wrong call from an empty
        // pile hands the opponent the whole deck.
        let play = self.play_mut()?;
        let next = if play.hands[caller].is_empty() {
            LastAction::SkippedGo
        } else {
            play.lay_first(caller)?;
            LastAction::CardLaid
        };
        play.advance_turn();

        self.publish(next, name);
        Ok(())
    }

    fn finish(&mut self, winner: PlayerId, tag: LastAction, by: &str) {
        if let Some(play) = self.play.as_mut() {
            play.turn = None;
        }
        self.status = GameStatus::Finished;
        info!("{} has all the cards and wins", self.seats[winner.index()].name());

        self.publish(tag, by);
    }

    fn play_mut(&mut self) -> Result<&mut PlayState, SnapError> {
        let status = self.status;
        self.play.as_mut().ok_or(SnapError::InvalidStatus {
            operation: "play",
            status,
        })
    }

    /// Append a snapshot of the current state and push it to every seat.
    fn publish(&mut self, last_action: LastAction, by: &str) {
        let Some(play) = self.play.as_ref() else {
            return;
        };

        let snapshot = Arc::new(Snapshot {
            version: self.history.len() as u64,
            status: self.status,
            last_action,
            last_action_by: by.to_string(),
            player_names: PlayerMap::new(|p| self.seats[p.index()].name().to_string()),
            hand_counts: play.hands.map(|_, hand| hand.len()),
            win_counts: play.wins.clone(),
            shared_pile: play.shared.iter().copied().collect(),
            turn_holder: play.turn,
            available_actions: available_actions(
                self.status,
                &play.hands,
                play.shared.len(),
                play.turn,
            ),
        });
        debug!("{snapshot}");

        for seat in &self.seats {
            seat.mailbox.deliver(Arc::clone(&snapshot));
        }
        self.history.push_back(snapshot);
    }
}

/// Losing a race to a newer snapshot is routine between agents.
fn rejection_level(err: &SnapError) -> Level {
    match err {
        SnapError::Synchronization { .. } => Level::Debug,
        _ => Level::Warn,
    }
}

fn is_permutation(deck: &[Card], order: &[Card]) -> bool {
    let mut expected = deck.to_vec();
    let mut actual = order.to_vec();
    let key = |c: &Card| (c.suit, c.rank);
    expected.sort_by_key(key);
    actual.sort_by_key(key);
    expected == actual
}
