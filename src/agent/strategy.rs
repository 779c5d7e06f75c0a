//! Decision procedures for automated players.

use crate::core::{ActionKind, PlayerId};
use crate::game::Snapshot;

/// Chooses an action from a snapshot.
///
/// Strategies only ever see published snapshots. Returning an action that
/// the snapshot does not list as available is a contract breach the table
/// will reject, usually fatally.
pub trait SnapStrategy: Send {
    fn name(&self) -> &str;

    /// Pick one action for `me`, or `None` to wait for the next snapshot.
    fn decide(&mut self, snapshot: &Snapshot, me: PlayerId) -> Option<ActionKind>;
}

/// Snap on any visible pair, otherwise play the turn.
///
/// 1. The two top shared cards match and CallSnap is available: call snap.
/// 2. It is my turn: lay a card if I have one, otherwise skip.
/// 3. Otherwise do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReactiveStrategy;

impl ReactiveStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SnapStrategy for ReactiveStrategy {
    fn name(&self) -> &str {
        "reactive"
    }

    fn decide(&mut self, snapshot: &Snapshot, me: PlayerId) -> Option<ActionKind> {
        let pair_showing = snapshot
            .top_two()
            .is_some_and(|(older, newer)| older.matches(&newer));
        if pair_showing && snapshot.can(me, ActionKind::CallSnap) {
            return Some(ActionKind::CallSnap);
        }

        if snapshot.is_turn_of(me) {
            return [ActionKind::LayCard, ActionKind::SkipGo]
                .into_iter()
                .find(|&kind| snapshot.can(me, kind));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, PlayerAction, PlayerProfile, Rank, SnapOptions, Suit};
    use crate::game::GameAuthority;

    fn authority(ranks: usize, order: Vec<Card>) -> GameAuthority {
        let mut authority = GameAuthority::new();
        authority
            .initialize(SnapOptions::new().with_ranks_in_use(ranks).with_auto_start(false))
            .unwrap();
        authority.join(PlayerProfile::new("alice")).unwrap();
        authority.join(PlayerProfile::new("bob")).unwrap();
        authority.start_with_order(order);
        authority
    }

    fn aces_against_twos() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&s| [Card::new(Rank::Ace, s), Card::new(Rank::Two, s)])
            .collect()
    }

    #[test]
    fn test_lays_on_turn() {
        let authority = authority(2, aces_against_twos());
        let snapshot = authority.latest_snapshot().unwrap();
        let mut strategy = ReactiveStrategy::new();

        assert_eq!(
            strategy.decide(&snapshot, PlayerId::new(0)),
            Some(ActionKind::LayCard)
        );
        assert_eq!(strategy.decide(&snapshot, PlayerId::new(1)), None);
    }

    #[test]
    fn test_ignores_mismatched_pair() {
        let mut authority = authority(2, aces_against_twos());
        authority
            .apply(PlayerAction::lay_card(PlayerId::new(0), 0))
            .unwrap();
        let snapshot = authority.latest_snapshot().unwrap();
        let mut strategy = ReactiveStrategy::new();

        assert_eq!(strategy.decide(&snapshot, PlayerId::new(0)), None);
        assert_eq!(
            strategy.decide(&snapshot, PlayerId::new(1)),
            Some(ActionKind::LayCard)
        );
    }

    #[test]
    fn test_snaps_on_pair() {
        let order = Suit::ALL.iter().map(|&s| Card::new(Rank::Ace, s)).collect();
        let mut authority = authority(1, order);
        authority
            .apply(PlayerAction::lay_card(PlayerId::new(0), 0))
            .unwrap();
        let snapshot = authority.latest_snapshot().unwrap();
        let mut strategy = ReactiveStrategy::new();

        for player in PlayerId::seats() {
            assert_eq!(strategy.decide(&snapshot, player), Some(ActionKind::CallSnap));
        }
    }
}
