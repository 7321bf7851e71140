//! Session state observable by presentation.
//!
//! ## PublicState
//!
//! Everything a front end needs to render after an intent:
//! - Seated players (position, attributes, rest flag)
//! - Turn cursor and the last die face
//! - Completed artwork records
//! - The pending last-chance player, if any
//! - Live cosmetic signals and the logical clock they expire on
//!
//! Uses `im` persistent collections so snapshots are cheap to clone.
//! Mutators are crate-private: only the session writes.

use std::time::Duration;

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerId, PlayerMap, FINISHED_POSITION, PLAYER_PRESETS};
use super::style::ArtOutcome;
use crate::effects::Signals;
use crate::rules::{SchedulerState, TurnScheduler};

/// Active players in turn order. Sessions seat at most four.
pub type ActivePlayers = SmallVec<[PlayerId; 4]>;

/// The artwork a finished player left behind. Created once, never changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub player_id: PlayerId,
    /// Display name when the record was created.
    pub player_name: String,
    pub player_color: String,
    pub outcome: ArtOutcome,
    /// Opaque asset reference. Empty for study work.
    pub artwork: String,
}

/// Observable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    players: PlayerMap<Player>,
    pub(crate) scheduler: TurnScheduler,
    pub(crate) last_roll: Option<u8>,
    pub(crate) artworks: OrdMap<PlayerId, ArtworkRecord>,
    pub(crate) pending_last_chance: Option<PlayerId>,
    pub(crate) first_arrival: Option<PlayerId>,
    pub(crate) finish_order: Vector<PlayerId>,
    pub(crate) signals: Signals,
    pub(crate) clock: Duration,
}

impl PublicState {
    /// Seat the first `player_count` presets at the start cell.
    ///
    /// Callers validate the count; see `SessionConfig::validate`.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let count = player_count.min(PLAYER_PRESETS.len());
        Self {
            players: PlayerMap::new(count, |id| Player::from_preset(id, &PLAYER_PRESETS[id.index()])),
            scheduler: TurnScheduler::new(),
            last_roll: None,
            artworks: OrdMap::new(),
            pending_last_chance: None,
            first_arrival: None,
            finish_order: Vector::new(),
            signals: Signals::default(),
            clock: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// All seated players in turn order, finished ones included.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Players still in the rotation, in turn order.
    #[must_use]
    pub fn active_players(&self) -> ActivePlayers {
        self.players
            .values()
            .filter(|p| p.is_active())
            .map(Player::id)
            .collect()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.scheduler.cursor()
    }

    #[must_use]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state(self.active_players().len())
    }

    /// The player whose turn it is, or `None` once everyone finished.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.scheduler.current(&self.active_players())
    }

    /// Face of the most recent die roll, last-chance rolls included.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    #[must_use]
    pub fn artwork(&self, id: PlayerId) -> Option<&ArtworkRecord> {
        self.artworks.get(&id)
    }

    /// Completed records keyed by player.
    #[must_use]
    pub fn artworks(&self) -> &OrdMap<PlayerId, ArtworkRecord> {
        &self.artworks
    }

    /// Player waiting on a last-chance roll.
    #[must_use]
    pub fn pending_last_chance(&self) -> Option<PlayerId> {
        self.pending_last_chance
    }

    /// First player to reach the goal.
    #[must_use]
    pub fn first_arrival(&self) -> Option<PlayerId> {
        self.first_arrival
    }

    /// Players in the order they finished.
    #[must_use]
    pub fn finish_order(&self) -> &Vector<PlayerId> {
        &self.finish_order
    }

    #[must_use]
    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    /// Logical time used for signal expiry.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// True once every player has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.values().all(Player::is_finished)
    }

    /// Store a record unless the player already has one.
    ///
    /// Returns `false` (and leaves the existing record alone) on a repeat.
    pub(crate) fn insert_artwork(&mut self, record: ArtworkRecord) -> bool {
        if self.artworks.contains_key(&record.player_id) {
            return false;
        }
        self.artworks.insert(record.player_id, record);
        true
    }

    /// Take a player out of the rotation.
    pub(crate) fn mark_finished(&mut self, id: PlayerId) {
        if let Some(player) = self.players.get_mut(id) {
            if !player.is_finished() {
                player.position = FINISHED_POSITION;
                self.finish_order.push_back(id);
            }
        }
    }

    /// Advance the logical clock and drop expired signals.
    pub(crate) fn advance_clock(&mut self, elapsed: Duration) {
        self.clock = self.clock.saturating_add(elapsed);
        self.signals.clear_expired(self.clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArtStyle, GOAL_POSITION};

    fn record(id: u8, outcome: ArtOutcome) -> ArtworkRecord {
        ArtworkRecord {
            player_id: PlayerId::new(id),
            player_name: format!("p{}", id),
            player_color: "indigo".to_string(),
            outcome,
            artwork: String::new(),
        }
    }

    #[test]
    fn test_public_state_new() {
        let state = PublicState::new(3);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.active_players().len(), 3);
        assert_eq!(state.current_player(), Some(PlayerId::new(0)));
        assert_eq!(state.scheduler_state(), SchedulerState::AwaitingRoll { cursor: 0 });
        assert_eq!(state.last_roll(), None);
        assert!(state.artworks().is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn test_players_seated_from_presets() {
        let state = PublicState::new(4);
        let names: Vec<_> = state.players().map(|p| p.display_name().to_string()).collect();
        let expected: Vec<_> = PLAYER_PRESETS.iter().map(|p| p.name.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_insert_artwork_is_idempotent() {
        let mut state = PublicState::new(2);

        assert!(state.insert_artwork(record(0, ArtOutcome::Style(ArtStyle::Cubism))));
        assert!(!state.insert_artwork(record(0, ArtOutcome::StudyWork)));

        assert_eq!(state.artworks().len(), 1);
        assert_eq!(
            state.artwork(PlayerId::new(0)).map(|r| r.outcome),
            Some(ArtOutcome::Style(ArtStyle::Cubism))
        );
    }

    #[test]
    fn test_mark_finished_removes_from_rotation() {
        let mut state = PublicState::new(2);
        state.player_mut(PlayerId::new(0)).unwrap().position = GOAL_POSITION;

        state.mark_finished(PlayerId::new(0));
        state.mark_finished(PlayerId::new(0));

        assert_eq!(state.active_players().as_slice(), &[PlayerId::new(1)]);
        assert_eq!(state.finish_order().len(), 1);

        state.mark_finished(PlayerId::new(1));
        assert!(state.is_over());
        assert_eq!(state.scheduler_state(), SchedulerState::Idle);
    }

    #[test]
    fn test_clock_clears_signals() {
        use crate::effects::Timed;

        let mut state = PublicState::new(2);
        state.signals.step = Some(Timed::new(4, state.clock(), Duration::from_millis(500)));

        state.advance_clock(Duration::from_millis(499));
        assert!(state.signals().step.is_some());

        state.advance_clock(Duration::from_millis(1));
        assert!(state.signals().step.is_none());
        assert_eq!(state.clock(), Duration::from_millis(500));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = PublicState::new(2);
        state.insert_artwork(record(1, ArtOutcome::StudyWork));

        let json = serde_json::to_string(&state).unwrap();
        let restored: PublicState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
