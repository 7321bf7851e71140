//! Player identification, the player record, and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are assigned in registration order and
//! that order is the turn order for the whole session.
//!
//! ## Player
//!
//! The mutable record the session owns: name, token color, track position,
//! attributes and the rest flag.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::attributes::Attributes;

/// Index of the goal cell.
pub const GOAL_POSITION: u8 = 80;

/// Sentinel position of a player who has finished and left the rotation.
pub const FINISHED_POSITION: u8 = 81;

/// Player identifier.
///
/// Player indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// ```
    /// use art_quest::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A roster entry the session can seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerPreset {
    pub name: &'static str,
    pub color: &'static str,
}

/// The four seats, in turn order. A session uses the first N.
pub const PLAYER_PRESETS: [PlayerPreset; 4] = [
    PlayerPreset { name: "Tsutaya Karesaburo", color: "indigo" },
    PlayerPreset { name: "Picarso", color: "pink" },
    PlayerPreset { name: "Monenosuke", color: "green" },
    PlayerPreset { name: "Dalie", color: "yellow" },
];

/// A seated player.
///
/// Fields are read-only outside the crate; the session is the only writer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) display_name: String,
    pub(crate) color: String,
    pub(crate) position: u8,
    pub(crate) attributes: Attributes,
    pub(crate) skip_next_turn: bool,
}

impl Player {
    /// Seat a player at the start cell from a preset.
    #[must_use]
    pub fn from_preset(id: PlayerId, preset: &PlayerPreset) -> Self {
        Self {
            id,
            display_name: preset.name.to_string(),
            color: preset.color.to_string(),
            position: 0,
            attributes: Attributes::default(),
            skip_next_turn: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Opaque token color for presentation.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Track position: 0..=80, or 81 once finished.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    /// Whether this player sits out their next scheduled turn.
    #[must_use]
    pub fn skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    /// Still in the turn rotation (position below the finished sentinel).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.position < FINISHED_POSITION
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= FINISHED_POSITION
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ```
/// use art_quest::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// laps[PlayerId::new(1)] = 2;
/// assert_eq!(laps[PlayerId::new(1)], 2);
/// assert_eq!(laps[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` for an id outside this map.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over entries in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
