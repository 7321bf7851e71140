//! Session configuration.
//!
//! Front ends build a `SessionConfig` at startup:
//! - `BoardLayout`: galleries, style zones and rest cells
//! - `GalleryRule`: how movement treats gallery cells
//! - `min_requirement`: experience needed for a finished artwork
//! - `SignalTimings`: how long cosmetic signals stay visible
//!
//! Rules never branch on timings; they only stamp expiries on signals.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::BoardLayout;

/// Experience total needed to finish with a styled artwork.
pub const MIN_REQUIREMENT: u32 = 6;

/// Fewest players a session seats.
pub const MIN_PLAYERS: usize = 2;

/// Most players a session seats.
pub const MAX_PLAYERS: usize = 4;

/// How movement treats gallery cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryRule {
    /// A roll ending on a gallery slides forward to the next non-gallery cell
    /// (or the goal).
    #[default]
    SkipForward,
    /// Galleries are ordinary landable cells with no effect.
    Inert,
}

/// Display durations for cosmetic signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTimings {
    /// Highlight on the destination cell.
    pub step: Duration,
    /// Attribute growth flash.
    pub growth: Duration,
    /// Gallery glow after a styled artwork is hung.
    pub gallery_highlight: Duration,
    /// Last-chance result banner.
    pub last_chance_banner: Duration,
}

impl Default for SignalTimings {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(1200),
            growth: Duration::from_millis(1500),
            gallery_highlight: Duration::from_millis(3000),
            last_chance_banner: Duration::from_millis(3000),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub board: BoardLayout,
    pub gallery_rule: GalleryRule,
    pub min_requirement: u32,
    pub timings: SignalTimings,
    /// Seed for board and dice. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: BoardLayout::extended(),
            gallery_rule: GalleryRule::default(),
            min_requirement: MIN_REQUIREMENT,
            timings: SignalTimings::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board(mut self, board: BoardLayout) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_gallery_rule(mut self, rule: GalleryRule) -> Self {
        self.gallery_rule = rule;
        self
    }

    #[must_use]
    pub fn with_min_requirement(mut self, min: u32) -> Self {
        self.min_requirement = min;
        self
    }

    #[must_use]
    pub fn with_timings(mut self, timings: SignalTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration and the requested seat count.
    pub fn validate(&self, player_count: usize) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(ConfigError::InvalidPlayerCount {
                requested: player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.min_requirement == 0 {
            return Err(ConfigError::ZeroRequirement);
        }
        self.board.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.min_requirement, 6);
        assert_eq!(config.gallery_rule, GalleryRule::SkipForward);
        assert_eq!(config.board, BoardLayout::extended());
        assert_eq!(config.timings.step, Duration::from_millis(1200));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new()
            .with_board(BoardLayout::minimal())
            .with_gallery_rule(GalleryRule::Inert)
            .with_min_requirement(4)
            .with_seed(123);

        assert_eq!(config.board.zones.len(), 3);
        assert_eq!(config.gallery_rule, GalleryRule::Inert);
        assert_eq!(config.min_requirement, 4);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_player_count() {
        let config = SessionConfig::default();
        assert!(config.validate(2).is_ok());
        assert!(config.validate(4).is_ok());
        assert_eq!(
            config.validate(1),
            Err(ConfigError::InvalidPlayerCount {
                requested: 1,
                min: 2,
                max: 4
            })
        );
        assert!(config.validate(5).is_err());
    }

    #[test]
    fn test_validate_requirement() {
        let config = SessionConfig::default().with_min_requirement(0);
        assert_eq!(config.validate(2), Err(ConfigError::ZeroRequirement));
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
