//! Core engine types: players, attributes, styles, intents, RNG, configuration.
//!
//! These are the leaves the board, rules and session are built from.

pub mod action;
pub mod attributes;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod style;

pub use action::{Intent, IntentRecord};
pub use attributes::{AttributeKind, Attributes};
pub use config::{
    GalleryRule, SessionConfig, SignalTimings, MAX_PLAYERS, MIN_PLAYERS, MIN_REQUIREMENT,
};
pub use error::ConfigError;
pub use player::{
    Player, PlayerId, PlayerMap, PlayerPreset, FINISHED_POSITION, GOAL_POSITION, PLAYER_PRESETS,
};
pub use rng::{GameRng, GameRngState, LoadedDice, RandomSource, DIE_FACES};
pub use state::{ActivePlayers, ArtworkRecord, PublicState};
pub use style::{ArtOutcome, ArtStyle};
