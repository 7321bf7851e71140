//! # art-quest
//!
//! Progression engine for a turn-based art board game. Players roll a die
//! along an 81-cell track, pick up attribute points in style zones, and on
//! reaching the goal are classified into one of four art styles (or leave a
//! study work if they fall short).
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, timers or audio. Front ends forward
//!    intents and render [`session::GameSession`]'s observable state.
//!
//! 2. **Injected Randomness**: Every random decision goes through
//!    [`core::RandomSource`], so sessions replay from a seed and tests can
//!    load the dice.
//!
//! 3. **Configuration Over Convention**: Board layout, gallery handling,
//!    the experience requirement and signal timings live in
//!    [`core::SessionConfig`].
//!
//! ## Modules
//!
//! - `core`: Players, attributes, styles, state, intents, RNG, configuration
//! - `board`: Cell kinds and board generation
//! - `rules`: Turn order, movement, goal resolution, style classification
//! - `effects`: Expiring cosmetic signals
//! - `assets`: Artwork reference resolution
//! - `session`: The game session that ties it together
//!
//! ```
//! use art_quest::{GameSession, SessionConfig, TurnOutcome};
//!
//! let mut session = GameSession::start(SessionConfig::default().with_seed(42), 2).unwrap();
//!
//! while !session.is_over() {
//!     match session.request_roll() {
//!         TurnOutcome::Ignored(_) => {
//!             session.request_last_chance_roll();
//!         }
//!         TurnOutcome::Skipped(_) | TurnOutcome::Moved(_) => {}
//!     }
//! }
//!
//! assert_eq!(session.artworks().len(), 2);
//! ```

pub mod assets;
pub mod board;
pub mod core;
pub mod effects;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArtOutcome, ArtStyle, AttributeKind, Attributes, ConfigError, GalleryRule, GameRng,
    GameRngState, Intent, IntentRecord, LoadedDice, Player, PlayerId, PlayerMap, PublicState,
    RandomSource, SessionConfig, SignalTimings,
};

pub use crate::board::{Board, BoardLayout, Cell, CellKind, ZoneSpec};

pub use crate::rules::{classify, GoalOutcome, SchedulerState, TurnScheduler};

pub use crate::effects::{GrowthSignal, LastChanceResult, Signals, Timed};

pub use crate::assets::{AssetResolver, CatalogResolver, NoAssets};

pub use crate::session::{
    CellEffect, GameSession, IgnoreReason, MoveReport, SessionBuilder, SessionSnapshot,
    TurnOutcome,
};
