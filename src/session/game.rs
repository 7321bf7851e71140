//! The game session: owns the board, the roster and the dice, and turns
//! front-end intents into state transitions.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info};

use super::outcome::{CellEffect, IgnoreReason, MoveReport, TurnOutcome};
use super::snapshot::SessionSnapshot;
use crate::assets::{AssetResolver, NoAssets};
use crate::board::{Board, BoardLayout};
use crate::core::{
    ArtworkRecord, ConfigError, GalleryRule, GameRng, Intent, IntentRecord, Player, PlayerId,
    PublicState, RandomSource, SessionConfig, MIN_PLAYERS,
};
use crate::effects::{GrowthSignal, LastChanceResult, Signals, Timed};
use crate::rules::{
    resolve_arrival, resolve_roll, roll_last_chance, GoalContext, Landing, SchedulerState,
};

/// One running game.
///
/// `R` is the dice. Sessions built with [`GameSession::start`] roll a seeded
/// [`GameRng`]; tests inject [`crate::core::LoadedDice`] through
/// [`SessionBuilder::build_with_dice`].
pub struct GameSession<R = GameRng> {
    config: SessionConfig,
    board: Board,
    state: PublicState,
    rng: R,
    assets: Box<dyn AssetResolver>,
    history: Vector<IntentRecord>,
}

/// Builder for creating a [`GameSession`].
///
/// ```
/// use art_quest::assets::CatalogResolver;
/// use art_quest::core::ArtStyle;
/// use art_quest::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .player_count(3)
///     .seed(7)
///     .assets(CatalogResolver::new().with_numbered(ArtStyle::Cubism, "/art", 4))
///     .build()
///     .unwrap();
///
/// assert_eq!(session.players().count(), 3);
/// assert_eq!(session.cursor(), 0);
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
    player_count: usize,
    assets: Box<dyn AssetResolver>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            player_count: MIN_PLAYERS,
            assets: Box::new(NoAssets),
        }
    }
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats to fill, 2 to 4. Checked by `build`.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn board(mut self, layout: BoardLayout) -> Self {
        self.config.board = layout;
        self
    }

    #[must_use]
    pub fn gallery_rule(mut self, rule: GalleryRule) -> Self {
        self.config.gallery_rule = rule;
        self
    }

    #[must_use]
    pub fn min_requirement(mut self, min: u32) -> Self {
        self.config.min_requirement = min;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn assets(mut self, resolver: impl AssetResolver + 'static) -> Self {
        self.assets = Box::new(resolver);
        self
    }

    /// Build a session rolling seeded dice.
    pub fn build(self) -> Result<GameSession, ConfigError> {
        let base = seed_rng(&self.config);
        let dice = base.for_context("dice");
        GameSession::assemble(self.config, self.player_count, &base, dice, self.assets)
    }

    /// Build a session rolling `dice`. The board still comes from the
    /// configured seed.
    pub fn build_with_dice<R: RandomSource>(self, dice: R) -> Result<GameSession<R>, ConfigError> {
        let base = seed_rng(&self.config);
        GameSession::assemble(self.config, self.player_count, &base, dice, self.assets)
    }

    /// Continue a session from a snapshot of seeded dice.
    ///
    /// Board, state, log and dice come from the snapshot; the builder
    /// supplies configuration and assets. Its player count and seed are
    /// not used.
    pub fn resume(self, snapshot: SessionSnapshot) -> Result<GameSession, ConfigError> {
        let dice = snapshot
            .dice
            .as_ref()
            .map(GameRng::from_state)
            .ok_or(ConfigError::MissingDiceState)?;
        self.config.validate(snapshot.state.player_count())?;

        info!(
            players = snapshot.state.player_count(),
            intents = snapshot.history.len(),
            "session resumed"
        );

        Ok(GameSession {
            config: self.config,
            board: snapshot.board,
            state: snapshot.state,
            rng: dice,
            assets: self.assets,
            history: snapshot.history,
        })
    }
}

fn seed_rng(config: &SessionConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

impl GameSession {
    /// Start a session with `player_count` presets and no artwork assets.
    pub fn start(config: SessionConfig, player_count: usize) -> Result<Self, ConfigError> {
        SessionBuilder::new()
            .config(config)
            .player_count(player_count)
            .build()
    }
}

impl<R: RandomSource> GameSession<R> {
    fn assemble(
        config: SessionConfig,
        player_count: usize,
        base: &GameRng,
        dice: R,
        assets: Box<dyn AssetResolver>,
    ) -> Result<Self, ConfigError> {
        config.validate(player_count)?;
        let board = Board::generate(&config.board, &mut base.for_context("board"))?;

        info!(
            players = player_count,
            seed = base.seed(),
            gallery_rule = ?config.gallery_rule,
            "session started"
        );

        Ok(Self {
            config,
            board,
            state: PublicState::new(player_count),
            rng: dice,
            assets,
            history: Vector::new(),
        })
    }

    /// Take the current player's turn.
    ///
    /// A resting player loses the turn without rolling. Otherwise the die
    /// is rolled, the token moves and the destination cell applies. Ignored
    /// while a last-chance roll is pending or once everyone has finished.
    pub fn request_roll(&mut self) -> TurnOutcome {
        if let Some(pending) = self.state.pending_last_chance() {
            debug!(%pending, "roll ignored, last chance pending");
            return TurnOutcome::Ignored(IgnoreReason::LastChancePending(pending));
        }

        let active = self.state.active_players();
        let Some(player) = self.state.scheduler.current(&active) else {
            debug!("roll ignored, no active players");
            return TurnOutcome::Ignored(IgnoreReason::NoActivePlayers);
        };
        let Some(current) = self.state.player_mut(player) else {
            return TurnOutcome::Ignored(IgnoreReason::NoActivePlayers);
        };

        if current.skip_next_turn {
            current.skip_next_turn = false;
            self.state.scheduler.advance(active.len());
            self.record(player, Intent::Roll, None);
            info!(%player, "resting, turn skipped");
            return TurnOutcome::Skipped(player);
        }

        let from = current.position;
        let roll = self.rng.roll_die();
        let resolution = resolve_roll(&self.board, self.config.gallery_rule, from, roll);
        current.position = resolution.destination;

        let now = self.state.clock;
        let timings = self.config.timings;
        self.state.last_roll = Some(roll);
        self.state.signals.step = Some(Timed::new(resolution.destination, now, timings.step));

        let effect = match resolution.landing {
            Landing::Growth(attribute) => {
                if let Some(p) = self.state.player_mut(player) {
                    p.attributes.add(attribute, 1);
                }
                self.state.signals.growth = Some(Timed::new(
                    GrowthSignal { player, attribute },
                    now,
                    timings.growth,
                ));
                CellEffect::Growth(attribute)
            }
            Landing::Rest => {
                if let Some(p) = self.state.player_mut(player) {
                    p.skip_next_turn = true;
                }
                CellEffect::Rest
            }
            Landing::Goal => {
                let ctx = GoalContext {
                    min_requirement: self.config.min_requirement,
                    timings: &self.config.timings,
                    assets: self.assets.as_ref(),
                };
                CellEffect::Goal(resolve_arrival(&mut self.state, player, &ctx, &mut self.rng))
            }
            Landing::Nothing => CellEffect::None,
        };

        // The pending player keeps the turn until their last-chance roll.
        if self.state.pending_last_chance() != Some(player) {
            let remaining = self.state.active_players().len();
            self.state.scheduler.advance(remaining);
        }

        self.record(player, Intent::Roll, Some(roll));
        debug!(%player, roll, from, to = resolution.destination, ?effect, "moved");

        TurnOutcome::Moved(MoveReport {
            player,
            roll,
            from,
            to: resolution.destination,
            effect,
        })
    }

    /// Roll the pending player's last-chance die. `None` if nobody is pending.
    pub fn request_last_chance_roll(&mut self) -> Option<LastChanceResult> {
        let ctx = GoalContext {
            min_requirement: self.config.min_requirement,
            timings: &self.config.timings,
            assets: self.assets.as_ref(),
        };
        let result = roll_last_chance(&mut self.state, &ctx, &mut self.rng)?;

        // Resolves the arrival roll, so the turn passes the same way.
        let remaining = self.state.active_players().len();
        self.state.scheduler.advance(remaining);
        self.record(result.player, Intent::LastChanceRoll, Some(result.roll));
        Some(result)
    }

    /// Change a player's display name. Existing artwork records keep the
    /// name they were created with. Returns `false` for an unknown player.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        let Some(player) = self.state.player_mut(id) else {
            debug!(%id, "rename ignored, unknown player");
            return false;
        };
        let name = name.into();
        player.display_name.clone_from(&name);
        self.record(id, Intent::Rename { player: id, name }, None);
        true
    }

    /// Advance the logical clock, dropping expired signals.
    pub fn tick(&mut self, elapsed: Duration) {
        self.state.advance_clock(elapsed);
    }

    fn record(&mut self, player: PlayerId, intent: Intent, roll: Option<u8>) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(IntentRecord::new(player, intent, roll, sequence));
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &PublicState {
        &self.state
    }

    /// Every seated player in turn order, finished ones included.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.state.players()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.current_player()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    #[must_use]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.state.scheduler_state()
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.state.last_roll()
    }

    #[must_use]
    pub fn signals(&self) -> &Signals {
        self.state.signals()
    }

    #[must_use]
    pub fn artworks(&self) -> &im::OrdMap<PlayerId, ArtworkRecord> {
        self.state.artworks()
    }

    #[must_use]
    pub fn artwork(&self, id: PlayerId) -> Option<&ArtworkRecord> {
        self.state.artwork(id)
    }

    /// Player waiting on a last-chance roll.
    #[must_use]
    pub fn last_chance(&self) -> Option<PlayerId> {
        self.state.pending_last_chance()
    }

    #[must_use]
    pub fn first_arrival(&self) -> Option<PlayerId> {
        self.state.first_arrival()
    }

    #[must_use]
    pub fn finish_order(&self) -> &Vector<PlayerId> {
        self.state.finish_order()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Accepted intents in order.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    /// The dice this session rolls.
    #[must_use]
    pub fn dice(&self) -> &R {
        &self.rng
    }

    pub fn dice_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            state: self.state.clone(),
            current_player: self.state.current_player(),
            history: self.history.clone(),
            dice: self.rng.checkpoint(),
        }
    }
}
