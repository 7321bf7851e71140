//! Goal arrival and the last-chance roll.
//!
//! A player reaching the goal with enough experience finishes at once with a
//! styled artwork. A player short of the requirement stays on the goal cell
//! as the pending last-chance player; their one extra roll succeeds only on
//! a 1, which grants a point in two different attributes. Either way that
//! roll finishes them: styled if the new total is enough, study work if not.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::classifier::classify;
use crate::assets::AssetResolver;
use crate::core::{
    ArtOutcome, ArtStyle, ArtworkRecord, AttributeKind, PlayerId, PublicState, RandomSource,
    SignalTimings,
};
use crate::effects::{LastChanceResult, Timed};

/// The only last-chance face that succeeds.
pub const LAST_CHANCE_FACE: u8 = 1;

/// What the session needs to settle a goal arrival.
#[derive(Clone, Copy)]
pub struct GoalContext<'a> {
    pub min_requirement: u32,
    pub timings: &'a SignalTimings,
    pub assets: &'a dyn AssetResolver,
}

/// How a goal arrival resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalOutcome {
    /// Enough experience: finished with an artwork in this style.
    Completed(ArtStyle),
    /// Short of the requirement: waiting on a last-chance roll.
    LastChance,
    /// The player already has a record or is already pending. Nothing changed.
    AlreadyResolved,
}

/// Settle a player who just landed on the goal.
pub fn resolve_arrival(
    state: &mut PublicState,
    player: PlayerId,
    ctx: &GoalContext<'_>,
    rng: &mut dyn RandomSource,
) -> GoalOutcome {
    if state.artwork(player).is_some() || state.pending_last_chance() == Some(player) {
        warn!(%player, "goal already resolved for player, ignoring arrival");
        return GoalOutcome::AlreadyResolved;
    }
    let Some(attributes) = state.player(player).map(|p| p.attributes()) else {
        return GoalOutcome::AlreadyResolved;
    };

    if state.first_arrival.is_none() {
        state.first_arrival = Some(player);
    }

    if attributes.total() >= ctx.min_requirement {
        let style = classify(&attributes, rng);
        hang_artwork(state, player, ArtOutcome::Style(style), ctx, rng);
        state.mark_finished(player);
        info!(%player, %style, total = attributes.total(), "artwork completed on arrival");
        GoalOutcome::Completed(style)
    } else {
        state.pending_last_chance = Some(player);
        info!(%player, total = attributes.total(), "short of requirement, last chance pending");
        GoalOutcome::LastChance
    }
}

/// Roll the pending player's last-chance die.
///
/// Returns `None` if nobody is pending.
pub fn roll_last_chance(
    state: &mut PublicState,
    ctx: &GoalContext<'_>,
    rng: &mut dyn RandomSource,
) -> Option<LastChanceResult> {
    let Some(player) = state.pending_last_chance() else {
        debug!("last-chance roll with nobody pending, ignoring");
        return None;
    };

    let roll = rng.roll_die();
    let success = roll == LAST_CHANCE_FACE;
    state.last_roll = Some(roll);

    if success {
        let (first, second) = pick_two_distinct(rng);
        if let Some(p) = state.player_mut(player) {
            p.attributes.add(first, 1);
            p.attributes.add(second, 1);
        }
    }

    let attributes = state
        .player(player)
        .map(|p| p.attributes())
        .unwrap_or_default();
    let outcome = if success && attributes.total() >= ctx.min_requirement {
        ArtOutcome::Style(classify(&attributes, rng))
    } else {
        ArtOutcome::StudyWork
    };

    hang_artwork(state, player, outcome, ctx, rng);
    state.mark_finished(player);
    state.pending_last_chance = None;

    let result = LastChanceResult {
        player,
        success,
        roll,
    };
    state.signals.last_chance = Some(Timed::new(
        result,
        state.clock,
        ctx.timings.last_chance_banner,
    ));

    info!(%player, roll, success, %outcome, "last chance resolved");
    Some(result)
}

/// Two different attribute kinds, each uniform.
fn pick_two_distinct(rng: &mut dyn RandomSource) -> (AttributeKind, AttributeKind) {
    let kinds = AttributeKind::ALL;
    let first = rng.gen_index(kinds.len());
    let mut second = rng.gen_index(kinds.len());
    while second == first {
        second = rng.gen_index(kinds.len());
    }
    (kinds[first], kinds[second])
}

/// Create the player's record, resolving an asset for styled work.
fn hang_artwork(
    state: &mut PublicState,
    player: PlayerId,
    outcome: ArtOutcome,
    ctx: &GoalContext<'_>,
    rng: &mut dyn RandomSource,
) {
    let Some(p) = state.player(player) else {
        return;
    };

    let artwork = match outcome {
        ArtOutcome::Style(style) => ctx.assets.resolve(style, rng),
        ArtOutcome::StudyWork => String::new(),
    };
    let record = ArtworkRecord {
        player_id: player,
        player_name: p.display_name().to_string(),
        player_color: p.color().to_string(),
        outcome,
        artwork,
    };

    if !state.insert_artwork(record) {
        warn!(%player, "artwork record already exists, keeping the original");
        return;
    }

    if outcome.style().is_some() {
        state.signals.gallery_highlight = Some(Timed::new(
            player,
            state.clock,
            ctx.timings.gallery_highlight,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{CatalogResolver, NoAssets};
    use crate::core::{Attributes, GameRng, LoadedDice, FINISHED_POSITION, GOAL_POSITION};

    fn at_goal(state: &mut PublicState, id: u8, attributes: Attributes) -> PlayerId {
        let player = PlayerId::new(id);
        let p = state.player_mut(player).unwrap();
        p.position = GOAL_POSITION;
        p.attributes = attributes;
        player
    }

    fn ctx<'a>(timings: &'a SignalTimings, assets: &'a dyn AssetResolver) -> GoalContext<'a> {
        GoalContext {
            min_requirement: 6,
            timings,
            assets,
        }
    }

    #[test]
    fn test_arrival_with_enough_experience() {
        let timings = SignalTimings::default();
        let assets = CatalogResolver::new().with_style(ArtStyle::Cubism, ["cubism.png"]);
        let mut state = PublicState::new(2);
        let mut dice = GameRng::new(0);
        let player = at_goal(&mut state, 0, Attributes::new(0, 5, 2));

        let outcome = resolve_arrival(&mut state, player, &ctx(&timings, &assets), &mut dice);

        assert_eq!(outcome, GoalOutcome::Completed(ArtStyle::Cubism));
        let record = state.artwork(player).unwrap();
        assert_eq!(record.outcome, ArtOutcome::Style(ArtStyle::Cubism));
        assert_eq!(record.artwork, "cubism.png");
        assert_eq!(record.player_name, "Tsutaya Karesaburo");
        assert_eq!(state.player(player).unwrap().position(), FINISHED_POSITION);
        assert_eq!(state.signals().gallery_highlight.map(|s| s.value), Some(player));
        assert_eq!(state.first_arrival(), Some(player));
        assert_eq!(state.pending_last_chance(), None);
    }

    #[test]
    fn test_arrival_short_goes_pending() {
        let timings = SignalTimings::default();
        let mut state = PublicState::new(2);
        let mut dice = GameRng::new(0);
        let player = at_goal(&mut state, 1, Attributes::new(1, 1, 1));

        let outcome = resolve_arrival(&mut state, player, &ctx(&timings, &NoAssets), &mut dice);

        assert_eq!(outcome, GoalOutcome::LastChance);
        assert_eq!(state.pending_last_chance(), Some(player));
        assert_eq!(state.player(player).unwrap().position(), GOAL_POSITION);
        assert!(state.artwork(player).is_none());
    }

    #[test]
    fn test_arrival_is_idempotent() {
        let timings = SignalTimings::default();
        let mut state = PublicState::new(2);
        let mut dice = GameRng::new(0);
        let short = at_goal(&mut state, 0, Attributes::new(1, 0, 0));
        let done = at_goal(&mut state, 1, Attributes::new(6, 0, 0));
        let c = ctx(&timings, &NoAssets);

        assert_eq!(resolve_arrival(&mut state, short, &c, &mut dice), GoalOutcome::LastChance);
        assert_eq!(resolve_arrival(&mut state, short, &c, &mut dice), GoalOutcome::AlreadyResolved);

        assert!(matches!(resolve_arrival(&mut state, done, &c, &mut dice), GoalOutcome::Completed(_)));
        assert_eq!(resolve_arrival(&mut state, done, &c, &mut dice), GoalOutcome::AlreadyResolved);
        assert_eq!(state.artworks().len(), 1);
        assert_eq!(state.first_arrival(), Some(short));
    }

    #[test]
    fn test_last_chance_success_still_short() {
        let timings = SignalTimings::default();
        let mut state = PublicState::new(2);
        let mut dice = LoadedDice::new(4, [LAST_CHANCE_FACE]);
        let player = at_goal(&mut state, 0, Attributes::new(1, 1, 1));
        let c = ctx(&timings, &NoAssets);
        resolve_arrival(&mut state, player, &c, &mut dice);

        let result = roll_last_chance(&mut state, &c, &mut dice).unwrap();

        assert!(result.success);
        assert_eq!(result.roll, 1);
        let attrs = state.player(player).unwrap().attributes();
        assert_eq!(attrs.total(), 5);
        // Two distinct kinds grew by one each
        let grown = AttributeKind::ALL.iter().filter(|&&k| attrs.get(k) == 2).count();
        assert_eq!(grown, 2);
        assert_eq!(state.artwork(player).unwrap().outcome, ArtOutcome::StudyWork);
        assert_eq!(state.artwork(player).unwrap().artwork, "");
        assert_eq!(state.player(player).unwrap().position(), FINISHED_POSITION);
        assert_eq!(state.pending_last_chance(), None);
        assert_eq!(state.last_roll(), Some(1));
        assert_eq!(state.signals().last_chance.map(|s| s.value), Some(result));
        assert!(state.signals().gallery_highlight.is_none());
    }

    #[test]
    fn test_last_chance_success_reaches_requirement() {
        let timings = SignalTimings::default();
        let mut state = PublicState::new(2);
        let mut dice = LoadedDice::new(4, [LAST_CHANCE_FACE]);
        let player = at_goal(&mut state, 0, Attributes::new(2, 1, 1));
        let c = ctx(&timings, &NoAssets);
        resolve_arrival(&mut state, player, &c, &mut dice);

        roll_last_chance(&mut state, &c, &mut dice).unwrap();

        let record = state.artwork(player).unwrap();
        assert!(record.outcome.style().is_some());
        assert_eq!(state.player(player).unwrap().attributes().total(), 6);
        assert!(state.signals().gallery_highlight.is_some());
    }

    #[test]
    fn test_last_chance_failure() {
        let timings = SignalTimings::default();
        let mut state = PublicState::new(2);
        let mut dice = LoadedDice::new(4, [4]);
        let player = at_goal(&mut state, 1, Attributes::new(0, 2, 3));
        let c = ctx(&timings, &NoAssets);
        resolve_arrival(&mut state, player, &c, &mut dice);

        let result = roll_last_chance(&mut state, &c, &mut dice).unwrap();

        assert!(!result.success);
        assert_eq!(state.player(player).unwrap().attributes(), Attributes::new(0, 2, 3));
        assert_eq!(state.artwork(player).unwrap().outcome, ArtOutcome::StudyWork);
        assert_eq!(state.player(player).unwrap().position(), FINISHED_POSITION);
    }

    #[test]
    fn test_last_chance_without_pending_is_noop() {
        let timings = SignalTimings::default();
        let mut state = PublicState::new(2);
        let mut dice = LoadedDice::new(0, [1]);
        let before = state.clone();

        assert!(roll_last_chance(&mut state, &ctx(&timings, &NoAssets), &mut dice).is_none());
        assert_eq!(state, before);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_pick_two_distinct() {
        let mut rng = GameRng::new(8);
        for _ in 0..500 {
            let (a, b) = pick_two_distinct(&mut rng);
            assert_ne!(a, b);
        }
    }
}
