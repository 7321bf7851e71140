//! Die roll to destination cell.
//!
//! Movement is clamped at the goal and, under [`GalleryRule::SkipForward`],
//! slides off gallery cells. The correction only applies when the clamped
//! target itself is a gallery: a roll that would pass the goal lands on the
//! goal directly.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellKind};
use crate::core::{AttributeKind, GalleryRule, GOAL_POSITION};

/// What the destination cell asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Grow one attribute by a point.
    Growth(AttributeKind),
    /// Skip the next turn.
    Rest,
    /// Arrived at the goal.
    Goal,
    /// Start, silent or gallery cell.
    Nothing,
}

/// Where a roll takes a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub destination: u8,
    pub landing: Landing,
}

/// Destination of a roll from `position`. Never above the goal.
///
/// ```
/// use art_quest::board::{Board, BoardLayout};
/// use art_quest::core::{GalleryRule, GameRng};
/// use art_quest::rules::destination;
///
/// let board = Board::generate(&BoardLayout::extended(), &mut GameRng::new(1)).unwrap();
///
/// // 27 + 3 = 30 is a gallery; 30, 31, 32 are all galleries.
/// assert_eq!(destination(&board, GalleryRule::SkipForward, 27, 3), 33);
/// assert_eq!(destination(&board, GalleryRule::Inert, 27, 3), 30);
/// assert_eq!(destination(&board, GalleryRule::SkipForward, 78, 6), 80);
/// ```
#[must_use]
pub fn destination(board: &Board, rule: GalleryRule, position: u8, roll: u8) -> u8 {
    let mut target = position.saturating_add(roll).min(GOAL_POSITION);

    if rule == GalleryRule::SkipForward {
        while target < GOAL_POSITION && board.is_gallery(target) {
            target += 1;
        }
    }

    target
}

/// Resolve a roll: destination plus the landing effect.
#[must_use]
pub fn resolve_roll(board: &Board, rule: GalleryRule, position: u8, roll: u8) -> Resolution {
    let destination = destination(board, rule, position, roll);

    let landing = match board.cell(destination).map(|c| c.kind) {
        Some(CellKind::Event { attribute, .. }) => Landing::Growth(attribute),
        Some(CellKind::Rest) => Landing::Rest,
        Some(CellKind::Goal) => Landing::Goal,
        Some(CellKind::Start | CellKind::Silent | CellKind::Gallery) | None => Landing::Nothing,
    };

    Resolution {
        destination,
        landing,
    }
}
