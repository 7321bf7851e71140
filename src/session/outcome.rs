//! What an intent did, reported back to the front end.

use serde::{Deserialize, Serialize};

use crate::core::{AttributeKind, PlayerId};
use crate::rules::GoalOutcome;

/// Why a roll intent changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Every player has finished.
    NoActivePlayers,
    /// This player must take their last-chance roll first.
    LastChancePending(PlayerId),
}

/// Effect of the destination cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellEffect {
    None,
    Growth(AttributeKind),
    Rest,
    Goal(GoalOutcome),
}

/// A resolved roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: PlayerId,
    pub roll: u8,
    pub from: u8,
    pub to: u8,
    pub effect: CellEffect,
}

/// Result of a roll intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    Ignored(IgnoreReason),
    /// The player was resting; their turn passed without a roll.
    Skipped(PlayerId),
    Moved(MoveReport),
}

impl TurnOutcome {
    /// The move, if the intent rolled.
    #[must_use]
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            TurnOutcome::Moved(report) => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, TurnOutcome::Ignored(_))
    }
}
