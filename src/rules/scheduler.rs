//! Turn order over the active players.
//!
//! The scheduler only stores a cursor into the *current* list of active
//! players (registration order, finished players removed). Every resolved
//! turn moves the cursor one slot on, modulo the active count recomputed
//! after the turn, so a finish shrinks the modulus before the step.
//!
//! ```
//! use art_quest::rules::{SchedulerState, TurnScheduler};
//!
//! let mut scheduler = TurnScheduler::new();
//! scheduler.advance(3);
//! assert_eq!(scheduler.state(3), SchedulerState::AwaitingRoll { cursor: 1 });
//!
//! // The player at cursor 1 finished, leaving two active players.
//! scheduler.advance(2);
//! assert_eq!(scheduler.cursor(), 0);
//!
//! scheduler.advance(0);
//! assert_eq!(scheduler.state(0), SchedulerState::Idle);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where the rotation stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerState {
    /// Every player has finished.
    Idle,
    /// The active player at `cursor` is up.
    AwaitingRoll { cursor: usize },
}

/// Cursor into the active-player list.
///
/// Invariant: `cursor < active_count` whenever `active_count > 0`, and
/// `cursor == 0` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScheduler {
    cursor: usize,
}

impl TurnScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn state(&self, active_count: usize) -> SchedulerState {
        if active_count == 0 {
            SchedulerState::Idle
        } else {
            SchedulerState::AwaitingRoll {
                cursor: self.cursor,
            }
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self, active: &[PlayerId]) -> Option<PlayerId> {
        active.get(self.cursor).copied()
    }

    /// Pass the turn on after a resolved or skipped turn.
    ///
    /// `active_count` is the count after the turn resolved, so it may
    /// already exclude a roller who just finished. Zero leaves the
    /// scheduler idle.
    pub fn advance(&mut self, active_count: usize) {
        self.cursor = match active_count {
            0 => 0,
            n => (self.cursor + 1) % n,
        };
    }
}
