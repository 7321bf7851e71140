//! Game session orchestration.
//!
//! [`GameSession`] is the only writer of game state. Front ends forward
//! intents (roll, last-chance roll, rename, tick) and render the observable
//! state after each one.

mod game;
mod outcome;
mod snapshot;

pub use game::{GameSession, SessionBuilder};
pub use outcome::{CellEffect, IgnoreReason, MoveReport, TurnOutcome};
pub use snapshot::SessionSnapshot;
