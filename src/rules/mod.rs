//! Game rules.
//!
//! - `scheduler`: whose turn it is among active players
//! - `movement`: die roll to destination and landing effect
//! - `goal`: goal arrival and the last-chance roll
//! - `classifier`: attributes to art style
//!
//! Rules are free functions over the session state; the session decides
//! when to call them.

pub mod classifier;
pub mod goal;
pub mod movement;
pub mod scheduler;

pub use classifier::{classify, classify_outcome};
pub use goal::{resolve_arrival, roll_last_chance, GoalContext, GoalOutcome, LAST_CHANCE_FACE};
pub use movement::{destination, resolve_roll, Landing, Resolution};
pub use scheduler::{SchedulerState, TurnScheduler};
