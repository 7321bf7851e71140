//! Cosmetic effects the engine reports to presentation.
//!
//! The engine only raises and clears these; it never waits on them.
//! The one exception to "cosmetic" is the pending last-chance player,
//! which lives in the session state, not here.

mod signal;

pub use signal::{GrowthSignal, LastChanceResult, Signals, Timed};
