//! Expiring signals for presentation.
//!
//! Each concern (step highlight, growth flash, gallery glow, last-chance
//! banner) has at most one live signal. Raising a signal replaces the
//! previous one. Signals expire on the session's logical clock, which the
//! front end advances with `GameSession::tick`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{AttributeKind, PlayerId};

/// A value shown until `expires_at` on the session clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timed<T> {
    pub value: T,
    pub expires_at: Duration,
}

impl<T> Timed<T> {
    #[must_use]
    pub fn new(value: T, now: Duration, display_for: Duration) -> Self {
        Self {
            value,
            expires_at: now.saturating_add(display_for),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at
    }
}

/// A player gained an attribute point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSignal {
    pub player: PlayerId,
    pub attribute: AttributeKind,
}

/// Outcome of a last-chance roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastChanceResult {
    pub player: PlayerId,
    pub success: bool,
    pub roll: u8,
}

/// The live cosmetic signals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    /// Destination cell of the latest move.
    pub step: Option<Timed<u8>>,
    pub growth: Option<Timed<GrowthSignal>>,
    /// Player whose styled artwork was just hung.
    pub gallery_highlight: Option<Timed<PlayerId>>,
    pub last_chance: Option<Timed<LastChanceResult>>,
}

impl Signals {
    /// Drop every signal that has expired at `now`.
    pub fn clear_expired(&mut self, now: Duration) {
        clear_if_expired(&mut self.step, now);
        clear_if_expired(&mut self.growth, now);
        clear_if_expired(&mut self.gallery_highlight, now);
        clear_if_expired(&mut self.last_chance, now);
    }

    /// True if no signal is live.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.step.is_none()
            && self.growth.is_none()
            && self.gallery_highlight.is_none()
            && self.last_chance.is_none()
    }
}

fn clear_if_expired<T>(slot: &mut Option<Timed<T>>, now: Duration) {
    if slot.as_ref().is_some_and(|s| s.is_expired(now)) {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timed_expiry() {
        let signal = Timed::new(5u8, ms(100), ms(600));
        assert_eq!(signal.expires_at, ms(700));
        assert!(!signal.is_expired(ms(699)));
        assert!(signal.is_expired(ms(700)));
    }

    #[test]
    fn test_clear_expired_is_per_concern() {
        let mut signals = Signals {
            step: Some(Timed::new(12, ms(0), ms(1200))),
            growth: Some(Timed::new(
                GrowthSignal {
                    player: PlayerId::new(0),
                    attribute: AttributeKind::Technique,
                },
                ms(0),
                ms(1500),
            )),
            ..Signals::default()
        };

        signals.clear_expired(ms(1300));
        assert!(signals.step.is_none());
        assert!(signals.growth.is_some());

        signals.clear_expired(ms(1500));
        assert!(signals.is_quiet());
    }
}
