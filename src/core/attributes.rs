//! Player attributes gained on event cells.
//!
//! Three counters, all starting at zero and only ever growing:
//!
//! - `Sensitivity` ("a"): feeling for light and color
//! - `Technique` ("b"): technical mastery
//! - `Creativity` ("c"): conceptual imagination
//!
//! Their sum is the experience total that gates a finished artwork.

use serde::{Deserialize, Serialize};

/// Which attribute an event cell grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Sensitivity,
    Technique,
    Creativity,
}

impl AttributeKind {
    /// All kinds, in `a, b, c` order.
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Sensitivity,
        AttributeKind::Technique,
        AttributeKind::Creativity,
    ];
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttributeKind::Sensitivity => "sensitivity",
            AttributeKind::Technique => "technique",
            AttributeKind::Creativity => "creativity",
        };
        f.write_str(name)
    }
}

/// A player's attribute counters.
///
/// ```
/// use art_quest::core::{AttributeKind, Attributes};
///
/// let attrs = Attributes::default()
///     .apply_gain(AttributeKind::Technique, 2)
///     .apply_gain(AttributeKind::Creativity, 1);
///
/// assert_eq!(attrs.get(AttributeKind::Technique), 2);
/// assert_eq!(attrs.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub sensitivity: u32,
    pub technique: u32,
    pub creativity: u32,
}

impl Attributes {
    #[must_use]
    pub const fn new(sensitivity: u32, technique: u32, creativity: u32) -> Self {
        Self {
            sensitivity,
            technique,
            creativity,
        }
    }

    /// Read one counter.
    #[must_use]
    pub fn get(&self, kind: AttributeKind) -> u32 {
        match kind {
            AttributeKind::Sensitivity => self.sensitivity,
            AttributeKind::Technique => self.technique,
            AttributeKind::Creativity => self.creativity,
        }
    }

    /// Return a copy with `amount` added to `kind`.
    #[must_use]
    pub fn apply_gain(mut self, kind: AttributeKind, amount: u32) -> Self {
        self.add(kind, amount);
        self
    }

    /// Add `amount` to `kind` in place. Saturates instead of wrapping.
    pub fn add(&mut self, kind: AttributeKind, amount: u32) {
        let slot = match kind {
            AttributeKind::Sensitivity => &mut self.sensitivity,
            AttributeKind::Technique => &mut self.technique,
            AttributeKind::Creativity => &mut self.creativity,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Experience total: the sum of all three counters.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.sensitivity
            .saturating_add(self.technique)
            .saturating_add(self.creativity)
    }

    /// True if no counter is below the matching counter in `earlier`.
    #[must_use]
    pub fn dominates(&self, earlier: &Attributes) -> bool {
        AttributeKind::ALL
            .iter()
            .all(|&kind| self.get(kind) >= earlier.get(kind))
    }
}
