//! Board cells.

use serde::{Deserialize, Serialize};

use crate::core::{ArtStyle, AttributeKind};

/// Number of cells on the track, start and goal included.
pub const CELL_COUNT: usize = 81;

/// Index of the start cell.
pub const START_INDEX: u8 = 0;

/// What a cell does when a player lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Start,
    Goal,
    /// Exhibition space. Skipped over or inert, depending on the gallery rule.
    Gallery,
    /// Grows one attribute. `zone` is the style zone the cell was drawn from.
    Event {
        attribute: AttributeKind,
        zone: ArtStyle,
    },
    /// Landing here costs the player their next turn.
    Rest,
    /// No effect.
    Silent,
}

impl CellKind {
    /// The attribute this cell grows, if it is an event cell.
    #[must_use]
    pub fn attribute(self) -> Option<AttributeKind> {
        match self {
            CellKind::Event { attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}

/// One cell of the track. Never mutated after the board is generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub index: u8,
    pub kind: CellKind,
}

impl Cell {
    #[must_use]
    pub const fn new(index: u8, kind: CellKind) -> Self {
        Self { index, kind }
    }

    #[must_use]
    pub fn is_gallery(&self) -> bool {
        self.kind == CellKind::Gallery
    }
}
