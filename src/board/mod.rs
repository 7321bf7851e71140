//! The 81-cell track.
//!
//! The board is generated once per session from a [`BoardLayout`] and never
//! changes afterwards. Start is cell 0, goal is cell 80; galleries, event
//! zones and rest cells are configured by the layout.

mod cell;
mod layout;

pub use cell::{Cell, CellKind, CELL_COUNT, START_INDEX};
pub use layout::{
    Board, BoardLayout, ZoneSpec, DEFAULT_EVENTS_PER_ZONE, DEFAULT_GALLERY, DEFAULT_REST_COUNT,
};
