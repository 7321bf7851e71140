//! Board layout configuration and generation.
//!
//! A layout names the gallery cells and the style zones. Generation then
//! scatters event cells inside each zone and rest cells over whatever is
//! left, using the session RNG so a seed reproduces the same board.
//!
//! ```
//! use art_quest::board::{Board, BoardLayout};
//! use art_quest::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let board = Board::generate(&BoardLayout::extended(), &mut rng).unwrap();
//!
//! assert_eq!(board.cells().len(), 81);
//! assert_eq!(board.event_cells().count(), 8);
//! assert_eq!(board.rest_cells().count(), 6);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::cell::{Cell, CellKind, CELL_COUNT, START_INDEX};
use crate::core::{ArtStyle, AttributeKind, ConfigError, GameRng, GOAL_POSITION};

/// Gallery cells of the standard board: the 3x3 block in the middle.
pub const DEFAULT_GALLERY: [u8; 9] = [30, 31, 32, 39, 40, 41, 48, 49, 50];

/// Rest cells on the standard board.
pub const DEFAULT_REST_COUNT: usize = 6;

/// Event cells drawn per zone on the standard board.
pub const DEFAULT_EVENTS_PER_ZONE: usize = 2;

/// A style zone: an inclusive index range whose event cells grow one attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub style: ArtStyle,
    pub attribute: AttributeKind,
    pub start: u8,
    pub end: u8,
    pub event_count: usize,
}

impl ZoneSpec {
    #[must_use]
    pub fn new(style: ArtStyle, attribute: AttributeKind, start: u8, end: u8) -> Self {
        Self {
            style,
            attribute,
            start,
            end,
            event_count: DEFAULT_EVENTS_PER_ZONE,
        }
    }

    /// Set how many event cells this zone gets.
    #[must_use]
    pub fn with_event_count(mut self, count: usize) -> Self {
        self.event_count = count;
        self
    }
}

/// Everything needed to generate a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub gallery: Vec<u8>,
    pub zones: SmallVec<[ZoneSpec; 4]>,
    pub rest_count: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::extended()
    }
}

impl BoardLayout {
    /// Four zones, two events each, six rest cells.
    #[must_use]
    pub fn extended() -> Self {
        let mut layout = Self::minimal();
        layout.zones.push(ZoneSpec::new(
            ArtStyle::Ukiyoe,
            AttributeKind::Sensitivity,
            55,
            65,
        ));
        layout
    }

    /// Cubism, impressionism and surrealism zones only.
    #[must_use]
    pub fn minimal() -> Self {
        let mut zones = SmallVec::new();
        zones.push(ZoneSpec::new(ArtStyle::Cubism, AttributeKind::Technique, 10, 20));
        zones.push(ZoneSpec::new(
            ArtStyle::Impressionism,
            AttributeKind::Sensitivity,
            25,
            35,
        ));
        zones.push(ZoneSpec::new(
            ArtStyle::Surrealism,
            AttributeKind::Creativity,
            40,
            50,
        ));

        Self {
            gallery: DEFAULT_GALLERY.to_vec(),
            zones,
            rest_count: DEFAULT_REST_COUNT,
        }
    }

    /// Replace the gallery cells.
    #[must_use]
    pub fn with_gallery(mut self, gallery: impl Into<Vec<u8>>) -> Self {
        self.gallery = gallery.into();
        self
    }

    /// Add a zone.
    #[must_use]
    pub fn with_zone(mut self, zone: ZoneSpec) -> Self {
        self.zones.push(zone);
        self
    }

    /// Set the number of rest cells.
    #[must_use]
    pub fn with_rest_count(mut self, count: usize) -> Self {
        self.rest_count = count;
        self
    }

    /// Check the static parts of the layout: gallery and zone ranges.
    ///
    /// Whether zones can actually be filled is only known while generating.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for &index in &self.gallery {
            if !is_interior(index) {
                return Err(ConfigError::GalleryOutOfRange(index));
            }
            if !seen.insert(index) {
                return Err(ConfigError::DuplicateGallery(index));
            }
        }

        for zone in &self.zones {
            if zone.start > zone.end || !is_interior(zone.start) || !is_interior(zone.end) {
                return Err(ConfigError::InvalidZoneRange {
                    zone: zone.style.to_string(),
                    start: zone.start,
                    end: zone.end,
                });
            }
        }

        Ok(())
    }
}

fn is_interior(index: u8) -> bool {
    index > START_INDEX && index < GOAL_POSITION
}

/// The generated track. Immutable for the rest of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Generate a board from `layout`, drawing placements from `rng`.
    pub fn generate(layout: &BoardLayout, rng: &mut GameRng) -> Result<Self, ConfigError> {
        layout.validate()?;

        let mut kinds = vec![CellKind::Silent; CELL_COUNT];
        kinds[START_INDEX as usize] = CellKind::Start;
        kinds[GOAL_POSITION as usize] = CellKind::Goal;

        let mut used: FxHashSet<u8> = FxHashSet::default();
        used.insert(START_INDEX);
        used.insert(GOAL_POSITION);
        for &index in &layout.gallery {
            kinds[index as usize] = CellKind::Gallery;
            used.insert(index);
        }

        for zone in &layout.zones {
            let mut pool: Vec<u8> = (zone.start..=zone.end)
                .filter(|i| !used.contains(i))
                .collect();
            if pool.len() < zone.event_count {
                return Err(ConfigError::ZoneExhausted {
                    zone: zone.style.to_string(),
                    attribute: zone.attribute,
                    requested: zone.event_count,
                    available: pool.len(),
                });
            }

            rng.shuffle(&mut pool);
            for &index in pool.iter().take(zone.event_count) {
                kinds[index as usize] = CellKind::Event {
                    attribute: zone.attribute,
                    zone: zone.style,
                };
                used.insert(index);
            }
        }

        let mut pool: Vec<u8> = (START_INDEX + 1..GOAL_POSITION)
            .filter(|i| !used.contains(i))
            .collect();
        if pool.len() < layout.rest_count {
            return Err(ConfigError::RestExhausted {
                requested: layout.rest_count,
                available: pool.len(),
            });
        }
        rng.shuffle(&mut pool);
        for &index in pool.iter().take(layout.rest_count) {
            kinds[index as usize] = CellKind::Rest;
        }

        let cells: Vec<Cell> = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Cell::new(i as u8, kind))
            .collect();

        let board = Self { cells };
        debug!(
            events = board.event_cells().count(),
            rests = board.rest_cells().count(),
            galleries = layout.gallery.len(),
            "generated board"
        );
        Ok(board)
    }

    /// All cells in track order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`, if it is on the track.
    #[must_use]
    pub fn cell(&self, index: u8) -> Option<&Cell> {
        self.cells.get(index as usize)
    }

    #[must_use]
    pub fn is_gallery(&self, index: u8) -> bool {
        self.cell(index).is_some_and(Cell::is_gallery)
    }

    /// Indices of cells matching `predicate`, in track order.
    pub fn indices_of(&self, predicate: impl Fn(&CellKind) -> bool) -> Vec<u8> {
        self.cells
            .iter()
            .filter(|c| predicate(&c.kind))
            .map(|c| c.index)
            .collect()
    }

    pub fn event_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .filter(|c| matches!(c.kind, CellKind::Event { .. }))
    }

    pub fn rest_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.kind == CellKind::Rest)
    }
}
