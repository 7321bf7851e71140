//! Configuration errors.
//!
//! These only surface when a session starts. Once a session is running
//! nothing in the engine fails: invalid intents are ignored instead.

use thiserror::Error;

use super::attributes::AttributeKind;

/// Why a board or session could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported seats.
    #[error("player count must be between {min} and {max}, got {requested}")]
    InvalidPlayerCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// A gallery index is not an interior cell.
    #[error("gallery index {0} is outside the interior cells 1..=79")]
    GalleryOutOfRange(u8),

    /// The same gallery index is listed twice.
    #[error("gallery index {0} is listed more than once")]
    DuplicateGallery(u8),

    /// A zone range is empty or leaves the interior cells.
    #[error("zone {zone} range {start}..={end} is not inside the interior cells 1..=79")]
    InvalidZoneRange { zone: String, start: u8, end: u8 },

    /// A zone has fewer free cells than events requested.
    #[error("zone {zone} ({attribute}) needs {requested} event cells but only {available} are free")]
    ZoneExhausted {
        zone: String,
        attribute: AttributeKind,
        requested: usize,
        available: usize,
    },

    /// Not enough free cells remain for the rest cells.
    #[error("board needs {requested} rest cells but only {available} are free")]
    RestExhausted { requested: usize, available: usize },

    /// A snapshot taken with scripted dice cannot be resumed.
    #[error("snapshot carries no dice state to resume from")]
    MissingDiceState,

    /// The experience threshold must be reachable.
    #[error("minimum requirement must be at least 1")]
    ZeroRequirement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::ZoneExhausted {
            zone: "cubism".to_string(),
            attribute: AttributeKind::Technique,
            requested: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "zone cubism (technique) needs 4 event cells but only 2 are free"
        );

        let err = ConfigError::InvalidPlayerCount {
            requested: 5,
            min: 2,
            max: 4,
        };
        assert_eq!(err.to_string(), "player count must be between 2 and 4, got 5");
    }
}
