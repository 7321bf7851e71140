//! Art styles and the outcome recorded for a finished player.

use serde::{Deserialize, Serialize};

/// The four styles a finished artwork can take.
///
/// Each style also names the board zone whose event cells teach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArtStyle {
    /// Technical mastery.
    Cubism,
    /// Sensory, light and color.
    Impressionism,
    /// Conceptual, dreamlike.
    Surrealism,
    /// Traditional: balanced sensitivity and technique.
    Ukiyoe,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 4] = [
        ArtStyle::Cubism,
        ArtStyle::Impressionism,
        ArtStyle::Surrealism,
        ArtStyle::Ukiyoe,
    ];

    /// Stable lowercase key, used by asset catalogs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ArtStyle::Cubism => "cubism",
            ArtStyle::Impressionism => "impressionism",
            ArtStyle::Surrealism => "surrealism",
            ArtStyle::Ukiyoe => "ukiyo-e",
        }
    }
}

impl std::fmt::Display for ArtStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// What a finished player produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtOutcome {
    /// A finished artwork in a style.
    Style(ArtStyle),
    /// Not enough experience: a study piece with no artwork.
    StudyWork,
}

impl ArtOutcome {
    #[must_use]
    pub fn style(self) -> Option<ArtStyle> {
        match self {
            ArtOutcome::Style(style) => Some(style),
            ArtOutcome::StudyWork => None,
        }
    }

    #[must_use]
    pub fn is_study_work(self) -> bool {
        matches!(self, ArtOutcome::StudyWork)
    }
}

impl std::fmt::Display for ArtOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtOutcome::Style(style) => write!(f, "{}", style),
            ArtOutcome::StudyWork => f.write_str("study work"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_keys_unique() {
        let mut keys: Vec<_> = ArtStyle::ALL.iter().map(|s| s.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(ArtOutcome::Style(ArtStyle::Cubism).style(), Some(ArtStyle::Cubism));
        assert_eq!(ArtOutcome::StudyWork.style(), None);
        assert!(ArtOutcome::StudyWork.is_study_work());
        assert_eq!(ArtOutcome::StudyWork.to_string(), "study work");
        assert_eq!(ArtOutcome::Style(ArtStyle::Ukiyoe).to_string(), "ukiyo-e");
    }
}
