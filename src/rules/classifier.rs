//! Attributes to art style.
//!
//! Rules are evaluated in order, first match wins:
//!
//! 1. technique share >= 0.5: cubism
//! 2. creativity share >= 0.5: surrealism
//! 3. sensitivity share >= 0.4 and technique share >= 0.3: ukiyo-e
//! 4. sensitivity share >= 0.4: impressionism
//! 5. otherwise the unique largest counter decides (sensitivity:
//!    impressionism, technique: cubism, creativity: surrealism); a tie
//!    for the largest gives ukiyo-e.
//!
//! All-zero attributes draw a style uniformly at random.

use crate::core::{ArtOutcome, ArtStyle, Attributes, RandomSource};

const TECHNIQUE_DOMINANT: f64 = 0.5;
const CREATIVITY_DOMINANT: f64 = 0.5;
const SENSITIVITY_LEANING: f64 = 0.4;
const TECHNIQUE_SUPPORTING: f64 = 0.3;

/// Classify attributes into a style.
///
/// ```
/// use art_quest::core::{ArtStyle, Attributes, GameRng};
/// use art_quest::rules::classify;
///
/// let mut rng = GameRng::new(0);
/// assert_eq!(classify(&Attributes::new(0, 8, 2), &mut rng), ArtStyle::Cubism);
/// assert_eq!(classify(&Attributes::new(5, 3, 2), &mut rng), ArtStyle::Ukiyoe);
/// assert_eq!(classify(&Attributes::new(4, 1, 1), &mut rng), ArtStyle::Impressionism);
/// assert_eq!(classify(&Attributes::new(2, 2, 2), &mut rng), ArtStyle::Ukiyoe);
/// ```
pub fn classify(attributes: &Attributes, rng: &mut dyn RandomSource) -> ArtStyle {
    let total = attributes.total();
    if total == 0 {
        return ArtStyle::ALL[rng.gen_index(ArtStyle::ALL.len())];
    }

    let a = attributes.sensitivity;
    let b = attributes.technique;
    let c = attributes.creativity;

    let total = f64::from(total);
    let ra = f64::from(a) / total;
    let rb = f64::from(b) / total;
    let rc = f64::from(c) / total;

    if rb >= TECHNIQUE_DOMINANT {
        ArtStyle::Cubism
    } else if rc >= CREATIVITY_DOMINANT {
        ArtStyle::Surrealism
    } else if ra >= SENSITIVITY_LEANING && rb >= TECHNIQUE_SUPPORTING {
        ArtStyle::Ukiyoe
    } else if ra >= SENSITIVITY_LEANING {
        ArtStyle::Impressionism
    } else if a > b && a > c {
        ArtStyle::Impressionism
    } else if b > a && b > c {
        ArtStyle::Cubism
    } else if c > a && c > b {
        ArtStyle::Surrealism
    } else {
        ArtStyle::Ukiyoe
    }
}

/// Outcome for a finished player: a style if the experience total reaches
/// `min_requirement`, study work otherwise.
pub fn classify_outcome(
    attributes: &Attributes,
    min_requirement: u32,
    rng: &mut dyn RandomSource,
) -> ArtOutcome {
    if attributes.total() >= min_requirement {
        ArtOutcome::Style(classify(attributes, rng))
    } else {
        ArtOutcome::StudyWork
    }
}
