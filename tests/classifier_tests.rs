//! Style classification tests.
//!
//! These tests pin the classification order through the public API:
//! - Reference vectors
//! - Threshold boundaries
//! - Determinism for non-zero totals
//! - The experience gate between styled work and study work

use art_quest::core::{ArtOutcome, ArtStyle, Attributes, GameRng, LoadedDice};
use art_quest::rules::{classify, classify_outcome};

fn style(a: u32, b: u32, c: u32) -> ArtStyle {
    classify(&Attributes::new(a, b, c), &mut GameRng::new(0))
}

/// Test the reference vectors.
#[test]
fn test_reference_vectors() {
    assert_eq!(style(0, 8, 2), ArtStyle::Cubism);
    assert_eq!(style(5, 3, 2), ArtStyle::Ukiyoe);
    assert_eq!(style(4, 1, 1), ArtStyle::Impressionism);
    assert_eq!(style(2, 2, 2), ArtStyle::Ukiyoe);
}

/// Test a table of attribute vectors against the rule order.
#[test]
fn test_classification_table() {
    let cases = [
        // Technique share >= 0.5 wins before anything else
        ((5, 5, 0), ArtStyle::Cubism),
        ((0, 1, 1), ArtStyle::Cubism),
        // Creativity share >= 0.5
        ((4, 0, 4), ArtStyle::Surrealism),
        ((0, 0, 1), ArtStyle::Surrealism),
        // Sensitivity >= 0.4 with technique >= 0.3
        ((4, 3, 3), ArtStyle::Ukiyoe),
        ((2, 2, 1), ArtStyle::Ukiyoe),
        // Sensitivity >= 0.4 alone
        ((2, 1, 2), ArtStyle::Impressionism),
        ((1, 0, 0), ArtStyle::Impressionism),
        // Fallback: unique maximum
        ((3, 2, 4), ArtStyle::Surrealism),
        ((3, 4, 2), ArtStyle::Cubism),
        // Fallback: tied maximum
        ((1, 3, 3), ArtStyle::Ukiyoe),
        ((1, 1, 1), ArtStyle::Ukiyoe),
    ];

    for ((a, b, c), expected) in cases {
        assert_eq!(style(a, b, c), expected, "attributes ({}, {}, {})", a, b, c);
    }
}

/// Test that scaling every counter leaves the style unchanged.
#[test]
fn test_scale_invariance() {
    for a in 0..6 {
        for b in 0..6 {
            for c in 0..6 {
                if a + b + c == 0 {
                    continue;
                }
                let base = style(a, b, c);
                for k in [2, 3, 7] {
                    assert_eq!(style(a * k, b * k, c * k), base);
                }
            }
        }
    }
}

/// Test that non-zero totals never consult the dice.
#[test]
fn test_nonzero_total_is_deterministic() {
    let attrs = Attributes::new(3, 1, 2);
    let mut dice = LoadedDice::new(0, [6, 6]);

    let first = classify(&attrs, &mut GameRng::new(1));
    let second = classify(&attrs, &mut dice);

    assert_eq!(first, second);
    assert_eq!(dice.remaining(), 2);
}

/// Test the experience gate.
#[test]
fn test_outcome_gate() {
    let mut rng = GameRng::new(0);

    assert_eq!(
        classify_outcome(&Attributes::new(2, 2, 1), 6, &mut rng),
        ArtOutcome::StudyWork
    );
    assert_eq!(
        classify_outcome(&Attributes::new(2, 2, 2), 6, &mut rng),
        ArtOutcome::Style(ArtStyle::Ukiyoe)
    );
    assert_eq!(
        classify_outcome(&Attributes::new(2, 2, 1), 5, &mut rng),
        ArtOutcome::Style(ArtStyle::Ukiyoe)
    );
}
