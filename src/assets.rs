//! Artwork asset selection.
//!
//! The engine never knows real asset paths. When a styled record is created
//! the session asks its [`AssetResolver`] for a reference and stores whatever
//! opaque string comes back. Study work never asks.

use rustc_hash::FxHashMap;

use crate::core::{ArtStyle, RandomSource};

/// Picks an artwork reference for a style.
pub trait AssetResolver {
    /// Reference for a new artwork in `style`. Empty if there is none.
    fn resolve(&self, style: ArtStyle, rng: &mut dyn RandomSource) -> String;
}

/// Resolver with no assets: every reference is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _style: ArtStyle, _rng: &mut dyn RandomSource) -> String {
        String::new()
    }
}

/// Per-style lists of references; a resolve draws one uniformly.
///
/// ```
/// use art_quest::assets::{AssetResolver, CatalogResolver};
/// use art_quest::core::{ArtStyle, GameRng};
///
/// let catalog = CatalogResolver::new()
///     .with_numbered(ArtStyle::Cubism, "/artworks", 3);
///
/// let mut rng = GameRng::new(1);
/// let reference = catalog.resolve(ArtStyle::Cubism, &mut rng);
/// assert!(reference.starts_with("/artworks/cubism/"));
/// assert_eq!(catalog.resolve(ArtStyle::Ukiyoe, &mut rng), "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogResolver {
    catalog: FxHashMap<ArtStyle, Vec<String>>,
}

impl CatalogResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add references for a style, after any already listed.
    #[must_use]
    pub fn with_style<I, S>(mut self, style: ArtStyle, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog
            .entry(style)
            .or_default()
            .extend(references.into_iter().map(Into::into));
        self
    }

    /// Add `count` references named `{prefix}/{style}/{nn}.png`, where `nn`
    /// counts from 01 and is zero-padded to two digits.
    #[must_use]
    pub fn with_numbered(self, style: ArtStyle, prefix: &str, count: usize) -> Self {
        let prefix = prefix.trim_end_matches('/');
        let references = (1..=count).map(|n| format!("{}/{}/{:02}.png", prefix, style.key(), n));
        self.with_style(style, references)
    }

    /// Number of references listed for a style.
    #[must_use]
    pub fn len(&self, style: ArtStyle) -> usize {
        self.catalog.get(&style).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.values().all(Vec::is_empty)
    }
}

impl AssetResolver for CatalogResolver {
    fn resolve(&self, style: ArtStyle, rng: &mut dyn RandomSource) -> String {
        match self.catalog.get(&style) {
            Some(refs) if !refs.is_empty() => refs[rng.gen_index(refs.len())].clone(),
            _ => String::new(),
        }
    }
}
