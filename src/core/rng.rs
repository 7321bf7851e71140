//! Deterministic random number generation and the dice seam.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Board layout and dice draw from independent streams
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: Game rules draw through [`RandomSource`], so tests can
//!   load the dice with [`LoadedDice`]
//!
//! ```
//! use art_quest::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(), roll);
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Number of faces on the game die.
pub const DIE_FACES: u8 = 6;

/// Source of every random decision the rules make.
///
/// The session owns one of these. Production code uses [`GameRng`];
/// tests swap in [`LoadedDice`] to force specific die faces.
pub trait RandomSource {
    /// Roll the six-sided die. Always in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// State to resume these dice from, if they can be resumed.
    fn checkpoint(&self) -> Option<GameRngState> {
        None
    }
}

/// Deterministic RNG for sessions and board generation.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// Every session gets a fresh board this way. The chosen seed is still
    /// recorded, so the session can be replayed from [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// so the board layout does not shift when dice are drawn differently.
    /// Streams are derived with `FxHasher`, a fixed algorithm, so a seed
    /// reproduces its board across toolchains on the same pointer width.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn checkpoint(&self) -> Option<GameRngState> {
        Some(self.state())
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that play back scripted faces before falling back to a seeded RNG.
///
/// ```
/// use art_quest::core::{LoadedDice, RandomSource};
///
/// let mut dice = LoadedDice::new(7, [3, 1]);
/// assert_eq!(dice.roll_die(), 3);
/// assert_eq!(dice.roll_die(), 1);
/// assert!((1..=6).contains(&dice.roll_die()));
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDice {
    faces: VecDeque<u8>,
    fallback: GameRng,
}

impl LoadedDice {
    /// Script `faces` in order; non-die draws and exhausted scripts use `seed`.
    ///
    /// Faces are clamped into `1..=6`.
    pub fn new(seed: u64, faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, DIE_FACES)).collect(),
            fallback: GameRng::new(seed),
        }
    }

    /// Queue another face after the ones already scripted.
    pub fn push_face(&mut self, face: u8) {
        self.faces.push_back(face.clamp(1, DIE_FACES));
    }

    /// Scripted faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for LoadedDice {
    fn roll_die(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.fallback.gen_index(len)
    }
}
