//! Seeded randomness for shuffles and enemy decisions.
//!
//! Every random choice in a combat comes from a [`GameRng`] derived from
//! `CombatConfig::seed`. The engine keeps one stream per purpose, so an
//! extra card draw never shifts what an enemy decides.
//!
//! ```
//! use card_combat::core::GameRng;
//!
//! let mut intents = GameRng::new(42).for_context("intent");
//! let mut replay = GameRng::new(42).for_context("intent");
//!
//! assert_eq!(intents.gen_unit(), replay.gen_unit());
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream tagged with the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// Derive an independent stream named `context`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        // FxHasher output does not vary between runs or platforms.
        let mut hasher = rustc_hash::FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform roll in `[0, 1)`, compared against planner probabilities.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.inner);
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Snapshot the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState { seed: self.seed, word_pos: self.inner.get_word_pos() }
    }

    /// Resume a stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Serializable position of a [`GameRng`]. Restoring is O(1): ChaCha8
/// seeks directly to the word position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
