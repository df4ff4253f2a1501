//! Deterministic random number generation for board shuffles.
//!
//! ## Key Features
//!
//! - **Injectable**: The engine only needs [`RandomSource`], so tests can
//!   script every shuffle decision.
//! - **Deterministic**: Same seed produces the identical board sequence.
//! - **Serializable**: O(1) state capture and restore, for reproducing a
//!   reported board.
//!
//! ```
//! use memory_tiles::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.next_index(9), rng2.next_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices used by the Fisher-Yates shuffle.
pub trait RandomSource {
    /// Return an index uniformly distributed in `0..=upper_inclusive`.
    fn next_index(&mut self, upper_inclusive: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper_inclusive: usize) -> usize {
        (**self).next_index(upper_inclusive)
    }
}

/// Seedable RNG backing the default engine.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
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
    fn next_index(&mut self, upper_inclusive: usize) -> usize {
        self.inner.gen_range(0..=upper_inclusive)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position so restoring is O(1) regardless of how many
/// boards were generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
