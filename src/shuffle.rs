//! Random permutations behind an injectable trait.
//!
//! Rendering takes a [`Shuffler`] instead of reaching for a global RNG, so
//! tests can pass [`Identity`] or a seeded [`RandomShuffler`] and get
//! deterministic output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Produces a permutation of its input.
///
/// Implementations must return exactly the input elements, each once.
pub trait Shuffler {
    fn permute<T: Clone>(&mut self, items: &[T]) -> Vec<T>;
}

/// Uniform Fisher–Yates shuffle over any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShuffler<StdRng> {
    /// Fresh OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator for previews and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn permute<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.shuffle(&mut self.rng);
        out
    }
}

/// Keeps input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Shuffler for Identity {
    fn permute<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        items.to_vec()
    }
}
