//! Choosing where new tiles appear.

use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;

use crate::Position;

/// Picks one position out of a set of candidates.
///
/// This is the only source of randomness the engine uses. Implementations
/// should pick uniformly; tests substitute deterministic pickers.
pub trait SpawnPicker {
    /// Returns one element of `candidates`.
    ///
    /// Callers never pass an empty slice.
    fn pick_one(&mut self, candidates: &[Position]) -> Position;
}

impl<P> SpawnPicker for Box<P>
where
    P: SpawnPicker + ?Sized,
{
    fn pick_one(&mut self, candidates: &[Position]) -> Position {
        (**self).pick_one(candidates)
    }
}

/// A seeded uniform picker backed by a PCG generator.
///
/// The same seed always yields the same sequence of picks.
///
/// # Examples
///
/// ```
/// use twenty48_core::{Position, RandomPicker, SpawnPicker};
///
/// let candidates = [Position::new(0, 0), Position::new(1, 2), Position::new(3, 3)];
/// let mut a = RandomPicker::from_seed(7);
/// let mut b = RandomPicker::from_seed(7);
/// assert_eq!(a.pick_one(&candidates), b.pick_one(&candidates));
/// ```
#[derive(Debug, Clone)]
pub struct RandomPicker {
    seed: u64,
    rng: Pcg64,
}

impl RandomPicker {
    /// Creates a picker from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Creates a picker from a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed this picker was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl SpawnPicker for RandomPicker {
    /// # Panics
    ///
    /// Panics if `candidates` is empty.
    fn pick_one(&mut self, candidates: &[Position]) -> Position {
        match candidates.choose(&mut self.rng) {
            Some(pos) => *pos,
            None => panic!("pick_one requires at least one candidate"),
        }
    }
}
