use std::collections::VecDeque;

use rand::{Rng as _, RngCore as _, SeedableRng as _};
use rand_pcg::Pcg32;

/// Source of the uniform draws used for piece selection.
///
/// The engine asks for exactly one draw per spawned piece. Implement this to
/// replace the default PRNG, e.g. with a scripted sequence in tests.
pub trait RandomSource {
    /// Returns an integer in `0..bound`.
    ///
    /// `bound` is always non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl<R> RandomSource for &mut R
where
    R: RandomSource + ?Sized,
{
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }
}

impl<R> RandomSource for Box<R>
where
    R: RandomSource + ?Sized,
{
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }
}

/// PCG-based random source, reproducible from a 64-bit seed.
///
/// # Example
///
/// ```
/// use blockdrop_engine::{RandomSource as _, SeededSource};
///
/// let mut a = SeededSource::from_seed(42);
/// let mut b = SeededSource::from_seed(42);
/// for _ in 0..16 {
///     assert_eq!(a.next_int(7), b.next_int(7));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeededSource {
    /// Creates a source with a seed drawn from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::rng().next_u64())
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Scripted random source that replays a fixed list of values, cycling.
///
/// Each value is reduced modulo the requested bound.
///
/// # Example
///
/// ```
/// use blockdrop_engine::{RandomSource as _, SequenceSource};
///
/// let mut source = SequenceSource::new([3, 0]);
/// assert_eq!(source.next_int(7), 3);
/// assert_eq!(source.next_int(7), 0);
/// assert_eq!(source.next_int(7), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: VecDeque<u32>,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let values: VecDeque<_> = values.into_iter().collect();
        assert!(!values.is_empty(), "sequence source needs at least one value");
        Self { values }
    }
}

impl RandomSource for SequenceSource {
    fn next_int(&mut self, bound: u32) -> u32 {
        let Some(value) = self.values.pop_front() else {
            return 0;
        };
        self.values.push_back(value);
        value % bound
    }
}
