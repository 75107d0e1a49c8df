use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks the pivot index for one partition step of a selection.
pub trait ChoosePivot {
    /// Returns an index in `0..len`. `rank` is the rank being searched for, relative to the
    /// current sub-slice, always `< len`.
    fn choose(&mut self, len: usize, rank: usize) -> usize;
}

/// Pivot is the element currently at index `rank`.
///
/// Cheap and deterministic, but patterns can be constructed that degrade the selection to
/// quadratic time.
#[derive(Copy, Clone, Debug, Default)]
pub struct AtRank;

impl ChoosePivot for AtRank {
    #[inline]
    fn choose(&mut self, len: usize, rank: usize) -> usize {
        debug_assert!(rank < len);
        rank
    }
}

/// Pivot index drawn uniformly from the current sub-slice.
#[derive(Clone, Debug)]
pub struct Uniform<R> {
    rng: R,
}

impl Uniform<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Uniform<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Uniform<StdRng> {
    /// Reproducible pivot sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Uniform<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoosePivot for Uniform<R> {
    #[inline]
    fn choose(&mut self, len: usize, _rank: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<P: ChoosePivot + ?Sized> ChoosePivot for &mut P {
    #[inline]
    fn choose(&mut self, len: usize, rank: usize) -> usize {
        (**self).choose(len, rank)
    }
}
