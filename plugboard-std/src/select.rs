//! Selection strategies for random dispatch.
//!
//! A [`Selector`] picks the index of the entry to invoke. The registry hands
//! it the current entry count and indexes its insertion-ordered map with the
//! result.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Picks one entry out of `len`.
pub trait Selector: Send + Sync + 'static {
    /// Return an index in `0..len`. Called only with `len >= 1`.
    fn select(&self, len: usize) -> usize;
}

/// Uniform random selection.
///
/// Unseeded instances draw their seed from OS entropy; seeded instances
/// produce the same sequence of picks for the same sequence of calls.
pub struct UniformSelector {
    rng: Mutex<StdRng>,
}

impl UniformSelector {
    /// Create a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a deterministic selector.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a selector from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for UniformSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for UniformSelector {
    fn select(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

// Blanket impl for closures
impl<F> Selector for F
where
    F: Fn(usize) -> usize + Send + Sync + 'static,
{
    fn select(&self, len: usize) -> usize {
        (self)(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let selector = UniformSelector::new();
        for len in 1..20 {
            for _ in 0..50 {
                assert!(selector.select(len) < len);
            }
        }
    }

    #[test]
    fn test_single_entry_always_zero() {
        let selector = UniformSelector::new();
        assert!((0..100).all(|_| selector.select(1) == 0));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = UniformSelector::seeded(42);
        let b = UniformSelector::seeded(42);
        let picks_a: Vec<_> = (0..32).map(|_| a.select(5)).collect();
        let picks_b: Vec<_> = (0..32).map(|_| b.select(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_closure_selector() {
        let last = |len: usize| len - 1;
        assert_eq!(last.select(3), 2);
    }
}
