//! Injectable sources of random choices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses a position within a candidate list.
///
/// `pick(len)` should return a value in `0..len`; the engine reduces
/// larger values modulo `len`. The engine never calls it with `len == 0`.
pub trait IndexPicker {
    /// Picks a position in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> IndexPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform picker backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexPicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct SequencePicker {
    values: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    /// Creates a picker that returns `values` in order.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of picks made so far.
    pub fn picks(&self) -> usize {
        self.next
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles_and_wraps() {
        let mut picker = SequencePicker::new([1, 7]);
        assert_eq!(picker.pick(5), 1);
        assert_eq!(picker.pick(5), 2);
        assert_eq!(picker.pick(5), 1);
        assert_eq!(picker.picks(), 3);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = RngPicker::seeded(42);
        let mut b = RngPicker::seeded(42);
        let xs: Vec<_> = (0..16).map(|_| a.pick(9)).collect();
        let ys: Vec<_> = (0..16).map(|_| b.pick(9)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 9));
    }

    #[test]
    fn test_closure_is_a_picker() {
        let mut last = |len: usize| len - 1;
        assert_eq!(last.pick(4), 3);
    }
}
