// Random number seam used when particles are generated. Everything the field
// needs is a stream of uniform samples in [0, 1), so that is the whole trait.

use rand::Rng;

pub trait RandomSource {
    /// Uniform sample in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in [low, high).
    fn in_range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len - 1)
    }
}

/// Adapter for any `rand` generator.
pub struct RandSource<R>(pub R);

impl RandSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        RandSource(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RandSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around when it runs out.
#[derive(Clone, Debug)]
pub struct FixedSequence {
    values: Vec<f64>,
    next: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        FixedSequence { values, next: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
