//! Injectable randomness for the decorative effects.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of uniform samples in `[0, 1)`
pub trait Entropy {
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform value in `[low, low + span)`
    fn span(&mut self, low: f64, span: f64) -> f64 {
        self.unit() * span + low
    }
}

impl<R: Rng> Entropy for R {
    fn unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Seeded generator used by the browser widgets
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Entropy;
    use std::collections::VecDeque;

    /// Replays a fixed list of samples, then repeats the last one
    pub struct Scripted {
        samples: VecDeque<f64>,
        last: f64,
    }

    impl Scripted {
        pub fn new(samples: &[f64]) -> Self {
            Self {
                samples: samples.iter().copied().collect(),
                last: 0.0,
            }
        }
    }

    impl Entropy for Scripted {
        fn unit(&mut self) -> f64 {
            if let Some(next) = self.samples.pop_front() {
                self.last = next;
            }
            self.last
        }
    }
}
