use crate::RandomSource;
use rand::Rng;
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;
use std::time::{SystemTime, UNIX_EPOCH};

/// Production [`RandomSource`] backed by [`Pcg64`].
///
/// Runs are reproducible from [`SeededRandom::seed`]; [`SeededRandom::from_time`]
/// is the default policy for the binary.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall-clock nanoseconds since the Unix epoch.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}
