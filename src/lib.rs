pub mod config;
pub mod error;
pub mod genome;
pub mod random;

pub use config::EvolutionConfig;
pub use error::{EvolutionError, Result};
pub use genome::{Genome, Target};
pub use random::SeededRandom;

/// Uniform randomness consumed by the evolution loop.
///
/// Draws are taken strictly in sequence, so a scripted implementation makes a
/// run fully deterministic.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f32(&mut self) -> f32;
    /// Uniform integer in `[0, bound)`, or 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// The master engine trait.
pub trait Evolver {
    /// Advances one generation.
    fn step(&mut self);
    fn population(&self) -> &[Genome];
    /// Number of completed generations.
    fn generation(&self) -> usize;
}

pub mod operators {
    pub mod fitness;
    pub mod reproduction;
    pub mod selection;
}

pub mod algorithms {
    pub mod string_ga;
}
