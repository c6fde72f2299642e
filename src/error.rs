use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolutionError {
    #[error("Population size must be positive")]
    EmptyPopulation,

    #[error("Population size must be even, got {0}")]
    OddPopulation(usize),

    #[error("Mutation chance must be between 0 and 1, got {0}")]
    MutationChance(f32),

    #[error("Target character {ch:?} at position {index} is outside the printable range")]
    UnrepresentableTarget { index: usize, ch: char },

    #[error("Initial population has {actual} genomes, expected {expected}")]
    PopulationSize { expected: usize, actual: usize },

    #[error("Genome {index} has length {actual}, expected {expected}")]
    GenomeLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, EvolutionError>;
