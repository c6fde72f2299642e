use crate::error::{EvolutionError, Result};
use crate::genome::{PRINTABLE_MAX, PRINTABLE_MIN};
use serde::{Deserialize, Serialize};

/// Run parameters, built once and handed to the evolution loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub target: String,
    pub population_size: usize,
    pub generations: usize,
    pub mutation_chance: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: "Let's Go!".to_string(),
            population_size: 500,
            generations: 5000,
            mutation_chance: 0.05,
        }
    }
}

impl EvolutionConfig {
    /// Genome length, derived from the target.
    pub fn dna_size(&self) -> usize {
        self.target.len()
    }

    /// Checks the invariants the loop relies on.
    ///
    /// Children are written to slots `j` and `j + population_size / 2`, so the
    /// population must be non-empty and even.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::EmptyPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(EvolutionError::OddPopulation(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(EvolutionError::MutationChance(self.mutation_chance));
        }
        if let Some((index, ch)) = self
            .target
            .chars()
            .enumerate()
            .find(|&(_, ch)| !(PRINTABLE_MIN..=PRINTABLE_MAX).contains(&(ch as u32)))
        {
            return Err(EvolutionError::UnrepresentableTarget { index, ch });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EvolutionConfig::default();
        assert_eq!(config.dna_size(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_population() {
        let mut config = EvolutionConfig {
            population_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(EvolutionError::EmptyPopulation));

        config.population_size = 7;
        assert_eq!(config.validate(), Err(EvolutionError::OddPopulation(7)));
    }

    #[test]
    fn test_rejects_bad_mutation_chance() {
        for chance in [-0.1, 1.5, f32::NAN] {
            let config = EvolutionConfig {
                mutation_chance: chance,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(EvolutionError::MutationChance(_))
            ));
        }
    }

    #[test]
    fn test_rejects_unprintable_target() {
        let config = EvolutionConfig {
            target: "ok\tno".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(EvolutionError::UnrepresentableTarget { index: 2, ch: '\t' })
        );

        let config = EvolutionConfig {
            target: "café".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_target_is_valid() {
        let config = EvolutionConfig {
            target: String::new(),
            ..Default::default()
        };
        assert_eq!(config.dna_size(), 0);
        assert!(config.validate().is_ok());
    }
}
