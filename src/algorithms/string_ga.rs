//! Generational string-matching genetic algorithm.
//!
//! Each generation scores the whole population, turns scores into inverse
//! weights, and fills a fresh population of the same size with mutated
//! crossover children of weighted-drawn parents. Parents are drawn with
//! replacement. The old population is replaced wholesale.
//!
//! # Example
//!
//! ```rust
//! use string_evolution::{EvolutionConfig, SeededRandom, algorithms::string_ga::StringGA};
//!
//! let config = EvolutionConfig {
//!     target: "Hi".to_string(),
//!     population_size: 20,
//!     generations: 50,
//!     ..Default::default()
//! };
//! let ga = StringGA::new(config, SeededRandom::new(42)).unwrap();
//! let best = ga.run();
//! println!("{} {}", best.genome, best.fitness);
//! ```

use crate::error::{EvolutionError, Result};
use crate::genome::{Genome, Target};
use crate::operators::fitness::{fitness, weight};
use crate::operators::reproduction::{crossover, mutate};
use crate::operators::selection::{CumulativeWeights, weighted_choice};
use crate::{EvolutionConfig, Evolver, RandomSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Done,
}

/// Best individual of a population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fittest {
    pub genome: Genome,
    pub fitness: u32,
}

pub struct StringGA<R: RandomSource> {
    config: EvolutionConfig,
    target: Target,
    population: Vec<Genome>,
    generation: usize,
    rng: R,
}

impl<R: RandomSource> StringGA<R> {
    /// Validates `config` and draws a random initial population.
    pub fn new(config: EvolutionConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let dna_size = config.dna_size();
        let population = (0..config.population_size)
            .map(|_| Genome::random(dna_size, &mut rng))
            .collect();
        Ok(Self::assemble(config, population, rng))
    }

    /// Starts from a caller-supplied population, which must hold exactly
    /// `population_size` genomes of the target's length.
    pub fn with_population(config: EvolutionConfig, population: Vec<Genome>, rng: R) -> Result<Self> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(EvolutionError::PopulationSize {
                expected: config.population_size,
                actual: population.len(),
            });
        }
        let dna_size = config.dna_size();
        if let Some((index, g)) = population
            .iter()
            .enumerate()
            .find(|(_, g)| g.len() != dna_size)
        {
            return Err(EvolutionError::GenomeLength {
                index,
                expected: dna_size,
                actual: g.len(),
            });
        }
        Ok(Self::assemble(config, population, rng))
    }

    fn assemble(config: EvolutionConfig, population: Vec<Genome>, rng: R) -> Self {
        log::info!(
            "Evolving toward '{}': population {}, {} generations, mutation chance {}",
            config.target,
            config.population_size,
            config.generations,
            config.mutation_chance
        );
        Self {
            target: Target::new(&config.target),
            config,
            population,
            generation: 0,
            rng,
        }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn state(&self) -> LoopState {
        if self.generation < self.config.generations {
            LoopState::Running
        } else {
            LoopState::Done
        }
    }

    pub fn scores(&self) -> Vec<u32> {
        self.population
            .iter()
            .map(|g| fitness(g, &self.target))
            .collect()
    }

    pub fn mean_fitness(&self) -> f64 {
        if self.population.is_empty() {
            return 0.0;
        }
        let total: u64 = self.scores().iter().map(|&s| u64::from(s)).sum();
        total as f64 / self.population.len() as f64
    }

    /// Linear scan for the lowest score; the first occurrence wins ties.
    pub fn fittest(&self) -> Fittest {
        let mut best: Option<Fittest> = None;
        for genome in &self.population {
            let score = fitness(genome, &self.target);
            if best.as_ref().is_none_or(|b| score < b.fitness) {
                best = Some(Fittest {
                    genome: genome.clone(),
                    fitness: score,
                });
            }
        }
        best.unwrap_or_else(|| Fittest {
            genome: Genome::from_codes(Vec::new()),
            fitness: 0,
        })
    }

    /// Steps until [`LoopState::Done`] and reports the fittest individual.
    pub fn run(mut self) -> Fittest {
        while self.state() == LoopState::Running {
            self.step();
        }
        let best = self.fittest();
        log::info!(
            "Finished after {} generations: '{}' (fitness {})",
            self.generation,
            best.genome,
            best.fitness
        );
        best
    }

    fn breed(&mut self) {
        let scores = self.scores();
        if log::log_enabled!(log::Level::Debug) && !scores.is_empty() {
            let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
            log::debug!(
                "Generation {}... sample '{}' fitness {}... mean {:.3}",
                self.generation,
                self.population[0],
                scores[0],
                mean
            );
        }

        let weights: Vec<f32> = scores.iter().map(|&s| weight(s)).collect();
        let table = CumulativeWeights::build(&weights);

        let half = self.config.population_size / 2;
        let mut next = vec![Genome::from_codes(Vec::new()); self.config.population_size];
        for j in 0..half {
            let parent1 = weighted_choice(&self.population, &table, &mut self.rng);
            let parent2 = weighted_choice(&self.population, &table, &mut self.rng);
            let (child1, child2) = crossover(parent1, parent2, &mut self.rng);
            next[j] = mutate(child1, self.config.mutation_chance, &mut self.rng);
            next[j + half] = mutate(child2, self.config.mutation_chance, &mut self.rng);
        }
        self.population = next;
    }
}

impl<R: RandomSource> Evolver for StringGA<R> {
    /// One generation. A loop in [`LoopState::Done`] is left untouched.
    fn step(&mut self) {
        if self.state() == LoopState::Done {
            return;
        }
        self.breed();
        self.generation += 1;
    }

    fn population(&self) -> &[Genome] {
        &self.population
    }

    fn generation(&self) -> usize {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    fn config(target: &str, population_size: usize, generations: usize) -> EvolutionConfig {
        EvolutionConfig {
            target: target.to_string(),
            population_size,
            generations,
            mutation_chance: 0.05,
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = StringGA::new(config("AB", 5, 1), SeededRandom::new(1));
        assert!(matches!(result, Err(EvolutionError::OddPopulation(5))));
    }

    #[test]
    fn test_with_population_checks_shape() {
        let pop = vec![Genome::from_text("AB"); 2];
        let result = StringGA::with_population(config("AB", 4, 1), pop, SeededRandom::new(1));
        assert!(matches!(
            result,
            Err(EvolutionError::PopulationSize { expected: 4, actual: 2 })
        ));

        let pop = vec![
            Genome::from_text("AB"),
            Genome::from_text("ABC"),
            Genome::from_text("AB"),
            Genome::from_text("AB"),
        ];
        let result = StringGA::with_population(config("AB", 4, 1), pop, SeededRandom::new(1));
        assert!(matches!(
            result,
            Err(EvolutionError::GenomeLength { index: 1, expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_state_transitions() {
        let mut ga = StringGA::new(config("AB", 4, 2), SeededRandom::new(9)).unwrap();
        assert_eq!(ga.state(), LoopState::Running);
        ga.step();
        assert_eq!(ga.generation(), 1);
        assert_eq!(ga.state(), LoopState::Running);
        ga.step();
        assert_eq!(ga.state(), LoopState::Done);

        let frozen = ga.population().to_vec();
        ga.step();
        assert_eq!(ga.generation(), 2);
        assert_eq!(ga.population(), frozen.as_slice());
    }

    #[test]
    fn test_population_size_is_preserved() {
        let mut ga = StringGA::new(config("Hello", 10, 5), SeededRandom::new(3)).unwrap();
        while ga.state() == LoopState::Running {
            ga.step();
            assert_eq!(ga.population().len(), 10);
            assert!(ga.population().iter().all(|g| g.len() == 5));
        }
    }

    #[test]
    fn test_fittest_first_occurrence_wins() {
        let pop = vec![
            Genome::from_text("CC"),
            Genome::from_text("AA"),
            Genome::from_text("BB"),
            Genome::from_text("AA"),
        ];
        let ga = StringGA::with_population(config("AB", 4, 0), pop, SeededRandom::new(1)).unwrap();
        let best = ga.fittest();
        assert_eq!(best.genome.to_text(), "AA");
        assert_eq!(best.fitness, 1);
        assert_eq!(ga.mean_fitness(), 1.5);
    }

    #[test]
    fn test_zero_generations_reports_initial_population() {
        let pop = vec![Genome::from_text("AB"); 4];
        let ga = StringGA::with_population(config("AB", 4, 0), pop, SeededRandom::new(1)).unwrap();
        assert_eq!(ga.state(), LoopState::Done);
        let best = ga.run();
        assert_eq!(best.fitness, 0);
    }
}
