//! Fitness-proportional parent selection.
//!
//! Weights are folded into a running-sum table once per generation, and each
//! draw scales a uniform float by the total weight and searches the table for
//! the crossing point.
//!
//! # Search policy
//!
//! The search is an approximate lower bound. It returns `mid` when the table
//! entry equals the drawn value, or when the drawn value falls strictly
//! between `table[mid - 1]` and `table[mid]` and `mid - 1 > 0`. That guard
//! means the crossing at index 1 is never detected and index 0 is returned
//! only on an exact hit. When the search runs out without an answer, the
//! caller falls back to the last population slot.

use crate::RandomSource;
use crate::genome::Genome;

/// Running sums of selection weights, parallel-indexed to a population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeWeights {
    total: f32,
    cumulative: Vec<f32>,
}

impl CumulativeWeights {
    /// Single left-to-right pass over `weights`.
    pub fn build(weights: &[f32]) -> Self {
        let mut total = 0.0f32;
        let cumulative = weights
            .iter()
            .map(|&w| {
                total += w;
                total
            })
            .collect();
        Self { total, cumulative }
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Locates the slot whose cumulative weight first reaches `n`, following
    /// the approximate policy described at module level.
    #[allow(clippy::float_cmp)]
    pub fn search(&self, n: f32) -> Option<usize> {
        let table = &self.cumulative;
        if table.is_empty() {
            return None;
        }

        let mut left = 0usize;
        let mut right = table.len() - 1;
        while left <= right {
            let mid = left + (right - left) / 2;
            if table[mid] == n {
                return Some(mid);
            }
            if mid > 1 && table[mid] > n && table[mid - 1] < n {
                return Some(mid);
            }
            if table[mid] > n {
                match mid.checked_sub(1) {
                    Some(r) => right = r,
                    None => break,
                }
            } else {
                left = mid + 1;
            }
        }
        None
    }

    /// Draws a population index proportionally to weight.
    ///
    /// Falls back to the last slot when the search reports nothing.
    pub fn choose_index<R: RandomSource>(&self, population_len: usize, rng: &mut R) -> usize {
        let n = self.total * rng.next_f32();
        match self.search(n).filter(|&i| i < population_len) {
            Some(i) => i,
            None => {
                log::trace!("Selection fell back to last slot for draw {}", n);
                population_len.saturating_sub(1)
            }
        }
    }
}

/// Draws one parent from `population` proportionally to its weight.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn weighted_choice<'a, R: RandomSource>(
    population: &'a [Genome],
    weights: &CumulativeWeights,
    rng: &mut R,
) -> &'a Genome {
    &population[weights.choose_index(population.len(), rng)]
}
